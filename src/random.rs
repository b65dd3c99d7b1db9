/*!
 * Injectable source of randomness for the translator.
 *
 * Phrase insertion is driven by uniform integer draws, so the drawing is
 * abstracted behind the `RandomSource` trait. Production code uses
 * `ThreadRandomSource` over the `rand` thread-local generator; tests use
 * `ScriptedRandomSource` to replay a fixed sequence of draws and get
 * deterministic golden output.
 */

use rand::Rng;
use std::fmt::Debug;

/// Uniform integer generator seam used by the translator.
///
/// Implementations must return values uniformly distributed over
/// `0..bound` (scripted implementations return their scripted values
/// reduced into range instead).
pub trait RandomSource: Debug {
    /// Draw a value in `0..bound`.
    ///
    /// `bound` must be non-zero; the translator only ever rolls against
    /// the insertion die (6) and the phrase bank length.
    fn roll(&mut self, bound: usize) -> usize;
}

/// Production randomness backed by the thread-local generator.
///
/// Each calling thread owns its own generator state, so concurrent
/// translations never contend on a shared source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    /// Create a new thread-local randomness source.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn roll(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "roll bound must be non-zero");
        rand::rng().random_range(0..bound)
    }
}

/// Deterministic randomness that replays a scripted sequence of draws.
///
/// Once the script is exhausted the final value repeats indefinitely.
/// Scripted values are reduced modulo the requested bound, so a script
/// of `[1]` misses the 1-in-6 insertion die forever while still being a
/// valid phrase index.
#[derive(Debug, Clone)]
pub struct ScriptedRandomSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandomSource {
    /// Create a source that replays `script`, then repeats its last value.
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A source whose insertion die never lands on 0, so the translator
    /// never splices a phrase. Used for deterministic substitution tests.
    pub fn never_insert() -> Self {
        Self::new(vec![1])
    }

    /// A source that forces exactly one insertion of the phrase at
    /// `phrase_index` after the first qualifying token, then never
    /// inserts again.
    pub fn insert_once(phrase_index: usize) -> Self {
        Self::new(vec![0, phrase_index, 1])
    }
}

impl RandomSource for ScriptedRandomSource {
    fn roll(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "roll bound must be non-zero");
        let value = match self.script.get(self.cursor) {
            Some(&v) => {
                self.cursor += 1;
                v
            }
            None => self.script.last().copied().unwrap_or(0),
        };
        value % bound
    }
}
