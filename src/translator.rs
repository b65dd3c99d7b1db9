/*!
 * The English to Pirate-ish translation transform.
 *
 * Translation is a single pass over whitespace-delimited tokens:
 *
 * 1. Lowercase every token (destructively, original casing is lost).
 * 2. Substitute each token through the word table.
 * 3. Walk the sequence capitalizing the first word of every sentence and,
 *    after each sentence-ending token, splicing in a random pirate phrase
 *    with probability 1 in 6.
 * 4. Join with single spaces.
 *
 * A spliced phrase is visited next by the walk, so it gets capitalized
 * like any sentence opener and its own final punctuation can trigger a
 * further insertion draw.
 *
 * The transform is total over string inputs: it never fails, for any
 * input, including the empty string.
 */

use log::{debug, trace};
use std::collections::VecDeque;

use crate::phrase_bank;
use crate::random::{RandomSource, ThreadRandomSource};
use crate::word_table;

/// Characters that end a sentence when they are a token's last character.
const SENTENCE_ENDINGS: [char; 4] = ['.', '!', '?', ':'];

/// Odds of phrase insertion after a sentence: one draw in six lands.
const INSERTION_DIE: usize = 6;

/// Translates English text into Pirate-ish.
///
/// Holds the randomness source driving phrase insertion. Use
/// [`Translator::new`] for ambient thread-local randomness, or
/// [`Translator::with_source`] to inject a deterministic source.
#[derive(Debug)]
pub struct Translator<R: RandomSource> {
    source: R,
}

impl Translator<ThreadRandomSource> {
    /// Create a translator backed by thread-local randomness.
    pub fn new() -> Self {
        Self::with_source(ThreadRandomSource::new())
    }
}

impl Default for Translator<ThreadRandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Translator<R> {
    /// Create a translator with an explicit randomness source.
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Take some English text and return a Pirate-ish version thereof.
    pub fn translate(&mut self, text: &str) -> String {
        // Normalise and substitute. split_whitespace collapses runs of
        // whitespace and never yields an empty token.
        let substituted: VecDeque<String> = text
            .split_whitespace()
            .map(|raw| {
                let word = raw.to_lowercase();
                let replacement = word_table::substitute(&word);
                if replacement != word {
                    trace!("Substituting '{}' -> '{}'", word, replacement);
                }
                replacement.to_string()
            })
            .collect();

        // Capitalize sentence openers and roll for phrase insertion after
        // each sentence-ending token. An inserted phrase goes to the front
        // of the pending queue so the walk visits it next.
        let mut result: Vec<String> = Vec::with_capacity(substituted.len());
        let mut pending = substituted;
        let mut capitalize = true;
        while let Some(mut word) = pending.pop_front() {
            if capitalize {
                word = capitalize_first(&word);
                capitalize = false;
            }
            if ends_sentence(&word) {
                capitalize = true;
                if self.source.roll(INSERTION_DIE) == 0 {
                    let phrase = phrase_bank::choose(&mut self.source);
                    debug!("Splicing in pirate phrase: '{}'", phrase);
                    pending.push_front(phrase.to_string());
                }
            }
            result.push(word);
        }

        result.join(" ")
    }
}

/// Take some English text and return a Pirate-ish version thereof,
/// using thread-local randomness for phrase insertion.
pub fn translate(text: &str) -> String {
    Translator::new().translate(text)
}

/// Uppercase the first character of a word, leaving the rest untouched.
///
/// Rebuilds the string rather than patching bytes, since an uppercase
/// mapping can expand to multiple characters.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check whether a token's last character ends a sentence.
///
/// Only the single final character matters, so a cluster like `word!?`
/// keys off the `?`.
fn ends_sentence(word: &str) -> bool {
    word.chars()
        .next_back()
        .is_some_and(|c| SENTENCE_ENDINGS.contains(&c))
}
