/*!
 * Fixed bank of standalone pirate exclamations.
 *
 * Phrases are spliced into translated text at sentence boundaries by the
 * translator. They are stored lowercase with their final punctuation;
 * the translator's capitalization walk uppercases the first letter when
 * a phrase lands at the start of a sentence, exactly as it does for any
 * other token.
 */

use crate::random::RandomSource;

/// Pirate phrases eligible for random insertion after sentences.
static PIRATE_PHRASES: &[&str] = &[
    "batten down the hatches!",
    "splice the mainbrace!",
    "thar she blows!",
    "arrr!",
    "weigh anchor and hoist the mizzen!",
    "savvy?",
    "dead men tell no tales.",
    "cleave him to the brisket!",
    "blimey!",
    "blow me down!",
    "avast ye!",
    "yo ho ho.",
    "shiver me timbers!",
    "blisterin' barnacles!",
    "ye flounderin' nincompoop.",
    "thundering typhoons!",
    "sling yer hook!",
];

/// Choose one phrase uniformly at random from the bank.
pub fn choose(source: &mut dyn RandomSource) -> &'static str {
    PIRATE_PHRASES[source.roll(PIRATE_PHRASES.len())]
}

/// All phrases in the bank, in storage order.
pub fn phrases() -> &'static [&'static str] {
    PIRATE_PHRASES
}

/// Get the phrase at `index`, if in range.
pub fn get(index: usize) -> Option<&'static str> {
    PIRATE_PHRASES.get(index).copied()
}

/// Number of phrases in the bank.
pub fn len() -> usize {
    PIRATE_PHRASES.len()
}
