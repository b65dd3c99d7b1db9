/*!
 * Fixed English to Pirate-ish word substitutions.
 *
 * The table maps lowercase English words to their pirate equivalents.
 * Lookup is an exact lowercase string match: no stemming, no punctuation
 * stripping, no partial matching. A token carrying trailing punctuation
 * (e.g. `pub?`) therefore never matches, which is intended behavior.
 *
 * The table is built once at first use and never mutated, so it is safe
 * for lock-free concurrent reads.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// English to Pirate-ish word substitutions.
static PIRATE_WORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("hello", "ahoy"),
        ("hi", "arrr"),
        ("my", "me"),
        ("friend", "m'hearty"),
        ("boy", "laddy"),
        ("girl", "lassie"),
        ("sir", "matey"),
        ("miss", "proud beauty"),
        ("stranger", "scurvy dog"),
        ("boss", "foul blaggart"),
        ("where", "whar"),
        ("is", "be"),
        ("the", "th'"),
        ("you", "ye"),
        ("old", "barnacle covered"),
        ("happy", "grog-filled"),
        ("nearby", "broadside"),
        ("bathroom", "head"),
        ("kitchen", "galley"),
        ("pub", "fleabag inn"),
        ("stop", "avast"),
        ("yes", "aye"),
        ("no", "nay"),
        ("yay", "yo-ho-ho"),
        ("money", "doubloons"),
        ("treasure", "booty"),
        ("strong", "heave-ho"),
        ("take", "pillage"),
        ("drink", "grog"),
        ("idiot", "scallywag"),
        ("sea", "briney deep"),
        ("vote", "mutiny"),
        ("song", "shanty"),
        ("drunk", "three sheets to the wind"),
        ("lol", "yo ho ho"),
        ("talk", "parley"),
        ("fail", "scupper"),
        ("quickly", "smartly"),
        ("captain", "cap'n"),
        ("meeting", "parley with rum and cap'n"),
    ])
});

/// Substitute a lowercase token with its pirate equivalent.
///
/// Returns the token unchanged when it has no entry in the table.
/// This is a pure total function: it never fails and never mutates.
pub fn substitute<'a>(token: &'a str) -> &'a str {
    PIRATE_WORDS.get(token).copied().unwrap_or(token)
}

/// Check whether a token has a pirate equivalent.
pub fn contains(token: &str) -> bool {
    PIRATE_WORDS.contains_key(token)
}

/// Iterate over all (english, pirate) substitution pairs.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    PIRATE_WORDS.iter().map(|(&k, &v)| (k, v))
}

/// Number of substitution pairs in the table.
pub fn len() -> usize {
    PIRATE_WORDS.len()
}
