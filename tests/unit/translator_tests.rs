/*!
 * Tests for the translation transform
 *
 * Golden-output tests drive the translator with a scripted randomness
 * source so phrase insertion is deterministic.
 */

use arrr::random::ScriptedRandomSource;
use arrr::word_table;
use arrr::{Translator, translate};

/// Build a translator that never splices phrases
fn quiet_translator() -> Translator<ScriptedRandomSource> {
    Translator::with_source(ScriptedRandomSource::never_insert())
}

/// Uppercase the first character of a word, test-side mirror of the
/// translator's sentence-opener rule
fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Test plain substitution with no punctuation and no insertion
#[test]
fn test_translate_withGreeting_shouldSubstituteAndCapitalizeFirstWord() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate("hello my friend"), "Ahoy me m'hearty");
}

/// Test that trailing punctuation blocks table lookup but still ends the sentence
#[test]
fn test_translate_withQuestion_shouldMissPunctuatedToken() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate("Where is the pub?"), "Whar be th' pub?");
}

/// Test the empty input
#[test]
fn test_translate_withEmptyInput_shouldReturnEmptyString() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate(""), "");
    assert_eq!(translate(""), "");
}

/// Test whitespace-only input and collapsing of whitespace runs
#[test]
fn test_translate_withWhitespaceRuns_shouldCollapseAndNeverPanic() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate("   \t\n  "), "");
    assert_eq!(translator.translate("  hello \t my\n friend  "), "Ahoy me m'hearty");
}

/// Test a forced single insertion of the first bank phrase
#[test]
fn test_translate_withForcedInsertion_shouldSplicePhraseAfterSentence() {
    let mut translator = Translator::with_source(ScriptedRandomSource::insert_once(0));
    assert_eq!(
        translator.translate("Stop."),
        "Avast. Batten down the hatches!"
    );
}

/// Test that an inserted phrase is walked like any token: it is
/// capitalized, and its own final punctuation can chain another insertion
#[test]
fn test_translate_withChainedInsertions_shouldWalkInsertedPhrases() {
    // insert, phrase 0, insert again, phrase 0, then stop
    let mut translator = Translator::with_source(ScriptedRandomSource::new(vec![0, 0, 0, 0, 1]));
    assert_eq!(
        translator.translate("stop."),
        "Avast. Batten down the hatches! Batten down the hatches!"
    );
}

/// Test insertion of a phrase other than the first
#[test]
fn test_translate_withForcedInsertion_shouldUseChosenPhraseIndex() {
    // phrase 3 is "arrr!"; its '!' triggers one more die roll, which misses
    let mut translator = Translator::with_source(ScriptedRandomSource::insert_once(3));
    assert_eq!(
        translator.translate("stop. friend"),
        "Avast. Arrr! M'hearty"
    );
}

/// Test that the insertion die landing anywhere but 0 skips insertion
#[test]
fn test_translate_withMissedInsertionDie_shouldNotSplice() {
    for miss in 1..6 {
        let mut translator = Translator::with_source(ScriptedRandomSource::new(vec![miss]));
        assert_eq!(translator.translate("Stop."), "Avast.");
    }
}

/// Test sentence-end detection across all four ending characters
#[test]
fn test_translate_withEachSentenceEnding_shouldCapitalizeNextWord() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate("stop. talk"), "Avast. Parley");
    assert_eq!(translator.translate("blimey! talk"), "Blimey! Parley");
    assert_eq!(translator.translate("savvy? talk"), "Savvy? Parley");
    assert_eq!(translator.translate("captain: yes"), "Captain: Aye");
}

/// Test that commas and semicolons neither capitalize nor insert
#[test]
fn test_translate_withCommaOrSemicolon_shouldNotEndSentence() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate("hello, friend yes"), "Hello, m'hearty aye");
    assert_eq!(translator.translate("no; yes"), "No; aye");
}

/// Test that only the last character of a punctuation cluster matters
#[test]
fn test_translate_withPunctuationCluster_shouldKeyOffLastCharacter() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate("stop!? friend"), "Stop!? M'hearty");
}

/// Test destructive lowercasing: internal capitalization is lost for
/// substituted and non-substituted words alike
#[test]
fn test_translate_withInternalCapitals_shouldLowercaseDestructively() {
    let mut translator = quiet_translator();
    assert_eq!(translator.translate("HELLO FRIEND"), "Ahoy m'hearty");
    assert_eq!(translator.translate("NASA is nearby."), "Nasa be nearby.");
}

/// Test that every word table pair roundtrips through the transform
#[test]
fn test_translate_withEveryTableKey_shouldYieldItsValueCapitalized() {
    for (english, pirate) in word_table::entries() {
        let mut translator = quiet_translator();
        assert_eq!(
            translator.translate(english),
            capitalized(pirate),
            "roundtrip failed for '{}'",
            english
        );
    }
}

/// Test totality: no input should ever panic, with ambient randomness
#[test]
fn test_translate_withAdversarialInputs_shouldNeverPanic() {
    let inputs = [
        ".",
        "!!!",
        "? ? ?",
        ": : :",
        "\u{0}\u{0}",
        "éclair über straße.",
        "🏴\u{200d}☠\u{fe0f} ahoy!",
        "a.b.c.d.e.f.g.h.",
        "....................",
    ];
    for input in inputs {
        let _ = translate(input);
    }
}

/// Test that input without punctuation is deterministic even under
/// ambient randomness, since no insertion die is ever rolled
#[test]
fn test_translate_withoutPunctuation_shouldBeDeterministic() {
    assert_eq!(translate("take the treasure"), "Pillage th' booty");
    assert_eq!(translate("yay lol"), "Yo-ho-ho yo ho ho");
}
