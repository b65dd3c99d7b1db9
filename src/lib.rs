/*!
 * # arrr - English to Pirate-ish translator
 *
 * A Rust library that turns English text into a whimsical pirate-speak
 * variant.
 *
 * ## Features
 *
 * - Fixed English to pirate word substitutions (exact lowercase match)
 * - Random insertion of stock pirate exclamations at sentence boundaries
 * - Sentence-aware capitalization of the output
 * - Injectable randomness for deterministic testing
 * - Total over all string inputs: never fails, no configuration, no I/O
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `word_table`: fixed English to pirate word substitution mapping
 * - `phrase_bank`: fixed bank of standalone pirate exclamations
 * - `random`: the `RandomSource` seam with production and scripted
 *   implementations
 * - `translator`: the translation transform itself
 *
 * ## Usage
 *
 * ```
 * let pirate = arrr::translate("Where is the pub?");
 * assert!(pirate.starts_with("Whar be th' pub?"));
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod phrase_bank;
pub mod random;
pub mod translator;
pub mod word_table;

// Re-export main types for easier usage
pub use random::{RandomSource, ScriptedRandomSource, ThreadRandomSource};
pub use translator::{Translator, translate};
