//! `flagkind` is a minimal typed command line flag parser for Rust.
//!
//! Declare named flags, each with the kind of value it expects, then parse the Cli into a mapping of flag name to typed value.
//! `flagkind` attempts to prioritize the following design concerns:
//! * *Typed flags*:
//! Each flag declares its [`Kind`] (integer, float, character, boolean, string).
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Permissive scanning*:
//! Tokens that do not name a declared flag are ignored.
//! * *Embeddable errors*:
//! Parse failures are returned as a [`ParseError`]; only [`GeneralParser::parse`] exits the process.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/dimensions.rs")]
//! ```
//!
//! ```console
//! $ dimensions --width 3.5 --test
//! {width=3.5, test=true}
//!
//! $ dimensions --width abc
//! The value "abc" of argument width could not be parsed as Float.
//!
//! Usage:
//! dimensions \
//!   --width <value: Float> (Describes something something something) \
//!   --test (Sets the dry run) \
//!   --height <value: String>
//! ```
//!
//! # Builder Api
//! Configure `flagkind` by starting with a [`CommandLineParser`] and adding flags.
//! There are two classes of flags: [`Flag::typed`] and [`Flag::switch`].
//!
//! * A typed flag takes the following token as its value, converting it into its kind.
//! Integer and float values are parsed in base-10 (`i64`, `f64`).
//! A character value takes the first character of the token.
//! A boolean value is strict: only `true` or `false`.
//! A string value is taken verbatim.
//! * A switch takes no value.
//! When present, it captures `true`; when absent, it is simply missing from the result (never `false`).
//!
//! Either class may be marked required, in which case parsing fails when the flag is not present.
//!
//! # Cli Semantics
//! * Tokens are scanned once, left to right.
//! * Any leading/trailing `-` are stripped from a token before it is matched, so `--width`, `-width` and `width` are equivalent.
//! * A typed flag always consumes the next token as its value, even if that token looks like a flag.
//! * Tokens which do not match a flag are silently skipped.
//! * A repeated flag overwrites its earlier value.
//! * Required flags are checked only after all tokens are scanned.
//!
//! There is no support for positional arguments, sub-commands, `--key=value` syntax, or short flag clustering.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while declaring and parsing.
pub use flagkind_builder::*;
