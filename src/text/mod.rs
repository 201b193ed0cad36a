//! Text heuristics behind the mock analyzer.
//!
//! - [`normalize`] strips markdown rules and delimiter runs from pasted text.
//! - [`short_title`] shortens a sentence to a bounded, whole-word title.
//! - [`key_phrase`] extracts the feature named by a requirement sentence.
//!
//! All functions are total: any input, including empty text, yields a value.
//! Lengths are measured in characters, not bytes.

mod normalize;
mod phrase;
mod title;
mod util;


pub use normalize::normalize;
pub use phrase::{key_phrase, UNTITLED};
pub use title::{short_title, DEFAULT_TITLE_LENGTH, UNTITLED_TASK};

pub(crate) use util::{char_len, strip_list_marker, take_chars};
