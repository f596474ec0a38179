// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Parser and display layout for the ChordPro chord chart dialect used by
//! chordweb: inline `[Chord]` annotations, `{start_of_*}`/`{end_of_*}`
//! section directives, single-line metadata directives and `#` comments.
//!
//! Parsing is total: any text is a valid chart, and anything unrecognised
//! degrades to visible content rather than an error.
//!
//! ```
//! use chordpro::{ChordLyricPair, ParsedLine, parse};
//!
//! let lines = parse("{start_of_verse}\n[G]Amazing [C]grace");
//! assert_eq!(
//!     lines,
//!     vec![
//!         ParsedLine::Section { label: "Verse".to_string() },
//!         ParsedLine::Line {
//!             pairs: vec![
//!                 ChordLyricPair::new("G", "Amazing "),
//!                 ChordLyricPair::new("C", "grace"),
//!             ],
//!         },
//!     ],
//! );
//! ```

pub mod layout;
pub mod parser;
pub mod song;
pub mod types;

pub use crate::{
    layout::{ChordCell, DisplayBlock, LyricCell, layout},
    parser::{parse, tokenize_line},
    song::Song,
    types::{ChordLyricPair, ParsedLine},
};
