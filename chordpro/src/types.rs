// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use serde::{Deserialize, Serialize};

/// One chord/lyric segment of a content line.
///
/// `chord` is empty for a plain run of text with no chord above it; `lyric`
/// is empty when a chord has no text after it before the next chord or the
/// end of the line.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChordLyricPair {
    pub chord: String,
    pub lyric: String,
}

impl ChordLyricPair {
    pub fn new(chord: &str, lyric: &str) -> Self {
        Self {
            chord: chord.to_string(),
            lyric: lyric.to_string(),
        }
    }
}

/// A single parsed line of a chord chart.
///
/// Concatenating the `lyric` fields of a `Line`'s pairs in order gives back
/// the source line with its bracketed chord annotations removed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParsedLine {
    /// A line of lyrics with zero or more chords positioned above it.
    Line { pairs: Vec<ChordLyricPair> },
    /// A section header such as Verse, Chorus or Bridge.
    Section { label: String },
    /// A blank line kept for vertical spacing.
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialise_tagged() {
        assert_eq!(
            serde_json::to_string(&ParsedLine::Empty).unwrap(),
            r#"{"kind":"empty"}"#
        );
        assert_eq!(
            serde_json::to_string(&ParsedLine::Section {
                label: "Chorus".to_string()
            })
            .unwrap(),
            r#"{"kind":"section","label":"Chorus"}"#
        );
        assert_eq!(
            serde_json::to_string(&ParsedLine::Line {
                pairs: vec![ChordLyricPair::new("G", "Amazing ")]
            })
            .unwrap(),
            r#"{"kind":"line","pairs":[{"chord":"G","lyric":"Amazing "}]}"#
        );
    }

    #[test]
    fn deserialise_tagged() {
        assert_eq!(
            serde_json::from_str::<ParsedLine>(r#"{"kind":"empty"}"#).unwrap(),
            ParsedLine::Empty
        );
        assert_eq!(
            serde_json::from_str::<ParsedLine>(
                r#"{"kind":"line","pairs":[{"chord":"","lyric":"la"}]}"#
            )
            .unwrap(),
            ParsedLine::Line {
                pairs: vec![ChordLyricPair::new("", "la")]
            }
        );
    }
}
