// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Display layout for parsed chord charts.
//!
//! Chords sit above the exact lyric offset they were written at. Rather
//! than measuring glyphs, each row reserves the other row's text as an
//! invisible "ghost" run of identical characters: the chord row follows
//! every chord with a ghost copy of its lyric, and the lyric row precedes
//! every lyric with a ghost copy of its chord. Under a fixed-width font the
//! two rows then advance in lockstep. A web renderer emits ghost runs as
//! hidden-but-space-reserving spans; a terminal renderer replaces them
//! with runs of spaces of the same character count.

use crate::types::{ChordLyricPair, ParsedLine};
use serde::{Deserialize, Serialize};

/// One display-ready block, corresponding to one [`ParsedLine`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DisplayBlock {
    /// A fixed-height blank block.
    Blank,
    /// A section heading. An empty label still renders as a heading.
    Heading { label: String },
    /// A content line: an optional chord row above a lyric row, aligned
    /// pairwise. The chord row is absent when no pair carries a chord.
    Line {
        chords: Option<Vec<ChordCell>>,
        lyrics: Vec<LyricCell>,
    },
}

/// One pair's cell in the chord row: the chord, then a ghost copy of the
/// pair's lyric (a single ghost space when the lyric is empty, so a
/// trailing chord still occupies room).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChordCell {
    pub chord: String,
    pub ghost: String,
}

/// One pair's cell in the lyric row: a ghost copy of the pair's chord, then
/// the lyric with its whitespace intact.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LyricCell {
    pub ghost: String,
    pub lyric: String,
}

/// Lays out parsed lines as display blocks, one block per line, in order.
pub fn layout(lines: &[ParsedLine]) -> Vec<DisplayBlock> {
    lines.iter().map(block_for_line).collect()
}

fn block_for_line(line: &ParsedLine) -> DisplayBlock {
    match line {
        ParsedLine::Empty => DisplayBlock::Blank,
        ParsedLine::Section { label } => DisplayBlock::Heading {
            label: label.clone(),
        },
        ParsedLine::Line { pairs } => DisplayBlock::Line {
            chords: chord_row(pairs),
            lyrics: lyric_row(pairs),
        },
    }
}

fn chord_row(pairs: &[ChordLyricPair]) -> Option<Vec<ChordCell>> {
    if pairs.iter().all(|pair| pair.chord.is_empty()) {
        return None;
    }
    Some(
        pairs
            .iter()
            .map(|pair| ChordCell {
                chord: pair.chord.clone(),
                ghost: if pair.lyric.is_empty() {
                    " ".to_string()
                } else {
                    pair.lyric.clone()
                },
            })
            .collect(),
    )
}

fn lyric_row(pairs: &[ChordLyricPair]) -> Vec<LyricCell> {
    pairs
        .iter()
        .map(|pair| LyricCell {
            ghost: pair.chord.clone(),
            lyric: pair.lyric.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn blank_and_heading_blocks() {
        assert_eq!(
            layout(&parse("{soc}\n\nla")),
            vec![
                DisplayBlock::Heading {
                    label: "Chorus".to_string()
                },
                DisplayBlock::Blank,
                DisplayBlock::Line {
                    chords: None,
                    lyrics: vec![LyricCell {
                        ghost: String::new(),
                        lyric: "la".to_string()
                    }],
                },
            ]
        );
    }

    #[test]
    fn chord_row_only_when_chords_present() {
        let blocks = layout(&parse("plain text line"));
        assert_eq!(
            blocks,
            vec![DisplayBlock::Line {
                chords: None,
                lyrics: vec![LyricCell {
                    ghost: String::new(),
                    lyric: "plain text line".to_string()
                }],
            }]
        );
    }

    #[test]
    fn rows_reserve_matching_runs() {
        let blocks = layout(&parse("[G]Amazing [C]grace [D]"));
        let DisplayBlock::Line {
            chords: Some(chords),
            lyrics,
        } = &blocks[0]
        else {
            panic!("expected a content line with a chord row");
        };

        assert_eq!(chords.len(), lyrics.len());
        for (chord_cell, lyric_cell) in chords.iter().zip(lyrics) {
            // The ghost run in each row is exactly the visible run of the
            // other, except that an empty lyric is held open by one space.
            assert_eq!(chord_cell.chord, lyric_cell.ghost);
            if lyric_cell.lyric.is_empty() {
                assert_eq!(chord_cell.ghost, " ");
            } else {
                assert_eq!(chord_cell.ghost, lyric_cell.lyric);
            }
        }
    }

    #[test]
    fn lyric_whitespace_is_kept() {
        let blocks = layout(&parse("[G]two  spaces [C]kept"));
        let DisplayBlock::Line { lyrics, .. } = &blocks[0] else {
            panic!("expected a content line");
        };
        assert_eq!(lyrics[0].lyric, "two  spaces ");
    }

    #[test]
    fn no_directive_text_in_visible_runs() {
        let content = "{title: X}\n{sov}\n[G]La\n{eov}\n# note";
        for block in layout(&parse(content)) {
            match block {
                DisplayBlock::Blank => {}
                DisplayBlock::Heading { label } => assert!(!label.contains('{')),
                DisplayBlock::Line { lyrics, chords } => {
                    for cell in &lyrics {
                        assert!(!cell.lyric.contains('{'));
                        assert!(!cell.lyric.contains('#'));
                    }
                    for cell in chords.iter().flatten() {
                        assert!(!cell.chord.contains('{'));
                    }
                }
            }
        }
    }
}
