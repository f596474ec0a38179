// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use chordpro::{ChordLyricPair, ParsedLine, Song, parse};
use clap::Parser;
use eyre::Report;
use log::debug;
use std::{fs::read_to_string, path::PathBuf};

fn main() -> Result<(), Report> {
    pretty_env_logger::init();

    match Args::parse() {
        Args::Print { path } => {
            let song = Song::from_chordpro(&read_to_string(path)?);
            print_header(&song);
            print_chart(&song.content);
        }
        Args::Lyrics { path } => {
            let song = Song::from_chordpro(&read_to_string(path)?);
            print_lyrics(&song.content);
        }
    }

    Ok(())
}

#[derive(Clone, Debug, Parser)]
enum Args {
    /// Print the chord chart from the given ChordPro file to standard
    /// output, with chords aligned above their lyrics.
    Print { path: PathBuf },
    /// Print just the lyrics, with chord annotations stripped.
    Lyrics { path: PathBuf },
}

fn print_header(song: &Song) {
    println!("= {} =", song.title);
    if let Some(artist) = &song.artist {
        println!("Artist: {artist}");
    }
    if let Some(key) = &song.key {
        println!("Key: {key}");
    }
    if let Some(capo) = song.capo {
        println!("Capo: {capo}");
    }
    if let Some(tempo) = song.tempo {
        println!("Tempo: {tempo}");
    }
    println!();
}

fn print_chart(content: &str) {
    let lines = parse(content);
    debug!("chart has {} lines", lines.len());
    for line in lines {
        match line {
            ParsedLine::Empty => println!(),
            ParsedLine::Section { label } => println!("{}", label.to_uppercase()),
            ParsedLine::Line { pairs } => {
                let (chord_row, lyric_row) = chart_rows(&pairs);
                if let Some(chord_row) = chord_row {
                    println!("{chord_row}");
                }
                println!("{lyric_row}");
            }
        }
    }
}

fn print_lyrics(content: &str) {
    for line in parse(content) {
        match line {
            ParsedLine::Empty => println!(),
            ParsedLine::Section { label } => {
                if !label.is_empty() {
                    println!("{label}:");
                }
            }
            ParsedLine::Line { pairs } => {
                let text = pairs
                    .iter()
                    .map(|pair| pair.lyric.as_str())
                    .collect::<String>();
                println!("{text}");
            }
        }
    }
}

/// Builds the two text rows of a content line.
///
/// On a character-cell terminal there is no invisible text to reserve
/// width with, so the alignment is computed directly: the lyric row is the
/// pairs' lyrics concatenated, and each chord is written into the chord
/// row starting at the column where its lyric segment starts. A chord that
/// overruns its column (longer than its lyric) pushes the next chord right
/// by one space rather than overlapping it.
fn chart_rows(pairs: &[ChordLyricPair]) -> (Option<String>, String) {
    let mut chord_row = String::new();
    let mut lyric_row = String::new();
    for pair in pairs {
        if !pair.chord.is_empty() {
            let column = lyric_row.chars().count();
            let used = chord_row.chars().count();
            if used < column {
                chord_row.push_str(&" ".repeat(column - used));
            } else if used > 0 {
                chord_row.push(' ');
            }
            chord_row.push_str(&pair.chord);
        }
        lyric_row.push_str(&pair.lyric);
    }

    let chord_row = (!chord_row.is_empty()).then_some(chord_row);
    (chord_row, lyric_row.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordpro::tokenize_line;

    fn rows_for(line: &str) -> (Option<String>, String) {
        chart_rows(&tokenize_line(line))
    }

    #[test]
    fn chords_start_at_their_lyric_columns() {
        let (chord_row, lyric_row) = rows_for("[G]Amazing [C]grace [D]how sweet");
        let chord_row = chord_row.unwrap();
        assert_eq!(chord_row, "G       C     D");
        assert_eq!(lyric_row, "Amazing grace how sweet");
        assert_eq!(chord_row.find('C'), lyric_row.find("grace"));
        assert_eq!(chord_row.find('D'), lyric_row.find("how"));
    }

    #[test]
    fn leading_text_shifts_chords_right() {
        let (chord_row, lyric_row) = rows_for("Oh [Em]love");
        assert_eq!(chord_row.unwrap(), "   Em");
        assert_eq!(lyric_row, "Oh love");
    }

    #[test]
    fn trailing_chord_past_the_lyrics() {
        let (chord_row, lyric_row) = rows_for("[G]Amazing [C]");
        assert_eq!(chord_row.unwrap(), "G       C");
        assert_eq!(lyric_row, "Amazing");
    }

    #[test]
    fn consecutive_chords_do_not_overlap() {
        let (chord_row, lyric_row) = rows_for("[G][C]go");
        assert_eq!(chord_row.unwrap(), "G C");
        assert_eq!(lyric_row, "go");
    }

    #[test]
    fn chordless_line_has_no_chord_row() {
        let (chord_row, lyric_row) = rows_for("just words");
        assert_eq!(chord_row, None);
        assert_eq!(lyric_row, "just words");
    }

    #[test]
    fn long_chord_pushes_the_next_one_right() {
        let (chord_row, lyric_row) = rows_for("[Gsus4]a [C]b");
        assert_eq!(chord_row.unwrap(), "Gsus4 C");
        assert_eq!(lyric_row, "a b");
    }
}
