// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use chordpro::{ChordLyricPair, ParsedLine, Song, parse};
use std::io::{Read, stdin};

fn main() {
    let mut text = String::new();
    stdin().lock().read_to_string(&mut text).unwrap();

    let song = Song::from_chordpro(&text);
    println!("{song:#?}");
    println!("= {} =", song.title);
    print_chart(&song.content);
}

fn print_chart(content: &str) {
    for line in parse(content) {
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
