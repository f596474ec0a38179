// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Parser for the ChordPro dialect: inline `[Chord]` annotations,
//! `{directive}` lines and `#` comments.

use crate::types::{ChordLyricPair, ParsedLine};
use regex::Regex;
use std::sync::LazyLock;

/// An inline chord annotation. The chord name may be empty.
static CHORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());

/// Directives that mark the start of a section, with an optional label.
static SECTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\{(?:start_of_(?:verse|chorus|bridge|tab)|so[cvbt])(?::?\s*(.+?))?\}$")
        .unwrap()
});

/// Directives that mark the end of a section.
static SECTION_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\{(?:end_of_(?:verse|chorus|bridge|tab)|eo[cvbt])\}$").unwrap()
});

/// Single-line metadata directives, with or without a value.
static METADATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\{(?:title|t|subtitle|st|artist|key|capo|tempo|comment|c|ci|cb)(?::.*?)?\}$")
        .unwrap()
});

/// Splits one line of text into chord/lyric pairs.
///
/// The text between two chord annotations belongs to the first of the two;
/// text before the first chord becomes a leading pair with an empty chord.
/// Always returns at least one pair, and never fails: a line without any
/// annotations comes back as a single chordless pair carrying the whole
/// line. The line is tokenized as given, without trimming.
pub fn tokenize_line(line: &str) -> Vec<ChordLyricPair> {
    let matches = CHORD.captures_iter(line).collect::<Vec<_>>();

    let Some(first) = matches.first() else {
        return vec![ChordLyricPair::new("", line)];
    };

    let mut pairs = Vec::new();
    let first_start = first.get(0).unwrap().start();
    if first_start > 0 {
        pairs.push(ChordLyricPair::new("", &line[..first_start]));
    }

    for (index, captures) in matches.iter().enumerate() {
        let lyric_start = captures.get(0).unwrap().end();
        let lyric_end = matches
            .get(index + 1)
            .map(|next| next.get(0).unwrap().start())
            .unwrap_or(line.len());
        pairs.push(ChordLyricPair::new(
            captures.get(1).unwrap().as_str(),
            &line[lyric_start..lyric_end],
        ));
    }

    pairs
}

/// Parses a full ChordPro document into an ordered sequence of lines.
///
/// Comment lines, section-end directives and metadata directives are
/// dropped; section-start directives become [`ParsedLine::Section`]s; blank
/// lines are kept as [`ParsedLine::Empty`]. Anything else is a content
/// line, so unrecognised directive-like text degrades to visible text
/// rather than an error.
pub fn parse(content: &str) -> Vec<ParsedLine> {
    let mut parsed = Vec::new();
    for raw_line in content.split('\n') {
        let line = raw_line.trim();
        let outcome = RULES
            .iter()
            .find_map(|rule| rule(line))
            .unwrap_or_else(|| Outcome::Emit(ParsedLine::Line { pairs: tokenize_line(line) }));
        if let Outcome::Emit(entry) = outcome {
            parsed.push(entry);
        }
    }
    parsed
}

enum Outcome {
    /// The line carries no rendering information and is dropped.
    Skip,
    Emit(ParsedLine),
}

type Rule = fn(&str) -> Option<Outcome>;

/// Classification rules for a trimmed line, tried in priority order. A line
/// matching none of these is a content line.
const RULES: &[Rule] = &[comment, section_end, metadata, section_start, blank];

fn comment(line: &str) -> Option<Outcome> {
    line.starts_with('#').then_some(Outcome::Skip)
}

fn section_end(line: &str) -> Option<Outcome> {
    SECTION_END.is_match(line).then_some(Outcome::Skip)
}

fn metadata(line: &str) -> Option<Outcome> {
    METADATA.is_match(line).then_some(Outcome::Skip)
}

fn section_start(line: &str) -> Option<Outcome> {
    let captures = SECTION_START.captures(line)?;
    let explicit = captures
        .get(1)
        .map(|label| label.as_str().trim())
        .unwrap_or_default();
    let label = if explicit.is_empty() {
        default_label(line)
    } else {
        explicit.to_string()
    };
    Some(Outcome::Emit(ParsedLine::Section { label }))
}

fn blank(line: &str) -> Option<Outcome> {
    line.is_empty().then_some(Outcome::Emit(ParsedLine::Empty))
}

/// Derives a section label from the directive text when none was given
/// explicitly. Unknown directives get an empty label.
fn default_label(directive: &str) -> String {
    let directive = directive.to_lowercase();
    for (needles, label) in [
        (["chorus", "soc"], "Chorus"),
        (["verse", "sov"], "Verse"),
        (["bridge", "sob"], "Bridge"),
        (["tab", "sot"], "Tab"),
    ] {
        if needles.iter().any(|needle| directive.contains(needle)) {
            return label.to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pairs: Vec<ChordLyricPair>) -> ParsedLine {
        ParsedLine::Line { pairs }
    }

    fn section(label: &str) -> ParsedLine {
        ParsedLine::Section {
            label: label.to_string(),
        }
    }

    #[test]
    fn tokenize_no_chords() {
        assert_eq!(tokenize_line(""), vec![ChordLyricPair::new("", "")]);
        assert_eq!(
            tokenize_line("just some words"),
            vec![ChordLyricPair::new("", "just some words")]
        );
    }

    #[test]
    fn tokenize_chords_and_lyrics() {
        assert_eq!(
            tokenize_line("[G]Amazing [C]grace [D]how sweet"),
            vec![
                ChordLyricPair::new("G", "Amazing "),
                ChordLyricPair::new("C", "grace "),
                ChordLyricPair::new("D", "how sweet"),
            ]
        );
    }

    #[test]
    fn tokenize_trailing_chord() {
        assert_eq!(
            tokenize_line("[G]Amazing [C]"),
            vec![
                ChordLyricPair::new("G", "Amazing "),
                ChordLyricPair::new("C", ""),
            ]
        );
    }

    #[test]
    fn tokenize_leading_text() {
        assert_eq!(
            tokenize_line("Oh, [Em]love"),
            vec![
                ChordLyricPair::new("", "Oh, "),
                ChordLyricPair::new("Em", "love"),
            ]
        );
    }

    #[test]
    fn tokenize_consecutive_chords() {
        assert_eq!(
            tokenize_line("[G][C]go"),
            vec![
                ChordLyricPair::new("G", ""),
                ChordLyricPair::new("C", "go"),
            ]
        );
    }

    #[test]
    fn tokenize_empty_chord_name() {
        assert_eq!(
            tokenize_line("[]la"),
            vec![ChordLyricPair::new("", "la")]
        );
    }

    #[test]
    fn tokenize_preserves_lyric_text() {
        for source in [
            "[G]Amazing [C]grace [D]how sweet",
            "no chords at all",
            "tail [A]",
            "  spaced   [B7]  out  ",
            "[A][B][C]",
        ] {
            let stripped = CHORD.replace_all(source, "");
            let joined = tokenize_line(source)
                .iter()
                .map(|pair| pair.lyric.as_str())
                .collect::<String>();
            assert_eq!(joined, stripped);
        }
    }

    #[test]
    fn parse_empty_document() {
        assert_eq!(parse(""), vec![ParsedLine::Empty]);
    }

    #[test]
    fn parse_sections() {
        assert_eq!(
            parse("{start_of_verse}\n[G]Lyrics\n{end_of_verse}"),
            vec![
                section("Verse"),
                line(vec![ChordLyricPair::new("G", "Lyrics")]),
            ]
        );
        assert_eq!(
            parse("{soc}\n[C]Chorus\n{eoc}"),
            vec![
                section("Chorus"),
                line(vec![ChordLyricPair::new("C", "Chorus")]),
            ]
        );
    }

    #[test]
    fn parse_section_labels() {
        assert_eq!(parse("{start_of_bridge}"), vec![section("Bridge")]);
        assert_eq!(parse("{sot}"), vec![section("Tab")]);
        assert_eq!(
            parse("{start_of_verse: Verse 2}"),
            vec![section("Verse 2")]
        );
        assert_eq!(parse("{soc Last chorus}"), vec![section("Last chorus")]);
        // A label of pure whitespace counts as absent.
        assert_eq!(parse("{sov:   }"), vec![section("Verse")]);
    }

    #[test]
    fn parse_directives_case_insensitive() {
        assert_eq!(parse("{Start_Of_Chorus}"), vec![section("Chorus")]);
        assert_eq!(parse("{EOV}\n{SoB}"), vec![section("Bridge")]);
    }

    #[test]
    fn parse_drops_metadata() {
        assert_eq!(
            parse("{title: X}\n{artist: Y}\n[G]Z"),
            vec![line(vec![ChordLyricPair::new("G", "Z")])]
        );
        // Bare directives without a value are still metadata.
        assert_eq!(parse("{title}\n{capo}"), vec![]);
    }

    #[test]
    fn parse_drops_comments() {
        assert_eq!(
            parse("# comment\n[G]Lyrics"),
            vec![line(vec![ChordLyricPair::new("G", "Lyrics")])]
        );
    }

    #[test]
    fn parse_keeps_blank_lines_in_position() {
        assert_eq!(
            parse("[G]Line one\n\n[C]Line two"),
            vec![
                line(vec![ChordLyricPair::new("G", "Line one")]),
                ParsedLine::Empty,
                line(vec![ChordLyricPair::new("C", "Line two")]),
            ]
        );
    }

    #[test]
    fn parse_trims_before_classifying() {
        assert_eq!(parse("   {soc}   "), vec![section("Chorus")]);
        assert_eq!(parse("  \t  "), vec![ParsedLine::Empty]);
        // Content is tokenized from the trimmed line.
        assert_eq!(
            parse("  [G]la  "),
            vec![line(vec![ChordLyricPair::new("G", "la")])]
        );
    }

    #[test]
    fn parse_unknown_directives_are_content() {
        assert_eq!(
            parse("{transpose: 2}"),
            vec![line(vec![ChordLyricPair::new("", "{transpose: 2}")])]
        );
        // An unclosed bracket is not an annotation.
        assert_eq!(
            parse("[G Amazing"),
            vec![line(vec![ChordLyricPair::new("", "[G Amazing")])]
        );
    }
}
