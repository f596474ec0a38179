// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Leading metadata directives recognised when importing a `.cho` file.
static HEADER_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\{(title|t|artist|key|capo|tempo|tags)\s*:\s*(.*?)\s*\}$").unwrap()
});

/// A song in the library: descriptive metadata plus the ChordPro chart
/// text. Everything except the title is optional.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Song {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capo: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
}

impl Song {
    /// Composes the export form of the song: metadata directives for the
    /// fields that are set, a blank separator line, then the chart text.
    pub fn to_chordpro(&self) -> String {
        let mut lines = vec![format!("{{title: {}}}", self.title)];
        if let Some(artist) = &self.artist {
            lines.push(format!("{{artist: {artist}}}"));
        }
        if let Some(key) = &self.key {
            lines.push(format!("{{key: {key}}}"));
        }
        if let Some(capo) = self.capo {
            lines.push(format!("{{capo: {capo}}}"));
        }
        if let Some(tempo) = self.tempo {
            lines.push(format!("{{tempo: {tempo}}}"));
        }
        if !self.tags.is_empty() {
            lines.push(format!("{{tags: {}}}", self.tags.join(", ")));
        }
        lines.push(String::new());
        lines.push(self.content.clone());
        lines.join("\n")
    }

    /// Builds a song from `.cho` text, the inverse of [`Song::to_chordpro`].
    ///
    /// Metadata directives at the top of the file fill in the song's
    /// fields; the first line that is not one of them ends the header, and
    /// everything from there on (less one separator blank line) is kept
    /// verbatim as the chart text. Values that fail to parse as numbers
    /// are ignored, so this never fails.
    pub fn from_chordpro(text: &str) -> Self {
        let mut song = Song::default();
        let lines = text.split('\n').collect::<Vec<_>>();

        let mut index = 0;
        while index < lines.len() {
            let Some(captures) = HEADER_DIRECTIVE.captures(lines[index].trim()) else {
                break;
            };
            let name = captures.get(1).unwrap().as_str().to_lowercase();
            let value = captures.get(2).unwrap().as_str();
            debug!("header directive {name}: {value:?}");
            match name.as_str() {
                "title" | "t" => song.title = value.to_string(),
                "artist" => song.artist = Some(value.to_string()),
                "key" => song.key = Some(value.to_string()),
                "capo" => song.capo = value.parse().ok(),
                "tempo" => song.tempo = value.parse().ok(),
                "tags" => {
                    song.tags = value
                        .split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                _ => unreachable!("pattern only matches known names"),
            }
            index += 1;
        }

        // One blank line separates the header from the chart.
        if index > 0 && lines.get(index).is_some_and(|line| line.trim().is_empty()) {
            index += 1;
        }

        song.content = lines[index..].join("\n");
        song
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let song = Song {
            title: "Amazing Grace".to_string(),
            artist: Some("John Newton".to_string()),
            key: Some("G".to_string()),
            capo: Some(2),
            tempo: Some(90),
            tags: vec!["hymn".to_string(), "classic".to_string()],
            content: "{start_of_verse}\n[G]Amazing [C]grace\n{end_of_verse}".to_string(),
        };
        assert_eq!(Song::from_chordpro(&song.to_chordpro()), song);
    }

    #[test]
    fn compose_minimal() {
        let song = Song {
            title: "Untitled".to_string(),
            content: "[G]La".to_string(),
            ..Default::default()
        };
        assert_eq!(song.to_chordpro(), "{title: Untitled}\n\n[G]La");
    }

    #[test]
    fn import_without_header() {
        let song = Song::from_chordpro("[G]Straight into it");
        assert_eq!(song.title, "");
        assert_eq!(song.content, "[G]Straight into it");
    }

    #[test]
    fn import_short_title_form() {
        let song = Song::from_chordpro("{t: Short}\n\nLa");
        assert_eq!(song.title, "Short");
        assert_eq!(song.content, "La");
    }

    #[test]
    fn import_ignores_bad_numbers() {
        let song = Song::from_chordpro("{title: X}\n{capo: none}\n{tempo: fast}\n\nLa");
        assert_eq!(song.capo, None);
        assert_eq!(song.tempo, None);
        assert_eq!(song.content, "La");
    }

    #[test]
    fn unknown_directive_ends_header() {
        let song = Song::from_chordpro("{title: X}\n{subtitle: Y}\nLa");
        assert_eq!(song.title, "X");
        assert_eq!(song.content, "{subtitle: Y}\nLa");
    }

    #[test]
    fn content_keeps_leading_blank_line() {
        let song = Song {
            title: "X".to_string(),
            content: "\nfirst line after a blank".to_string(),
            ..Default::default()
        };
        assert_eq!(Song::from_chordpro(&song.to_chordpro()), song);
    }
}
