// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::model::{SetlistEntry, State};
use chordpro::Song;

/// Returns the label to show for the given song in lists and the player.
pub fn song_label(song: &Song) -> String {
    let title = if song.title.is_empty() {
        "Untitled"
    } else {
        &song.title
    };
    if let Some(artist) = &song.artist {
        format!("{title} ({artist})")
    } else {
        title.to_string()
    }
}

/// Returns whether the given song should be shown for the given search
/// filter. Matches against the title, artist and tags, ignoring case.
pub fn song_matches_filter(song: &Song, filter: &str) -> bool {
    let filter = filter.to_lowercase();
    song.title.to_lowercase().contains(&filter)
        || song
            .artist
            .as_ref()
            .is_some_and(|artist| artist.to_lowercase().contains(&filter))
        || song
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&filter))
}

/// Returns a one-line summary of the song's musical metadata, if any of it
/// is set, e.g. "Key G, Capo 2, 90 bpm".
pub fn key_summary(song: &Song) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(key) = &song.key {
        parts.push(format!("Key {key}"));
    }
    if let Some(capo) = song.capo {
        parts.push(format!("Capo {capo}"));
    }
    if let Some(tempo) = song.tempo {
        parts.push(format!("{tempo} bpm"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Returns the label to show for a setlist entry.
pub fn entry_label(state: &State, entry: &SetlistEntry) -> String {
    match entry {
        SetlistEntry::Song { song_id } => state
            .songs
            .get(song_id)
            .map(song_label)
            .unwrap_or_else(|| format!("Missing song {song_id}")),
        SetlistEntry::Note(text) => format!("({text})"),
    }
}
