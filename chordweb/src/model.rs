// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

pub mod helpers;

use chordpro::Song;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};
use thiserror::Error;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct State {
    #[serde(default)]
    pub songs: BTreeMap<u32, Song>,
    #[serde(default)]
    pub setlists: BTreeMap<u32, Setlist>,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for State {
    fn default() -> Self {
        Self {
            songs: Default::default(),
            setlists: [(0, Setlist::new("Setlist"))].into_iter().collect(),
            theme: Default::default(),
        }
    }
}

impl State {
    /// Returns a list of all songs, sorted by title.
    pub fn songs_by_title(&self) -> Vec<(&u32, &Song)> {
        let mut songs = self.songs.iter().collect::<Vec<_>>();
        songs.sort_by_key(|(_, song)| &song.title);
        songs
    }

    /// Adds the given song to the library, and returns its ID.
    ///
    /// If the song already exists then the ID of the existing copy is
    /// returned without adding a duplicate.
    pub fn add_song(&mut self, song: Song) -> u32 {
        // No point adding an exact duplicate.
        if let Some((&existing_id, _)) = self
            .songs
            .iter()
            .find(|&(_, existing_song)| existing_song == &song)
        {
            return existing_id;
        }

        let id = self
            .songs
            .iter()
            .map(|(i, _)| i + 1)
            .max()
            .unwrap_or_default();
        self.songs.insert(id, song);
        id
    }

    pub fn add_setlist(&mut self, setlist: Setlist) -> u32 {
        let id = self
            .setlists
            .iter()
            .map(|(i, _)| i + 1)
            .max()
            .unwrap_or_default();
        self.setlists.insert(id, setlist);
        id
    }

    /// Removes the song with the given ID from the library, and replaces
    /// any setlist entries referring to it with a note entry.
    pub fn remove_song(&mut self, id: u32) {
        for setlist in self.setlists.values_mut() {
            for entry in &mut setlist.entries {
                if matches!(entry, SetlistEntry::Song { song_id } if *song_id == id) {
                    *entry = SetlistEntry::Note("Song removed".to_string());
                }
            }
        }

        self.songs.remove(&id);
    }

    /// Returns the setlist entry at the given position, if it exists.
    pub fn entry(&self, position: SongPosition) -> Option<&SetlistEntry> {
        self.setlists
            .get(&position.setlist_id)?
            .entries
            .get(position.entry_index)
    }

    /// Returns the song at the given position, if the position points at a
    /// song entry that still exists.
    pub fn song_at(&self, position: SongPosition) -> Option<(u32, &Song)> {
        let &SetlistEntry::Song { song_id } = self.entry(position)? else {
            return None;
        };
        Some((song_id, self.songs.get(&song_id)?))
    }

    /// Merges the contents of the other state into this one.
    pub fn merge(&mut self, other: &State) {
        let mut other_song_ids_to_ours = BTreeMap::new();
        for (id, song) in &other.songs {
            other_song_ids_to_ours.insert(id, self.add_song(song.clone()));
        }

        for setlist in other.setlists.values() {
            let mut setlist = setlist.clone();
            // Update song IDs.
            for entry in &mut setlist.entries {
                if let SetlistEntry::Song { song_id } = entry {
                    if let Some(&our_song_id) = other_song_ids_to_ours.get(song_id) {
                        *song_id = our_song_id;
                    } else {
                        *entry = SetlistEntry::Note(format!("Invalid song ID {song_id}"));
                    }
                }
            }

            // Add it if we don't already have the exact same setlist.
            if !self
                .setlists
                .values()
                .any(|existing_setlist| existing_setlist == &setlist)
            {
                self.add_setlist(setlist);
            }
        }

        self.theme = other.theme.clone();
    }
}

/// Styling for the full-screen player.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Theme {
    #[serde(default)]
    pub font_size: u32,
    #[serde(default)]
    pub chord_colour: String,
    #[serde(default)]
    pub text_colour: String,
    #[serde(default)]
    pub background_colour: String,
    /// Must be a fixed-width family, or the chord rows drift.
    #[serde(default)]
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_size: 20,
            chord_colour: "#1d4ed8".to_string(),
            text_colour: "#000000".to_string(),
            background_colour: "#ffffff".to_string(),
            font_family: "monospace".to_string(),
        }
    }
}

/// An ordered set of songs and notes for one rehearsal or performance.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Setlist {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub entries: Vec<SetlistEntry>,
}

impl Setlist {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            notes: String::new(),
            entries: Vec::new(),
        }
    }

    /// Moves the entry at the given index up or down by the given offset.
    ///
    /// Returns true if a change was made, or false if nothing was changed
    /// because the offset or index was out of range.
    pub fn move_entry_index(&mut self, entry_index: usize, offset: isize) -> bool {
        if let Some(new_index) = entry_index.checked_add_signed(offset)
            && new_index < self.entries.len()
        {
            self.entries.swap(entry_index, new_index);
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SetlistEntry {
    Song { song_id: u32 },
    Note(String),
}

/// The position of one entry within one setlist, stored as the current
/// selection and handed to the player.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SongPosition {
    /// The ID of the setlist containing the entry.
    pub setlist_id: u32,
    /// The index of the entry within the setlist.
    pub entry_index: usize,
}

impl Display for SongPosition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{},{}", self.setlist_id, self.entry_index)
    }
}

impl FromStr for SongPosition {
    type Err = ParseSongPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(',').collect::<Vec<_>>();
        let [setlist_id, entry_index] = parts.as_slice() else {
            return Err(ParseSongPositionError::WrongNumberOfParts);
        };
        Ok(Self {
            setlist_id: setlist_id.parse()?,
            entry_index: entry_index.parse()?,
        })
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseSongPositionError {
    #[error("Wrong number of parts")]
    WrongNumberOfParts,
    #[error("{0}")]
    ParseInt(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str) -> Song {
        Song {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn add_song_deduplicates() {
        let mut state = State::default();
        let first = state.add_song(song("A"));
        let second = state.add_song(song("B"));
        assert_ne!(first, second);
        assert_eq!(state.add_song(song("A")), first);
        assert_eq!(state.songs.len(), 2);
    }

    #[test]
    fn songs_sorted_by_title() {
        let mut state = State::default();
        state.add_song(song("Zebra"));
        state.add_song(song("Apple"));
        let titles = state
            .songs_by_title()
            .into_iter()
            .map(|(_, song)| song.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Apple", "Zebra"]);
    }

    #[test]
    fn remove_song_replaces_entries() {
        let mut state = State::default();
        let song_id = state.add_song(song("A"));
        state
            .setlists
            .get_mut(&0)
            .unwrap()
            .entries
            .push(SetlistEntry::Song { song_id });

        state.remove_song(song_id);

        assert!(state.songs.is_empty());
        assert_eq!(
            state.setlists[&0].entries,
            vec![SetlistEntry::Note("Song removed".to_string())]
        );
    }

    #[test]
    fn position_lookup() {
        let mut state = State::default();
        let song_id = state.add_song(song("A"));
        state.setlists.get_mut(&0).unwrap().entries = vec![
            SetlistEntry::Note("Tune up".to_string()),
            SetlistEntry::Song { song_id },
        ];

        assert_eq!(
            state.entry(SongPosition {
                setlist_id: 0,
                entry_index: 0
            }),
            Some(&SetlistEntry::Note("Tune up".to_string()))
        );
        assert_eq!(
            state.song_at(SongPosition {
                setlist_id: 0,
                entry_index: 1
            }),
            Some((song_id, &state.songs[&song_id]))
        );
        assert_eq!(
            state.song_at(SongPosition {
                setlist_id: 0,
                entry_index: 2
            }),
            None
        );
        assert_eq!(
            state.song_at(SongPosition {
                setlist_id: 1,
                entry_index: 0
            }),
            None
        );
    }

    #[test]
    fn move_entry() {
        let mut setlist = Setlist::new("Setlist");
        setlist.entries = vec![
            SetlistEntry::Song { song_id: 1 },
            SetlistEntry::Song { song_id: 2 },
        ];

        assert!(setlist.move_entry_index(0, 1));
        assert_eq!(
            setlist.entries,
            vec![
                SetlistEntry::Song { song_id: 2 },
                SetlistEntry::Song { song_id: 1 },
            ]
        );
        assert!(!setlist.move_entry_index(1, 1));
        assert!(!setlist.move_entry_index(0, -1));
    }

    #[test]
    fn merge_remaps_song_ids() {
        let mut ours = State::default();
        let existing = ours.add_song(song("Shared"));

        let mut theirs = State {
            setlists: Default::default(),
            ..Default::default()
        };
        let their_shared = theirs.add_song(song("Shared"));
        let their_new = theirs.add_song(song("New"));
        let mut setlist = Setlist::new("Imported");
        setlist.entries = vec![
            SetlistEntry::Song {
                song_id: their_shared,
            },
            SetlistEntry::Song { song_id: their_new },
        ];
        theirs.add_setlist(setlist);

        ours.merge(&theirs);

        assert_eq!(ours.songs.len(), 2);
        let imported = ours
            .setlists
            .values()
            .find(|setlist| setlist.name == "Imported")
            .unwrap();
        assert_eq!(imported.entries[0], SetlistEntry::Song { song_id: existing });
        assert!(
            matches!(imported.entries[1], SetlistEntry::Song { song_id } if song_id != existing)
        );
    }

    #[test]
    fn position_to_string_and_back() {
        let position = SongPosition {
            setlist_id: 3,
            entry_index: 7,
        };
        assert_eq!(position.to_string(), "3,7");
        assert_eq!("3,7".parse(), Ok(position));
        assert_eq!(
            "3".parse::<SongPosition>(),
            Err(ParseSongPositionError::WrongNumberOfParts)
        );
        assert!("a,b".parse::<SongPosition>().is_err());
    }
}
