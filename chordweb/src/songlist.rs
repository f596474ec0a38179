// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::model::{
    SetlistEntry, State,
    helpers::{song_label, song_matches_filter},
};
use chordpro::Song;
use leptos::prelude::*;
use web_sys::{HtmlSelectElement, SubmitEvent};

/// List of all songs in the library, with search.
#[component]
pub fn SongList(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    current_setlist: Signal<Option<u32>>,
    write_edit_song: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let song_list = NodeRef::new();
    let (filter, write_filter) = signal(String::new());
    let no_current_setlist = move || current_setlist.get().is_none();

    view! {
        <form class="tall" on:submit=move |event| add_song_to_setlist(event, song_list.get().unwrap(), current_setlist, write_state)>
            <input type="search" placeholder="Search songs"
                on:input:target=move |event| write_filter.set(event.target().value()) />
            <select size="5" id="song-list" node_ref=song_list>
                {move || {
                    let state = state.read();
                    let filter = filter.read();
                    state.songs_by_title().into_iter()
                        .filter(|(_, song)| song_matches_filter(song, &filter))
                        .map(|(id, song)| {
                            view! {
                                <option value={id.to_string()}>{song_label(song)}</option>
                            }
                        }).collect::<Vec<_>>()
                }}
            </select>
            <div class="button-row">
            <input type="button" value="New" on:click=move |_| new_song(write_state, write_edit_song) />
            <input type="button" value="Edit" on:click=move |_| edit_selected(song_list.get().unwrap(), write_edit_song) />
            <input type="button" value="Remove" on:click=move |_| remove_from_song_list(song_list.get().unwrap(), write_state) />
            <input type="submit" value="Add to setlist" disabled=no_current_setlist />
            </div>
        </form>
    }
}

/// Creates a blank song and opens it in the editor.
fn new_song(write_state: WriteSignal<State>, write_edit_song: WriteSignal<Option<u32>>) {
    let mut new_song_id = 0;
    write_state.update(|state| {
        new_song_id = state.add_song(Song {
            title: "New song".to_string(),
            ..Default::default()
        })
    });
    write_edit_song.set(Some(new_song_id));
}

/// Opens the selected song in the editor.
fn edit_selected(song_list: HtmlSelectElement, write_edit_song: WriteSignal<Option<u32>>) {
    let Ok(song_id) = song_list.value().parse() else {
        return;
    };
    write_edit_song.set(Some(song_id));
}

/// Removes the selected song from the library.
fn remove_from_song_list(song_list: HtmlSelectElement, write_state: WriteSignal<State>) {
    let Ok(song_id) = song_list.value().parse() else {
        return;
    };

    write_state.update(|state| {
        state.remove_song(song_id);
    })
}

fn add_song_to_setlist(
    event: SubmitEvent,
    song_list: HtmlSelectElement,
    current_setlist: Signal<Option<u32>>,
    write_state: WriteSignal<State>,
) {
    event.prevent_default();

    let Ok(song_id) = song_list.value().parse() else {
        return;
    };
    let Some(current_setlist) = current_setlist.get() else {
        return;
    };

    write_state.update(|state| {
        state
            .setlists
            .get_mut(&current_setlist)
            .unwrap()
            .entries
            .push(SetlistEntry::Song { song_id })
    });
}
