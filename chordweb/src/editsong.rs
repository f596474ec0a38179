// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{model::State, preview::ChartPreview};
use leptos::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};

#[component]
pub fn EditSong(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    edit_song: ReadSignal<Option<u32>>,
    write_edit_song: WriteSignal<Option<u32>>,
) -> impl IntoView {
    move || {
        let state = state.read();
        let song_id = edit_song.get()?;
        let song = state.songs.get(&song_id)?;

        let title = NodeRef::new();
        let artist = NodeRef::new();
        let key = NodeRef::new();
        let capo = NodeRef::new();
        let tempo = NodeRef::new();
        let tags = NodeRef::new();
        // The chart text is tracked as a signal so the preview follows
        // every keystroke; the other fields are read on save.
        let (draft, write_draft) = signal(song.content.clone());

        Some(view! {
            <h2>"Edit song"</h2>
            <form class="tall" on:submit=move |event| save_song(
                event,
                write_state,
                song_id,
                title.get().unwrap(),
                artist.get().unwrap(),
                key.get().unwrap(),
                capo.get().unwrap(),
                tempo.get().unwrap(),
                tags.get().unwrap(),
                draft,
            )>
                <table>
                    <tr>
                        <td><label for="title">"Title"</label></td>
                        <td><input type="text" id="title" node_ref=title prop:value=song.title.clone()/></td>
                    </tr>
                    <tr>
                        <td><label for="artist">"Artist"</label></td>
                        <td><input type="text" id="artist" node_ref=artist prop:value=song.artist.clone().unwrap_or_default()/></td>
                    </tr>
                    <tr>
                        <td><label for="key">"Key"</label></td>
                        <td><input type="text" id="key" node_ref=key prop:value=song.key.clone().unwrap_or_default()/></td>
                    </tr>
                    <tr>
                        <td><label for="capo">"Capo"</label></td>
                        <td><input type="number" id="capo" min="0" max="12" node_ref=capo prop:value=song.capo.map(|capo| capo.to_string()).unwrap_or_default()/></td>
                    </tr>
                    <tr>
                        <td><label for="tempo">"Tempo"</label></td>
                        <td><input type="number" id="tempo" min="0" node_ref=tempo prop:value=song.tempo.map(|tempo| tempo.to_string()).unwrap_or_default()/></td>
                    </tr>
                    <tr>
                        <td><label for="tags">"Tags"</label></td>
                        <td><input type="text" id="tags" node_ref=tags prop:value=song.tags.join(", ")/></td>
                    </tr>
                </table>
                <textarea class="tall" spellcheck="false"
                    prop:value=draft
                    on:input:target=move |event| write_draft.set(event.target().value())>
                </textarea>
                <div class="preview">
                    <ChartPreview content=draft/>
                </div>
                <div class="button-row">
                    <input type="submit" value="Save"/>
                    <input type="button" value="Close" on:click=move |_| write_edit_song.set(None) />
                </div>
            </form>
        })
    }
}

fn save_song(
    event: SubmitEvent,
    write_state: WriteSignal<State>,
    song_id: u32,
    title: HtmlInputElement,
    artist: HtmlInputElement,
    key: HtmlInputElement,
    capo: HtmlInputElement,
    tempo: HtmlInputElement,
    tags: HtmlInputElement,
    draft: ReadSignal<String>,
) {
    event.prevent_default();

    write_state.update(|state| {
        let Some(song) = state.songs.get_mut(&song_id) else {
            return;
        };

        song.title = title.value();
        song.artist = optional(artist.value());
        song.key = optional(key.value());
        song.capo = capo.value().parse().ok();
        song.tempo = tempo.value().parse().ok();
        song.tags = tags
            .value()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        song.content = draft.get_untracked();
    });
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
