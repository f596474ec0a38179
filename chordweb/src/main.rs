// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

mod editsong;
mod import_export;
mod model;
mod player;
mod preview;
mod setlist;
mod songlist;

use crate::{
    editsong::EditSong,
    import_export::{export, import},
    model::{SongPosition, State},
    player::Player,
    preview::ChartPreview,
    setlist::SetlistPanel,
    songlist::SongList,
};
use leptos::{
    prelude::*,
    server::codee::string::{FromToStringCodec, JsonSerdeCodec, OptionCodec},
    task::spawn_local,
};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::query_signal,
    path,
};
use leptos_use::storage::use_local_storage;
use std::cell::RefCell;
use web_sys::Window;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let (state, write_state, _) = use_local_storage::<_, JsonSerdeCodec>("state");
    let (current_position, write_current_position, _) =
        use_local_storage::<_, OptionCodec<FromToStringCodec>>("current_position");

    view! {
        <Router>
            <Routes fallback=|| "Not found">
                <Route path=path!("*any") view=move || if query_signal("present").0.get().unwrap_or_default() {
                    view! {
                        <Player state current_position write_current_position/>
                    }.into_any()
                } else {
                    view! {
                        <Controller state write_state current_position write_current_position/>
                    }.into_any()
                }
                />
            </Routes>
        </Router>
    }
}

/// The main view for managing the library and driving the player.
#[component]
fn Controller(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    current_position: Signal<Option<SongPosition>>,
    write_current_position: WriteSignal<Option<SongPosition>>,
) -> impl IntoView {
    let (current_setlist, write_current_setlist, _) =
        use_local_storage::<_, OptionCodec<FromToStringCodec>>("current_setlist");

    if current_setlist.get_untracked().is_none()
        && let Some((&setlist_id, _)) = state.get_untracked().setlists.first_key_value()
    {
        write_current_setlist.set(Some(setlist_id));
    }

    let (edit_song, write_edit_song) = signal(None);
    let (output, write_output) = signal(None);
    let (error, write_error) = signal(None);

    let presentation_window = RefCell::new(None);

    view! {
        <div id="controller">
        <div class="column">
        <h1>"Chordweb"</h1>
        <div class="button-row">
        <form on:submit=move |event| spawn_local(import(event, write_state, write_output, write_error))>
        <input type="submit" value="Import"/>
        </form>
        <form on:submit=move |event| spawn_local(export(event, state, write_error))>
        <input type="submit" value="Export"/>
        </form>
        </div>
        <div>
        <p id="output">{ output }</p>
        <p id="error">{ error }</p>
        </div>
        <SongList state write_state current_setlist write_edit_song/>
        </div>
        <div class="column">
        <SetlistPanel state write_state current_setlist write_current_setlist current_position write_current_position/>
        </div>
        <div class="column">
        <form>
        <input type="button" value="Present" on:click=move |_| open_presentation(&mut presentation_window.borrow_mut())/>
        </form>
        <EditSong state write_state edit_song write_edit_song/>
        <div class="preview">
        {move || current_position.get().and_then(|position| {
            let state = state.read();
            let (_, song) = state.song_at(position)?;
            Some(view! {
                <ChartPreview content=song.content.clone()/>
            })
        })}
        </div>
        </div>
        </div>
    }
}

/// Opens a new window to show the player.
fn open_presentation(presentation_window: &mut Option<Window>) {
    // If there's already a presentation window open, close it.
    if let Some(presentation_window) = presentation_window {
        presentation_window.close().unwrap();
    }

    let new_presentation_window = window()
        .open_with_url_and_target_and_features(&"?present=true", &"", &"popup=true")
        .unwrap()
        .unwrap();

    *presentation_window = Some(new_presentation_window);
}
