// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Full-screen view for rehearsal and performance, opened with
//! `?present=true`. Holds a screen wake lock while shown so the display
//! doesn't sleep mid-song.

use crate::{
    model::{
        SetlistEntry, SongPosition, State,
        helpers::{key_summary, song_label},
    },
    preview::ChartPreview,
};
use leptos::{
    ev::{keydown, visibilitychange},
    prelude::*,
    task::spawn_local,
};
use leptos_use::use_event_listener;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{VisibilityState, WakeLockSentinel, WakeLockType};

#[component]
pub fn Player(
    state: Signal<State>,
    current_position: Signal<Option<SongPosition>>,
    write_current_position: WriteSignal<Option<SongPosition>>,
) -> impl IntoView {
    // Dropped with the component's scope, releasing the lock.
    let _wake_lock = StoredValue::new_local(WakeLockGuard::new());

    _ = use_event_listener(document(), keydown, move |event| {
        match event.key().as_str() {
            "ArrowRight" | "PageDown" => step(state, current_position, write_current_position, 1),
            "ArrowLeft" | "PageUp" => step(state, current_position, write_current_position, -1),
            _ => {}
        }
    });

    let theme_style = move || {
        let theme = state.read().theme.clone();
        format!(
            "color: {}; background-color: {}; font-size: {}px; font-family: {};",
            theme.text_colour, theme.background_colour, theme.font_size, theme.font_family
        )
    };

    view! {
        <div id="player" style=theme_style>
        <div class="button-row">
            <input type="button" value="Back" on:click=move |_| step(state, current_position, write_current_position, -1)/>
            <input type="button" value="Next" on:click=move |_| step(state, current_position, write_current_position, 1)/>
        </div>
        {move || {
            let state = state.read();
            let Some(position) = current_position.get() else {
                return view! {
                    <p>"Nothing selected. Pick a setlist entry in the controller window."</p>
                }
                .into_any();
            };
            match state.entry(position) {
                Some(&SetlistEntry::Song { song_id }) => match state.songs.get(&song_id) {
                    Some(song) => {
                        let chord_colour = state.theme.chord_colour.clone();
                        view! {
                            <h1>{song_label(song)}</h1>
                            { key_summary(song).map(|summary| view! { <p>{summary}</p> }) }
                            <div style=format!("--chord-colour: {chord_colour};")>
                                <ChartPreview content=song.content.clone()/>
                            </div>
                        }
                        .into_any()
                    }
                    None => view! { <p>"Song removed."</p> }.into_any(),
                },
                Some(SetlistEntry::Note(text)) => view! {
                    <h1>{text.clone()}</h1>
                }
                .into_any(),
                None => view! { <p>"End of setlist."</p> }.into_any(),
            }
        }}
        </div>
    }
}

/// Moves the current position forwards or backwards within its setlist.
fn step(
    state: Signal<State>,
    current_position: Signal<Option<SongPosition>>,
    write_current_position: WriteSignal<Option<SongPosition>>,
    offset: isize,
) {
    let Some(mut position) = current_position.get_untracked() else {
        return;
    };

    let entry_count = {
        let state = state.read_untracked();
        let Some(setlist) = state.setlists.get(&position.setlist_id) else {
            return;
        };
        setlist.entries.len()
    };

    if let Some(new_index) = position.entry_index.checked_add_signed(offset)
        && new_index < entry_count
    {
        position.entry_index = new_index;
        write_current_position.set(Some(position));
    }
}

/// Holds the screen wake lock, re-requesting it whenever the page becomes
/// visible again. The lock is released when the guard is dropped.
#[derive(Debug)]
struct WakeLockGuard {
    sentinel: RefCell<Option<WakeLockSentinel>>,
}

impl WakeLockGuard {
    fn new() -> Rc<Self> {
        let guard = Rc::new(Self {
            sentinel: RefCell::new(None),
        });

        spawn_local(guard.clone().request_and_save());

        let guard_clone = guard.clone();
        _ = use_event_listener(document(), visibilitychange, move |_| {
            if document().visibility_state() == VisibilityState::Visible {
                spawn_local(guard_clone.clone().request_and_save());
            }
        });

        guard
    }

    async fn request_and_save(self: Rc<Self>) {
        match request_wake_lock().await {
            Ok(sentinel) => {
                self.sentinel.borrow_mut().replace(sentinel);
            }
            Err(e) => gloo_console::log!(e),
        }
    }
}

impl Drop for WakeLockGuard {
    fn drop(&mut self) {
        if let Some(sentinel) = self.sentinel.take()
            && !sentinel.released()
        {
            spawn_local(async move {
                _ = JsFuture::from(sentinel.release()).await;
            });
        }
    }
}

async fn request_wake_lock() -> Result<WakeLockSentinel, JsValue> {
    Ok(JsFuture::from(
        window()
            .navigator()
            .wake_lock()
            .request(WakeLockType::Screen),
    )
    .await?
    .unchecked_into::<WakeLockSentinel>())
}
