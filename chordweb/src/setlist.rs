// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::model::{Setlist, SetlistEntry, SongPosition, State, helpers::entry_label};
use leptos::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};

/// The current setlist: its entries in playing order, and controls for
/// managing setlists.
#[component]
pub fn SetlistPanel(
    state: Signal<State>,
    write_state: WriteSignal<State>,
    current_setlist: Signal<Option<u32>>,
    write_current_setlist: WriteSignal<Option<u32>>,
    current_position: Signal<Option<SongPosition>>,
    write_current_position: WriteSignal<Option<SongPosition>>,
) -> impl IntoView {
    let no_current_setlist = move || current_setlist.get().is_none();
    let no_current_position = move || current_position.get().is_none();

    let setlist_name = NodeRef::new();
    let setlist_notes = NodeRef::new();
    let note_entry = NodeRef::new();

    view! {
        <div class="button-row">
            <select on:change:target=move |event| if let Ok(setlist_id) = event.target().value().parse() {
                write_current_setlist.set(Some(setlist_id));
                write_current_position.set(None);
            }
            prop:value=move || current_setlist.get().map(|setlist_id| setlist_id.to_string())>
            {move || {
                let state = state.read();
                state.setlists.iter().map(|(setlist_id, setlist)| {
                    view! {
                        <option value={setlist_id.to_string()}>{setlist.name.clone()}</option>
                    }
                }).collect::<Vec<_>>()
            }}
            </select>
            <input type="button" value="New" on:click=move |_| new_setlist(write_state, write_current_setlist)/>
            <input type="button" value="Delete" disabled=no_current_setlist on:click=move |_| delete_setlist(write_state, current_setlist, write_current_setlist, write_current_position)/>
            <form class="wide" on:submit=move |event| rename_setlist(event, setlist_name.get().unwrap(), current_setlist, write_state)>
                <input type="text" node_ref=setlist_name minlength="1" size="10"
                    prop:value=move || current_setlist.get().and_then(|setlist_id| Some(state.get().setlists.get(&setlist_id)?.name.clone())).unwrap_or_default() />
                <input type="submit" value="Rename" disabled=no_current_setlist />
                <input type="button" value="Duplicate" disabled=no_current_setlist on:click=move |_| duplicate_setlist(setlist_name.get().unwrap(), write_state, current_setlist, write_current_setlist) />
            </form>
        </div>
        <form class="button-row" on:submit=move |event| save_notes(event, setlist_notes.get().unwrap(), current_setlist, write_state)>
            <input type="text" class="wide" node_ref=setlist_notes placeholder="Notes"
                prop:value=move || current_setlist.get().and_then(|setlist_id| Some(state.get().setlists.get(&setlist_id)?.notes.clone())).unwrap_or_default() />
            <input type="submit" value="Save notes" disabled=no_current_setlist />
        </form>
        <form class="tall">
        <select size="5" id="setlist" disabled=no_current_setlist
            on:change:target=move |event| {
                if let Ok(position) = event.target().value().parse() {
                    write_current_position.set(Some(position));
                }
            }
            prop:value=move || current_position.get().map(|position| position.to_string())>
            {move || {
                let state = state.read();
                let Some(setlist_id) = current_setlist.get() else {
                    return Vec::new();
                };
                let Some(setlist) = state.setlists.get(&setlist_id) else {
                    return Vec::new();
                };
                setlist.entries.iter().enumerate().map(|(entry_index, entry)| {
                    let position = SongPosition {
                        setlist_id,
                        entry_index,
                    };
                    view! {
                        <option value={position.to_string()}>{
                            format!("{}. {}", entry_index + 1, entry_label(&state, entry))
                        }</option>
                    }
                }).collect::<Vec<_>>()
            }}
        </select>
        <div class="button-row">
            <input type="button" value="Remove" disabled=no_current_position on:click=move |_| remove_from_setlist(write_state, current_position, write_current_position)/>
            <input type="button" value="Move up" disabled=no_current_position on:click=move |_| move_in_setlist(write_state, current_position, write_current_position, -1)/>
            <input type="button" value="Move down" disabled=no_current_position on:click=move |_| move_in_setlist(write_state, current_position, write_current_position, 1)/>
        </div>
        </form>
        <form class="button-row" on:submit=move |event| add_note(event, note_entry.get().unwrap(), current_setlist, write_state)>
            <input type="text" class="wide" node_ref=note_entry placeholder="Note, e.g. a key change or a break" />
            <input type="submit" value="Add note" disabled=no_current_setlist />
        </form>
    }
}

fn rename_setlist(
    event: SubmitEvent,
    name_entry: HtmlInputElement,
    current_setlist: Signal<Option<u32>>,
    write_state: WriteSignal<State>,
) {
    event.prevent_default();

    let Some(current_setlist) = current_setlist.get() else {
        return;
    };

    let new_name = name_entry.value();
    write_state.update(|state| state.setlists.get_mut(&current_setlist).unwrap().name = new_name);
}

fn save_notes(
    event: SubmitEvent,
    notes_entry: HtmlInputElement,
    current_setlist: Signal<Option<u32>>,
    write_state: WriteSignal<State>,
) {
    event.prevent_default();

    let Some(current_setlist) = current_setlist.get() else {
        return;
    };

    let notes = notes_entry.value();
    write_state.update(|state| state.setlists.get_mut(&current_setlist).unwrap().notes = notes);
}

/// Creates a new setlist and switches to it.
fn new_setlist(write_state: WriteSignal<State>, write_current_setlist: WriteSignal<Option<u32>>) {
    let mut new_setlist_id = 0;
    write_state.update(|state| new_setlist_id = state.add_setlist(Setlist::new("New")));
    write_current_setlist.set(Some(new_setlist_id));
}

/// Makes a copy of the current setlist with a new name and switches to it.
fn duplicate_setlist(
    name_entry: HtmlInputElement,
    write_state: WriteSignal<State>,
    current_setlist: Signal<Option<u32>>,
    write_current_setlist: WriteSignal<Option<u32>>,
) {
    let Some(setlist_id) = current_setlist.get() else {
        return;
    };

    let mut state = write_state.write();
    let Some(setlist) = state.setlists.get(&setlist_id) else {
        return;
    };
    let mut setlist = setlist.clone();
    setlist.name = name_entry.value();
    let new_setlist_id = state.add_setlist(setlist);
    drop(state);
    write_current_setlist.set(Some(new_setlist_id));
}

/// Deletes the current setlist.
fn delete_setlist(
    write_state: WriteSignal<State>,
    current_setlist: Signal<Option<u32>>,
    write_current_setlist: WriteSignal<Option<u32>>,
    write_current_position: WriteSignal<Option<SongPosition>>,
) {
    let Some(setlist_id) = current_setlist.get() else {
        return;
    };

    write_current_position.set(None);
    write_state.update(|state| {
        state.setlists.remove(&setlist_id);
        write_current_setlist.set(
            state
                .setlists
                .first_key_value()
                .map(|(&first_id, _)| first_id),
        );
    });
}

/// Removes the current entry from its setlist.
fn remove_from_setlist(
    write_state: WriteSignal<State>,
    current_position: Signal<Option<SongPosition>>,
    write_current_position: WriteSignal<Option<SongPosition>>,
) {
    if let Some(mut current_position) = current_position.get() {
        write_state.update(|state| {
            let setlist = state
                .setlists
                .get_mut(&current_position.setlist_id)
                .unwrap();
            setlist.entries.remove(current_position.entry_index);

            if setlist.entries.is_empty() {
                write_current_position.set(None);
            } else {
                // Ensure that current_position is still within range.
                if current_position.entry_index >= setlist.entries.len() {
                    current_position.entry_index -= 1;
                }
                write_current_position.set(Some(current_position));
            }
        });
    }
}

/// Moves the current entry up or down in its setlist.
fn move_in_setlist(
    write_state: WriteSignal<State>,
    current_position: Signal<Option<SongPosition>>,
    write_current_position: WriteSignal<Option<SongPosition>>,
    offset: isize,
) {
    if let Some(current_position) = current_position.get() {
        let mut moved = false;
        write_state.update(|state| {
            moved = state
                .setlists
                .get_mut(&current_position.setlist_id)
                .unwrap()
                .move_entry_index(current_position.entry_index, offset)
        });
        if moved {
            write_current_position.update(|current_position| {
                if let Some(current_position) = current_position {
                    current_position.entry_index = current_position
                        .entry_index
                        .checked_add_signed(offset)
                        .unwrap();
                }
            });
        }
    }
}

fn add_note(
    event: SubmitEvent,
    note_entry: HtmlInputElement,
    current_setlist: Signal<Option<u32>>,
    write_state: WriteSignal<State>,
) {
    event.prevent_default();

    let Some(current_setlist) = current_setlist.get() else {
        return;
    };

    let text = note_entry.value();
    if text.is_empty() {
        return;
    }
    write_state.update(|state| {
        state
            .setlists
            .get_mut(&current_setlist)
            .unwrap()
            .entries
            .push(SetlistEntry::Note(text))
    });
    note_entry.set_value("");
}
