// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Import and export of the library through the file system access API.
//!
//! A `.json` file carries a whole [`State`] and is merged into the current
//! one; a `.cho` file carries a single ChordPro song.

use crate::model::State;
use chordpro::Song;
use gloo_file::{File, futures::read_as_text};
use gloo_utils::format::JsValueSerdeExt;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    FileSystemFileHandle, FileSystemWritableFileStream, OpenFilePickerOptions,
    SaveFilePickerOptions, SubmitEvent, js_sys::Array,
};

/// Exports the state to a file.
pub async fn export(
    event: SubmitEvent,
    state: Signal<State>,
    write_error: WriteSignal<Option<String>>,
) {
    event.prevent_default();

    let options = SaveFilePickerOptions::new();
    options.set_id("export");
    options.set_suggested_name(Some("chordweb.json"));
    options.set_types(
        &JsValue::from_serde(&[FileType {
            description: Some("JSON file".to_string()),
            accept: [("application/json".to_string(), vec![".json".to_string()])]
                .into_iter()
                .collect(),
        }])
        .unwrap(),
    );

    let Ok(file) = pick_save_file(&options).await else {
        return;
    };

    let state = state.read_untracked();
    if let Err(e) = write_and_close(&file, &serde_json::to_string::<State>(&state).unwrap()).await {
        write_error.set(Some(format!("{e:?}")));
    } else {
        write_error.set(None);
    }
}

/// Imports a single song or a whole exported library from a file.
pub async fn import(
    event: SubmitEvent,
    write_state: WriteSignal<State>,
    write_output: WriteSignal<Option<String>>,
    write_error: WriteSignal<Option<String>>,
) {
    event.prevent_default();

    let options = OpenFilePickerOptions::new();
    options.set_id("import");
    options.set_types(
        &JsValue::from_serde(&[
            FileType {
                description: Some("JSON or ChordPro file".to_string()),
                accept: [
                    ("application/json".to_string(), vec![".json".to_string()]),
                    (
                        "text/plain".to_string(),
                        vec![".cho".to_string(), ".chopro".to_string(), ".crd".to_string()],
                    ),
                ]
                .into_iter()
                .collect(),
            },
            FileType {
                description: Some("JSON file".to_string()),
                accept: [("application/json".to_string(), vec![".json".to_string()])]
                    .into_iter()
                    .collect(),
            },
            FileType {
                description: Some("ChordPro file".to_string()),
                accept: [(
                    "text/plain".to_string(),
                    vec![".cho".to_string(), ".chopro".to_string(), ".crd".to_string()],
                )]
                .into_iter()
                .collect(),
            },
        ])
        .unwrap(),
    );

    let Ok(file) = pick_open_file(&options).await else {
        return;
    };

    import_file(file, write_state, write_output, write_error).await;
}

async fn import_file(
    file: File,
    write_state: WriteSignal<State>,
    write_output: WriteSignal<Option<String>>,
    write_error: WriteSignal<Option<String>>,
) {
    write_output.set(Some(format!(
        "{}: {} bytes, {}",
        file.name(),
        file.size(),
        file.raw_mime_type()
    )));
    let text = read_as_text(&file).await.unwrap();
    if file.name().ends_with(".json") {
        match serde_json::from_str(&text) {
            Ok(imported_state) => {
                write_error.set(None);
                write_state.update(|state| state.merge(&imported_state));
            }
            Err(e) => write_error.set(Some(e.to_string())),
        }
    } else {
        // ChordPro parsing is total, so a song import can't fail; a file
        // without a title directive is named after the file.
        let mut song = Song::from_chordpro(&text);
        if song.title.is_empty() {
            song.title = file_stem(&file.name()).to_string();
        }
        write_error.set(None);
        write_state.update(|state| {
            state.add_song(song);
        });
    }
}

fn file_stem(name: &str) -> &str {
    name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
}

/// Type for the `types` entries of [`OpenFilePickerOptions`] and
/// [`SaveFilePickerOptions`].
#[derive(Clone, Debug, Deserialize, Eq, Serialize, PartialEq)]
struct FileType {
    description: Option<String>,
    accept: BTreeMap<String, Vec<String>>,
}

/// Prompts the user to pick a file to open.
async fn pick_open_file(options: &OpenFilePickerOptions) -> Result<File, JsValue> {
    let file_handles = JsFuture::from(window().show_open_file_picker_with_options(options)?)
        .await?
        .unchecked_into::<Array>()
        .iter()
        .map(JsValue::unchecked_into::<FileSystemFileHandle>)
        .collect::<Vec<_>>();
    Ok(JsFuture::from(file_handles.first().unwrap().get_file())
        .await?
        .unchecked_into::<web_sys::File>()
        .into())
}

/// Prompts the user to pick a file to save to.
async fn pick_save_file(
    options: &SaveFilePickerOptions,
) -> Result<FileSystemWritableFileStream, JsValue> {
    Ok(JsFuture::from(
        JsFuture::from(window().show_save_file_picker_with_options(options)?)
            .await?
            .unchecked_into::<FileSystemFileHandle>()
            .create_writable(),
    )
    .await?
    .unchecked_into::<FileSystemWritableFileStream>())
}

/// Writes the given contents to the given file and then closes it.
async fn write_and_close(
    file: &FileSystemWritableFileStream,
    contents: &str,
) -> Result<(), JsValue> {
    JsFuture::from(file.write_with_str(contents)?).await?;
    JsFuture::from(file.close()).await?;
    Ok(())
}
