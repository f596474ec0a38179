// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Chart rendering. Every content line becomes two rows built from the
//! same cells: the chord row holds each chord followed by a hidden copy of
//! its lyric, and the lyric row holds a hidden copy of each chord followed
//! by the lyric. The hidden runs still take up space, so both rows advance
//! by identical character runs and each chord lands above its own lyric
//! segment. The chart container uses a fixed-width font; see style.css.

use chordpro::{ChordCell, DisplayBlock, LyricCell, layout, parse};
use leptos::prelude::*;

/// Renders ChordPro text as an aligned chord chart.
#[component]
pub fn ChartPreview(#[prop(into)] content: Signal<String>) -> impl IntoView {
    move || {
        let blocks = layout(&parse(&content.read()));
        view! {
            <div class="chart">
                { blocks.into_iter().map(block_view).collect::<Vec<_>>() }
            </div>
        }
    }
}

fn block_view(block: DisplayBlock) -> AnyView {
    match block {
        DisplayBlock::Blank => view! {
            <div class="chart-blank" aria-hidden="true"></div>
        }
        .into_any(),
        DisplayBlock::Heading { label } => view! {
            <h3 class="chart-heading">{label}</h3>
        }
        .into_any(),
        DisplayBlock::Line { chords, lyrics } => view! {
            <div class="chart-line">
                { chords.map(|cells| view! {
                    <div class="chord-row" aria-hidden="true">
                        { cells.into_iter().map(chord_cell_view).collect::<Vec<_>>() }
                    </div>
                }) }
                <div class="lyric-row">
                    { lyrics.into_iter().map(lyric_cell_view).collect::<Vec<_>>() }
                </div>
            </div>
        }
        .into_any(),
    }
}

fn chord_cell_view(cell: ChordCell) -> impl IntoView {
    let ChordCell { chord, ghost } = cell;
    let chord = (!chord.is_empty()).then(|| view! { <span class="chord">{chord.clone()}</span> });
    view! {
        <span class="pair">
            {chord}
            <span class="ghost">{ghost}</span>
        </span>
    }
}

fn lyric_cell_view(cell: LyricCell) -> impl IntoView {
    let LyricCell { ghost, lyric } = cell;
    let ghost = (!ghost.is_empty()).then(|| view! { <span class="ghost">{ghost.clone()}</span> });
    view! {
        <span class="pair">
            {ghost}
            <span class="lyric">{lyric}</span>
        </span>
    }
}
