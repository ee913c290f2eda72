//! Punches Grid Component
//!
//! Compact grid of slot markers used in card summaries.

use leptos::prelude::*;

use crate::models::{Card, Slot};

/// Row-major grid of `cols` columns; punched slots first, in server order
#[component]
pub fn PunchesGrid(card: Card, cols: usize) -> impl IntoView {
    let rows = card.slot_rows(cols);

    view! {
        <div class="punches-grid" style=format!("grid-template-columns: repeat({}, auto);", cols.max(1))>
            {rows.into_iter().flatten().map(|(index, slot)| {
                match slot {
                    Slot::Punched(_) => view! {
                        <span class="slot punched" data-index=index.to_string()>"✕"</span>
                    }.into_any(),
                    Slot::Empty => view! {
                        <span class="slot empty" data-index=index.to_string()>"○"</span>
                    }.into_any(),
                }
            }).collect_view()}
        </div>
    }
}
