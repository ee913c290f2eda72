//! Card Summary Component
//!
//! One row of the card list.

use leptos::prelude::*;

use crate::components::PunchesGrid;
use crate::format;
use crate::models::Card;

#[component]
pub fn CardSummary(card: Card) -> impl IntoView {
    let summary = format::summary(&card);
    let title = card.title.clone();

    view! {
        <div class="card-summary">
            <div class="card-summary-text">
                <span class="card-title">{title}</span>
                <span class="card-caption">{summary}</span>
            </div>
            <PunchesGrid card=card cols=10 />
        </div>
    }
}
