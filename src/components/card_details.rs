//! Card Details Component
//!
//! Full punch grid for one card. Punched slots show date, puncher and
//! reason; empty slots open the add-punch sheet.

use leptos::prelude::*;

use crate::context::{use_app_context, Sheet};
use crate::format;
use crate::models::{Card, Slot};

const DETAIL_COLUMNS: usize = 2;

#[component]
pub fn CardDetails(card: Card) -> impl IntoView {
    let ctx = use_app_context();
    let card_id = card.id;
    let status = format::remaining(&card);
    let rows = card.slot_rows(DETAIL_COLUMNS);

    view! {
        <div class="card-details">
            <h2 class="card-details-title">{card.title.clone()}</h2>
            <p class="card-caption">{status}</p>

            <div class="detail-grid">
                {rows.into_iter().map(|row| view! {
                    <div class="detail-row">
                        {row.into_iter().map(|(index, slot)| match slot {
                            Slot::Punched(punch) => view! {
                                <div class="detail-slot punched" data-index=index.to_string()>
                                    <span class="slot-mark large">"✕"</span>
                                    <dl class="punch-info">
                                        <dt>"📅"</dt>
                                        <dd>{format::punch_date(&punch.date)}</dd>
                                        <dt>"👤"</dt>
                                        <dd>{punch.puncher.name.clone()}</dd>
                                        <dt>"📝"</dt>
                                        <dd>{punch.reason.clone()}</dd>
                                    </dl>
                                </div>
                            }.into_any(),
                            Slot::Empty => view! {
                                <div class="detail-slot empty" data-index=index.to_string()>
                                    <button
                                        class="slot-btn"
                                        title="Punch"
                                        on:click=move |_| ctx.open(Sheet::AddPunch(card_id))
                                    >
                                        "○"
                                    </button>
                                </div>
                            }.into_any(),
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
