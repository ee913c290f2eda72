//! UI Components
//!
//! Reusable Leptos components.

mod punches_grid;
mod card_summary;
mod card_list;
mod card_details;
mod add_card_form;
mod add_person_form;
mod add_punch_form;
mod delete_confirm_dialog;
mod settings_panel;
mod sheet_host;

pub use punches_grid::PunchesGrid;
pub use card_summary::CardSummary;
pub use card_list::CardList;
pub use card_details::CardDetails;
pub use add_card_form::AddCardForm;
pub use add_person_form::AddPersonForm;
pub use add_punch_form::AddPunchForm;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use settings_panel::SettingsPanel;
pub use sheet_host::SheetHost;
