//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;

/// A modal form or dialog layered over the current screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sheet {
    AddCard,
    AddPerson,
    AddPunch(i32),
    ConfirmDelete(i32),
    Settings,
}

/// In-progress input of the add-punch form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PunchDraft {
    pub reason: String,
    pub puncher_id: Option<i32>,
}

/// Open sheets, topmost last
///
/// The punch draft lives here rather than in the form so it outlives sheets
/// pushed on top of the punch form. It is reset whenever a punch sheet is
/// opened or dismissed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetStack {
    sheets: Vec<Sheet>,
    punch_draft: PunchDraft,
}

impl SheetStack {
    pub fn current(&self) -> Option<Sheet> {
        self.sheets.last().copied()
    }

    pub fn open(&mut self, sheet: Sheet) {
        if matches!(sheet, Sheet::AddPunch(_)) {
            self.punch_draft = PunchDraft::default();
        }
        self.sheets.push(sheet);
    }

    pub fn close(&mut self) {
        if let Some(Sheet::AddPunch(_)) = self.sheets.pop() {
            self.punch_draft = PunchDraft::default();
        }
    }

    pub fn punch_draft(&self) -> &PunchDraft {
        &self.punch_draft
    }

    pub fn punch_draft_mut(&mut self) -> &mut PunchDraft {
        &mut self.punch_draft
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    sheets: RwSignal<SheetStack>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            sheets: RwSignal::new(SheetStack::default()),
        }
    }

    /// Sheet currently shown
    pub fn current(&self) -> Option<Sheet> {
        self.sheets.with(SheetStack::current)
    }

    /// Present a sheet on top of whatever is open
    pub fn open(&self, sheet: Sheet) {
        self.sheets.update(|s| s.open(sheet));
    }

    /// Dismiss the topmost sheet, revealing the one beneath
    pub fn close(&self) {
        self.sheets.update(SheetStack::close);
    }

    pub fn punch_draft(&self) -> PunchDraft {
        self.sheets.with(|s| s.punch_draft().clone())
    }

    pub fn edit_punch_draft(&self, edit: impl FnOnce(&mut PunchDraft)) {
        self.sheets.update(|s| edit(s.punch_draft_mut()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
