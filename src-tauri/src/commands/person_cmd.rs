//! Tauri Commands for People

use tauri::State;
use crate::domain::{AddPerson, Person};
use crate::AppState;

/// Build a create request from raw input; blank email and phone become null
pub fn person_from_args(
    name: &str,
    email: Option<&str>,
    phone_number: Option<&str>,
) -> Result<AddPerson, String> {
    let add = AddPerson::from_form(name, email.unwrap_or_default(), phone_number.unwrap_or_default());
    if add.name.is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(add)
}

/// Fetch all people from the server
#[tauri::command]
pub async fn list_people(state: State<'_, AppState>) -> Result<Vec<Person>, String> {
    Ok(state.store.fetch_people().await)
}

/// Create a person, then refetch people
#[tauri::command]
pub async fn create_person(
    state: State<'_, AppState>,
    name: String,
    email: Option<String>,
    phone_number: Option<String>,
) -> Result<Vec<Person>, String> {
    let add = person_from_args(&name, email.as_deref(), phone_number.as_deref())?;
    Ok(state.store.add_person(add).await)
}
