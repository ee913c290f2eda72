//! Person Commands

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Person;
use super::call;

#[derive(Serialize)]
struct CreatePersonArgs<'a> {
    name: &'a str,
    email: Option<&'a str>,
    #[serde(rename = "phoneNumber")]
    phone_number: Option<&'a str>,
}

pub async fn list_people() -> Result<Vec<Person>, String> {
    call("list_people", JsValue::NULL).await
}

pub async fn create_person(name: &str, email: &str, phone_number: &str) -> Result<Vec<Person>, String> {
    let args = CreatePersonArgs {
        name,
        email: Some(email).filter(|s| !s.trim().is_empty()),
        phone_number: Some(phone_number).filter(|s| !s.trim().is_empty()),
    };
    let js_args = serde_wasm_bindgen::to_value(&args).map_err(|e| e.to_string())?;
    call("create_person", js_args).await
}
