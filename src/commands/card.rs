//! Card Commands
//!
//! Frontend bindings for card-related backend commands. Writes return the
//! refetched card list.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Card;
use super::call;

#[derive(Serialize)]
struct CreateCardArgs<'a> {
    title: &'a str,
    capacity: i32,
}

#[derive(Serialize)]
struct IdArgs {
    id: i32,
}

pub async fn list_cards() -> Result<Vec<Card>, String> {
    call("list_cards", JsValue::NULL).await
}

pub async fn create_card(title: &str, capacity: i32) -> Result<Vec<Card>, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateCardArgs { title, capacity }).map_err(|e| e.to_string())?;
    call("create_card", js_args).await
}

pub async fn delete_card(id: i32) -> Result<Vec<Card>, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    call("delete_card", js_args).await
}
