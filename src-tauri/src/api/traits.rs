//! API Layer - Core Trait
//!
//! Abstract interface to the punchcards server so the store can run against
//! the real HTTP client or an in-process fake.

use async_trait::async_trait;
use crate::domain::{AddCard, AddPerson, AddPunch, Card, Person};
use super::error::ApiResult;

/// One method per REST endpoint
#[async_trait]
pub trait PunchcardsApi: Send + Sync {
    /// `GET /cards`
    async fn list_cards(&self) -> ApiResult<Vec<Card>>;

    /// `GET /persons`
    async fn list_people(&self) -> ApiResult<Vec<Person>>;

    /// `POST /card`
    async fn create_card(&self, card: &AddCard) -> ApiResult<()>;

    /// `POST /person`
    async fn create_person(&self, person: &AddPerson) -> ApiResult<()>;

    /// `POST /punch`
    async fn create_punch(&self, punch: &AddPunch) -> ApiResult<()>;

    /// `DELETE /card/{id}`
    async fn delete_card(&self, id: i32) -> ApiResult<()>;
}
