//! Punchcard Store
//!
//! In-memory snapshot of the server's cards and people. Every write is one
//! request followed by an unconditional refetch of the affected collection;
//! local lists only ever change through a fetch. Failures are logged and
//! dropped, leaving the previous snapshot in place.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::PunchcardsApi;
use crate::domain::{find_by_id, AddCard, AddPerson, AddPunch, Card, Person};

pub struct PunchcardStore<A: PunchcardsApi> {
    api: Arc<A>,
    cards: RwLock<Vec<Card>>,
    people: RwLock<Vec<Person>>,
}

impl<A: PunchcardsApi> PunchcardStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            cards: RwLock::new(Vec::new()),
            people: RwLock::new(Vec::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn cards(&self) -> Vec<Card> {
        self.cards.read().await.clone()
    }

    pub async fn people(&self) -> Vec<Person> {
        self.people.read().await.clone()
    }

    pub async fn card(&self, id: i32) -> Option<Card> {
        let cards = self.cards.read().await;
        find_by_id(cards.as_slice(), id).cloned()
    }

    pub async fn person(&self, id: i32) -> Option<Person> {
        let people = self.people.read().await;
        find_by_id(people.as_slice(), id).cloned()
    }

    // ========================
    // Reads
    // ========================

    pub async fn fetch_cards(&self) -> Vec<Card> {
        match self.api.list_cards().await {
            Ok(cards) => {
                log::info!("Fetched {} cards", cards.len());
                let mut guard = self.cards.write().await;
                *guard = cards;
                guard.clone()
            }
            Err(e) => {
                log::error!("Request error fetching cards: {}", e);
                self.cards().await
            }
        }
    }

    pub async fn fetch_people(&self) -> Vec<Person> {
        match self.api.list_people().await {
            Ok(people) => {
                log::info!("Fetched {} people", people.len());
                let mut guard = self.people.write().await;
                *guard = people;
                guard.clone()
            }
            Err(e) => {
                log::error!("Request error fetching people: {}", e);
                self.people().await
            }
        }
    }

    /// Refetch both collections
    pub async fn refresh_all(&self) -> (Vec<Card>, Vec<Person>) {
        let (cards, people) = tokio::join!(self.fetch_cards(), self.fetch_people());
        log::info!("Refreshed {} cards, {} people", cards.len(), people.len());
        (cards, people)
    }

    // ========================
    // Writes (always followed by a refetch)
    // ========================

    pub async fn add_card(&self, card: AddCard) -> Vec<Card> {
        if let Err(e) = self.api.create_card(&card).await {
            log::error!("Post error creating card {:?}: {}", card.title, e);
        }
        self.fetch_cards().await
    }

    pub async fn add_person(&self, person: AddPerson) -> Vec<Person> {
        if let Err(e) = self.api.create_person(&person).await {
            log::error!("Post error creating person {:?}: {}", person.name, e);
        }
        self.fetch_people().await
    }

    pub async fn add_punch(&self, punch: AddPunch) -> Vec<Card> {
        if let Err(e) = self.api.create_punch(&punch).await {
            log::error!("Post error punching card {}: {}", punch.card_id, e);
        }
        self.fetch_cards().await
    }

    pub async fn delete_card(&self, id: i32) -> Vec<Card> {
        if let Err(e) = self.api.delete_card(id).await {
            log::error!("Delete error for card {}: {}", id, e);
        }
        self.fetch_cards().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiResult, HttpApi};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Fake server whose list responses are scripted independently of writes
    #[derive(Default)]
    struct FakeApi {
        server_cards: Mutex<Vec<Card>>,
        server_people: Mutex<Vec<Person>>,
        fail_writes: AtomicBool,
        fail_reads: AtomicBool,
        card_fetches: AtomicUsize,
        people_fetches: AtomicUsize,
        writes: Mutex<Vec<String>>,
    }

    fn card(id: i32, title: &str, capacity: i32) -> Card {
        Card {
            id,
            title: title.to_string(),
            capacity,
            punches: Vec::new(),
        }
    }

    fn person(id: i32, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            email: None,
            phone_number: None,
        }
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }

    impl FakeApi {
        fn write(&self, what: String) -> ApiResult<()> {
            self.writes.lock().unwrap().push(what);
            if self.fail_writes.load(Ordering::SeqCst) {
                Err(failure())
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl PunchcardsApi for FakeApi {
        async fn list_cards(&self) -> ApiResult<Vec<Card>> {
            self.card_fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(ApiError::Decode("bad json".to_string()));
            }
            Ok(self.server_cards.lock().unwrap().clone())
        }

        async fn list_people(&self) -> ApiResult<Vec<Person>> {
            self.people_fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(ApiError::Decode("bad json".to_string()));
            }
            Ok(self.server_people.lock().unwrap().clone())
        }

        async fn create_card(&self, card: &AddCard) -> ApiResult<()> {
            self.write(format!("card:{}", card.title))
        }

        async fn create_person(&self, person: &AddPerson) -> ApiResult<()> {
            self.write(format!("person:{}", person.name))
        }

        async fn create_punch(&self, punch: &AddPunch) -> ApiResult<()> {
            self.write(format!("punch:{}:{}", punch.card_id, punch.puncher_id))
        }

        async fn delete_card(&self, id: i32) -> ApiResult<()> {
            self.write(format!("delete:{}", id))
        }
    }

    fn setup() -> (Arc<FakeApi>, PunchcardStore<FakeApi>) {
        let api = Arc::new(FakeApi::default());
        let store = PunchcardStore::new(api.clone());
        (api, store)
    }

    #[tokio::test]
    async fn test_fetch_replaces_snapshot() {
        let (api, store) = setup();
        *api.server_cards.lock().unwrap() = vec![card(1, "A", 3), card(2, "B", 4)];

        let cards = store.fetch_cards().await;
        assert_eq!(cards.len(), 2);
        assert_eq!(store.cards().await, cards);
        assert_eq!(store.card(2).await.map(|c| c.title), Some("B".to_string()));
        assert!(store.card(3).await.is_none());
    }

    #[tokio::test]
    async fn test_add_card_reflects_refetch_not_local_merge() {
        let (api, store) = setup();
        // Server list does not contain what we are about to create
        *api.server_cards.lock().unwrap() = vec![card(5, "Server copy", 7)];

        let cards = store.add_card(AddCard::new("Local", 3)).await;

        assert_eq!(api.writes.lock().unwrap().as_slice(), &["card:Local"]);
        assert_eq!(api.card_fetches.load(Ordering::SeqCst), 1);
        assert_eq!(cards, vec![card(5, "Server copy", 7)]);
        assert_eq!(store.cards().await, cards);
    }

    #[tokio::test]
    async fn test_add_person_refetches_people_only() {
        let (api, store) = setup();
        *api.server_people.lock().unwrap() = vec![person(1, "Ada")];

        let people = store.add_person(AddPerson::from_form("Ada", "", "")).await;

        assert_eq!(people, vec![person(1, "Ada")]);
        assert_eq!(api.people_fetches.load(Ordering::SeqCst), 1);
        assert_eq!(api.card_fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_add_punch_and_delete_refetch_cards() {
        let (api, store) = setup();
        *api.server_cards.lock().unwrap() = vec![card(1, "A", 3)];

        store
            .add_punch(AddPunch {
                card_id: 1,
                puncher_id: 2,
                date: Utc::now(),
                reason: "late".to_string(),
            })
            .await;
        api.server_cards.lock().unwrap().clear();
        let cards = store.delete_card(1).await;

        assert!(cards.is_empty());
        assert_eq!(api.card_fetches.load(Ordering::SeqCst), 2);
        assert_eq!(
            api.writes.lock().unwrap().as_slice(),
            &["punch:1:2", "delete:1"]
        );
    }

    #[tokio::test]
    async fn test_failed_write_still_refetches() {
        let (api, store) = setup();
        api.fail_writes.store(true, Ordering::SeqCst);
        *api.server_cards.lock().unwrap() = vec![card(1, "A", 3)];

        let cards = store.add_card(AddCard::new("X", 1)).await;

        assert_eq!(api.card_fetches.load(Ordering::SeqCst), 1);
        assert_eq!(cards, vec![card(1, "A", 3)]);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_snapshot() {
        let (api, store) = setup();
        *api.server_people.lock().unwrap() = vec![person(1, "Ada")];
        store.fetch_people().await;

        api.fail_reads.store(true, Ordering::SeqCst);
        *api.server_people.lock().unwrap() = Vec::new();

        let people = store.fetch_people().await;
        assert_eq!(people, vec![person(1, "Ada")]);
    }

    #[tokio::test]
    async fn test_refresh_all_fetches_both() {
        let (api, store) = setup();
        *api.server_cards.lock().unwrap() = vec![card(1, "A", 3)];
        *api.server_people.lock().unwrap() = vec![person(1, "Ada")];

        let (cards, people) = store.refresh_all().await;

        assert_eq!(cards, store.cards().await);
        assert_eq!(people, vec![person(1, "Ada")]);
        assert_eq!(store.person(1).await.map(|p| p.name), Some("Ada".to_string()));
        assert!(store.person(2).await.is_none());
    }

    #[tokio::test]
    async fn test_refetch_after_write_over_http() {
        use axum::http::StatusCode;
        use axum::routing::{get, post};
        use axum::{Json, Router};
        use serde_json::json;

        // POST /card is accepted but the list only shows what the server chose to store
        let app = Router::new()
            .route(
                "/cards",
                get(|| async {
                    Json(json!([{"id": 42, "title": "Stored", "capacity": 10, "punches": []}]))
                }),
            )
            .route("/card", post(|| async { StatusCode::CREATED }));
        let base = crate::api::start_test_server(app).await;
        let store = PunchcardStore::new(Arc::new(HttpApi::new(base)));

        let cards = store.add_card(AddCard::new("Mine", 3)).await;

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 42);
        assert_eq!(cards[0].title, "Stored");
    }
}
