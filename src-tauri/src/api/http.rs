//! HTTP implementation of `PunchcardsApi`
//!
//! Plain request/response against a base URL. No retry, no auth, no
//! timeout beyond reqwest's defaults.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::domain::{AddCard, AddPerson, AddPunch, Card, Person};
use super::error::{ApiError, ApiResult};
use super::traits::PunchcardsApi;

pub struct HttpApi {
    http: reqwest::Client,
    base_url: RwLock<String>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: RwLock::new(normalize(base_url.into())),
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .read()
            .map(|url| url.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Point subsequent requests at another server
    pub fn set_base_url(&self, base_url: &str) {
        let mut guard = self
            .base_url
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = normalize(base_url.to_string());
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Map non-2xx to `ApiError::Status`, warn on an unexpected 2xx
    async fn check(resp: Response, expected: StatusCode, what: &str) -> ApiResult<Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        if status != expected {
            log::warn!(
                "{}: status code {} does not equal {}",
                what,
                status.as_u16(),
                expected.as_u16()
            );
        }
        Ok(resp)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let resp = self.http.get(self.url(path)).send().await?;
        let resp = Self::check(resp, StatusCode::OK, &format!("GET {}", path)).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(format!("{}: {}", path, e)))
    }

    async fn post_json<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> ApiResult<()> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::check(resp, StatusCode::CREATED, &format!("POST {}", path)).await?;
        Ok(())
    }
}

fn normalize(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[async_trait]
impl PunchcardsApi for HttpApi {
    async fn list_cards(&self) -> ApiResult<Vec<Card>> {
        self.get_json("/cards").await
    }

    async fn list_people(&self) -> ApiResult<Vec<Person>> {
        self.get_json("/persons").await
    }

    async fn create_card(&self, card: &AddCard) -> ApiResult<()> {
        self.post_json("/card", card).await
    }

    async fn create_person(&self, person: &AddPerson) -> ApiResult<()> {
        self.post_json("/person", person).await
    }

    async fn create_punch(&self, punch: &AddPunch) -> ApiResult<()> {
        self.post_json("/punch", punch).await
    }

    async fn delete_card(&self, id: i32) -> ApiResult<()> {
        let path = format!("/card/{}", id);
        let resp = self.http.delete(self.url(&path)).send().await?;
        Self::check(resp, StatusCode::NO_CONTENT, &format!("DELETE {}", path)).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use serde_json::json;

    /// Bind `app` to a random local port and return its base URL
    pub(crate) async fn start_test_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[derive(Clone, Default)]
    struct Received {
        cards: Arc<Mutex<Vec<AddCard>>>,
        people: Arc<Mutex<Vec<AddPerson>>>,
        punches: Arc<Mutex<Vec<serde_json::Value>>>,
    }

    fn router(received: Received) -> Router {
        Router::new()
            .route(
                "/cards",
                get(|| async {
                    Json(json!([{
                        "id": 1,
                        "title": "Chores",
                        "capacity": 2,
                        "punches": [{
                            "id": 7,
                            "puncher": {"id": 2, "name": "Sam", "email": null, "phone_number": null},
                            "date": "2023-01-14T10:00:00.500Z",
                            "reason": "dishes"
                        }]
                    }]))
                }),
            )
            .route(
                "/persons",
                get(|| async {
                    Json(json!([{"id": 2, "name": "Sam", "email": "s@x.com", "phone_number": null}]))
                }),
            )
            .route(
                "/card",
                post(|State(r): State<Received>, Json(body): Json<AddCard>| async move {
                    r.cards.lock().unwrap().push(body);
                    AxumStatus::CREATED
                }),
            )
            .route(
                "/person",
                // Older servers answer 200 with the created record
                post(|State(r): State<Received>, Json(body): Json<AddPerson>| async move {
                    r.people.lock().unwrap().push(body.clone());
                    Json(json!({"id": 9, "name": body.name, "email": body.email, "phone_number": body.phone_number}))
                }),
            )
            .route(
                "/punch",
                post(|State(r): State<Received>, Json(body): Json<serde_json::Value>| async move {
                    r.punches.lock().unwrap().push(body);
                    AxumStatus::BAD_REQUEST
                }),
            )
            .route(
                "/card/{id}",
                delete(|Path(id): Path<i32>| async move {
                    if id == 1 {
                        AxumStatus::NO_CONTENT
                    } else {
                        AxumStatus::NOT_FOUND
                    }
                }),
            )
            .with_state(received)
    }

    #[tokio::test]
    async fn test_list_cards_and_people() {
        let base = start_test_server(router(Received::default())).await;
        let api = HttpApi::new(base);

        let cards = api.list_cards().await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].punches[0].puncher.name, "Sam");
        assert_eq!(cards[0].punches[0].date.timestamp_subsec_millis(), 500);

        let people = api.list_people().await.unwrap();
        assert_eq!(people[0].email.as_deref(), Some("s@x.com"));
    }

    #[tokio::test]
    async fn test_create_card_posts_json_body() {
        let received = Received::default();
        let base = start_test_server(router(received.clone())).await;
        let api = HttpApi::new(format!("{}/", base));

        api.create_card(&AddCard::new("Gym", 12)).await.unwrap();

        let cards = received.cards.lock().unwrap();
        assert_eq!(cards.as_slice(), &[AddCard::new("Gym", 12)]);
    }

    #[tokio::test]
    async fn test_create_accepts_any_success_status() {
        let received = Received::default();
        let base = start_test_server(router(received.clone())).await;
        let api = HttpApi::new(base);

        api.create_person(&AddPerson::from_form("Ada", "", "555"))
            .await
            .unwrap();

        let people = received.people.lock().unwrap();
        assert_eq!(people[0].phone_number.as_deref(), Some("555"));
        assert_eq!(people[0].email, None);
    }

    #[tokio::test]
    async fn test_create_punch_error_status() {
        let received = Received::default();
        let base = start_test_server(router(received.clone())).await;
        let api = HttpApi::new(base);

        let err = api
            .create_punch(&AddPunch::now(1, 2, "late".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 400, .. }));

        let punches = received.punches.lock().unwrap();
        assert_eq!(punches[0]["card_id"], 1);
        assert_eq!(punches[0]["puncher_id"], 2);
        assert_eq!(punches[0]["reason"], "late");
    }

    #[tokio::test]
    async fn test_delete_card() {
        let base = start_test_server(router(Received::default())).await;
        let api = HttpApi::new(base);

        api.delete_card(1).await.unwrap();
        let err = api.delete_card(2).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_decode_error() {
        let app = Router::new().route("/persons", get(|| async { Json(json!({"not": "a list"})) }));
        let base = start_test_server(app).await;
        let api = HttpApi::new(base);

        let err = api.list_people().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_error() {
        // Nothing listens on port 9 locally
        let api = HttpApi::new("http://127.0.0.1:9");
        let err = api.list_cards().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let api = HttpApi::new(" https://example.com/ ");
        assert_eq!(api.base_url(), "https://example.com");
        assert_eq!(api.url("/cards"), "https://example.com/cards");

        api.set_base_url("http://127.0.0.1:8000//");
        assert_eq!(api.base_url(), "http://127.0.0.1:8000");
    }
}
