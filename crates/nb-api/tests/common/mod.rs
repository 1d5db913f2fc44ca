use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use nb_api::{
    config::Environment,
    router,
    state::{ApiState, AuthConfig},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::sync::OnceCell;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test_jwt_secret_minimum_32_characters_long";
pub const TEST_PASSWORD: &str = "password123";

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Test state builder for creating an ApiState against `TEST_DATABASE_URL`
pub struct TestStateBuilder {
    enforce_card_ownership: bool,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            enforce_card_ownership: false,
        }
    }

    pub fn enforce_card_ownership(mut self, enforce: bool) -> Self {
        self.enforce_card_ownership = enforce;
        self
    }

    /// Build the state, or `None` when no test database is configured
    pub async fn build(self) -> Option<ApiState> {
        let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set, skipping database test");
            return None;
        };

        let pool = nb_db::create_pool(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        // Tests run concurrently, migrate once per process
        MIGRATED
            .get_or_try_init(|| nb_db::ensure_db_and_migrate(&database_url, &pool))
            .await
            .expect("Failed to migrate test database");

        Some(ApiState {
            pool,
            auth: AuthConfig {
                jwt_secret: TEST_JWT_SECRET.to_string(),
                jwt_expiry_minutes: 30,
                // Minimum cost bcrypt accepts
                bcrypt_cost: 4,
            },
            environment: Environment::Development,
            enforce_card_ownership: self.enforce_card_ownership,
        })
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(state: ApiState) -> Self {
        Self {
            router: router::router().with_state(state),
        }
    }

    /// Send a request and get the response
    pub async fn request(&self, mut request: Request<Body>) -> TestResponse {
        // The rate limiter on /token needs a peer address
        let test_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080);
        request.extensions_mut().insert(ConnectInfo(test_addr));

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    fn builder(method: &str, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Self::builder("GET", uri, None)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a GET request with a bearer token
    pub async fn get_with_auth(&self, uri: &str, token: &str) -> TestResponse {
        let request = Self::builder("GET", uri, Some(token))
            .body(Body::empty())
            .expect("Failed to build authenticated request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let request = Self::builder("POST", uri, None)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_string(body).expect("Failed to serialize body"),
            ))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body and a bearer token
    pub async fn post_json_with_auth<T: serde::Serialize>(
        &self,
        uri: &str,
        body: &T,
        token: &str,
    ) -> TestResponse {
        let request = Self::builder("POST", uri, Some(token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_string(body).expect("Failed to serialize body"),
            ))
            .expect("Failed to build authenticated request");

        self.request(request).await
    }

    /// Send a PUT request with no body and a bearer token
    pub async fn put_with_auth(&self, uri: &str, token: &str) -> TestResponse {
        let request = Self::builder("PUT", uri, Some(token))
            .body(Body::empty())
            .expect("Failed to build authenticated request");

        self.request(request).await
    }

    /// `POST /token` with form encoded credentials
    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        let body = format!(
            "username={}&password={}",
            form_encode(email),
            form_encode(password)
        );
        let request = Self::builder("POST", "/token", None)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build login request");

        self.request(request).await
    }

    /// Register a fresh user and log in, returning (user json, access token)
    pub async fn register_and_login(&self, email: &str) -> (Value, String) {
        let response = self
            .post_json(
                "/addUser/",
                &json!({
                    "firstname": "Test",
                    "lastname": "User",
                    "email": email,
                    "password": TEST_PASSWORD,
                    "rgpd": true
                }),
            )
            .await;
        response.assert_status(StatusCode::CREATED);
        let user: Value = response.json();

        let response = self.login(email, TEST_PASSWORD).await;
        response.assert_status(StatusCode::OK);
        let token = response.json::<Value>()["access_token"]
            .as_str()
            .expect("access_token should be a string")
            .to_string();

        (user, token)
    }

    /// Create a deck as the token's user and return its id
    pub async fn create_deck(&self, token: &str, name: &str) -> i64 {
        let response = self
            .post_json_with_auth(
                "/addDeck/",
                &json!({ "name": name, "visibility": "private", "color": "#3366ff" }),
                token,
            )
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_i64()
            .expect("deck id should be an integer")
    }

    /// Add a card to a deck and return its id
    pub async fn create_card(&self, token: &str, deck_id: i64, front: &str, back: &str) -> i64 {
        let response = self
            .post_json_with_auth(
                &format!("/addCard/?deck_id={deck_id}"),
                &json!({ "front_content": front, "back_content": back }),
                token,
            )
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_i64()
            .expect("card id should be an integer")
    }
}

/// Enough form encoding for test emails and passwords
fn form_encode(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace(' ', "+")
}

/// Unique email per test run so concurrent tests never collide
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4().simple())
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// The `error` message of an error body
    pub fn error(&self) -> String {
        self.json::<Value>()["error"]
            .as_str()
            .expect("error body should carry a message")
            .to_string()
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}

/// Database test helper functions
pub mod db {
    use nb_db::{models::CardState, repositories::progress};
    use sqlx::PgPool;

    /// Remove a test user; decks, cards and progress rows cascade
    pub async fn delete_user(pool: &PgPool, email: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Progress value stored for (user, deck), if any
    pub async fn deck_progress(
        pool: &PgPool,
        user_id: i64,
        deck_id: i64,
    ) -> anyhow::Result<Option<i32>> {
        let progress = progress::find_progress(pool, user_id, deck_id).await?;

        Ok(progress.map(|p| p.progress))
    }

    /// Try to hand a deck over to another user
    pub async fn reassign_deck(
        pool: &PgPool,
        deck_id: i64,
        owner_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE decks SET owner_id = $1 WHERE id = $2")
            .bind(owner_id)
            .bind(deck_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Try to move a card to another deck
    pub async fn move_card(pool: &PgPool, card_id: i64, deck_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE cards SET deck_id = $1 WHERE id = $2")
            .bind(deck_id)
            .bind(card_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Persisted state of a card
    pub async fn card_state(pool: &PgPool, card_id: i64) -> anyhow::Result<Option<CardState>> {
        let state = sqlx::query_scalar("SELECT state FROM cards WHERE id = $1")
            .bind(card_id)
            .fetch_optional(pool)
            .await?;

        Ok(state)
    }

    /// Stored password hash for a user
    pub async fn password_hash(pool: &PgPool, email: &str) -> anyhow::Result<Option<String>> {
        let hash = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(hash)
    }
}
