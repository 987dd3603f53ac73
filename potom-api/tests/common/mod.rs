#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::DateTime;
use chrono::Utc;
use potom_api::config::Platform;
use potom_api::domain::group::errors::GroupError;
use potom_api::domain::group::models::Group;
use potom_api::domain::group::ports::GroupRepository;
use potom_api::domain::group::service::GroupService;
use potom_api::domain::session::errors::SessionError;
use potom_api::domain::session::models::NewRefreshToken;
use potom_api::domain::session::models::RefreshToken;
use potom_api::domain::session::models::RevokeOutcome;
use potom_api::domain::session::models::SessionPolicy;
use potom_api::domain::session::ports::RefreshTokenRepository;
use potom_api::domain::session::service::SessionService;
use potom_api::domain::user::errors::UserError;
use potom_api::domain::user::models::User;
use potom_api::domain::user::models::UserId;
use potom_api::domain::user::ports::UserRepository;
use potom_api::domain::user::service::UserService;
use potom_api::inbound::http::metrics::RequestMetrics;
use potom_api::inbound::http::router::create_router;
use potom_api::inbound::http::router::AppState;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub refresh_tokens: Arc<InMemoryRefreshTokenRepository>,
}

impl TestApp {
    /// Spawn the application on the production platform
    pub async fn spawn() -> Self {
        Self::spawn_on(Platform::Production).await
    }

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn_on(platform: Platform) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(
            Authenticator::new(JWT_SECRET)
                .with_password_hasher(PasswordHasher::with_cost(8, 1, 1).unwrap()),
        );

        let users = Arc::new(InMemoryUserRepository::default());
        let groups = Arc::new(InMemoryGroupRepository::new(Arc::clone(&users)));
        let refresh_tokens = Arc::new(InMemoryRefreshTokenRepository::default());

        let state = AppState {
            user_service: Arc::new(UserService::new(
                Arc::clone(&users),
                Arc::clone(&authenticator),
            )),
            group_service: Arc::new(GroupService::new(groups)),
            session_service: Arc::new(SessionService::new(
                users,
                Arc::clone(&refresh_tokens),
                authenticator,
                SessionPolicy::default(),
            )),
            metrics: Arc::new(RequestMetrics::new()),
            platform,
        };

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            refresh_tokens,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(&format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(&format!("{}{}", self.address, path))
    }

    /// Register a user and return its id
    pub async fn create_user(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/users")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().unwrap().to_string()
    }

    /// Log in and return the parsed response body
    pub async fn login(&self, email: &str, password: &str) -> Value {
        let response = self
            .post("/api/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        response.json().await.expect("Failed to parse response")
    }

    /// Register and log in a user, returning (id, access token, refresh token)
    pub async fn signed_in_user(&self, email: &str, password: &str) -> (String, String, String) {
        let id = self.create_user(email, password).await;
        let session = self.login(email, password).await;

        (
            id,
            session["token"].as_str().unwrap().to_string(),
            session["refresh_token"].as_str().unwrap().to_string(),
        )
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn contains(&self, id: &UserId) -> bool {
        self.users.lock().unwrap().contains_key(id)
    }

    fn email_taken(users: &HashMap<UserId, User>, user: &User) -> bool {
        users
            .values()
            .any(|existing| existing.id != user.id && existing.email == user.email)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if Self::email_taken(&users, &user) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if Self::email_taken(&users, &user) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_all(&self) -> Result<u64, UserError> {
        let mut users = self.users.lock().unwrap();
        let deleted = users.len() as u64;
        users.clear();
        Ok(deleted)
    }
}

pub struct InMemoryGroupRepository {
    users: Arc<InMemoryUserRepository>,
    groups: Mutex<Vec<Group>>,
}

impl InMemoryGroupRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            groups: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn create(&self, group: Group) -> Result<Group, GroupError> {
        if !self.users.contains(&group.author_id) {
            return Err(GroupError::AuthorNotFound(group.author_id.to_string()));
        }
        self.groups.lock().unwrap().push(group.clone());
        Ok(group)
    }
}

#[derive(Default)]
pub struct InMemoryRefreshTokenRepository {
    tokens: Mutex<HashMap<String, RefreshToken>>,
}

impl InMemoryRefreshTokenRepository {
    /// Move a stored token's expiry, simulating the passage of time
    pub fn set_expiry(&self, token: &str, expires_at: DateTime<Utc>) {
        if let Some(stored) = self.tokens.lock().unwrap().get_mut(token) {
            stored.expires_at = expires_at;
        }
    }

    pub fn get(&self, token: &str) -> Option<RefreshToken> {
        self.tokens.lock().unwrap().get(token).cloned()
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken, SessionError> {
        let now = Utc::now();
        let stored = RefreshToken {
            token: token.token,
            user_id: token.user_id,
            expires_at: token.expires_at,
            revoked_at: None,
            created_at: now,
            updated_at: now,
        };
        self.tokens
            .lock()
            .unwrap()
            .insert(stored.token.clone(), stored.clone());
        Ok(stored)
    }

    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, SessionError> {
        Ok(self.get(token))
    }

    async fn revoke(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> Result<RevokeOutcome, SessionError> {
        match self.tokens.lock().unwrap().get_mut(token) {
            Some(stored) => {
                stored.revoked_at = Some(revoked_at);
                stored.updated_at = revoked_at;
                Ok(RevokeOutcome::Revoked)
            }
            None => Ok(RevokeOutcome::NotFound),
        }
    }
}
