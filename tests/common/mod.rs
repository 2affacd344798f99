//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use serde_json::Value;
use uuid::Uuid;

use expense_tracker::api::{create_router, AppState};
use expense_tracker::config::Config;
use expense_tracker::domain::{NewUser, Password, ProfileChanges, User};
use expense_tracker::errors::{AppError, AppResult};
use expense_tracker::infra::UserRepository;

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";
pub const ORIGINAL_PASSWORD: &str = "OriginalPass123!";

/// Credential store held in memory.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
    fail_updates: AtomicBool,
    update_calls: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a user whose password is `ORIGINAL_PASSWORD`.
    pub fn seed(&self, email: &str, first_name: Option<&str>, last_name: Option<&str>) -> User {
        let user = User::new(
            Uuid::new_v4(),
            NewUser {
                email: email.to_string(),
                password_hash: Password::new(ORIGINAL_PASSWORD).unwrap().into_string(),
                first_name: first_name.map(str::to_string),
                last_name: last_name.map(str::to_string),
            },
        );
        self.users.lock().unwrap().insert(user.id, user.clone());
        user
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn fail_updates(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = User::new(Uuid::new_v4(), new_user);
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> AppResult<Option<User>> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(AppError::internal("simulated store outage"));
        }

        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(&id).map(|user| {
            user.apply(changes);
            user.clone()
        }))
    }
}

pub fn test_config() -> Config {
    Config::with_jwt_secret(TEST_SECRET)
}

pub fn test_state(store: Arc<InMemoryUserStore>) -> AppState {
    AppState::from_store(store, test_config())
}

pub fn test_router(store: Arc<InMemoryUserStore>) -> Router {
    create_router(test_state(store))
}

/// Signed bearer token for `user`
pub fn token_for(state: &AppState, user: &User) -> String {
    state.auth_service.issue_token(user).unwrap().access_token
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
