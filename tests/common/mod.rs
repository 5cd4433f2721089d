#![allow(dead_code)]

use axum_test::{TestResponse, TestServer};
use serde::Serialize;
use std::sync::Arc;
use tower_sessions::MemoryStore;
use tower_sessions::cookie::Cookie;
use url_redirector::application::services::OwnershipMode;
use url_redirector::domain::entities::WebsiteEntry;
use url_redirector::infrastructure::persistence::{MemoryUserRepository, MemoryWebsiteRepository};
use url_redirector::routes::build_router;
use url_redirector::state::AppState;
use url_redirector::web::session::{SESSION_COOKIE_NAME, create_session_layer};

pub fn create_test_state(mode: OwnershipMode) -> AppState {
    AppState::new(
        Arc::new(MemoryUserRepository::new()),
        Arc::new(MemoryWebsiteRepository::new()),
        mode,
    )
}

/// Full router over in-memory storage and sessions.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub fn new(mode: OwnershipMode) -> Self {
        let state = create_test_state(mode);
        let session_layer = create_session_layer(MemoryStore::default(), false, 3600);
        let server = TestServer::new(build_router(state.clone(), session_layer)).unwrap();

        Self { server, state }
    }

    pub async fn get(&self, jar: &mut CookieJar, path: &str) -> TestResponse {
        let mut request = self.server.get(path);
        if let Some(cookie) = jar.session.clone() {
            request = request.add_cookie(cookie);
        }

        let response = request.await;
        jar.update(&response);
        response
    }

    pub async fn post_form<T: Serialize>(
        &self,
        jar: &mut CookieJar,
        path: &str,
        form: &T,
    ) -> TestResponse {
        let mut request = self.server.post(path).form(form);
        if let Some(cookie) = jar.session.clone() {
            request = request.add_cookie(cookie);
        }

        let response = request.await;
        jar.update(&response);
        response
    }

    pub async fn register(&self, jar: &mut CookieJar, email: &str, password: &str) -> TestResponse {
        self.post_form(jar, "/register", &Credentials::new(email, password))
            .await
    }

    pub async fn login(&self, jar: &mut CookieJar, email: &str, password: &str) -> TestResponse {
        self.post_form(jar, "/login", &Credentials::new(email, password))
            .await
    }

    pub async fn add_website(
        &self,
        jar: &mut CookieJar,
        name: &str,
        address: &str,
    ) -> TestResponse {
        self.post_form(jar, "/data", &WebsiteFields::new(name, address))
            .await
    }

    pub async fn entry_named(&self, name: &str) -> Option<WebsiteEntry> {
        self.state
            .registry_service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .find(|e| e.name == name)
    }
}

/// One browser's session cookie.
#[derive(Default)]
pub struct CookieJar {
    session: Option<Cookie<'static>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Applies the session cookie set by `response`, if any.
    ///
    /// A removal cookie carries an empty value.
    fn update(&mut self, response: &TestResponse) {
        if let Some(cookie) = response.maybe_cookie(SESSION_COOKIE_NAME) {
            self.session = (!cookie.value().is_empty()).then_some(cookie);
        }
    }
}

#[derive(Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct WebsiteFields {
    #[serde(rename = "Website")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
}

impl WebsiteFields {
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
        }
    }
}
