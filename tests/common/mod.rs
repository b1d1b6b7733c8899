#![allow(dead_code)]

use std::path::Path;

use booklink::api::middleware::AdminCredentials;
use booklink::application::match_worker::MatchQueue;
use booklink::domain::entities::{Book, NewBook, ShortLink};
use booklink::domain::match_job::MatchJob;
use booklink::infrastructure::StorageBackend;
use booklink::infrastructure::persistence::JsonStore;
use booklink::state::AppState;
use tokio::sync::mpsc;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret";
/// `Basic base64("admin:secret")`
pub const ADMIN_AUTH: &str = "Basic YWRtaW46c2VjcmV0";
/// `Basic base64("admin:wrong")`
pub const WRONG_AUTH: &str = "Basic YWRtaW46d3Jvbmc=";

pub async fn create_test_storage(dir: &Path) -> StorageBackend {
    StorageBackend::json_files(JsonStore::open(dir).await.unwrap())
}

pub async fn create_test_state(dir: &Path) -> (AppState, mpsc::Receiver<MatchJob>) {
    let storage = create_test_storage(dir).await;
    let (queue, rx) = MatchQueue::channel(100);

    let state = AppState::new(
        storage,
        queue,
        AdminCredentials::new(ADMIN_USER, ADMIN_PASSWORD),
    );

    (state, rx)
}

pub async fn create_test_book(state: &AppState, title: &str, description: &str) -> Book {
    state
        .catalog_service
        .add_book(NewBook {
            link: format!("https://books.example/{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            description: Some(description.to_string()),
        })
        .await
        .unwrap()
}

pub async fn create_test_link(state: &AppState, url: &str, keywords: Option<&str>) -> ShortLink {
    state.link_service.shorten(url, keywords).await.unwrap()
}
