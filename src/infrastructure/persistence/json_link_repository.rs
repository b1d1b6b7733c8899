//! JSON-file implementation of the link repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::json_store::{JsonStore, LINKS_FILE};
use crate::domain::entities::{Book, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// On-disk shape of a link: the code is the object key, not a field.
#[derive(Serialize, Deserialize)]
struct LinkRecord {
    url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    keywords: String,
    #[serde(default)]
    book: Option<Book>,
    created: DateTime<Utc>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl LinkRecord {
    fn into_link(self, code: String) -> ShortLink {
        ShortLink::new(code, self.url, self.keywords, self.created).with_book(self.book)
    }
}

impl From<ShortLink> for LinkRecord {
    fn from(link: ShortLink) -> Self {
        Self {
            url: link.url,
            keywords: link.keywords,
            book: link.book,
            created: link.created,
        }
    }
}

type LinkMap = BTreeMap<String, LinkRecord>;

/// Links stored as one object in `links.json`, keyed by code.
pub struct JsonLinkRepository {
    store: Arc<JsonStore>,
}

impl JsonLinkRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for JsonLinkRepository {
    async fn get(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let _guard = self.store.lock().await;
        let mut links: LinkMap = self.store.read_or_default(LINKS_FILE).await;
        Ok(links
            .remove(code)
            .map(|record| record.into_link(code.to_string())))
    }

    async fn save(&self, link: ShortLink) -> Result<(), AppError> {
        let _guard = self.store.lock().await;
        let mut links: LinkMap = self.store.read(LINKS_FILE).await?;
        links.insert(link.code.clone(), LinkRecord::from(link));
        self.store.write(LINKS_FILE, &links).await
    }

    async fn list(&self) -> Result<Vec<ShortLink>, AppError> {
        let _guard = self.store.lock().await;
        let links: LinkMap = self.store.read_or_default(LINKS_FILE).await;

        let mut out: Vec<ShortLink> = links
            .into_iter()
            .map(|(code, record)| record.into_link(code))
            .collect();
        out.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.code.cmp(&b.code)));

        Ok(out)
    }
}
