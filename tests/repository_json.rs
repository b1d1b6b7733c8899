mod common;

use chrono::{Duration, Utc};

use booklink::domain::entities::{Book, ShortLink};
use booklink::infrastructure::persistence::{BOOKS_FILE, LINKS_FILE};

fn book(id: &str, title: &str) -> Book {
    Book::new(
        id.to_string(),
        format!("https://books.example/{id}"),
        title.to_string(),
        String::new(),
        Utc::now(),
    )
}

#[tokio::test]
async fn test_books_keep_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let storage = common::create_test_storage(dir.path()).await;
    let repo = storage.book_repository();

    repo.add(book("b1", "First")).await.unwrap();
    repo.add(book("b2", "Second")).await.unwrap();
    repo.add(book("b3", "Third")).await.unwrap();

    let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["b1", "b2", "b3"]);

    assert!(repo.delete("b2").await.unwrap());
    assert!(!repo.delete("b2").await.unwrap());

    let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["b1", "b3"]);
}

#[tokio::test]
async fn test_link_save_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let storage = common::create_test_storage(dir.path()).await;
    let repo = storage.link_repository();

    let link = ShortLink::new(
        "abc1234".into(),
        "https://example.com".into(),
        "rust".into(),
        Utc::now(),
    );
    repo.save(link.clone()).await.unwrap();
    assert_eq!(repo.get("abc1234").await.unwrap(), Some(link.clone()));

    let matched = link.with_book(Some(book("b1", "Rust")));
    repo.save(matched.clone()).await.unwrap();

    assert_eq!(repo.get("abc1234").await.unwrap(), Some(matched));
    assert_eq!(repo.list().await.unwrap().len(), 1);
    assert!(repo.get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_links_list_oldest_first() {
    let dir = tempfile::tempdir().unwrap();
    let storage = common::create_test_storage(dir.path()).await;
    let repo = storage.link_repository();

    let now = Utc::now();
    for (code, age) in [("zzz", 3), ("aaa", 1), ("mmm", 2)] {
        repo.save(ShortLink::new(
            code.into(),
            "https://example.com".into(),
            String::new(),
            now - Duration::minutes(age),
        ))
        .await
        .unwrap();
    }

    let codes: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.code)
        .collect();
    assert_eq!(codes, vec!["zzz", "mmm", "aaa"]);
}

#[tokio::test]
async fn test_links_file_is_keyed_by_code() {
    let dir = tempfile::tempdir().unwrap();
    let storage = common::create_test_storage(dir.path()).await;

    storage
        .link_repository()
        .save(ShortLink::new(
            "abc1234".into(),
            "https://example.com".into(),
            String::new(),
            Utc::now(),
        ))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join(LINKS_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["abc1234"]["url"], "https://example.com");
    assert!(value["abc1234"]["book"].is_null());
    assert!(value["abc1234"].get("code").is_none());
}

#[tokio::test]
async fn test_reads_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(BOOKS_FILE),
        r#"[{"id":"x1","link":"https://b.example","title":"Legacy","created":"2024-01-01T00:00:00.000Z"}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join(LINKS_FILE),
        r#"{"old1234":{"url":"https://o.example","keywords":"","book":null,"created":"2024-01-02T00:00:00.000Z"}}"#,
    )
    .unwrap();

    let storage = common::create_test_storage(dir.path()).await;

    let books = storage.book_repository().list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Legacy");
    assert_eq!(books[0].description, "");

    let link = storage
        .link_repository()
        .get("old1234")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(link.url, "https://o.example");
    assert!(link.book.is_none());
}

#[tokio::test]
async fn test_concurrent_saves_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let storage = common::create_test_storage(dir.path()).await;

    let mut handles = Vec::new();
    for i in 0..20 {
        let repo = storage.link_repository();
        handles.push(tokio::spawn(async move {
            repo.save(ShortLink::new(
                format!("code{i:03}"),
                "https://example.com".into(),
                String::new(),
                Utc::now(),
            ))
            .await
            .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(storage.link_repository().list().await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_null_keywords_read_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(LINKS_FILE),
        r#"{"old1234":{"url":"https://o.example","keywords":null,"book":null,"created":"2024-01-02T00:00:00.000Z"}}"#,
    )
    .unwrap();

    let storage = common::create_test_storage(dir.path()).await;
    let link = storage
        .link_repository()
        .get("old1234")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(link.keywords, "");
}

#[tokio::test]
async fn test_save_refuses_to_overwrite_unreadable_links() {
    let dir = tempfile::tempdir().unwrap();
    let seeded = r#"{"aaaaaaa":{"url":"https://a.example","keywords":"","book":null,"created":"2024-01-02T00:00:00.000Z"},"bbbbbbb":{"keywords":"","book":null,"created":"2024-01-02T00:00:00.000Z"}}"#;
    std::fs::write(dir.path().join(LINKS_FILE), seeded).unwrap();

    let storage = common::create_test_storage(dir.path()).await;
    let repo = storage.link_repository();

    let result = repo
        .save(ShortLink::new(
            "ccccccc".into(),
            "https://c.example".into(),
            String::new(),
            Utc::now(),
        ))
        .await;

    assert!(result.is_err());
    assert_eq!(
        std::fs::read_to_string(dir.path().join(LINKS_FILE)).unwrap(),
        seeded
    );
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_book_writes_refuse_to_overwrite_corrupt_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let seeded = r#"[{"id":"x1","link":"https://b.example","title":"Legacy","created":"2024-01-01T00:00:00.000Z"},{"id":"x2"}]"#;
    std::fs::write(dir.path().join(BOOKS_FILE), seeded).unwrap();

    let storage = common::create_test_storage(dir.path()).await;
    let repo = storage.book_repository();

    assert!(repo.add(book("b1", "New")).await.is_err());
    assert!(repo.delete("x1").await.is_err());
    assert_eq!(
        std::fs::read_to_string(dir.path().join(BOOKS_FILE)).unwrap(),
        seeded
    );
}
