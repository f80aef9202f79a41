// tests/common/mod.rs

#![allow(dead_code)]

use sqlx::AnyPool;
use trivia_backend::{
    config::Config,
    db,
    models::question::NewQuestion,
    routes,
    state::AppState,
};

pub struct TestApp {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub address: String,
    pub pool: AnyPool,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Spawns the app on a random port, backed by a private in-memory SQLite database.
pub async fn spawn_app() -> TestApp {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        // An in-memory database lives and dies with its single connection.
        database_max_connections: 1,
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        questions_per_page: 10,
        allowed_origins: Vec::new(),
        seed_default_categories: false,
        rust_log: "error".to_string(),
    };

    let pool = db::connect(&config.database_url, config.database_max_connections)
        .await
        .expect("Failed to open in-memory SQLite database");

    db::run_migrations(&pool, config.backend())
        .await
        .expect("Failed to migrate database");

    let state = AppState {
        pool: pool.clone(),
        config,
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        pool,
        client: reqwest::Client::new(),
    }
}

/// Seeds the six default categories and returns their ids in order.
pub async fn seed_categories(pool: &AnyPool) -> Vec<i64> {
    db::categories::seed_defaults(pool).await.unwrap();
    db::categories::list_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect()
}

pub async fn insert_question(pool: &AnyPool, question: &str, answer: &str, category: i64) -> i64 {
    db::questions::insert(
        pool,
        &NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty: 1,
        },
    )
    .await
    .unwrap()
}

/// Inserts `count` numbered questions spread round-robin over `categories`.
pub async fn insert_questions(pool: &AnyPool, count: usize, categories: &[i64]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let category = categories[i % categories.len()];
        ids.push(
            insert_question(
                pool,
                &format!("Question number {}?", i),
                &format!("Answer {}", i),
                category,
            )
            .await,
        );
    }
    ids
}
