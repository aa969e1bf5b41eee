use std::path::PathBuf;

use crate::Database;

fn test_db() -> Database {
    Database::open_in_memory().expect("Failed to create test DB")
}

fn temp_db_path() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("portfolio-db-{}", uuid::Uuid::new_v4().simple()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir.join("portfolio.db")
}

mod core;
