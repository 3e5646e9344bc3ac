use ironlog_core::{Database, Tracker, TrackerBuilder};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a temporary database with the given users
/// registered
#[allow(dead_code)]
pub fn create_test_db(users: &[&str]) -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    for user in users {
        db.ensure_user(user).expect("Failed to register user");
    }
    (temp_file, db)
}

/// Helper function to create a test tracker for `user`
#[allow(dead_code)]
pub async fn create_test_tracker(user: &str) -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_user(user)
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
