#![allow(dead_code)]

use qa_core::{
    models::TestCaseInput, Database, ExecutionSession, MemoryStore, StoreBuilder,
};
use tempfile::TempDir;

/// Helper function to open a database-backed session in a fresh directory
pub fn create_test_session() -> (TempDir, ExecutionSession<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = StoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("qa.db")))
        .build()
        .expect("Failed to create store");
    (temp_dir, ExecutionSession::load(store))
}

/// Helper function to create an in-memory session seeded with cases
pub fn memory_session(feature: &str, inputs: Vec<TestCaseInput>) -> ExecutionSession<MemoryStore> {
    let mut session = ExecutionSession::load(MemoryStore::new());
    session
        .initialize(feature, inputs)
        .expect("Failed to initialize session");
    session
}

/// A generator-style record with the given id and title
pub fn input(id: &str, title: &str) -> TestCaseInput {
    TestCaseInput {
        id: id.to_string(),
        title: title.to_string(),
        steps: vec!["Open app".to_string(), "Submit".to_string()],
        expected_result: "It works".to_string(),
        priority: "Medium".to_string(),
        ..TestCaseInput::default()
    }
}
