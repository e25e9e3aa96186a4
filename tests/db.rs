mod common;

use pushkind_leads::db::{establish_connection_pool, get_connection};

#[test]
fn test_creates_migrated_db_file() {
    let test_db = common::TestDb::new("test_creates_migrated_db_file.db");
    assert!(test_db.path().exists());
    let conn = get_connection(test_db.pool());
    assert!(conn.is_ok());
}

#[test]
fn test_unreachable_store_fails_fast() {
    let result = establish_connection_pool("/nonexistent-dir/for/sure/leads.db");
    assert!(result.is_err());
}
