use std::path::PathBuf;

use pushkind_leads::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// Migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("connection pool");
        run_migrations(&pool).expect("migrations");
        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
