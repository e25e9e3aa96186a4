//! Persistence contracts for leads and their Diesel implementation.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        lead::{Lead, NewLead, UpdateLead},
        types::LeadId,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod lead;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel backed repository shared by every request handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait LeadReader {
    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>>;
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    /// Fails with [`errors::RepositoryError::NotFound`] when no lead has `id`.
    fn update_lead(&self, id: LeadId, updates: &UpdateLead) -> RepositoryResult<Lead>;
    /// Fails with [`errors::RepositoryError::NotFound`] when no lead has `id`.
    fn delete_lead(&self, id: LeadId) -> RepositoryResult<()>;
}
