use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::lead::{Lead, NewLead, UpdateLead};
use crate::domain::types::LeadId;
use crate::models::lead::{
    Lead as DbLead, NewLead as DbNewLead, Product as DbProduct, UpdateLead as DbUpdateLead,
    new_products,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, LeadReader, LeadWriter};
use crate::schema::{leads, products};

fn find_lead(conn: &mut SqliteConnection, id: &LeadId) -> RepositoryResult<Option<DbLead>> {
    let lead = leads::table
        .filter(leads::public_id.eq(id.as_bytes().as_slice()))
        .select(DbLead::as_select())
        .first(conn)
        .optional()?;
    Ok(lead)
}

fn load_products(conn: &mut SqliteConnection, lead: &DbLead) -> RepositoryResult<Vec<DbProduct>> {
    let items = DbProduct::belonging_to(lead)
        .order(products::position.asc())
        .select(DbProduct::as_select())
        .load(conn)?;
    Ok(items)
}

fn replace_products(
    conn: &mut SqliteConnection,
    lead_id: i32,
    items: &[crate::domain::lead::Product],
) -> RepositoryResult<()> {
    diesel::delete(products::table.filter(products::lead_id.eq(lead_id))).execute(conn)?;
    let rows = new_products(lead_id, items);
    if !rows.is_empty() {
        diesel::insert_into(products::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

impl LeadReader for DieselRepository {
    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>> {
        let mut conn = self.conn()?;

        let Some(lead) = find_lead(&mut conn, &id)? else {
            return Ok(None);
        };
        let items = load_products(&mut conn, &lead)?;

        Ok(Some(lead.into_domain(items)?))
    }

    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        let mut conn = self.conn()?;

        let db_leads = leads::table
            .order(leads::id.asc())
            .select(DbLead::as_select())
            .load(&mut conn)?;

        let db_products = DbProduct::belonging_to(&db_leads)
            .order(products::position.asc())
            .select(DbProduct::as_select())
            .load(&mut conn)?
            .grouped_by(&db_leads);

        db_leads
            .into_iter()
            .zip(db_products)
            .map(|(lead, items)| lead.into_domain(items).map_err(RepositoryError::from))
            .collect()
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        let mut conn = self.conn()?;
        let public_id = LeadId::new();
        let now = Utc::now().naive_utc();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let inserted = diesel::insert_into(leads::table)
                .values(&DbNewLead::from_domain(&public_id, new_lead, now))
                .returning(DbLead::as_returning())
                .get_result(conn)?;

            replace_products(conn, inserted.id, &new_lead.products)?;
            let items = load_products(conn, &inserted)?;

            Ok(inserted.into_domain(items)?)
        })
    }

    fn update_lead(&self, id: LeadId, updates: &UpdateLead) -> RepositoryResult<Lead> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(
                leads::table.filter(leads::public_id.eq(id.as_bytes().as_slice())),
            )
            .set(&DbUpdateLead::from_domain(updates, now))
            .returning(DbLead::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

            if let Some(items) = &updates.products {
                replace_products(conn, updated.id, items)?;
            }
            let items = load_products(conn, &updated)?;

            Ok(updated.into_domain(items)?)
        })
    }

    fn delete_lead(&self, id: LeadId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let lead = find_lead(conn, &id)?.ok_or(RepositoryError::NotFound)?;

            diesel::delete(products::table.filter(products::lead_id.eq(lead.id))).execute(conn)?;
            diesel::delete(leads::table.find(lead.id)).execute(conn)?;
            Ok(())
        })
    }
}
