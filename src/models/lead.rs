use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{
    Lead as DomainLead, NewLead as DomainNewLead, Product as DomainProduct,
    UpdateLead as DomainUpdateLead,
};
use crate::domain::types::{LeadEmail, LeadId, LeadName, LeadPhone, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::leads)]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub public_id: Vec<u8>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub public_id: &'a [u8],
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::leads)]
/// Data used when replacing the fields of a [`Lead`] record.
pub struct UpdateLead<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::products)]
#[diesel(belongs_to(Lead, foreign_key = lead_id))]
/// Product row owned by a [`Lead`].
pub struct Product {
    pub id: i32,
    pub lead_id: i32,
    pub position: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub lead_id: i32,
    pub position: i32,
    pub name: &'a str,
}

impl Lead {
    /// Assemble the domain aggregate from the lead row and its product rows.
    ///
    /// Products must already be ordered by position.
    pub fn into_domain(self, products: Vec<Product>) -> Result<DomainLead, TypeConstraintError> {
        Ok(DomainLead {
            id: LeadId::from_bytes(&self.public_id)?,
            name: LeadName::new(self.name)?,
            email: LeadEmail::new(self.email)?,
            phone: LeadPhone::new(self.phone)?,
            products: products.into_iter().map(DomainProduct::from).collect(),
            created_at: self.created_at.and_utc(),
            updated_at: self.updated_at.and_utc(),
        })
    }
}

impl From<Product> for DomainProduct {
    fn from(product: Product) -> Self {
        Self { name: product.name }
    }
}

impl<'a> NewLead<'a> {
    pub fn from_domain(public_id: &'a LeadId, lead: &'a DomainNewLead, now: NaiveDateTime) -> Self {
        Self {
            public_id: public_id.as_bytes(),
            name: lead.name.as_str(),
            email: lead.email.as_str(),
            phone: lead.phone.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateLead<'a> {
    pub fn from_domain(lead: &'a DomainUpdateLead, now: NaiveDateTime) -> Self {
        Self {
            name: lead.name.as_str(),
            email: lead.email.as_str(),
            phone: lead.phone.as_str(),
            updated_at: now,
        }
    }
}

/// Build the insertable product rows for `lead_id`, keeping list order.
pub fn new_products(lead_id: i32, products: &[DomainProduct]) -> Vec<NewProduct<'_>> {
    products
        .iter()
        .enumerate()
        .map(|(position, product)| NewProduct {
            lead_id,
            position: position as i32,
            name: product.name.as_str(),
        })
        .collect()
}
