use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadEmail, LeadId, LeadName, LeadPhone};

/// A product attached to a lead. It has no identity of its own.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Product {
    #[serde(default)]
    pub name: String,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lead as stored and returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: LeadId,
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: LeadPhone,
    #[serde(default)]
    pub products: Vec<Product>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload used to insert a lead.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLead {
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: LeadPhone,
    pub products: Vec<Product>,
}

impl NewLead {
    #[must_use]
    pub fn new(name: LeadName, email: LeadEmail, phone: LeadPhone, products: Vec<Product>) -> Self {
        Self {
            name,
            email,
            phone,
            products,
        }
    }
}

/// Validated replacement fields for an existing lead.
///
/// `products` is `None` when the caller did not send the field; the stored
/// list is then kept as is.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateLead {
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: LeadPhone,
    pub products: Option<Vec<Product>>,
}

impl UpdateLead {
    #[must_use]
    pub fn new(
        name: LeadName,
        email: LeadEmail,
        phone: LeadPhone,
        products: Option<Vec<Product>>,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            products,
        }
    }
}
