//! DTOs used by the dashboard page.

use serde::{Deserialize, Serialize};

use crate::dashboard::state::{LeadDraft, SortField, SortOrder};
use crate::domain::lead::Lead;
use crate::domain::types::LeadId;

/// Query parameters of the dashboard page. Each one replays a user action.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub search: Option<String>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
    pub page: Option<usize>,
    /// Public id of the lead whose data pre-fills the form.
    pub edit: Option<String>,
}

/// Header link of a sortable column.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SortLink {
    pub field: SortField,
    pub label: &'static str,
    /// Order the link switches to.
    pub order: SortOrder,
    pub active: bool,
}

/// Data required to render the dashboard template.
#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    pub leads: Vec<Lead>,
    pub total: usize,
    pub page: usize,
    /// Targets of the Previous/Next links.
    pub previous_page: usize,
    pub next_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub search: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub sort_links: Vec<SortLink>,
    pub draft: LeadDraft,
    pub editing: Option<LeadId>,
}
