//! View state of the lead dashboard.
//!
//! [`DashboardState`] is an immutable value: every user action goes through
//! [`DashboardState::reduce`], which returns the next state. The visible page
//! of the table is derived on demand by [`DashboardState::view`] and never
//! cached.

use serde::{Deserialize, Serialize};

use crate::domain::lead::{Lead, Product};
use crate::domain::types::LeadId;
use crate::forms::lead::LeadForm;

/// Number of rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Column the table is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Email,
    Phone,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Email, SortField::Phone];

    fn key<'a>(&self, lead: &'a Lead) -> &'a str {
        match self {
            SortField::Name => lead.name.as_str(),
            SortField::Email => lead.email.as_str(),
            SortField::Phone => lead.phone.as_str(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Text inputs of the lead form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
}

/// Draft of the lead being created or edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Always holds at least the first, mandatory entry.
    pub products: Vec<Product>,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            products: vec![Product::default()],
        }
    }
}

impl From<&Lead> for LeadDraft {
    fn from(lead: &Lead) -> Self {
        let mut products = lead.products.clone();
        if products.is_empty() {
            products.push(Product::default());
        }
        Self {
            name: lead.name.to_string(),
            email: lead.email.to_string(),
            phone: lead.phone.to_string(),
            products,
        }
    }
}

impl From<&LeadDraft> for LeadForm {
    fn from(draft: &LeadDraft) -> Self {
        Self {
            name: Some(draft.name.clone()),
            email: Some(draft.email.clone()),
            phone: Some(draft.phone.clone()),
            products: Some(draft.products.clone()),
        }
    }
}

/// User and network events that change the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the cached list with a fresh server response.
    Loaded(Vec<Lead>),
    Search(String),
    /// Header click: ascending, or descending when the field is already
    /// sorted ascending.
    ToggleSort(SortField),
    SortBy(SortField, SortOrder),
    GoToPage(usize),
    NextPage,
    PreviousPage,
    SetField(FormField, String),
    SetProduct(usize, String),
    AddProduct,
    RemoveProduct(usize),
    /// Pre-fill the form from a cached lead and switch to editing.
    Edit(LeadId),
    ResetForm,
    Created(Lead),
    Updated(Lead),
    Deleted(LeadId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    leads: Vec<Lead>,
    search: String,
    sort_field: SortField,
    sort_order: SortOrder,
    page: usize,
    draft: LeadDraft,
    editing: Option<LeadId>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            leads: Vec::new(),
            search: String::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
            draft: LeadDraft::default(),
            editing: None,
        }
    }
}

/// One page of the filtered and sorted table.
#[derive(Debug, Serialize)]
pub struct DashboardView<'a> {
    pub leads: Vec<&'a Lead>,
    pub page: usize,
    /// Number of leads matching the search term.
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

fn more_after(page: usize, total: usize) -> bool {
    page.checked_mul(PAGE_SIZE).is_some_and(|shown| shown < total)
}

impl DashboardState {
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    /// Lead being edited; `None` while the form creates a new lead.
    pub fn editing(&self) -> Option<LeadId> {
        self.editing
    }

    /// Order a header click on `field` would switch to.
    pub fn next_order(&self, field: SortField) -> SortOrder {
        if self.sort_field == field && self.sort_order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    #[must_use]
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Loaded(leads) => Self { leads, ..self },
            Action::Search(search) => Self { search, ..self },
            Action::ToggleSort(field) => {
                let order = self.next_order(field);
                Self {
                    sort_field: field,
                    sort_order: order,
                    ..self
                }
            }
            Action::SortBy(sort_field, sort_order) => Self {
                sort_field,
                sort_order,
                ..self
            },
            Action::GoToPage(page) => Self {
                page: page.max(1),
                ..self
            },
            Action::NextPage => {
                if self.has_next() {
                    Self {
                        page: self.page + 1,
                        ..self
                    }
                } else {
                    self
                }
            }
            Action::PreviousPage => Self {
                page: self.page.saturating_sub(1).max(1),
                ..self
            },
            Action::SetField(field, value) => {
                let mut draft = self.draft;
                match field {
                    FormField::Name => draft.name = value,
                    FormField::Email => draft.email = value,
                    FormField::Phone => draft.phone = value,
                }
                Self { draft, ..self }
            }
            Action::SetProduct(index, value) => {
                let mut draft = self.draft;
                if let Some(product) = draft.products.get_mut(index) {
                    product.name = value;
                }
                Self { draft, ..self }
            }
            Action::AddProduct => {
                let mut draft = self.draft;
                draft.products.push(Product::default());
                Self { draft, ..self }
            }
            Action::RemoveProduct(index) => {
                let mut draft = self.draft;
                if index > 0 && index < draft.products.len() {
                    draft.products.remove(index);
                }
                Self { draft, ..self }
            }
            Action::Edit(id) => {
                let draft = self
                    .leads
                    .iter()
                    .find(|lead| lead.id == id)
                    .map(LeadDraft::from);
                match draft {
                    Some(draft) => Self {
                        draft,
                        editing: Some(id),
                        ..self
                    },
                    None => self,
                }
            }
            Action::ResetForm => self.reset_form(),
            Action::Created(lead) => {
                let mut leads = self.leads;
                leads.push(lead);
                Self { leads, ..self }.reset_form()
            }
            Action::Updated(lead) => {
                let leads = self
                    .leads
                    .into_iter()
                    .map(|existing| {
                        if existing.id == lead.id {
                            lead.clone()
                        } else {
                            existing
                        }
                    })
                    .collect();
                Self { leads, ..self }.reset_form()
            }
            Action::Deleted(id) => {
                let mut leads = self.leads;
                leads.retain(|lead| lead.id != id);
                Self { leads, ..self }
            }
        }
    }

    fn reset_form(self) -> Self {
        Self {
            draft: LeadDraft::default(),
            editing: None,
            ..self
        }
    }

    /// Leads whose name contains the search term, case-insensitively,
    /// in the current sort order.
    fn filtered(&self) -> Vec<&Lead> {
        let needle = self.search.to_lowercase();
        let mut matches: Vec<&Lead> = self
            .leads
            .iter()
            .filter(|lead| lead.name.to_lowercase().contains(&needle))
            .collect();

        let field = self.sort_field;
        match self.sort_order {
            SortOrder::Asc => matches.sort_by(|a, b| field.key(a).cmp(field.key(b))),
            SortOrder::Desc => matches.sort_by(|a, b| field.key(b).cmp(field.key(a))),
        }
        matches
    }

    fn has_next(&self) -> bool {
        more_after(self.page, self.filtered().len())
    }

    pub fn view(&self) -> DashboardView<'_> {
        let filtered = self.filtered();
        let total = filtered.len();
        // A page past `usize::MAX / PAGE_SIZE` starts beyond any list.
        let start = (self.page - 1)
            .checked_mul(PAGE_SIZE)
            .unwrap_or(usize::MAX);

        DashboardView {
            leads: filtered.into_iter().skip(start).take(PAGE_SIZE).collect(),
            page: self.page,
            total,
            has_previous: self.page > 1,
            has_next: more_after(self.page, total),
        }
    }
}
