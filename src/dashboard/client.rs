//! Drives [`DashboardState`] from network calls against the lead API.
//!
//! Each mutation is sent to the server first; only a successful response
//! patches the cached list. Failures are logged and leave the state as it
//! was.

use serde::Deserialize;
use thiserror::Error;

use crate::dashboard::state::{Action, DashboardState, FormField, SortField};
use crate::domain::lead::Lead;
use crate::domain::types::LeadId;
use crate::forms::lead::LeadForm;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },
}

/// Calls the dashboard makes against the lead REST API.
#[allow(async_fn_in_trait)]
pub trait LeadApi {
    async fn list(&self) -> Result<Vec<Lead>, ApiError>;
    async fn create(&self, form: &LeadForm) -> Result<Lead, ApiError>;
    async fn update(&self, id: LeadId, form: &LeadForm) -> Result<Lead, ApiError>;
    async fn delete(&self, id: LeadId) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// [`LeadApi`] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpLeadApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLeadApi {
    /// `base_url` points at the resource scope, e.g. `http://localhost:5000/api/leads`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/leads", self.base_url)
    }

    fn item_url(&self, id: LeadId) -> String {
        format!("{}/leads/{id}", self.base_url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<MessageBody>().await {
            Ok(body) => body.message,
            Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl LeadApi for HttpLeadApi {
    async fn list(&self) -> Result<Vec<Lead>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create(&self, form: &LeadForm) -> Result<Lead, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update(&self, id: LeadId, form: &LeadForm) -> Result<Lead, ApiError> {
        let response = self.client.put(self.item_url(id)).json(form).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, id: LeadId) -> Result<(), ApiError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Dashboard controller: owns the view state and the API handle.
pub struct Dashboard<A> {
    api: A,
    state: DashboardState,
}

impl<A: LeadApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Apply a local action that needs no server round trip.
    pub fn dispatch(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    /// Fetch the full lead list, replacing the cache.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(leads) => self.dispatch(Action::Loaded(leads)),
            Err(e) => log::error!("Error fetching leads: {e}"),
        }
    }

    /// Submit the form: update when editing, create otherwise.
    pub async fn submit(&mut self) {
        let form = LeadForm::from(self.state.draft());
        match self.state.editing() {
            Some(id) => match self.api.update(id, &form).await {
                Ok(lead) => self.dispatch(Action::Updated(lead)),
                Err(e) => log::error!("Error updating lead: {e}"),
            },
            None => match self.api.create(&form).await {
                Ok(lead) => self.dispatch(Action::Created(lead)),
                Err(e) => log::error!("Error creating lead: {e}"),
            },
        }
    }

    pub async fn delete(&mut self, id: LeadId) {
        match self.api.delete(id).await {
            Ok(()) => self.dispatch(Action::Deleted(id)),
            Err(e) => log::error!("Error deleting lead: {e}"),
        }
    }

    pub fn edit(&mut self, id: LeadId) {
        self.dispatch(Action::Edit(id));
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.dispatch(Action::SetField(field, value.into()));
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.dispatch(Action::Search(term.into()));
    }

    pub fn sort(&mut self, field: SortField) {
        self.dispatch(Action::ToggleSort(field));
    }

    pub fn next_page(&mut self) {
        self.dispatch(Action::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.dispatch(Action::PreviousPage);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::Utc;

    use super::*;
    use crate::domain::lead::{NewLead, Product, UpdateLead};

    /// In-memory stand-in for the REST API.
    #[derive(Default)]
    struct FakeApi {
        leads: RefCell<Vec<Lead>>,
        fail: Cell<bool>,
        calls: Cell<usize>,
    }

    impl FakeApi {
        fn outcome(&self) -> Result<(), ApiError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail.get() {
                Err(ApiError::Status {
                    status: 400,
                    message: "boom".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl LeadApi for FakeApi {
        async fn list(&self) -> Result<Vec<Lead>, ApiError> {
            self.outcome()?;
            Ok(self.leads.borrow().clone())
        }

        async fn create(&self, form: &LeadForm) -> Result<Lead, ApiError> {
            self.outcome()?;
            let new = NewLead::try_from(form.clone()).map_err(|e| ApiError::Status {
                status: 400,
                message: e.to_string(),
            })?;
            let now = Utc::now();
            let lead = Lead {
                id: LeadId::new(),
                name: new.name,
                email: new.email,
                phone: new.phone,
                products: new.products,
                created_at: now,
                updated_at: now,
            };
            self.leads.borrow_mut().push(lead.clone());
            Ok(lead)
        }

        async fn update(&self, id: LeadId, form: &LeadForm) -> Result<Lead, ApiError> {
            self.outcome()?;
            let updates = UpdateLead::try_from(form.clone()).map_err(|e| ApiError::Status {
                status: 400,
                message: e.to_string(),
            })?;
            let mut leads = self.leads.borrow_mut();
            let lead = leads
                .iter_mut()
                .find(|lead| lead.id == id)
                .ok_or(ApiError::Status {
                    status: 404,
                    message: "Lead not found".into(),
                })?;
            lead.name = updates.name;
            lead.email = updates.email;
            lead.phone = updates.phone;
            if let Some(products) = updates.products {
                lead.products = products;
            }
            Ok(lead.clone())
        }

        async fn delete(&self, id: LeadId) -> Result<(), ApiError> {
            self.outcome()?;
            self.leads.borrow_mut().retain(|lead| lead.id != id);
            Ok(())
        }
    }

    fn fill(dashboard: &mut Dashboard<FakeApi>, name: &str, email: &str) {
        dashboard.set_field(FormField::Name, name);
        dashboard.set_field(FormField::Email, email);
        dashboard.set_field(FormField::Phone, "555");
        dashboard.dispatch(Action::SetProduct(0, "Widget".into()));
    }

    #[actix_web::test]
    async fn create_appends_without_refetch() {
        let mut dashboard = Dashboard::new(FakeApi::default());
        dashboard.load().await;
        fill(&mut dashboard, "Amy", "amy@example.com");
        dashboard.submit().await;

        assert_eq!(dashboard.api.calls.get(), 2);
        let leads = dashboard.state().leads();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].name.as_str(), "Amy");
        assert_eq!(leads[0].products, vec![Product::new("Widget")]);
        assert_eq!(dashboard.state().editing(), None);
        assert!(dashboard.state().draft().name.is_empty());
    }

    #[actix_web::test]
    async fn editing_submits_an_update() {
        let mut dashboard = Dashboard::new(FakeApi::default());
        fill(&mut dashboard, "Amy", "amy@example.com");
        dashboard.submit().await;
        let id = dashboard.state().leads()[0].id;

        dashboard.edit(id);
        dashboard.set_field(FormField::Name, "Amelia");
        dashboard.submit().await;

        assert_eq!(dashboard.state().leads().len(), 1);
        assert_eq!(dashboard.state().leads()[0].name.as_str(), "Amelia");
        assert_eq!(dashboard.api.leads.borrow()[0].name.as_str(), "Amelia");
        assert_eq!(dashboard.state().editing(), None);
    }

    #[actix_web::test]
    async fn delete_removes_row_locally() {
        let mut dashboard = Dashboard::new(FakeApi::default());
        fill(&mut dashboard, "Amy", "amy@example.com");
        dashboard.submit().await;
        let id = dashboard.state().leads()[0].id;

        dashboard.delete(id).await;
        assert!(dashboard.state().leads().is_empty());
    }

    #[actix_web::test]
    async fn failed_calls_leave_state_untouched() {
        let mut dashboard = Dashboard::new(FakeApi::default());
        fill(&mut dashboard, "Amy", "amy@example.com");
        dashboard.submit().await;
        let before = dashboard.state().clone();

        dashboard.api.fail.set(true);
        dashboard.load().await;
        dashboard.delete(before.leads()[0].id).await;
        fill(&mut dashboard, "Bob", "bob@example.com");
        let drafted = dashboard.state().clone();
        dashboard.submit().await;

        assert_eq!(dashboard.state(), &drafted);
        assert_eq!(dashboard.state().leads(), before.leads());
    }

    #[actix_web::test]
    async fn local_navigation_does_not_call_the_api() {
        let mut dashboard = Dashboard::new(FakeApi::default());
        dashboard.search("am");
        dashboard.sort(SortField::Email);
        dashboard.next_page();
        dashboard.previous_page();

        assert_eq!(dashboard.api.calls.get(), 0);
        assert_eq!(dashboard.state().search(), "am");
        assert_eq!(dashboard.state().sort_field(), SortField::Email);
        assert_eq!(dashboard.state().page(), 1);
    }

    #[test]
    fn http_api_builds_resource_urls() {
        let api = HttpLeadApi::new("http://localhost:5000/api/leads/");
        let id = LeadId::new();
        assert_eq!(api.collection_url(), "http://localhost:5000/api/leads/leads");
        assert_eq!(
            api.item_url(id),
            format!("http://localhost:5000/api/leads/leads/{id}")
        );
    }
}
