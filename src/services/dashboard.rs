use crate::dashboard::state::{Action, DashboardState, SortField};
use crate::domain::types::LeadId;
pub use crate::dto::dashboard::DashboardQuery;
use crate::dto::dashboard::{DashboardPageData, SortLink};
use crate::repository::LeadReader;
use crate::services::{ServiceError, ServiceResult};

fn label(field: SortField) -> &'static str {
    match field {
        SortField::Name => "Name",
        SortField::Email => "Email",
        SortField::Phone => "Phone",
    }
}

/// Replays the query parameters over `state` and flattens the result for
/// the template.
pub fn dashboard_page(state: DashboardState, query: DashboardQuery) -> DashboardPageData {
    let mut state = state;

    if let Some(search) = query.search {
        state = state.reduce(Action::Search(search));
    }
    if let Some(field) = query.sort {
        state = state.reduce(Action::SortBy(field, query.order.unwrap_or_default()));
    }
    if let Some(page) = query.page {
        state = state.reduce(Action::GoToPage(page));
    }
    if let Some(raw) = query.edit {
        match raw.parse::<LeadId>() {
            Ok(id) => state = state.reduce(Action::Edit(id)),
            Err(e) => log::warn!("Ignoring edit request for '{raw}': {e}"),
        }
    }

    let sort_links = SortField::ALL
        .into_iter()
        .map(|field| SortLink {
            field,
            label: label(field),
            order: state.next_order(field),
            active: state.sort_field() == field,
        })
        .collect();

    let view = state.view();

    DashboardPageData {
        leads: view.leads.into_iter().cloned().collect(),
        total: view.total,
        page: view.page,
        previous_page: view.page.saturating_sub(1).max(1),
        next_page: view.page.saturating_add(1),
        has_previous: view.has_previous,
        has_next: view.has_next,
        search: state.search().to_string(),
        sort_field: state.sort_field(),
        sort_order: state.sort_order(),
        sort_links,
        draft: state.draft().clone(),
        editing: state.editing(),
    }
}

/// Loads every lead and builds the dashboard for the given query.
pub fn load_dashboard_page<R>(repo: &R, query: DashboardQuery) -> ServiceResult<DashboardPageData>
where
    R: LeadReader + ?Sized,
{
    let leads = repo.list_leads().map_err(|err| {
        log::error!("Error fetching leads: {err}");
        ServiceError::from(err)
    })?;

    let state = DashboardState::default().reduce(Action::Loaded(leads));
    Ok(dashboard_page(state, query))
}
