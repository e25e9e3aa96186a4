use crate::domain::lead::{Lead, NewLead, UpdateLead};
use crate::domain::types::LeadId;
use crate::forms::lead::LeadForm;
use crate::repository::{LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

/// Message returned by the delete endpoint.
pub const LEAD_DELETED_MESSAGE: &str = "Lead deleted successfully";

fn parse_id(raw: &str) -> ServiceResult<LeadId> {
    raw.parse::<LeadId>().map_err(ServiceError::from)
}

/// Validates the body and stores a new lead.
pub fn create_lead<R>(repo: &R, form: LeadForm) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let new_lead = NewLead::try_from(form)?;

    repo.create_lead(&new_lead).map_err(|err| {
        log::error!("Failed to create lead: {err}");
        ServiceError::from(err)
    })
}

/// Returns every stored lead. Filtering and paging happen in the dashboard.
pub fn list_leads<R>(repo: &R) -> ServiceResult<Vec<Lead>>
where
    R: LeadReader + ?Sized,
{
    repo.list_leads().map_err(|err| {
        log::error!("Failed to list leads: {err}");
        ServiceError::from(err)
    })
}

/// Fetches a single lead by its public id.
pub fn get_lead<R>(repo: &R, raw_id: &str) -> ServiceResult<Lead>
where
    R: LeadReader + ?Sized,
{
    let id = parse_id(raw_id)?;

    repo.get_lead_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Replaces the fields of an existing lead with the validated body.
pub fn update_lead<R>(repo: &R, raw_id: &str, form: LeadForm) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let id = parse_id(raw_id)?;
    let updates = UpdateLead::try_from(form)?;

    repo.update_lead(id, &updates).map_err(|err| {
        log::error!("Failed to update lead {id}: {err}");
        ServiceError::from(err)
    })
}

/// Removes a lead together with its products.
pub fn delete_lead<R>(repo: &R, raw_id: &str) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    let id = parse_id(raw_id)?;

    repo.delete_lead(id).map_err(|err| {
        log::error!("Failed to delete lead {id}: {err}");
        ServiceError::from(err)
    })
}
