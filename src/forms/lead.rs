use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::lead::{NewLead, Product, UpdateLead};
use crate::domain::types::{LeadEmail, LeadName, LeadPhone};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
/// JSON body of the create and update lead endpoints.
///
/// Unknown keys such as `_id` or `createdAt` are ignored, so a lead fetched
/// from the API can be sent back as is.
pub struct LeadForm {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "email is required"))]
    pub email: Option<String>,
    #[validate(required(message = "phone is required"))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

type LeadFields = (LeadName, LeadEmail, LeadPhone, Option<Vec<Product>>);

impl LeadForm {
    fn required_fields(self) -> Result<LeadFields, FormError> {
        self.validate()?;

        let name = self.name.ok_or(FormError::MissingField("name"))?;
        let email = self.email.ok_or(FormError::MissingField("email"))?;
        let phone = self.phone.ok_or(FormError::MissingField("phone"))?;

        Ok((
            LeadName::new(name).map_err(|_| FormError::InvalidName)?,
            LeadEmail::new(email).map_err(|_| FormError::InvalidEmail)?,
            LeadPhone::new(phone).map_err(|_| FormError::InvalidPhoneNumber)?,
            self.products,
        ))
    }
}

impl TryFrom<LeadForm> for NewLead {
    type Error = FormError;

    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        let (name, email, phone, products) = form.required_fields()?;
        Ok(NewLead::new(name, email, phone, products.unwrap_or_default()))
    }
}

impl TryFrom<LeadForm> for UpdateLead {
    type Error = FormError;

    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        let (name, email, phone, products) = form.required_fields()?;
        Ok(UpdateLead::new(name, email, phone, products))
    }
}
