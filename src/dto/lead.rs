//! DTOs shaped for the lead entry and detail templates.

use serde::Serialize;

use crate::dto::main::LeadRow;
use crate::forms::lead::{LeadDraft, LeadFormErrors};
use crate::services::lead_form::{FormState, LeadFormController};

/// Data required to render the add-lead form.
#[derive(Debug, Serialize)]
pub struct AddLeadPageData {
    pub form: LeadDraft,
    pub errors: LeadFormErrors,
    pub state: FormState,
    pub industry_options: Vec<String>,
    pub industry_disabled: bool,
    /// Posted back with the form; a second post of the same id creates nothing.
    pub submission_id: String,
}

impl AddLeadPageData {
    pub fn new(controller: &LeadFormController, submission_id: impl Into<String>) -> Self {
        Self {
            form: controller.draft().clone(),
            errors: controller.errors().clone(),
            state: controller.state(),
            industry_options: controller.industry_options().to_vec(),
            industry_disabled: controller.industry_selector_disabled(),
            submission_id: submission_id.into(),
        }
    }
}

/// Data required to render a single lead.
#[derive(Debug, Serialize)]
pub struct LeadPageData {
    pub lead: LeadRow,
}
