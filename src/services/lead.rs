use uuid::Uuid;

use crate::client::errors::ClientError;
use crate::client::{LeadReader, LeadWriter, OptionsReader};
use crate::domain::lead::Lead;
use crate::dto::lead::{AddLeadPageData, LeadPageData};
use crate::dto::main::LeadRow;
use crate::forms::lead::AddLeadForm;
use crate::services::lead_form::{LeadFormController, SubmitOutcome};
use crate::services::submission::SubmissionGuard;
use crate::services::{ServiceError, ServiceResult};

/// What happened to a posted add-lead form.
#[derive(Debug)]
pub enum AddLeadOutcome {
    Created(Lead),
    /// Validation failed; the page carries the entered data and the errors.
    Rejected(AddLeadPageData),
    /// The backend refused or could not be reached; the entered data is kept.
    Failed(AddLeadPageData, ClientError),
    /// The same rendered form was already posted; nothing was sent.
    Duplicate,
}

fn new_submission_id() -> String {
    Uuid::new_v4().to_string()
}

/// Prepares an empty add-lead form with the industry vocabulary.
pub async fn load_add_lead_page<C>(api: &C, headcount_max: Option<i64>) -> AddLeadPageData
where
    C: OptionsReader + ?Sized,
{
    let mut controller = LeadFormController::new(headcount_max);
    controller.load_industry_options(api).await;
    AddLeadPageData::new(&controller, new_submission_id())
}

/// Validates the posted form and creates the lead when it passes.
///
/// The form's submission id is claimed before anything is sent, so posting
/// the same page twice creates at most one lead. A form without an id gets a
/// fresh one and is not deduplicated.
pub async fn submit_lead<C>(
    api: &C,
    submissions: &SubmissionGuard,
    form: AddLeadForm,
    headcount_max: Option<i64>,
) -> AddLeadOutcome
where
    C: LeadWriter + OptionsReader + ?Sized,
{
    let AddLeadForm {
        submission_id,
        draft,
    } = form;

    let submission_id = if submission_id.trim().is_empty() {
        new_submission_id()
    } else {
        submission_id
    };
    if !submissions.claim(&submission_id) {
        log::warn!("Ignoring repeated submission {submission_id}");
        return AddLeadOutcome::Duplicate;
    }

    let mut controller = LeadFormController::with_draft(draft, headcount_max);

    match controller.submit(api).await {
        Ok(SubmitOutcome::Created(lead)) => AddLeadOutcome::Created(lead),
        Ok(SubmitOutcome::Rejected) => {
            submissions.release(&submission_id);
            controller.load_industry_options(api).await;
            AddLeadOutcome::Rejected(AddLeadPageData::new(&controller, submission_id))
        }
        Err(err) => {
            log::error!("Failed to create lead: {err}");
            submissions.release(&submission_id);
            controller.load_industry_options(api).await;
            AddLeadOutcome::Failed(AddLeadPageData::new(&controller, submission_id), err)
        }
    }
}

/// Loads a single lead for the detail page.
pub async fn load_lead<C>(api: &C, lead_id: i32) -> ServiceResult<LeadPageData>
where
    C: LeadReader + ?Sized,
{
    let lead = api.get_lead(lead_id).await?.ok_or(ServiceError::NotFound)?;
    Ok(LeadPageData {
        lead: LeadRow::from(&lead),
    })
}
