//! Controller behind the lead entry form.
//!
//! Owns the draft, its validation errors and the submission state. One
//! controller serves one form session; callers create a fresh one per view.

use serde::Serialize;

use crate::client::errors::ClientResult;
use crate::client::{LeadWriter, OptionsReader};
use crate::domain::lead::{Lead, LeadCreate};
use crate::forms::lead::{LeadDraft, LeadField, LeadFormErrors};

/// Where the form is in its edit/submit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Editing,
    Validating,
    Submitting,
    Succeeded,
    EditingWithErrors,
}

/// Loading status of a vocabulary used by a selection control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OptionsState {
    #[default]
    Loading,
    Loaded(Vec<String>),
    Unavailable,
}

/// Result of a submission attempt that did not fail on the network.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend persisted the lead; the draft has been reset.
    Created(Lead),
    /// Validation failed; see [`LeadFormController::errors`]. Nothing was sent.
    Rejected,
}

#[derive(Debug)]
pub struct LeadFormController {
    draft: LeadDraft,
    errors: LeadFormErrors,
    state: FormState,
    headcount_max: Option<i64>,
    industry_options: OptionsState,
}

impl LeadFormController {
    pub fn new(headcount_max: Option<i64>) -> Self {
        Self::with_draft(LeadDraft::default(), headcount_max)
    }

    /// Starts a session from values already entered, e.g. a posted form.
    pub fn with_draft(draft: LeadDraft, headcount_max: Option<i64>) -> Self {
        Self {
            draft,
            errors: LeadFormErrors::default(),
            state: FormState::Editing,
            headcount_max,
            industry_options: OptionsState::Loading,
        }
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn errors(&self) -> &LeadFormErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Industry choices offered next to the empty option.
    pub fn industry_options(&self) -> &[String] {
        match &self.industry_options {
            OptionsState::Loaded(options) => options.as_slice(),
            OptionsState::Loading | OptionsState::Unavailable => &[],
        }
    }

    /// The industry selector stays disabled until its vocabulary arrives.
    pub fn industry_selector_disabled(&self) -> bool {
        !matches!(self.industry_options, OptionsState::Loaded(_))
    }

    /// Updates one field and drops any error previously attached to it.
    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
        self.state = if self.errors.is_empty() {
            FormState::Editing
        } else {
            FormState::EditingWithErrors
        };
    }

    /// Evaluates every rule, storing the collected errors on failure.
    pub fn validate(&mut self) -> Option<LeadCreate> {
        self.state = FormState::Validating;
        match self.draft.check(self.headcount_max) {
            Ok(lead) => {
                self.errors = LeadFormErrors::default();
                self.state = FormState::Editing;
                Some(lead)
            }
            Err(errors) => {
                self.errors = errors;
                self.state = FormState::EditingWithErrors;
                None
            }
        }
    }

    /// Validates the draft and, when it passes, creates the lead.
    ///
    /// Network failures are returned to the caller with the draft untouched
    /// so the user can correct and resubmit; they are never retried here.
    pub async fn submit<C>(&mut self, api: &C) -> ClientResult<SubmitOutcome>
    where
        C: LeadWriter + ?Sized,
    {
        let Some(lead) = self.validate() else {
            return Ok(SubmitOutcome::Rejected);
        };

        self.state = FormState::Submitting;
        match api.create_lead(&lead).await {
            Ok(created) => {
                self.draft = LeadDraft::default();
                self.state = FormState::Succeeded;
                Ok(SubmitOutcome::Created(created))
            }
            Err(err) => {
                self.state = FormState::Editing;
                Err(err)
            }
        }
    }

    /// Fetches the industry vocabulary for the selection control.
    pub async fn load_industry_options<C>(&mut self, api: &C)
    where
        C: OptionsReader + ?Sized,
    {
        self.industry_options = match api.list_industry_options().await {
            Ok(options) => OptionsState::Loaded(options),
            Err(err) => {
                log::warn!("Failed to load industry options: {err}");
                OptionsState::Unavailable
            }
        };
    }
}
