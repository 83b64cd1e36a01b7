//! Contract with the lead REST backend.
//!
//! The traits describe what the controllers need from the backend; the
//! [`http::HttpLeadClient`] implementation speaks HTTP to the real service.
#![allow(async_fn_in_trait)]

use futures::future::try_join_all;

use crate::client::errors::ClientResult;
use crate::domain::filter::FilterSelection;
use crate::domain::lead::{Lead, LeadCreate, LeadSummary};

pub mod errors;
#[cfg(feature = "server")]
pub mod http;

/// Query parameters accepted by `GET /leads`.
///
/// Only non-empty values are sent, so a default query requests the full list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadListQuery {
    pub industry: Option<String>,
    pub headcount: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl LeadListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn headcount(mut self, headcount: impl Into<String>) -> Self {
        self.headcount = Some(headcount.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn paginate(mut self, skip: usize, limit: usize) -> Self {
        self.skip = Some(skip);
        self.limit = Some(limit);
        self
    }

    /// Replaces both filter dimensions with the given selection.
    pub fn filter(mut self, filter: &FilterSelection) -> Self {
        self.industry = filter.industry.clone();
        self.headcount = filter.headcount.clone();
        self
    }

    /// Key/value pairs to append to the request URL, skipping unset values.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let params = [
            ("skip", self.skip.map(|v| v.to_string())),
            ("limit", self.limit.map(|v| v.to_string())),
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("company", self.company.clone()),
            ("industry", self.industry.clone()),
            ("headcount", self.headcount.clone()),
        ];

        params
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (key, v)))
            .collect()
    }
}

impl From<&FilterSelection> for LeadListQuery {
    fn from(filter: &FilterSelection) -> Self {
        LeadListQuery::new().filter(filter)
    }
}

pub trait LeadReader {
    async fn list_leads(&self, query: &LeadListQuery) -> ClientResult<Vec<Lead>>;
    async fn get_lead(&self, id: i32) -> ClientResult<Option<Lead>>;
    async fn leads_summary(&self) -> ClientResult<LeadSummary>;
}

pub trait LeadWriter {
    async fn create_lead(&self, lead: &LeadCreate) -> ClientResult<Lead>;

    /// Creates every lead concurrently and returns them in input order.
    ///
    /// The first failure fails the whole call. Leads created before it stay
    /// persisted on the backend.
    async fn create_leads(&self, leads: &[LeadCreate]) -> ClientResult<Vec<Lead>> {
        try_join_all(leads.iter().map(|lead| self.create_lead(lead))).await
    }
}

pub trait OptionsReader {
    async fn list_industry_options(&self) -> ClientResult<Vec<String>>;
    async fn list_headcount_options(&self) -> ClientResult<Vec<String>>;
}
