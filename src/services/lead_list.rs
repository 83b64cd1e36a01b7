//! Controller behind the lead list view.
//!
//! Owns the fetched leads, the active [`FilterSelection`] and the
//! loading/error status. Every listing request carries a token; only the
//! response to the most recently issued request is applied, so a slow answer
//! for an old filter can never overwrite newer results.

use crate::client::errors::ClientResult;
use crate::client::{LeadListQuery, LeadReader, OptionsReader};
use crate::domain::filter::FilterSelection;
use crate::domain::lead::Lead;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Loading,
    Ready(Vec<Lead>),
    Error(String),
}

/// A listing request issued by the controller and awaiting its response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub token: u64,
    pub query: LeadListQuery,
}

#[derive(Debug, Default)]
pub struct LeadListController {
    base_query: LeadListQuery,
    filter: FilterSelection,
    state: ListState,
    latest_token: u64,
    last_query: Option<LeadListQuery>,
    industry_options: Vec<String>,
    headcount_options: Vec<String>,
    vocabulary_loaded: bool,
}

impl LeadListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from passthrough parameters (pagination, text filters) that are
    /// forwarded unchanged with every request.
    pub fn with_query(base_query: LeadListQuery) -> Self {
        Self {
            base_query,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: FilterSelection) -> Self {
        self.filter = filter.normalized();
        self
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ListState::Loading
    }

    /// Leads in server order; empty unless the last request succeeded.
    pub fn leads(&self) -> &[Lead] {
        match &self.state {
            ListState::Ready(leads) => leads.as_slice(),
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ListState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn industry_options(&self) -> &[String] {
        &self.industry_options
    }

    pub fn headcount_options(&self) -> &[String] {
        &self.headcount_options
    }

    /// The request the current filter maps to.
    pub fn current_query(&self) -> LeadListQuery {
        self.base_query.clone().filter(&self.filter)
    }

    fn issue(&mut self, query: LeadListQuery) -> ListRequest {
        self.latest_token += 1;
        self.state = ListState::Loading;
        self.last_query = Some(query.clone());
        ListRequest {
            token: self.latest_token,
            query,
        }
    }

    /// Moves to loading and issues a request for the current filter.
    pub fn begin_request(&mut self) -> ListRequest {
        let query = self.current_query();
        self.issue(query)
    }

    /// Applies a response. Returns `false` when the response belongs to a
    /// superseded request and was discarded.
    pub fn complete_request(&mut self, token: u64, result: ClientResult<Vec<Lead>>) -> bool {
        if token != self.latest_token {
            log::debug!(
                "Discarding stale lead list response {token} (latest is {})",
                self.latest_token
            );
            return false;
        }

        self.state = match result {
            Ok(leads) => ListState::Ready(leads),
            Err(err) => {
                log::error!("Failed to load leads: {err}");
                ListState::Error(err.to_string())
            }
        };
        true
    }

    async fn run<C>(&mut self, api: &C, request: ListRequest)
    where
        C: LeadReader + ?Sized,
    {
        let result = api.list_leads(&request.query).await;
        self.complete_request(request.token, result);
    }

    /// Fetches the leads for the current filter.
    pub async fn refresh<C>(&mut self, api: &C)
    where
        C: LeadReader + ?Sized,
    {
        let request = self.begin_request();
        self.run(api, request).await;
    }

    /// Re-issues the last request unchanged.
    pub async fn retry<C>(&mut self, api: &C)
    where
        C: LeadReader + ?Sized,
    {
        let query = self
            .last_query
            .clone()
            .unwrap_or_else(|| self.current_query());
        let request = self.issue(query);
        self.run(api, request).await;
    }

    /// First activation: loads the filter vocabulary once, then the leads.
    ///
    /// Vocabulary failures are logged and never block the listing.
    pub async fn activate<C>(&mut self, api: &C)
    where
        C: LeadReader + OptionsReader + ?Sized,
    {
        if !self.vocabulary_loaded {
            self.load_vocabulary(api).await;
        }
        self.refresh(api).await;
    }

    async fn load_vocabulary<C>(&mut self, api: &C)
    where
        C: OptionsReader + ?Sized,
    {
        match api.list_industry_options().await {
            Ok(options) => self.industry_options = options,
            Err(err) => log::warn!("Failed to load industry options: {err}"),
        }
        match api.list_headcount_options().await {
            Ok(options) => self.headcount_options = options,
            Err(err) => log::warn!("Failed to load headcount options: {err}"),
        }
        self.vocabulary_loaded = true;
    }

    /// Replaces the filter; refetches only when the selection changed.
    pub async fn set_filter<C>(&mut self, api: &C, filter: FilterSelection) -> bool
    where
        C: LeadReader + ?Sized,
    {
        let filter = filter.normalized();
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.refresh(api).await;
        true
    }

    pub async fn set_industry<C>(&mut self, api: &C, industry: Option<String>) -> bool
    where
        C: LeadReader + ?Sized,
    {
        let filter = FilterSelection::new(industry, self.filter.headcount.clone());
        self.set_filter(api, filter).await
    }

    pub async fn set_headcount<C>(&mut self, api: &C, headcount: Option<String>) -> bool
    where
        C: LeadReader + ?Sized,
    {
        let filter = FilterSelection::new(self.filter.industry.clone(), headcount);
        self.set_filter(api, filter).await
    }

    /// Resets both selectors and fetches the unfiltered list.
    pub async fn clear_filters<C>(&mut self, api: &C)
    where
        C: LeadReader + ?Sized,
    {
        self.filter = FilterSelection::default();
        self.refresh(api).await;
    }
}
