use serde::{Deserialize, Serialize};

use crate::client::LeadListQuery;
use crate::domain::filter::FilterSelection;
use crate::domain::lead::{Lead, LeadSummary};

/// Placeholder shown for absent optional values.
pub const EMPTY_CELL: &str = "-";

/// Query parameters accepted by the lead list page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeadsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headcount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl LeadsQuery {
    /// Drops empty text parameters so they are neither sent nor echoed back.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            industry: present(self.industry),
            headcount: present(self.headcount),
            name: present(self.name),
            email: present(self.email),
            company: present(self.company),
            skip: self.skip,
            limit: self.limit,
        }
    }

    /// Splits the page query into passthrough parameters and the filter.
    pub fn into_parts(self) -> (LeadListQuery, FilterSelection) {
        let filter = FilterSelection::new(self.industry, self.headcount);
        let query = LeadListQuery {
            name: self.name,
            email: self.email,
            company: self.company,
            skip: self.skip,
            limit: self.limit,
            ..LeadListQuery::default()
        };
        (query, filter)
    }
}

/// One table row, with absent optional fields rendered as [`EMPTY_CELL`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeadRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub company: String,
    pub phone_number: String,
    pub industry: String,
    pub headcount: String,
}

fn cell(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

impl From<&Lead> for LeadRow {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id,
            name: lead.name.clone(),
            email: lead.email.clone(),
            job_title: cell(lead.job_title.as_deref()),
            company: cell(lead.company.as_deref()),
            phone_number: cell(lead.phone_number.as_deref()),
            industry: cell(lead.industry.as_deref()),
            headcount: lead
                .headcount
                .map_or_else(|| EMPTY_CELL.to_string(), |h| h.to_string()),
        }
    }
}

/// Data required to render the lead list template.
#[derive(Debug, Serialize)]
pub struct LeadsPageData {
    /// Rows in the order returned by the backend.
    pub leads: Vec<LeadRow>,
    /// Banner message when the listing failed.
    pub error: Option<String>,
    /// Link re-issuing the identical listing request.
    pub retry_url: String,
    pub filter: FilterSelection,
    pub industry_options: Vec<String>,
    pub headcount_options: Vec<String>,
    pub summary: Option<LeadSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optional_fields_render_as_placeholder() {
        let lead = Lead {
            id: 1,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            job_title: Some(String::new()),
            ..Lead::default()
        };

        let row = LeadRow::from(&lead);

        assert_eq!(row.name, "Ann");
        for value in [
            &row.job_title,
            &row.company,
            &row.phone_number,
            &row.industry,
            &row.headcount,
        ] {
            assert_eq!(value, EMPTY_CELL);
        }
    }

    #[test]
    fn query_splits_into_passthrough_and_filter() {
        let query = LeadsQuery {
            industry: Some("Tech".to_string()),
            headcount: Some(String::new()),
            company: Some("Acme".to_string()),
            limit: Some(20),
            ..LeadsQuery::default()
        };

        let (list_query, filter) = query.into_parts();

        assert_eq!(filter, FilterSelection::default().industry("Tech"));
        assert_eq!(list_query.company.as_deref(), Some("Acme"));
        assert_eq!(list_query.limit, Some(20));
        assert_eq!(list_query.industry, None);
    }
}
