use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lead record as persisted by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub headcount: Option<i64>,
}

/// Payload for a lead that has not been persisted yet.
///
/// Absent optional fields are left out of the JSON body so the backend applies
/// its own defaults.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LeadCreate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headcount: Option<i64>,
}

impl LeadCreate {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Attaches the backend-assigned identifier, producing the persisted shape.
    #[must_use]
    pub fn into_lead(self, id: i32) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            job_title: self.job_title,
            phone_number: self.phone_number,
            company: self.company,
            industry: self.industry,
            headcount: self.headcount,
        }
    }
}

/// Aggregated lead statistics reported by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LeadSummary {
    pub total_leads: usize,
    #[serde(default)]
    pub by_industry: BTreeMap<String, usize>,
}
