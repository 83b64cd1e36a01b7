use serde::{Deserialize, Serialize};

/// Active industry/headcount selectors narrowing the lead list.
///
/// Empty selector values mean "no filter" and are stored as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub headcount: Option<String>,
}

fn selected(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl FilterSelection {
    #[must_use]
    pub fn new(industry: Option<String>, headcount: Option<String>) -> Self {
        Self {
            industry: selected(industry),
            headcount: selected(headcount),
        }
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = selected(Some(industry.into()));
        self
    }

    pub fn headcount(mut self, headcount: impl Into<String>) -> Self {
        self.headcount = selected(Some(headcount.into()));
        self
    }

    /// Re-applies the empty-means-unset rule, e.g. after deserializing a query string.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.industry, self.headcount)
    }

    pub fn is_empty(&self) -> bool {
        self.industry.is_none() && self.headcount.is_none()
    }
}
