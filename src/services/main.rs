use crate::client::{LeadReader, LeadWriter, OptionsReader};
use crate::dto::main::{LeadRow, LeadsPageData, LeadsQuery};
use crate::forms::main::UploadLeadsForm;
use crate::services::ServiceResult;
use crate::services::lead_list::LeadListController;

const LEADS_PATH: &str = "/leads";

/// URL of the list page for `query`, used as the retry target.
fn leads_url(query: &LeadsQuery) -> String {
    match serde_html_form::to_string(query) {
        Ok(params) if !params.is_empty() => format!("{LEADS_PATH}?{params}"),
        Ok(_) => LEADS_PATH.to_string(),
        Err(err) => {
            log::error!("Failed to encode lead list query: {err}");
            LEADS_PATH.to_string()
        }
    }
}

/// Loads the lead list, filter vocabulary and summary for the index page.
///
/// Listing failures do not fail the page: they are returned as banner state
/// together with a retry link for the identical request.
pub async fn load_leads_page<C>(api: &C, query: LeadsQuery) -> LeadsPageData
where
    C: LeadReader + OptionsReader + ?Sized,
{
    let query = query.normalized();
    let retry_url = leads_url(&query);
    let (list_query, filter) = query.into_parts();

    let mut controller = LeadListController::with_query(list_query).with_filter(filter);
    controller.activate(api).await;

    let summary = match api.leads_summary().await {
        Ok(summary) => Some(summary),
        Err(err) => {
            log::warn!("Failed to load lead summary: {err}");
            None
        }
    };

    LeadsPageData {
        leads: controller.leads().iter().map(LeadRow::from).collect(),
        error: controller.error().map(str::to_string),
        retry_url,
        filter: controller.filter().clone(),
        industry_options: controller.industry_options().to_vec(),
        headcount_options: controller.headcount_options().to_vec(),
        summary,
    }
}

/// Parses the uploaded CSV file and creates every lead in it.
///
/// Returns the number of created leads. A single failed creation fails the
/// import; leads created before it are not rolled back.
pub async fn import_leads<C>(
    api: &C,
    form: &UploadLeadsForm,
    headcount_max: Option<i64>,
) -> ServiceResult<usize>
where
    C: LeadWriter + ?Sized,
{
    let leads = form.parse(headcount_max).map_err(|err| {
        log::error!("Failed to parse leads: {err}");
        err
    })?;

    let created = api.create_leads(&leads).await.map_err(|err| {
        log::error!("Failed to import leads: {err}");
        err
    })?;

    Ok(created.len())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::client::test::TestLeadBackend;
    use crate::domain::lead::Lead;

    fn backend() -> TestLeadBackend {
        TestLeadBackend::with_leads(vec![Lead {
            id: 1,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            ..Lead::default()
        }])
    }

    #[test]
    fn retry_url_repeats_the_normalized_query() {
        let query = LeadsQuery {
            industry: Some("Tech & AI".to_string()),
            headcount: Some(String::new()),
            ..LeadsQuery::default()
        }
        .normalized();

        assert_eq!(leads_url(&query), "/leads?industry=Tech+%26+AI");
        assert_eq!(leads_url(&LeadsQuery::default()), "/leads");
    }

    #[test]
    fn page_renders_rows_with_placeholders() {
        let backend = backend();

        let page = block_on(load_leads_page(&backend, LeadsQuery::default()));

        assert_eq!(page.leads.len(), 1);
        assert_eq!(page.leads[0].company, "-");
        assert_eq!(page.error, None);
        assert_eq!(page.summary.map(|s| s.total_leads), Some(1));
        assert_eq!(page.industry_options, vec!["Tech", "Retail"]);
    }

    #[test]
    fn listing_failure_becomes_banner_with_retry_link() {
        let backend = backend();
        backend.fail_listing.set(true);
        let query = LeadsQuery {
            industry: Some("Tech".to_string()),
            ..LeadsQuery::default()
        };

        let page = block_on(load_leads_page(&backend, query));

        assert!(page.leads.is_empty());
        assert_eq!(page.error.as_deref(), Some("Failed to fetch leads"));
        assert_eq!(page.retry_url, "/leads?industry=Tech");
    }
}
