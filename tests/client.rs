use std::sync::atomic::Ordering;

use actix_web::web;
use leads_frontend::client::errors::ClientError;
use leads_frontend::client::http::HttpLeadClient;
use leads_frontend::client::{LeadListQuery, LeadReader, LeadWriter, OptionsReader};
use leads_frontend::domain::filter::FilterSelection;
use leads_frontend::domain::lead::LeadCreate;
use serde_json::json;

mod common;

use common::{SLOW_JOB_TITLE, StubBackend, TAKEN_EMAIL, spawn_backend};

fn seeded() -> web::Data<StubBackend> {
    web::Data::new(StubBackend::with_leads(vec![
        json!({"id": 1, "name": "Ann", "email": "ann@x.com", "industry": "Tech", "headcount": 12}),
        json!({"id": 2, "name": "Bob", "email": "bob@x.com"}),
    ]))
}

#[actix_web::test]
async fn unfiltered_listing_sends_no_query_string() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));

    let leads = api.list_leads(&LeadListQuery::new()).await.unwrap();

    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].headcount, Some(12));
    assert_eq!(leads[1].company, None);
    assert_eq!(backend.list_queries(), vec![String::new()]);
}

#[actix_web::test]
async fn filtered_listing_sends_only_selected_parameters() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));

    let filter = FilterSelection::default().industry("Tech");
    api.list_leads(&LeadListQuery::from(&filter)).await.unwrap();
    let filter = filter.headcount("1 - 10");
    api.list_leads(&LeadListQuery::from(&filter)).await.unwrap();

    assert_eq!(
        backend.list_queries(),
        vec![
            "industry=Tech".to_string(),
            "industry=Tech&headcount=1+-+10".to_string(),
        ]
    );
}

#[actix_web::test]
async fn failed_listing_is_a_fetch_error() {
    let backend = seeded();
    backend.fail_listing.store(true, Ordering::SeqCst);
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));

    let err = api.list_leads(&LeadListQuery::new()).await.unwrap_err();

    assert_eq!(err, ClientError::Fetch("Failed to fetch leads".to_string()));
}

#[actix_web::test]
async fn created_lead_is_returned_with_its_id() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));
    let mut lead = LeadCreate::new("Cy", "cy@x.com");
    lead.headcount = Some(0);

    let created = api.create_lead(&lead).await.unwrap();

    assert_eq!(created.id, 3);
    assert_eq!(created.name, "Cy");
    assert_eq!(created.headcount, Some(0));
    assert_eq!(backend.create_calls(), 1);
}

#[actix_web::test]
async fn rejected_creation_carries_backend_detail() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));

    let err = api
        .create_lead(&LeadCreate::new("Cy", TAKEN_EMAIL))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Creation("Lead with this email already exists".to_string())
    );
}

#[actix_web::test]
async fn bulk_creation_keeps_input_order() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));
    let mut slow = LeadCreate::new("Slow", "slow@x.com");
    slow.job_title = Some(SLOW_JOB_TITLE.to_string());
    let fast = LeadCreate::new("Fast", "fast@x.com");

    let created = api.create_leads(&[slow, fast]).await.unwrap();

    let names = created.iter().map(|l| l.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Slow", "Fast"]);
    assert_eq!(backend.create_calls(), 2);
}

#[actix_web::test]
async fn bulk_creation_fails_when_any_lead_is_rejected() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));

    let result = api
        .create_leads(&[
            LeadCreate::new("Cy", "cy@x.com"),
            LeadCreate::new("Dee", TAKEN_EMAIL),
        ])
        .await;

    assert!(matches!(result, Err(ClientError::Creation(_))));
}

#[actix_web::test]
async fn options_and_summary_are_read() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));

    assert_eq!(
        api.list_industry_options().await.unwrap(),
        vec!["Tech", "Retail"]
    );
    assert_eq!(
        api.list_headcount_options().await.unwrap(),
        vec!["1 - 10", "11 - 50"]
    );
    assert_eq!(api.leads_summary().await.unwrap().total_leads, 2);
}

#[actix_web::test]
async fn missing_lead_is_none() {
    let backend = seeded();
    let api = HttpLeadClient::new(spawn_backend(backend.clone()));

    assert_eq!(api.get_lead(2).await.unwrap().unwrap().name, "Bob");
    assert_eq!(api.get_lead(42).await.unwrap(), None);
}

#[actix_web::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = HttpLeadClient::new("http://127.0.0.1:1");

    let err = api.list_leads(&LeadListQuery::new()).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
