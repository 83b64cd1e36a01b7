use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::client::http::HttpLeadClient;
use crate::dto::lead::AddLeadPageData;
use crate::forms::lead::AddLeadForm;
use crate::models::config::ServerConfig;
use crate::routes::{alerts, base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::lead as lead_service;
use crate::services::lead::AddLeadOutcome;
use crate::services::submission::SubmissionGuard;

fn render_add_lead(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    page: &AddLeadPageData,
    failure: Option<String>,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "add_lead");
    if let Some(message) = failure {
        let mut alerts = alerts(flash_messages);
        alerts.push((message, "danger"));
        context.insert("alerts", &alerts);
    }
    context.insert("page", page);

    render_template(tera, "lead/add.html", &context)
}

#[get("/add-lead")]
pub async fn show_add_lead(
    api: web::Data<HttpLeadClient>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = lead_service::load_add_lead_page(api.get_ref(), server_config.headcount_max).await;

    render_add_lead(&tera, &flash_messages, &page, None)
}

#[post("/add-lead")]
pub async fn add_lead(
    api: web::Data<HttpLeadClient>,
    submissions: web::Data<SubmissionGuard>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddLeadForm>,
) -> impl Responder {
    let outcome = lead_service::submit_lead(
        api.get_ref(),
        submissions.get_ref(),
        form,
        server_config.headcount_max,
    )
    .await;

    match outcome {
        AddLeadOutcome::Created(lead) => {
            log::info!("Created lead {}", lead.id);
            FlashMessage::success("Lead created successfully!").send();
            redirect("/leads")
        }
        AddLeadOutcome::Rejected(page) => render_add_lead(&tera, &flash_messages, &page, None),
        AddLeadOutcome::Failed(page, err) => {
            render_add_lead(&tera, &flash_messages, &page, Some(err.to_string()))
        }
        AddLeadOutcome::Duplicate => {
            FlashMessage::warning("This lead has already been submitted.").send();
            redirect("/leads")
        }
    }
}

#[get("/leads/{lead_id}")]
pub async fn show_lead(
    lead_id: web::Path<i32>,
    api: web::Data<HttpLeadClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match lead_service::load_lead(api.get_ref(), lead_id.into_inner()).await {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Lead not found.").send();
            return redirect("/leads");
        }
        Err(err) => {
            log::error!("Failed to load lead: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "leads");
    context.insert("lead", &page.lead);

    render_template(&tera, "lead/show.html", &context)
}
