use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::client::http::HttpLeadClient;
use crate::dto::main::LeadsQuery;
use crate::forms::main::UploadLeadsForm;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/leads")
}

#[get("/leads")]
pub async fn show_leads(
    params: web::Query<LeadsQuery>,
    api: web::Data<HttpLeadClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = main_service::load_leads_page(api.get_ref(), params.into_inner()).await;

    let mut context = base_context(&flash_messages, "leads");
    context.insert("leads", &page.leads);
    context.insert("error", &page.error);
    context.insert("retry_url", &page.retry_url);
    context.insert("filter", &page.filter);
    context.insert("industry_options", &page.industry_options);
    context.insert("headcount_options", &page.headcount_options);
    context.insert("summary", &page.summary);

    render_template(&tera, "main/index.html", &context)
}

#[post("/leads/upload")]
pub async fn leads_upload(
    api: web::Data<HttpLeadClient>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<UploadLeadsForm>,
) -> impl Responder {
    match main_service::import_leads(api.get_ref(), &form, server_config.headcount_max).await {
        Ok(count) => {
            FlashMessage::success(format!("{count} leads imported.")).send();
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to import leads: {err}")).send();
        }
    }

    redirect("/leads")
}
