//! Stub lead backend served on an ephemeral port.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::time::Duration;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

pub const TAKEN_EMAIL: &str = "taken@x.com";
/// Creation requests with this job title are answered after a delay.
pub const SLOW_JOB_TITLE: &str = "slow";

#[derive(Default)]
pub struct StubBackend {
    pub leads: Mutex<Vec<Value>>,
    /// Raw query strings received by `GET /leads`.
    pub list_queries: Mutex<Vec<String>>,
    pub create_calls: AtomicI32,
    pub fail_listing: AtomicBool,
    next_id: AtomicI32,
}

impl StubBackend {
    pub fn with_leads(leads: Vec<Value>) -> Self {
        let next_id = leads.len() as i32;
        Self {
            leads: Mutex::new(leads),
            next_id: AtomicI32::new(next_id),
            ..Self::default()
        }
    }

    pub fn list_queries(&self) -> Vec<String> {
        self.list_queries.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> i32 {
        self.create_calls.load(Ordering::SeqCst)
    }
}

async fn list_leads(req: HttpRequest, backend: web::Data<StubBackend>) -> HttpResponse {
    backend
        .list_queries
        .lock()
        .unwrap()
        .push(req.query_string().to_string());
    if backend.fail_listing.load(Ordering::SeqCst) {
        return HttpResponse::InternalServerError().finish();
    }
    let leads = backend.leads.lock().unwrap().clone();
    HttpResponse::Ok().json(leads)
}

async fn create_lead(backend: web::Data<StubBackend>, body: web::Json<Value>) -> HttpResponse {
    backend.create_calls.fetch_add(1, Ordering::SeqCst);
    let mut lead = body.into_inner();

    if lead["email"] == TAKEN_EMAIL {
        return HttpResponse::BadRequest()
            .json(json!({"detail": "Lead with this email already exists"}));
    }
    if lead["job_title"] == SLOW_JOB_TITLE {
        actix_web::rt::time::sleep(Duration::from_millis(100)).await;
    }

    let id = backend.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    lead["id"] = json!(id);
    backend.leads.lock().unwrap().push(lead.clone());
    HttpResponse::Created().json(lead)
}

async fn get_lead(path: web::Path<i32>, backend: web::Data<StubBackend>) -> HttpResponse {
    let id = path.into_inner();
    let leads = backend.leads.lock().unwrap();
    match leads.iter().find(|lead| lead["id"] == id) {
        Some(lead) => HttpResponse::Ok().json(lead),
        None => HttpResponse::NotFound().json(json!({"detail": "Lead not found"})),
    }
}

async fn summary(backend: web::Data<StubBackend>) -> HttpResponse {
    let total = backend.leads.lock().unwrap().len();
    HttpResponse::Ok().json(json!({"total_leads": total, "by_industry": {}}))
}

async fn industry_options() -> HttpResponse {
    HttpResponse::Ok().json(["Tech", "Retail"])
}

async fn headcount_options() -> HttpResponse {
    HttpResponse::Ok().json(["1 - 10", "11 - 50"])
}

/// Starts the stub on `127.0.0.1` and returns its base URL.
pub fn spawn_backend(backend: web::Data<StubBackend>) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(backend.clone())
            .route("/leads", web::get().to(list_leads))
            .route("/leads", web::post().to(create_lead))
            .route("/leads/stats/summary", web::get().to(summary))
            .route("/leads/{id}", web::get().to(get_lead))
            .route("/industry/options", web::get().to(industry_options))
            .route("/headcount/options", web::get().to(headcount_options))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("stub backend should bind");

    let address = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{address}")
}
