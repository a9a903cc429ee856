use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio showcase API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "projects": "/api/v1/projects",
        "health": "/api/v1/health"
    }))
}
