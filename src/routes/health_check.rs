use actix_web::HttpResponse;

/// Endpoint used by clients to know if the server is working. The customer
/// directory is loaded before the server binds, so answering means it is ready.
#[tracing::instrument(name = "Health Check handler")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
