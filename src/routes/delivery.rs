use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::delivery::{DeliveryError, DeliveryNotifier};

#[derive(Deserialize, Debug)]
pub struct Parameters {
    pub customer_id: String,
}

#[tracing::instrument(
    name = "Next delivery notification handler",
    skip(notifier),
    fields(
        customer_id = %parameters.customer_id
    )
)]
pub async fn handle_next_delivery(
    parameters: web::Path<Parameters>,
    notifier: web::Data<DeliveryNotifier>,
) -> Result<HttpResponse, DeliveryError> {
    let notification = notifier.generate(&parameters.customer_id).map_err(|err| {
        tracing::warn!("Failed to generate notification: {:?}", err);
        err
    })?;

    Ok(HttpResponse::Ok().json(notification))
}

impl ResponseError for DeliveryError {
    fn status_code(&self) -> StatusCode {
        match self {
            DeliveryError::InvalidCustomerId(_) => StatusCode::BAD_REQUEST,
            DeliveryError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}
