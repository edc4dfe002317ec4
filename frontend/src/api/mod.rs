//! HTTP client for the booking API.
//!
//! Every endpoint answers with the `ApiResponse` envelope. The helpers here
//! turn that envelope into `Result<T, ApiError>` so callers only deal with
//! the two failure kinds (structured vs transport).
//!
//! Requests are plain `gloo-net` fetches: no retries, no timeouts, no
//! cancellation.


mod error;

pub use error::ApiError;

use common::model::booking::{Booking, BookingAction};
use common::model::driver::Driver;
use common::model::response::ApiResponse;
use common::requests::BookingRequest;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    pub fn drivers_url(&self) -> String {
        format!("{}/drivers", self.base)
    }

    pub fn book_url(&self) -> String {
        format!("{}/book", self.base)
    }

    /// Without the `phone` query; `find_bookings` appends it encoded.
    pub fn bookings_url(&self) -> String {
        format!("{}/bookings", self.base)
    }

    pub fn action_url(&self, action: BookingAction, booking_id: u64) -> String {
        format!(
            "{}/bookings/{}/{}",
            self.base,
            booking_id,
            action.path_segment()
        )
    }

    /// `GET /drivers`
    pub async fn fetch_drivers(&self) -> Result<Vec<Driver>, ApiError> {
        let response = Request::get(&self.drivers_url()).send().await?;
        decode_data(response).await
    }

    /// `POST /book`
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        let response = Request::post(&self.book_url())
            .json(request)?
            .send()
            .await?;
        decode_data(response).await
    }

    /// `GET /bookings?phone=<phone>`
    pub async fn find_bookings(&self, phone: &str) -> Result<Vec<Booking>, ApiError> {
        let response = Request::get(&self.bookings_url())
            .query([("phone", phone)])
            .send()
            .await?;
        decode_data(response).await
    }

    /// `POST /bookings/{id}/cancel` or `POST /bookings/{id}/complete`.
    /// Any `data` the server echoes back is ignored.
    pub async fn apply_action(&self, action: BookingAction, booking_id: u64) -> Result<(), ApiError> {
        let response = Request::post(&self.action_url(action, booking_id))
            .send()
            .await?;
        let envelope: ApiResponse<serde_json::Value> = response.json().await?;
        check_success(&envelope)
    }
}

/// The HTTP status is not consulted: the API reports rejections with a JSON
/// envelope on 4xx as well, and anything that is not JSON fails to decode.
async fn decode_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope: ApiResponse<T> = response.json().await?;
    into_data(envelope)
}

pub(crate) fn into_data<T>(envelope: ApiResponse<T>) -> Result<T, ApiError> {
    check_success(&envelope)?;
    envelope.data.ok_or(ApiError::MissingData)
}

pub(crate) fn check_success<T>(envelope: &ApiResponse<T>) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(envelope.message.clone()))
    }
}
