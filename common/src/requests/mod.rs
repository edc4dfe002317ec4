use serde::{Deserialize, Serialize};

/// Request body for `POST /book`.
///
/// Built fresh from the booking form on every submission; the client keeps
/// no copy once the request is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup: String,
    pub destination: String,
}
