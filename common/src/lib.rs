//! Wire model shared between the booking web client and anything else that
//! talks to the ojek booking API.
//!
//! - `model` holds the entities the API returns (drivers, bookings) and the
//!   `{success, data, message}` envelope wrapping every response.
//! - `requests` holds the payloads the client sends.

pub mod model;
pub mod requests;
