use serde::{Deserialize, Serialize};

/// Envelope wrapping every API response: `{success, data?, message?}`.
///
/// A parsed envelope with `success == false` is a *structured failure*; the
/// `message` is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::{Booking, BookingStatus};
    use crate::model::driver::Driver;
    use serde::de::DeserializeOwned;

    fn decode<T: DeserializeOwned>(json: &str) -> ApiResponse<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_success_with_data() {
        let response: ApiResponse<Vec<Driver>> = serde_json::from_str(
            r#"{"success":true,"data":[{"name":"Sinta","phone":"0812","status":"busy","rating":4.7}]}"#,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(response.data.map(|d| d.len()), Some(1));
        assert_eq!(response.message, None);
    }

    #[test]
    fn decodes_failure_without_data() {
        let response: ApiResponse<Vec<Driver>> =
            serde_json::from_str(r#"{"success":false,"message":"Booking tidak ditemukan"}"#)
                .unwrap();

        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("Booking tidak ditemukan"));
    }

    #[test]
    fn null_data_is_none() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn decodes_booking_through_generic_helper() {
        let response: ApiResponse<Booking> = decode(
            r#"{"success":true,"data":{"id":42,"driver_name":"Dede","driver_phone":"0811",
                "pickup":"Alun-alun","destination":"Grage Mall","estimated_fare":50000,
                "status":"pending"}}"#,
        );

        let booking = response.data.unwrap();
        assert_eq!(booking.id, 42);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(response.message, None);
    }

    #[test]
    fn generic_helper_handles_missing_data_and_message() {
        let response: ApiResponse<Booking> = decode(r#"{"success":false}"#);
        assert!(!response.success);
        assert!(response.data.is_none());
        assert!(response.message.is_none());
    }
}
