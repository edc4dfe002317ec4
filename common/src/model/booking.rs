use serde::{Deserialize, Serialize};

/// A booking as returned by `POST /book` and `GET /bookings`.
///
/// Lifecycle (server-side): created as `pending`, then moved to `completed`
/// or `cancelled` by an explicit customer action. Both are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub driver_name: String,
    pub driver_phone: String,
    pub pickup: String,
    pub destination: String,
    pub estimated_fare: f64,
    pub status: BookingStatus,
}

/// Lifecycle status of a booking. Unknown wire values land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Completed,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    /// Wire code of the status.
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(raw) => raw,
        }
    }

    /// Only pending bookings accept a cancel or complete action.
    pub fn is_pending(&self) -> bool {
        matches!(self, BookingStatus::Pending)
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => BookingStatus::Pending,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(value),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// State transition a customer can request on a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Cancel,
    Complete,
}

impl BookingAction {
    /// Last path segment of `POST /bookings/{id}/{segment}`.
    pub fn path_segment(self) -> &'static str {
        match self {
            BookingAction::Cancel => "cancel",
            BookingAction::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_booking_and_ignores_extra_fields() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":42,"driver_name":"Dede","driver_phone":"081111","pickup":"Stasiun Kejaksan",
                "destination":"Grage Mall","customer_name":"Rina","status":"pending",
                "created_at":"2024-05-01T10:00:00","estimated_fare":50000,"city":"Cirebon"}"#,
        )
        .unwrap();

        assert_eq!(booking.id, 42);
        assert_eq!(booking.estimated_fare, 50000.0);
        assert!(booking.status.is_pending());
    }

    #[test]
    fn only_pending_is_pending() {
        assert!(!BookingStatus::Completed.is_pending());
        assert!(!BookingStatus::Cancelled.is_pending());
        assert!(!BookingStatus::Other("expired".into()).is_pending());
    }

    #[test]
    fn unknown_status_round_trips_raw_value() {
        let status: BookingStatus = serde_json::from_str(r#""on_the_way""#).unwrap();
        assert_eq!(status, BookingStatus::Other("on_the_way".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""on_the_way""#);
    }

    #[test]
    fn action_path_segments() {
        assert_eq!(BookingAction::Cancel.path_segment(), "cancel");
        assert_eq!(BookingAction::Complete.path_segment(), "complete");
    }
}
