use serde::{Deserialize, Serialize};

/// A driver as listed by `GET /drivers`.
///
/// The client never mutates drivers; every list render is rebuilt from the
/// latest response. Extra fields sent by the server (location, etc.) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Server-side identifier. Not every deployment sends it.
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub rating: f64,
    pub phone: String,
    pub status: DriverStatus,
}

/// Availability of a driver.
///
/// Unknown wire values are kept verbatim in `Other` so they can still be
/// displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DriverStatus {
    Available,
    Busy,
    Other(String),
}

impl DriverStatus {
    /// Wire code of the status (`available`, `busy`, or the raw value).
    pub fn as_str(&self) -> &str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::Busy => "busy",
            DriverStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for DriverStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => DriverStatus::Available,
            "busy" => DriverStatus::Busy,
            _ => DriverStatus::Other(value),
        }
    }
}

impl From<DriverStatus> for String {
    fn from(status: DriverStatus) -> Self {
        match status {
            DriverStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
