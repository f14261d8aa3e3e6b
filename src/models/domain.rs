use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Restaurant record from the catalog
///
/// Open and close hours are stored as "HH:MM" wall-clock strings with no
/// date component; parsing happens at match time and a string that fails
/// to parse makes the record report closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub style: String,
    pub address: String,
    #[serde(rename = "openHour")]
    pub open_hour: String,
    #[serde(rename = "closeHour")]
    pub close_hour: String,
    pub vegetarian: bool,
    pub deliveries: bool,
}

impl Restaurant {
    /// Sentinel record written to the audit log when no catalog entry matched
    pub fn no_match() -> Self {
        Self {
            name: "No match found".to_string(),
            style: String::new(),
            address: String::new(),
            open_hour: String::new(),
            close_hour: String::new(),
            vegetarian: false,
            deliveries: false,
        }
    }
}

/// Filter criteria extracted from one natural-language query
///
/// Every field is optional: an unspecified criterion passes vacuously
/// during matching. Constructed fresh per request and discarded after a
/// single pass over the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCriteria {
    /// Cuisine style, verbatim from the known vocabulary; empty = unconstrained
    pub style: String,
    /// Only ever `Some(true)`; there is no way to ask for non-vegetarian
    pub vegetarian: Option<bool>,
    /// Only ever `Some(true)`; there is no way to ask for pickup-only
    pub delivers: Option<bool>,
    /// "open now" was mentioned; evaluate openness against the request time
    pub open_now: bool,
    /// Explicit "open at ..." timestamp; takes precedence over `open_now`
    pub open_at: Option<NaiveDateTime>,
}
