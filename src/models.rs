use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for `POST /class`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    #[schema(example = "Yoga")]
    pub class_name: String,
    #[schema(example = 5)]
    pub class_capacity: u32,
    #[schema(value_type = String, format = "date", example = "2025-06-01")]
    pub start_date: String,
    #[schema(value_type = String, format = "date", example = "2025-06-10")]
    pub end_date: String,
}

/// Payload for `POST /booking`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[schema(example = "Yoga")]
    pub class_name: String,
    #[schema(example = "john")]
    pub user_name: String,
    #[schema(value_type = String, format = "date", example = "2025-06-05")]
    pub booking_date: String,
}

/// Stored state of a class, keyed in the store by class name.
///
/// Bookings map a calendar date to the users booked that day, in call order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub allowed_capacity: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub bookings: BTreeMap<NaiveDate, Vec<String>>,
}

impl ClassRecord {
    pub fn new(allowed_capacity: u32, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            allowed_capacity,
            start_date,
            end_date,
            bookings: BTreeMap::new(),
        }
    }

    /// Number of users already booked on the given date.
    pub fn bookings_on(&self, date: NaiveDate) -> usize {
        self.bookings.get(&date).map_or(0, Vec::len)
    }
}

/// Response envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_bookings() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let record = ClassRecord::new(5, start, end);
        assert_eq!(record.allowed_capacity, 5);
        assert!(record.bookings.is_empty());
        assert_eq!(record.bookings_on(start), 0);
    }

    #[test]
    fn test_envelope_omits_empty_data() {
        let body = serde_json::to_string(&ApiResponse::ok("class created successfully")).unwrap();
        assert!(body.contains(r#""success":true"#));
        assert!(!body.contains("data"));
    }
}
