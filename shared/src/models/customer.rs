//! Customer Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{Record, Searchable, StatusRecord};

/// Customer account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Pending,
    Active,
    Rejected,
    Suspended,
    /// Anything the console does not recognise. Admits no transitions.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Pending => "pending",
            CustomerStatus::Active => "active",
            CustomerStatus::Rejected => "rejected",
            CustomerStatus::Suspended => "suspended",
            CustomerStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Legacy single-field name some records still carry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::de::string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "super::de::lenient")]
    pub status: CustomerStatus,
    #[serde(
        default,
        deserialize_with = "super::de::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// `name` when present, otherwise first and last name joined.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for Customer {
    type Status = CustomerStatus;

    fn status(&self) -> CustomerStatus {
        self.status
    }

    fn set_status(&mut self, status: CustomerStatus) {
        self.status = status;
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_number_or_string() {
        let numeric: Customer =
            serde_json::from_value(serde_json::json!({"_id": "c1", "phone": 5551234}))
                .unwrap();
        assert_eq!(numeric.phone.as_deref(), Some("5551234"));

        let text: Customer =
            serde_json::from_value(serde_json::json!({"_id": "c2", "phone": "+44 20"})).unwrap();
        assert_eq!(text.phone.as_deref(), Some("+44 20"));
    }

    #[test]
    fn test_unrecognised_status_is_unknown() {
        let customer: Customer =
            serde_json::from_value(serde_json::json!({"_id": "c1", "status": "archived"}))
                .unwrap();
        assert_eq!(customer.status, CustomerStatus::Unknown);

        let missing: Customer = serde_json::from_value(serde_json::json!({"_id": "c2"})).unwrap();
        assert_eq!(missing.status, CustomerStatus::Unknown);
    }

    #[test]
    fn test_malformed_row_does_not_fail_the_list() {
        let customers: Vec<Customer> = serde_json::from_value(serde_json::json!([
            {"_id": "c1", "status": null, "createdAt": "yesterday"},
            {"_id": "c2", "status": 3, "createdAt": 1700000000},
            {"_id": "c3", "status": "active", "createdAt": "2024-03-01T10:00:00Z"}
        ]))
        .unwrap();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].status, CustomerStatus::Unknown);
        assert!(customers[0].created_at.is_none());
        assert_eq!(customers[1].status, CustomerStatus::Unknown);
        assert_eq!(customers[2].status, CustomerStatus::Active);
        assert!(customers[2].created_at.is_some());
    }

    #[test]
    fn test_display_name_falls_back_to_parts() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "status": "pending",
            "createdAt": "2024-03-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(customer.display_name(), "Ada Lovelace");
        assert_eq!(customer.status, CustomerStatus::Pending);
        assert!(customer.created_at.is_some());
    }
}
