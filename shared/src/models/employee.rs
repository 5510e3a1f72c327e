//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{Record, Searchable, StatusRecord};

/// Employee account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Suspended,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Suspended => "suspended",
            EmployeeStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    /// Stored by the service; never rendered by the console.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "super::de::lenient")]
    pub status: EmployeeStatus,
    #[serde(
        default,
        deserialize_with = "super::de::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for Employee {
    type Status = EmployeeStatus;

    fn status(&self) -> EmployeeStatus {
        self.status
    }

    fn set_status(&mut self, status: EmployeeStatus) {
        self.status = status;
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            Some(self.email.as_str()),
        ]
    }
}

/// Update employee status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeStatusUpdate {
    pub status: EmployeeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_or_timestamp_decodes_leniently() {
        let employees: Vec<Employee> = serde_json::from_value(serde_json::json!([
            {"_id": "e1", "status": null, "createdAt": "not a date"},
            {"_id": "e2", "status": "suspended"}
        ]))
        .unwrap();
        assert_eq!(employees[0].status, EmployeeStatus::Unknown);
        assert!(employees[0].created_at.is_none());
        assert_eq!(employees[1].status, EmployeeStatus::Suspended);
    }
}
