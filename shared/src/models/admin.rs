//! Admin Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, Searchable};

/// Admin account (read-only in the console)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::de::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Admin {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Admin {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.full_name.as_str()), Some(self.email.as_str())]
    }
}
