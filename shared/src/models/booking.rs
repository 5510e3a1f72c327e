//! Booking Models
//!
//! Product and service bookings are listed read-only; their status is a free
//! string owned by the booking workflow, not an operator lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, Searchable};

/// Customer reference embedded in a booking
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Product reference embedded in a product booking
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commodity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Service reference embedded in a service booking
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookedService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Product booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBooking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<BookingParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<BookedProduct>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::de::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub booked_at: Option<DateTime<Utc>>,
}

impl Record for ProductBooking {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for ProductBooking {
    fn search_fields(&self) -> Vec<Option<&str>> {
        let customer = self.customer.as_ref();
        vec![
            customer.and_then(|c| c.name.as_deref()),
            customer.and_then(|c| c.email.as_deref()),
            self.product.as_ref().and_then(|p| p.commodity_name.as_deref()),
            Some(self.status.as_str()),
        ]
    }
}

/// Service booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBooking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<BookingParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<BookedService>,
    #[serde(
        default,
        deserialize_with = "super::de::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for ServiceBooking {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for ServiceBooking {
    fn search_fields(&self) -> Vec<Option<&str>> {
        let customer = self.customer.as_ref();
        vec![
            customer.and_then(|c| c.name.as_deref()),
            customer.and_then(|c| c.email.as_deref()),
            self.service.as_ref().and_then(|s| s.name.as_deref()),
            Some(self.status.as_str()),
        ]
    }
}
