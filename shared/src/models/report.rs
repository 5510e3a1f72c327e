//! Report aggregates
//!
//! Every numeric field is optional: the report endpoints omit figures they
//! cannot compute, and the console renders those as `N/A`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Breakdown of some status (or method) name to a count
pub type Breakdown = BTreeMap<String, u64>;

// =============================================================================
// Dashboard counters
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCount {
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCount {
    #[serde(default)]
    pub total_customers: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCount {
    #[serde(default)]
    pub total_products: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCount {
    #[serde(default)]
    pub count_services: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRevenue {
    #[serde(default)]
    pub total_revenue: f64,
}

// =============================================================================
// Reports page
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub status_breakdown: Breakdown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityReport {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pieces: Option<u64>,
    #[serde(default)]
    pub avg_price: Option<f64>,
    #[serde(default)]
    pub total_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReport {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub available: Option<u64>,
    #[serde(default)]
    pub unavailable: Option<u64>,
    #[serde(default)]
    pub avg_price: Option<f64>,
    /// Minutes
    #[serde(default)]
    pub avg_duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReport {
    #[serde(default)]
    pub total_bookings: Option<u64>,
    #[serde(default)]
    pub status_counts: Breakdown,
    #[serde(default)]
    pub payment_status_counts: Breakdown,
    #[serde(default)]
    pub payment_method_counts: Breakdown,
    /// Revenue from paid bookings
    #[serde(default)]
    pub total_revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBookingCount {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBookingReport {
    #[serde(default)]
    pub total_bookings: Option<u64>,
    #[serde(default)]
    pub status_counts: Breakdown,
    #[serde(default)]
    pub payment_method_counts: Breakdown,
    #[serde(default)]
    pub service_booking_counts: Vec<ServiceBookingCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_report_tolerates_missing_fields() {
        let report: BookingReport =
            serde_json::from_value(serde_json::json!({"totalBookings": 4})).unwrap();
        assert_eq!(report.total_bookings, Some(4));
        assert!(report.status_counts.is_empty());
        assert_eq!(report.total_revenue, None);
    }

    #[test]
    fn test_service_booking_counts_parse() {
        let report: ServiceBookingReport = serde_json::from_value(serde_json::json!({
            "totalBookings": 3,
            "statusCounts": {"confirmed": 2, "cancelled": 1},
            "serviceBookingCounts": [
                {"serviceId": "s1", "serviceName": "Haircut", "count": 3}
            ]
        }))
        .unwrap();
        assert_eq!(report.status_counts.get("confirmed"), Some(&2));
        assert_eq!(report.service_booking_counts[0].service_name, "Haircut");
    }
}
