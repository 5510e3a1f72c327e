//! Reports page
//!
//! Five report fetches, each settling its own panel.

use futures::FutureExt;
use futures::future::BoxFuture;

use shared::models::{
    BookingReport, CommodityReport, CustomerStats, ServiceBookingReport, ServiceReport,
};

use crate::aggregate::Aggregate;
use crate::{ClientResult, ConsoleApi, HttpClient};

#[derive(Debug, Clone, Default)]
pub struct Reports {
    pub customer_stats: Aggregate<CustomerStats>,
    pub commodities: Aggregate<CommodityReport>,
    pub services: Aggregate<ServiceReport>,
    pub bookings: Aggregate<BookingReport>,
    pub service_bookings: Aggregate<ServiceBookingReport>,
}

#[derive(Debug)]
pub enum ReportUpdate {
    CustomerStats(ClientResult<CustomerStats>),
    Commodities(ClientResult<CommodityReport>),
    Services(ClientResult<ServiceReport>),
    Bookings(ClientResult<BookingReport>),
    ServiceBookings(ClientResult<ServiceBookingReport>),
}

fn settle<T>(report: &'static str, slot: &mut Aggregate<T>, result: ClientResult<T>) {
    if let Err(e) = &result {
        tracing::error!(report, error = %e, "report fetch failed");
    }
    *slot = Aggregate::from_result(result);
}

impl Reports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: ReportUpdate) {
        match update {
            ReportUpdate::CustomerStats(r) => settle("customer stats", &mut self.customer_stats, r),
            ReportUpdate::Commodities(r) => settle("commodities", &mut self.commodities, r),
            ReportUpdate::Services(r) => settle("services", &mut self.services, r),
            ReportUpdate::Bookings(r) => settle("bookings", &mut self.bookings, r),
            ReportUpdate::ServiceBookings(r) => {
                settle("service bookings", &mut self.service_bookings, r)
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        self.customer_stats.is_settled()
            && self.commodities.is_settled()
            && self.services.is_settled()
            && self.bookings.is_settled()
            && self.service_bookings.is_settled()
    }

    pub fn requests<C>(api: &ConsoleApi<C>) -> Vec<BoxFuture<'static, ReportUpdate>>
    where
        C: HttpClient + 'static,
    {
        let a = api.clone();
        let b = api.clone();
        let c = api.clone();
        let d = api.clone();
        let e = api.clone();
        vec![
            async move { ReportUpdate::CustomerStats(a.customer_stats().await) }.boxed(),
            async move { ReportUpdate::Commodities(b.commodity_report().await) }.boxed(),
            async move { ReportUpdate::Services(c.service_report().await) }.boxed(),
            async move { ReportUpdate::Bookings(d.booking_report().await) }.boxed(),
            async move { ReportUpdate::ServiceBookings(e.service_booking_report().await) }.boxed(),
        ]
    }
}

/// Render an optional figure, `N/A` when absent
pub fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[test]
    fn test_reports_fail_independently() {
        let mut reports = Reports::new();
        reports.apply(ReportUpdate::Bookings(Err(ClientError::NotFound("gone".into()))));
        reports.apply(ReportUpdate::Commodities(Ok(CommodityReport {
            total: Some(4),
            ..Default::default()
        })));
        assert!(reports.bookings.error().is_some());
        assert_eq!(reports.commodities.value().unwrap().total, Some(4));
        assert!(reports.services.is_loading());
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some(3)), "3");
        assert_eq!(or_na::<u64>(None), "N/A");
    }
}
