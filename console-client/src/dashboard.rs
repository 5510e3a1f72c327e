//! Dashboard aggregation
//!
//! The dashboard shows nine figures, each fetched on its own. A fetch that
//! fails marks only its own panel as failed; the others keep loading or
//! render normally.

use futures::FutureExt;
use futures::future::BoxFuture;

use shared::models::{Customer, Employee, ProductSummary, ServiceSummary};

use crate::aggregate::Aggregate;
use crate::{ClientResult, ConsoleApi, HttpClient};

/// Dashboard state, one `Aggregate` per panel
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub employee_count: Aggregate<u64>,
    pub customer_count: Aggregate<u64>,
    pub recent_employees: Aggregate<Vec<Employee>>,
    pub recent_customers: Aggregate<Vec<Customer>>,
    pub recent_products: Aggregate<Vec<ProductSummary>>,
    pub recent_services: Aggregate<Vec<ServiceSummary>>,
    pub total_revenue: Aggregate<f64>,
    pub service_count: Aggregate<Option<u64>>,
    pub product_count: Aggregate<u64>,
}

/// A settled dashboard fetch
#[derive(Debug)]
pub enum DashboardUpdate {
    EmployeeCount(ClientResult<u64>),
    CustomerCount(ClientResult<u64>),
    RecentEmployees(ClientResult<Vec<Employee>>),
    RecentCustomers(ClientResult<Vec<Customer>>),
    RecentProducts(ClientResult<Vec<ProductSummary>>),
    RecentServices(ClientResult<Vec<ServiceSummary>>),
    TotalRevenue(ClientResult<f64>),
    ServiceCount(ClientResult<Option<u64>>),
    ProductCount(ClientResult<u64>),
}

impl DashboardUpdate {
    pub fn panel(&self) -> &'static str {
        match self {
            DashboardUpdate::EmployeeCount(_) => "employee count",
            DashboardUpdate::CustomerCount(_) => "customer count",
            DashboardUpdate::RecentEmployees(_) => "recent employees",
            DashboardUpdate::RecentCustomers(_) => "recent customers",
            DashboardUpdate::RecentProducts(_) => "recent products",
            DashboardUpdate::RecentServices(_) => "recent services",
            DashboardUpdate::TotalRevenue(_) => "total revenue",
            DashboardUpdate::ServiceCount(_) => "service count",
            DashboardUpdate::ProductCount(_) => "product count",
        }
    }
}

fn settle<T>(panel: &'static str, slot: &mut Aggregate<T>, result: ClientResult<T>) {
    if let Err(e) = &result {
        tracing::error!(panel, error = %e, "dashboard fetch failed");
    }
    *slot = Aggregate::from_result(result);
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one settled fetch. Touches only the matching panel.
    pub fn apply(&mut self, update: DashboardUpdate) {
        let panel = update.panel();
        match update {
            DashboardUpdate::EmployeeCount(r) => settle(panel, &mut self.employee_count, r),
            DashboardUpdate::CustomerCount(r) => settle(panel, &mut self.customer_count, r),
            DashboardUpdate::RecentEmployees(r) => settle(panel, &mut self.recent_employees, r),
            DashboardUpdate::RecentCustomers(r) => settle(panel, &mut self.recent_customers, r),
            DashboardUpdate::RecentProducts(r) => settle(panel, &mut self.recent_products, r),
            DashboardUpdate::RecentServices(r) => settle(panel, &mut self.recent_services, r),
            DashboardUpdate::TotalRevenue(r) => settle(panel, &mut self.total_revenue, r),
            DashboardUpdate::ServiceCount(r) => settle(panel, &mut self.service_count, r),
            DashboardUpdate::ProductCount(r) => settle(panel, &mut self.product_count, r),
        }
    }

    /// True once every panel has either data or an error
    pub fn is_settled(&self) -> bool {
        self.employee_count.is_settled()
            && self.customer_count.is_settled()
            && self.recent_employees.is_settled()
            && self.recent_customers.is_settled()
            && self.recent_products.is_settled()
            && self.recent_services.is_settled()
            && self.total_revenue.is_settled()
            && self.service_count.is_settled()
            && self.product_count.is_settled()
    }

    /// One future per panel, independent of each other.
    ///
    /// Callers spawn them separately and feed each result to `apply` as it
    /// arrives; there is no ordering between completions.
    pub fn requests<C>(api: &ConsoleApi<C>) -> Vec<BoxFuture<'static, DashboardUpdate>>
    where
        C: HttpClient + 'static,
    {
        let a = api.clone();
        let b = api.clone();
        let c = api.clone();
        let d = api.clone();
        let e = api.clone();
        let f = api.clone();
        let g = api.clone();
        let h = api.clone();
        let i = api.clone();
        vec![
            async move { DashboardUpdate::EmployeeCount(a.employee_count().await) }.boxed(),
            async move { DashboardUpdate::CustomerCount(b.customer_count().await) }.boxed(),
            async move { DashboardUpdate::RecentEmployees(c.recent_employees().await) }.boxed(),
            async move { DashboardUpdate::RecentCustomers(d.recent_customers().await) }.boxed(),
            async move { DashboardUpdate::RecentProducts(e.recent_products().await) }.boxed(),
            async move { DashboardUpdate::RecentServices(f.recent_services().await) }.boxed(),
            async move { DashboardUpdate::TotalRevenue(g.total_revenue().await) }.boxed(),
            async move { DashboardUpdate::ServiceCount(h.service_count().await) }.boxed(),
            async move { DashboardUpdate::ProductCount(i.product_count().await) }.boxed(),
        ]
    }
}
