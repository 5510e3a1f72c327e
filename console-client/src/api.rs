//! Typed business API
//!
//! `ConsoleApi` wraps any `HttpClient` and knows the endpoint for every
//! list, mutation, form and aggregate the console uses.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use shared::client::{LoginRequest, LoginResponse, NewCustomer, NewEmployee};
use shared::models::{
    Admin, BookingReport, CommodityReport, Customer, CustomerCount, CustomerStats, Employee,
    EmployeeCount, ProductBooking, ProductCount, ProductSummary, ServiceBooking,
    ServiceBookingReport, ServiceCount, ServiceReport, ServiceSummary, TotalRevenue,
};

use crate::endpoints;
use crate::{ClientResult, HttpClient};

/// Which customers the customer view lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerListFilter {
    #[default]
    All,
    Active,
    Rejected,
    Suspended,
    Pending,
}

impl CustomerListFilter {
    pub const ALL: [CustomerListFilter; 5] = [
        CustomerListFilter::All,
        CustomerListFilter::Active,
        CustomerListFilter::Rejected,
        CustomerListFilter::Suspended,
        CustomerListFilter::Pending,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            CustomerListFilter::All => endpoints::CUSTOMERS_ALL,
            CustomerListFilter::Active => endpoints::CUSTOMERS_ACTIVE,
            CustomerListFilter::Rejected => endpoints::CUSTOMERS_REJECTED,
            CustomerListFilter::Suspended => endpoints::CUSTOMERS_SUSPENDED,
            CustomerListFilter::Pending => endpoints::CUSTOMERS_PENDING,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerListFilter::All => "All",
            CustomerListFilter::Active => "Active",
            CustomerListFilter::Rejected => "Rejected",
            CustomerListFilter::Suspended => "Suspended",
            CustomerListFilter::Pending => "Pending",
        }
    }

    /// The filter after this one, wrapping around
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Which employees the employee view lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeListFilter {
    #[default]
    All,
    Active,
    Suspended,
}

impl EmployeeListFilter {
    pub const ALL: [EmployeeListFilter; 3] = [
        EmployeeListFilter::All,
        EmployeeListFilter::Active,
        EmployeeListFilter::Suspended,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            EmployeeListFilter::All => endpoints::EMPLOYEES_ALL,
            EmployeeListFilter::Active => endpoints::EMPLOYEES_ACTIVE,
            EmployeeListFilter::Suspended => endpoints::EMPLOYEES_SUSPENDED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeListFilter::All => "All",
            EmployeeListFilter::Active => "Active",
            EmployeeListFilter::Suspended => "Suspended",
        }
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// HTTP verb and target of a single mutation
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest {
    Put {
        path: String,
        body: Option<serde_json::Value>,
    },
    Delete {
        path: String,
    },
}

impl MutationRequest {
    pub fn path(&self) -> &str {
        match self {
            MutationRequest::Put { path, .. } | MutationRequest::Delete { path } => path,
        }
    }
}

/// Typed access to the business API
pub struct ConsoleApi<C> {
    http: Arc<C>,
}

impl<C> Clone for ConsoleApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient> ConsoleApi<C> {
    pub fn new(http: C) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    async fn list<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<Vec<T>> {
        self.http.get(path).await
    }

    // ========== Customers ==========

    pub async fn list_customers(&self, filter: CustomerListFilter) -> ClientResult<Vec<Customer>> {
        self.list(filter.path()).await
    }

    pub async fn add_customer(&self, customer: &NewCustomer) -> ClientResult<serde_json::Value> {
        self.http.post(endpoints::CUSTOMER_ADD, customer).await
    }

    // ========== Employees ==========

    pub async fn list_employees(&self, filter: EmployeeListFilter) -> ClientResult<Vec<Employee>> {
        self.list(filter.path()).await
    }

    pub async fn add_employee(&self, employee: &NewEmployee) -> ClientResult<serde_json::Value> {
        self.http.post(endpoints::EMPLOYEE_ADD, employee).await
    }

    // ========== Mutations ==========

    /// Send one status mutation. The raw body is returned so the caller can
    /// adopt the updated record when the service echoes it back.
    pub async fn mutate(&self, request: &MutationRequest) -> ClientResult<serde_json::Value> {
        match request {
            MutationRequest::Put {
                path,
                body: Some(body),
            } => self.http.put(path, body).await,
            MutationRequest::Put { path, body: None } => self.http.put_empty(path).await,
            MutationRequest::Delete { path } => self.http.delete(path).await,
        }
    }

    // ========== Auth / Admins ==========

    /// Log in. A token in the response is attached to every later request.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self.http.post(endpoints::LOGIN, request).await?;
        if let Some(token) = response.token.clone() {
            self.http.set_token(Some(token)).await;
        }
        Ok(response)
    }

    pub async fn list_admins(&self) -> ClientResult<Vec<Admin>> {
        self.list(endpoints::ADMINS).await
    }

    pub async fn admin_profile(&self, id: &str) -> ClientResult<Admin> {
        self.http.get(&endpoints::admin_profile(id)).await
    }

    // ========== Dashboard ==========

    pub async fn employee_count(&self) -> ClientResult<u64> {
        let count: EmployeeCount = self.http.get(endpoints::EMPLOYEE_COUNT).await?;
        Ok(count.count)
    }

    pub async fn customer_count(&self) -> ClientResult<u64> {
        let count: CustomerCount = self.http.get(endpoints::CUSTOMER_COUNT).await?;
        Ok(count.total_customers)
    }

    pub async fn recent_employees(&self) -> ClientResult<Vec<Employee>> {
        self.list(endpoints::EMPLOYEES_RECENT).await
    }

    pub async fn recent_customers(&self) -> ClientResult<Vec<Customer>> {
        self.list(endpoints::CUSTOMERS_RECENT).await
    }

    pub async fn recent_products(&self) -> ClientResult<Vec<ProductSummary>> {
        self.list(endpoints::PRODUCTS_RECENT).await
    }

    pub async fn recent_services(&self) -> ClientResult<Vec<ServiceSummary>> {
        self.list(endpoints::SERVICES_RECENT).await
    }

    pub async fn product_count(&self) -> ClientResult<u64> {
        let count: ProductCount = self.http.get(endpoints::PRODUCT_COUNT).await?;
        Ok(count.total_products)
    }

    pub async fn service_count(&self) -> ClientResult<Option<u64>> {
        let count: ServiceCount = self.http.get(endpoints::SERVICE_COUNT).await?;
        Ok(count.count_services)
    }

    pub async fn total_revenue(&self) -> ClientResult<f64> {
        let revenue: TotalRevenue = self.http.get(endpoints::TOTAL_REVENUE).await?;
        Ok(revenue.total_revenue)
    }

    // ========== Reports ==========

    pub async fn customer_stats(&self) -> ClientResult<CustomerStats> {
        self.http.get(endpoints::REPORT_CUSTOMER_STATS).await
    }

    pub async fn commodity_report(&self) -> ClientResult<CommodityReport> {
        self.http.get(endpoints::REPORT_COMMODITIES).await
    }

    pub async fn service_report(&self) -> ClientResult<ServiceReport> {
        self.http.get(endpoints::REPORT_SERVICES).await
    }

    pub async fn booking_report(&self) -> ClientResult<BookingReport> {
        self.http.get(endpoints::REPORT_BOOKINGS).await
    }

    pub async fn service_booking_report(&self) -> ClientResult<ServiceBookingReport> {
        self.http.get(endpoints::REPORT_SERVICE_BOOKINGS).await
    }

    // ========== Bookings ==========

    pub async fn product_bookings(&self) -> ClientResult<Vec<ProductBooking>> {
        self.list(endpoints::PRODUCT_BOOKINGS).await
    }

    pub async fn service_bookings(&self) -> ClientResult<Vec<ServiceBooking>> {
        self.list(endpoints::SERVICE_BOOKINGS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_cycle() {
        let mut filter = CustomerListFilter::default();
        for _ in 0..CustomerListFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CustomerListFilter::All);
        assert_eq!(EmployeeListFilter::Suspended.next(), EmployeeListFilter::All);
        assert_eq!(
            CustomerListFilter::Pending.path(),
            "add/customer/pending"
        );
    }
}
