//! Mock API routes

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{Value, json};
use validator::Validate;

use shared::client::{LoginRequest, LoginResponse, MessageResponse, NewCustomer, NewEmployee};
use shared::models::{
    Admin, Breakdown, BookingReport, CommodityReport, Customer, CustomerCount, CustomerStats,
    CustomerStatus, Employee, EmployeeCount, EmployeeStatus, EmployeeStatusUpdate, ProductBooking,
    ProductCount, ProductSummary, ServiceBooking, ServiceBookingCount, ServiceBookingReport,
    ServiceCount, ServiceReport, ServiceSummary, TotalRevenue,
};

use crate::error::{MockError, MockResult};
use crate::state::MockState;

type AppState = State<Arc<MockState>>;

const RECENT: usize = 5;

fn message(text: impl Into<String>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: Some(text.into()),
    })
}

fn invalid(errors: validator::ValidationErrors) -> MockError {
    let mut fields: Vec<_> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    MockError::BadRequest(format!("Missing required fields: {}", fields.join(", ")))
}

/// Answer 500 on faulted paths and log every mutation
async fn inject_faults(State(state): AppState, request: Request, next: Next) -> Response {
    let path = request.uri().path().trim_start_matches('/').to_string();
    if state.is_failing(&path) {
        tracing::debug!(path = %path, "injected fault");
        return MockError::Injected.into_response();
    }
    if request.method() != Method::GET {
        state.record_mutation(format!("{} {}", request.method(), path));
    }
    next.run(request).await
}

// =============================================================================
// Customers
// =============================================================================

fn customers_where(state: &MockState, status: CustomerStatus) -> Json<Vec<Customer>> {
    let data = state.data.lock();
    Json(
        data.customers
            .iter()
            .filter(|c| c.status == status)
            .cloned()
            .collect(),
    )
}

async fn customers_all(State(state): AppState) -> Json<Vec<Customer>> {
    Json(state.data.lock().customers.clone())
}

async fn customers_active(State(state): AppState) -> Json<Vec<Customer>> {
    customers_where(&state, CustomerStatus::Active)
}

async fn customers_rejected(State(state): AppState) -> Json<Vec<Customer>> {
    customers_where(&state, CustomerStatus::Rejected)
}

async fn customers_suspended(State(state): AppState) -> Json<Vec<Customer>> {
    customers_where(&state, CustomerStatus::Suspended)
}

async fn customers_pending(State(state): AppState) -> Json<Vec<Customer>> {
    customers_where(&state, CustomerStatus::Pending)
}

async fn add_customer(
    State(state): AppState,
    Json(req): Json<NewCustomer>,
) -> MockResult<(StatusCode, Json<MessageResponse>)> {
    req.validate().map_err(invalid)?;
    let customer = Customer {
        id: uuid::Uuid::new_v4().to_string(),
        first_name: Some(req.first_name),
        last_name: Some(req.last_name),
        name: None,
        email: Some(req.email),
        phone: Some(req.phone),
        status: req.status,
        created_at: Some(Utc::now()),
    };
    tracing::info!(id = %customer.id, "customer added (mock)");
    state.data.lock().customers.push(customer);
    Ok((StatusCode::CREATED, message("Customer added successfully")))
}

async fn count_customers(State(state): AppState) -> Json<CustomerCount> {
    Json(CustomerCount {
        total_customers: state.data.lock().customers.len() as u64,
    })
}

async fn recent_customers(State(state): AppState) -> Json<Vec<Customer>> {
    let mut customers = state.data.lock().customers.clone();
    customers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    customers.truncate(RECENT);
    Json(customers)
}

/// Set a customer's status and echo the updated record back
fn set_customer_status(state: &MockState, id: &str, status: CustomerStatus) -> MockResult<Json<Value>> {
    let mut data = state.data.lock();
    let customer = data
        .customers
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(MockError::NotFound("Customer"))?;
    customer.status = status;
    tracing::info!(id, status = %status, "customer status changed (mock)");
    Ok(Json(json!({
        "message": format!("Customer {}", status),
        "data": customer,
    })))
}

async fn approve_customer(State(state): AppState, Path(id): Path<String>) -> MockResult<Json<Value>> {
    set_customer_status(&state, &id, CustomerStatus::Active)
}

async fn reject_customer(State(state): AppState, Path(id): Path<String>) -> MockResult<Json<Value>> {
    set_customer_status(&state, &id, CustomerStatus::Rejected)
}

async fn suspend_customer(State(state): AppState, Path(id): Path<String>) -> MockResult<Json<Value>> {
    set_customer_status(&state, &id, CustomerStatus::Suspended)
}

async fn reactivate_customer(
    State(state): AppState,
    Path(id): Path<String>,
) -> MockResult<Json<Value>> {
    set_customer_status(&state, &id, CustomerStatus::Active)
}

// =============================================================================
// Employees
// =============================================================================

fn employees_where(state: &MockState, status: EmployeeStatus) -> Json<Vec<Employee>> {
    let data = state.data.lock();
    Json(
        data.employees
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect(),
    )
}

async fn employees_all(State(state): AppState) -> Json<Vec<Employee>> {
    Json(state.data.lock().employees.clone())
}

async fn employees_active(State(state): AppState) -> Json<Vec<Employee>> {
    employees_where(&state, EmployeeStatus::Active)
}

async fn employees_suspended(State(state): AppState) -> Json<Vec<Employee>> {
    employees_where(&state, EmployeeStatus::Suspended)
}

async fn add_employee(
    State(state): AppState,
    Json(req): Json<NewEmployee>,
) -> MockResult<(StatusCode, Json<MessageResponse>)> {
    req.validate().map_err(invalid)?;
    let employee = Employee {
        id: uuid::Uuid::new_v4().to_string(),
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        role: req.role,
        password: Some(req.password),
        status: req.status,
        created_at: Some(Utc::now()),
    };
    tracing::info!(id = %employee.id, "employee added (mock)");
    state.data.lock().employees.push(employee);
    Ok((StatusCode::CREATED, message("Employee added successfully")))
}

async fn count_employees(State(state): AppState) -> Json<EmployeeCount> {
    Json(EmployeeCount {
        count: state.data.lock().employees.len() as u64,
    })
}

async fn recent_employees(State(state): AppState) -> Json<Vec<Employee>> {
    let mut employees = state.data.lock().employees.clone();
    employees.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    employees.truncate(RECENT);
    Json(employees)
}

async fn update_employee_status(
    State(state): AppState,
    Path(id): Path<String>,
    Json(req): Json<EmployeeStatusUpdate>,
) -> MockResult<Json<MessageResponse>> {
    let mut data = state.data.lock();
    let employee = data
        .employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(MockError::NotFound("Employee"))?;
    employee.status = req.status;
    Ok(message(format!("Employee status updated to {}", req.status)))
}

async fn delete_employee(
    State(state): AppState,
    Path(id): Path<String>,
) -> MockResult<Json<MessageResponse>> {
    let mut data = state.data.lock();
    let before = data.employees.len();
    data.employees.retain(|e| e.id != id);
    if data.employees.len() == before {
        return Err(MockError::NotFound("Employee"));
    }
    Ok(message("Employee deleted successfully"))
}

// =============================================================================
// Auth / Admins
// =============================================================================

async fn login(State(state): AppState, Json(req): Json<LoginRequest>) -> MockResult<Json<LoginResponse>> {
    let data = state.data.lock();
    let known = data
        .credentials
        .iter()
        .any(|(email, password)| *email == req.email && *password == req.password);
    if !known {
        return Err(MockError::InvalidCredentials);
    }
    Ok(Json(LoginResponse {
        message: Some("Login successful".to_string()),
        token: Some(uuid::Uuid::new_v4().simple().to_string()),
    }))
}

async fn admins(State(state): AppState) -> Json<Vec<Admin>> {
    Json(state.data.lock().admins.clone())
}

async fn admin_profile(State(state): AppState, Path(id): Path<String>) -> MockResult<Json<Admin>> {
    state
        .data
        .lock()
        .admins
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound("Admin"))
}

// =============================================================================
// Dashboard
// =============================================================================

async fn first_products(State(state): AppState) -> Json<Vec<ProductSummary>> {
    Json(state.data.lock().products.iter().take(4).cloned().collect())
}

async fn first_services(State(state): AppState) -> Json<Vec<ServiceSummary>> {
    Json(state.data.lock().services.iter().take(3).cloned().collect())
}

async fn total_products(State(state): AppState) -> Json<ProductCount> {
    Json(ProductCount {
        total_products: state.data.lock().products.len() as u64,
    })
}

async fn count_services(State(state): AppState) -> Json<ServiceCount> {
    Json(ServiceCount {
        count_services: Some(state.data.lock().services.len() as u64),
    })
}

fn paid_revenue(bookings: &[ProductBooking]) -> f64 {
    bookings
        .iter()
        .filter(|b| b.payment_status.as_deref() == Some("paid"))
        .filter_map(|b| b.payment_amount)
        .sum()
}

async fn total_revenue(State(state): AppState) -> Json<TotalRevenue> {
    Json(TotalRevenue {
        total_revenue: paid_revenue(&state.data.lock().product_bookings),
    })
}

// =============================================================================
// Reports
// =============================================================================

fn tally<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Breakdown {
    let mut counts = BTreeMap::new();
    for value in values.flatten() {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0u32), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / f64::from(n))
}

async fn customer_stats(State(state): AppState) -> Json<CustomerStats> {
    let data = state.data.lock();
    Json(CustomerStats {
        total: Some(data.customers.len() as u64),
        status_breakdown: tally(data.customers.iter().map(|c| Some(c.status.as_str()))),
    })
}

async fn commodity_report(State(state): AppState) -> Json<CommodityReport> {
    let data = state.data.lock();
    Json(CommodityReport {
        total: Some(data.products.len() as u64),
        total_pieces: Some(
            data.product_bookings
                .iter()
                .map(|b| u64::from(b.quantity))
                .sum(),
        ),
        avg_price: mean(data.products.iter().map(|p| p.price)),
        total_value: Some(data.products.iter().map(|p| p.price).sum()),
    })
}

async fn service_report(State(state): AppState) -> Json<ServiceReport> {
    let data = state.data.lock();
    Json(ServiceReport {
        total: Some(data.services.len() as u64),
        available: Some(data.services.len() as u64),
        unavailable: Some(0),
        avg_price: mean(data.services.iter().map(|s| s.price)),
        avg_duration: None,
    })
}

async fn booking_report(State(state): AppState) -> Json<BookingReport> {
    let data = state.data.lock();
    let bookings = &data.product_bookings;
    Json(BookingReport {
        total_bookings: Some(bookings.len() as u64),
        status_counts: tally(bookings.iter().map(|b| Some(b.status.as_str()))),
        payment_status_counts: tally(bookings.iter().map(|b| b.payment_status.as_deref())),
        payment_method_counts: tally(bookings.iter().map(|b| b.payment_method.as_deref())),
        total_revenue: Some(paid_revenue(bookings)),
    })
}

async fn service_booking_report(State(state): AppState) -> Json<ServiceBookingReport> {
    let data = state.data.lock();
    let bookings = &data.service_bookings;
    let per_service = tally(
        bookings
            .iter()
            .map(|b| b.service.as_ref().and_then(|s| s.name.as_deref())),
    );
    Json(ServiceBookingReport {
        total_bookings: Some(bookings.len() as u64),
        status_counts: tally(bookings.iter().map(|b| Some(b.status.as_str()))),
        payment_method_counts: tally(bookings.iter().map(|b| b.payment_method.as_deref())),
        service_booking_counts: per_service
            .into_iter()
            .map(|(name, count)| ServiceBookingCount {
                service_id: name.to_lowercase().replace(' ', "-"),
                service_name: name,
                count,
            })
            .collect(),
    })
}

// =============================================================================
// Bookings
// =============================================================================

async fn product_bookings(State(state): AppState) -> Json<Vec<ProductBooking>> {
    Json(state.data.lock().product_bookings.clone())
}

async fn service_bookings(State(state): AppState) -> Json<Vec<ServiceBooking>> {
    Json(state.data.lock().service_bookings.clone())
}

pub fn router(state: Arc<MockState>) -> Router {
    use tower::limit::ConcurrencyLimitLayer;

    Router::new()
        // Customers
        .route("/add/customer/seeCustomer", get(customers_all))
        .route("/add/customer/active", get(customers_active))
        .route("/add/customer/rejected", get(customers_rejected))
        .route("/add/customer/suspended", get(customers_suspended))
        .route("/add/customer/pending", get(customers_pending))
        .route("/add/customer/addCustomer", post(add_customer))
        .route("/add/customer/countCustomer", get(count_customers))
        .route("/add/customer/recent-customers", get(recent_customers))
        .route("/add/customer/approve/{id}", put(approve_customer))
        .route("/add/customer/reject/{id}", put(reject_customer))
        .route("/add/customer/suspend/{id}", put(suspend_customer))
        .route("/add/customer/reactivate/{id}", put(reactivate_customer))
        // Employees
        .route("/api/addemp", get(employees_all))
        .route("/api/addemp/active", get(employees_active))
        .route("/api/addemp/suspended", get(employees_suspended))
        .route("/api/addemp/addEmployee", post(add_employee))
        .route("/api/addemp/countEmployee", get(count_employees))
        .route("/api/addemp/recent-employees", get(recent_employees))
        .route("/api/addemp/updateStatus/{id}", put(update_employee_status))
        .route("/api/addemp/deleteEmployee/{id}", delete(delete_employee))
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/admins", get(admins))
        .route("/api/auth/profile/{id}", get(admin_profile))
        // Dashboard
        .route("/api/report/commodities/first-four", get(first_products))
        .route("/api/report/services/first-three", get(first_services))
        .route("/api/report/total-products", get(total_products))
        .route("/api/report/services/count", get(count_services))
        .route("/api/report/total-revenue", get(total_revenue))
        // Reports
        .route("/report/customers/stats", get(customer_stats))
        .route("/report/commodities/report", get(commodity_report))
        .route("/report/services/report", get(service_report))
        .route("/report/bookings/report", get(booking_report))
        .route("/report/reports/service-bookings", get(service_booking_report))
        // Bookings
        .route("/service/bookings/report", get(product_bookings))
        .route("/bookings", get(service_bookings))
        .layer(middleware::from_fn_with_state(state.clone(), inject_faults))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state)
}
