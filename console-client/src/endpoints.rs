//! Endpoint table
//!
//! Paths are relative to the configured base URL. Mutation paths take the
//! record's `_id` as their last segment.

// ========== Customers ==========
pub const CUSTOMERS_ALL: &str = "add/customer/seeCustomer";
pub const CUSTOMERS_ACTIVE: &str = "add/customer/active";
pub const CUSTOMERS_REJECTED: &str = "add/customer/rejected";
pub const CUSTOMERS_SUSPENDED: &str = "add/customer/suspended";
pub const CUSTOMERS_PENDING: &str = "add/customer/pending";
pub const CUSTOMER_ADD: &str = "add/customer/addCustomer";
pub const CUSTOMER_COUNT: &str = "add/customer/countCustomer";
pub const CUSTOMERS_RECENT: &str = "add/customer/recent-customers";

/// `PUT add/customer/{approve|reject|suspend|reactivate}/{id}`
pub fn customer_action(action: &str, id: &str) -> String {
    format!("add/customer/{}/{}", action, id)
}

// ========== Employees ==========
pub const EMPLOYEES_ALL: &str = "api/addemp";
pub const EMPLOYEES_ACTIVE: &str = "api/addemp/active";
pub const EMPLOYEES_SUSPENDED: &str = "api/addemp/suspended";
pub const EMPLOYEE_ADD: &str = "api/addemp/addEmployee";
pub const EMPLOYEE_COUNT: &str = "api/addemp/countEmployee";
pub const EMPLOYEES_RECENT: &str = "api/addemp/recent-employees";

pub fn employee_status(id: &str) -> String {
    format!("api/addemp/updateStatus/{}", id)
}

pub fn employee_delete(id: &str) -> String {
    format!("api/addemp/deleteEmployee/{}", id)
}

// ========== Admins / Auth ==========
pub const LOGIN: &str = "api/auth/login";
pub const ADMINS: &str = "api/auth/admins";

pub fn admin_profile(id: &str) -> String {
    format!("api/auth/profile/{}", id)
}

// ========== Dashboard ==========
pub const PRODUCTS_RECENT: &str = "api/report/commodities/first-four";
pub const SERVICES_RECENT: &str = "api/report/services/first-three";
pub const PRODUCT_COUNT: &str = "api/report/total-products";
pub const SERVICE_COUNT: &str = "api/report/services/count";
pub const TOTAL_REVENUE: &str = "api/report/total-revenue";

// ========== Reports ==========
pub const REPORT_CUSTOMER_STATS: &str = "report/customers/stats";
pub const REPORT_COMMODITIES: &str = "report/commodities/report";
pub const REPORT_SERVICES: &str = "report/services/report";
pub const REPORT_BOOKINGS: &str = "report/bookings/report";
pub const REPORT_SERVICE_BOOKINGS: &str = "report/reports/service-bookings";

// ========== Bookings ==========
pub const PRODUCT_BOOKINGS: &str = "service/bookings/report";
pub const SERVICE_BOOKINGS: &str = "bookings";

/// Downloadable receipt for one product booking
pub fn product_booking_receipt(id: &str) -> String {
    format!("product-bookings/{}/report", id)
}
