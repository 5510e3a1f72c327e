//! Console Client - typed access to the business API
//!
//! Provides the remote resource client, the per-view list stores and the
//! status transition logic the admin console is built on.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod forms;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
pub mod reports;
pub mod scope;
pub mod store;
pub mod transition;
pub mod view;

pub use aggregate::Aggregate;
pub use api::{ConsoleApi, CustomerListFilter, EmployeeListFilter};
pub use config::ClientConfig;
pub use dashboard::{Dashboard, DashboardUpdate};
pub use error::{ClientError, ClientResult};
pub use forms::{CustomerForm, EmployeeForm, Form, FormError, FormStatus, FormView, LoginForm};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
pub use reports::{ReportUpdate, Reports};
pub use scope::ViewScope;
pub use store::{EntityListStore, LoadState};
pub use transition::{ActionError, CustomerAction, EmployeeAction, TransitionController};
pub use view::{CustomersView, EmployeesView, ListView};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, MessageResponse, NewCustomer, NewEmployee};
