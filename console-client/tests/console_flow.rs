//! End-to-end flows against the in-memory API

use std::sync::Arc;

use console_client::dashboard::Dashboard;
use console_client::reports::Reports;
use console_client::transition::{begin, settle};
use console_client::{
    ActionError, ClientError, ConsoleApi, CustomerAction, CustomerForm, CustomerListFilter,
    EmployeeAction, EmployeeForm, EmployeeListFilter, EntityListStore, FormStatus, FormView, HttpClient,
    LoadState, LoginForm, OneshotHttpClient, TransitionController, ViewScope,
};
use console_mock::MockState;
use shared::models::{Customer, CustomerStatus, Employee, EmployeeStatus};

fn setup() -> (Arc<MockState>, ConsoleApi<OneshotHttpClient>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("console_client=debug")
        .with_test_writer()
        .try_init();

    let state = Arc::new(MockState::seeded());
    let api = ConsoleApi::new(OneshotHttpClient::new(console_mock::router(state.clone())));
    (state, api)
}

async fn load_customers(api: &ConsoleApi<OneshotHttpClient>) -> EntityListStore<Customer> {
    let mut store = EntityListStore::new();
    let generation = store.begin_load();
    store.finish_load(generation, api.list_customers(CustomerListFilter::All).await);
    store
}

async fn load_employees(api: &ConsoleApi<OneshotHttpClient>) -> EntityListStore<Employee> {
    let mut store = EntityListStore::new();
    let generation = store.begin_load();
    store.finish_load(generation, api.list_employees(EmployeeListFilter::All).await);
    store
}

#[tokio::test]
async fn test_load_fault_sets_banner() {
    let (state, api) = setup();
    state.fail("add/customer/seeCustomer");

    let store = load_customers(&api).await;
    assert!(matches!(store.load_state(), LoadState::Failed(msg) if msg == "Injected fault"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_status_filters_fetch_subsets() {
    let (_state, api) = setup();
    let pending = api.list_customers(CustomerListFilter::Pending).await.unwrap();
    assert!(!pending.is_empty());
    assert!(pending.iter().all(|c| c.status == CustomerStatus::Pending));

    let suspended = api.list_employees(EmployeeListFilter::Suspended).await.unwrap();
    assert!(suspended.iter().all(|e| e.status == EmployeeStatus::Suspended));
}

#[tokio::test]
async fn test_approve_and_reject_pending_customers() {
    let (_state, api) = setup();
    let controller = TransitionController::new(api.clone());
    let mut store = load_customers(&api).await;

    let before = store.get("c-1001").unwrap().clone();
    controller
        .run(&mut store, "c-1001", CustomerAction::Approve)
        .await
        .unwrap();
    let after = store.get("c-1001").unwrap();
    assert_eq!(after.status, CustomerStatus::Active);
    assert_eq!(after.email, before.email);
    assert_eq!(after.phone, before.phone);

    controller
        .run(&mut store, "c-1005", CustomerAction::Reject)
        .await
        .unwrap();
    assert_eq!(store.get("c-1005").unwrap().status, CustomerStatus::Rejected);

    // The list now agrees with the service
    let fresh = load_customers(&api).await;
    assert_eq!(fresh.records(), store.records());
}

#[tokio::test]
async fn test_suspend_then_activate_employee() {
    let (_state, api) = setup();
    let controller = TransitionController::new(api.clone());
    let mut store = load_employees(&api).await;

    controller
        .run(&mut store, "e-2001", EmployeeAction::Suspend)
        .await
        .unwrap();
    assert_eq!(store.get("e-2001").unwrap().status, EmployeeStatus::Suspended);

    controller
        .run(&mut store, "e-2001", EmployeeAction::Activate)
        .await
        .unwrap();
    assert_eq!(store.get("e-2001").unwrap().status, EmployeeStatus::Active);
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let (state, api) = setup();
    let controller = TransitionController::new(api.clone());
    let mut store = load_employees(&api).await;
    let before = store.len();

    controller
        .run(&mut store, "e-2002", EmployeeAction::Delete)
        .await
        .unwrap();
    assert_eq!(store.len(), before - 1);
    assert!(!store.contains("e-2002"));
    assert_eq!(
        state.mutations(),
        vec!["DELETE api/addemp/deleteEmployee/e-2002".to_string()]
    );
}

#[tokio::test]
async fn test_failed_mutation_leaves_list_unchanged() {
    let (state, api) = setup();
    let controller = TransitionController::new(api.clone());
    let mut store = load_customers(&api).await;
    let snapshot = store.records().to_vec();

    state.fail("add/customer/suspend/c-1002");
    let err = controller
        .run(&mut store, "c-1002", CustomerAction::Suspend)
        .await
        .unwrap_err();

    assert!(matches!(err, ActionError::Remote { source: ClientError::Api { status: 500, .. }, .. }));
    assert_eq!(store.records(), snapshot.as_slice());
    assert!(store.row_error("c-1002").is_some());

    // The next attempt clears the row error once it succeeds
    state.heal("add/customer/suspend/c-1002");
    controller
        .run(&mut store, "c-1002", CustomerAction::Suspend)
        .await
        .unwrap();
    assert!(store.row_error("c-1002").is_none());
}

#[tokio::test]
async fn test_invalid_transition_sends_nothing() {
    let (state, api) = setup();
    let controller = TransitionController::new(api.clone());
    let mut store = load_customers(&api).await;

    let err = controller
        .run(&mut store, "c-1004", CustomerAction::Approve)
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::InvalidTransition { .. }));
    assert!(state.mutations().is_empty());
}

#[tokio::test]
async fn test_double_submit_is_rejected_while_in_flight() {
    let (state, api) = setup();
    let mut store = load_employees(&api).await;

    let pending = begin(&mut store, "e-2001", EmployeeAction::Suspend).unwrap();
    assert!(matches!(
        begin(&mut store, "e-2001", EmployeeAction::Delete),
        Err(ActionError::InFlight(_))
    ));

    let result = api.mutate(&pending.request).await;
    settle(&mut store, pending, result).unwrap();
    assert_eq!(state.mutations().len(), 1);
    assert!(!store.is_in_flight("e-2001"));
}

#[tokio::test]
async fn test_dashboard_panels_fail_independently() {
    let (state, api) = setup();
    state.fail("api/report/total-revenue");

    let mut dashboard = Dashboard::new();
    for update in futures::future::join_all(Dashboard::requests(&api)).await {
        dashboard.apply(update);
    }

    assert!(dashboard.is_settled());
    assert!(dashboard.total_revenue.error().is_some());
    assert_eq!(dashboard.employee_count.value(), Some(&3));
    assert_eq!(dashboard.customer_count.value(), Some(&5));
    assert_eq!(dashboard.recent_products.value().map(Vec::len), Some(4));
    assert_eq!(dashboard.recent_services.value().map(Vec::len), Some(3));
    assert_eq!(dashboard.service_count.value(), Some(&Some(4)));
}

#[tokio::test]
async fn test_reports_load() {
    let (state, api) = setup();
    state.fail("report/services/report");

    let mut reports = Reports::new();
    for update in futures::future::join_all(Reports::requests(&api)).await {
        reports.apply(update);
    }

    assert!(reports.services.error().is_some());
    let stats = reports.customer_stats.value().unwrap();
    assert_eq!(stats.total, Some(5));
    assert_eq!(stats.status_breakdown.get("pending"), Some(&2));
    let bookings = reports.bookings.value().unwrap();
    assert_eq!(bookings.total_revenue, Some(9000.0));
}

#[tokio::test]
async fn test_add_forms_submit_and_reset() {
    let (_state, api) = setup();

    let mut employee = FormView::<EmployeeForm>::new();
    employee.form = EmployeeForm {
        first_name: "Ada".into(),
        last_name: "Byron".into(),
        email: "ada@firebliss.test".into(),
        role: "analyst".into(),
        password: "secret".into(),
    };
    let payload = employee.prepare().unwrap();
    let result = api.add_employee(&payload).await;
    employee.finish(&result);
    assert_eq!(
        employee.status(),
        &FormStatus::Succeeded("Employee added successfully!".into())
    );
    assert!(employee.form.first_name.is_empty());

    let employees = api.list_employees(EmployeeListFilter::Active).await.unwrap();
    assert!(employees.iter().any(|e| e.email == "ada@firebliss.test"));

    let mut customer = FormView::<CustomerForm>::new();
    customer.form.first_name = "Only".into();
    assert!(customer.prepare().is_err());

    customer.form = CustomerForm {
        first_name: "Zed".into(),
        last_name: "Ola".into(),
        email: "zed@example.com".into(),
        phone: "0799".into(),
        password: "pw".into(),
    };
    let payload = customer.prepare().unwrap();
    customer.finish(&api.add_customer(&payload).await);
    let pending = api.list_customers(CustomerListFilter::Pending).await.unwrap();
    assert!(pending.iter().any(|c| c.email.as_deref() == Some("zed@example.com")));
}

#[tokio::test]
async fn test_login_sets_token_or_reports_message() {
    let (_state, api) = setup();

    let mut form = FormView::<LoginForm>::new();
    form.form.email = "admin@firebliss.test".into();
    form.form.password = "wrong".into();
    let payload = form.prepare().unwrap();
    form.finish(&api.login(&payload).await);
    assert_eq!(form.status(), &FormStatus::Failed("Invalid credentials".into()));
    assert!(api.http().token().await.is_none());

    form.form.password = "admin123".into();
    let payload = form.prepare().unwrap();
    let result = api.login(&payload).await;
    assert!(result.is_ok());
    form.finish(&result);
    assert!(matches!(form.status(), FormStatus::Succeeded(_)));
    assert!(api.http().token().await.is_some());
}

#[tokio::test]
async fn test_torn_down_view_discards_results() {
    let (_state, api) = setup();
    let scope = ViewScope::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let list_api = api.clone();
    let handle = scope.spawn(
        async move { list_api.list_admins().await },
        move |epoch, result| {
            let _ = tx.send((epoch, result));
        },
    );
    scope.cancel();
    handle.await.unwrap();
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_admin_profile_and_bookings() {
    let (_state, api) = setup();
    let admins = api.list_admins().await.unwrap();
    let profile = api.admin_profile(&admins[0].id).await.unwrap();
    assert_eq!(profile, admins[0]);

    assert!(matches!(
        api.admin_profile("missing").await,
        Err(ClientError::Api { status: 404, .. })
    ));

    assert_eq!(api.product_bookings().await.unwrap().len(), 2);
    assert_eq!(api.service_bookings().await.unwrap().len(), 2);
}
