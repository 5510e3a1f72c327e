//! Console state and input handling
//!
//! `App` owns the current screen and the `ViewScope` of that screen. Work a
//! screen starts runs on the runtime and comes back through the event channel
//! tagged with the scope epoch; anything tagged with an older epoch belongs to
//! a screen that no longer exists and is dropped.

use std::future::Future;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use console_client::aggregate::Aggregate;
use console_client::transition::{PendingMutation, Transition, begin, settle};
use console_client::{
    ClientResult, ConsoleApi, CustomerAction, CustomerForm, CustomersView, Dashboard,
    DashboardUpdate, EmployeeAction, EmployeeForm, EmployeesView, Form, FormView, HttpClient,
    ListView, LoginForm, LoginRequest, LoginResponse, NewCustomer, NewEmployee, ReportUpdate,
    Reports, ViewScope,
};
use shared::models::{Admin, Customer, Employee, ProductBooking, ServiceBooking};

use crate::routes::Route;

/// Result of background work, addressed to the screen that started it
#[derive(Debug)]
pub enum AppEvent {
    /// List fetches carry the store generation they were started as
    Customers(u64, ClientResult<Vec<Customer>>),
    Employees(u64, ClientResult<Vec<Employee>>),
    Admins(u64, ClientResult<Vec<Admin>>),
    Profile(ClientResult<Admin>),
    ProductBookings(u64, ClientResult<Vec<ProductBooking>>),
    ServiceBookings(u64, ClientResult<Vec<ServiceBooking>>),
    Dashboard(DashboardUpdate),
    Report(ReportUpdate),
    CustomerMutation(PendingMutation<CustomerAction>, ClientResult<serde_json::Value>),
    EmployeeMutation(PendingMutation<EmployeeAction>, ClientResult<serde_json::Value>),
    CustomerAdded(ClientResult<serde_json::Value>),
    EmployeeAdded(ClientResult<serde_json::Value>),
    LoggedIn(ClientResult<LoginResponse>),
}

#[derive(Debug)]
pub struct Tagged {
    pub epoch: u64,
    pub event: AppEvent,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into a form
    Editing,
    /// Typing a search query
    Search,
    /// Typing a route path
    Goto,
}

/// One-line status message under the main pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// A searchable table with a cursor
#[derive(Debug, Clone)]
pub struct Table<T: shared::Record> {
    pub list: ListView<T>,
    pub selected: usize,
}

impl<T: shared::Record + shared::Searchable> Default for Table<T> {
    fn default() -> Self {
        Self {
            list: ListView::new(),
            selected: 0,
        }
    }
}

impl<T: shared::Record + shared::Searchable> Table<T> {
    fn len(&self) -> usize {
        self.list.visible().len()
    }

    fn selected_id(&self) -> Option<String> {
        self.list.visible_id(self.selected)
    }

    fn step(&mut self, delta: isize) {
        let len = self.len();
        self.selected = match len {
            0 => 0,
            _ => self.selected.saturating_add_signed(delta).min(len - 1),
        };
    }

    fn clamp(&mut self) {
        self.step(0);
    }
}

/// State of the screen on display
#[derive(Debug)]
pub enum Screen {
    Welcome,
    Login(FormView<LoginForm>),
    Dashboard(Box<Dashboard>),
    Customers {
        view: CustomersView,
        selected: usize,
    },
    AddCustomer(FormView<CustomerForm>),
    Employees {
        view: EmployeesView,
        selected: usize,
    },
    AddEmployee(FormView<EmployeeForm>),
    Admins(Table<Admin>),
    Reports(Box<Reports>),
    ProductBookings(Table<ProductBooking>),
    ServiceBookings(Table<ServiceBooking>),
    Profile {
        id: String,
        admin: Aggregate<Admin>,
    },
}

impl Screen {
    fn for_route(route: &Route) -> Screen {
        match route {
            Route::Welcome => Screen::Welcome,
            Route::Login => Screen::Login(FormView::new()),
            Route::Dashboard => Screen::Dashboard(Box::default()),
            Route::Customers => Screen::Customers {
                view: CustomersView::default(),
                selected: 0,
            },
            Route::AddCustomer => Screen::AddCustomer(FormView::new()),
            Route::Employees => Screen::Employees {
                view: EmployeesView::default(),
                selected: 0,
            },
            Route::AddEmployee => Screen::AddEmployee(FormView::new()),
            Route::Admins => Screen::Admins(Table::default()),
            Route::Reports => Screen::Reports(Box::default()),
            Route::ProductBookings => Screen::ProductBookings(Table::default()),
            Route::ServiceBookings => Screen::ServiceBookings(Table::default()),
            Route::Profile(id) => Screen::Profile {
                id: id.clone(),
                admin: Aggregate::Loading,
            },
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Screen::Login(_) | Screen::AddCustomer(_) | Screen::AddEmployee(_)
        )
    }

    pub fn is_searchable(&self) -> bool {
        matches!(
            self,
            Screen::Customers { .. }
                | Screen::Employees { .. }
                | Screen::Admins(_)
                | Screen::ProductBookings(_)
                | Screen::ServiceBookings(_)
        )
    }

    pub fn query(&self) -> &str {
        match self {
            Screen::Customers { view, .. } => view.list.query(),
            Screen::Employees { view, .. } => view.list.query(),
            Screen::Admins(t) => t.list.query(),
            Screen::ProductBookings(t) => t.list.query(),
            Screen::ServiceBookings(t) => t.list.query(),
            _ => "",
        }
    }

    fn set_query(&mut self, query: &str) {
        match self {
            Screen::Customers { view, selected } => {
                view.list.set_query(query);
                *selected = 0;
            }
            Screen::Employees { view, selected } => {
                view.list.set_query(query);
                *selected = 0;
            }
            Screen::Admins(t) => {
                t.list.set_query(query);
                t.selected = 0;
            }
            Screen::ProductBookings(t) => {
                t.list.set_query(query);
                t.selected = 0;
            }
            Screen::ServiceBookings(t) => {
                t.list.set_query(query);
                t.selected = 0;
            }
            _ => {}
        }
    }

    fn step(&mut self, delta: isize) {
        fn clamp(selected: &mut usize, len: usize, delta: isize) {
            *selected = match len {
                0 => 0,
                _ => selected.saturating_add_signed(delta).min(len - 1),
            };
        }
        match self {
            Screen::Customers { view, selected } => clamp(selected, view.list.visible().len(), delta),
            Screen::Employees { view, selected } => clamp(selected, view.list.visible().len(), delta),
            Screen::Admins(t) => t.step(delta),
            Screen::ProductBookings(t) => t.step(delta),
            Screen::ServiceBookings(t) => t.step(delta),
            _ => {}
        }
    }
}

/// A validated form payload ready to send
enum Submission {
    Login(LoginRequest),
    Customer(NewCustomer),
    Employee(NewEmployee),
}

pub struct App<C> {
    api: ConsoleApi<C>,
    tx: mpsc::UnboundedSender<Tagged>,
    scope: ViewScope,
    pub route: Route,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub input: Input,
    pub notice: Option<Notice>,
    pub logger_state: TuiWidgetState,
    pub target: String,
    pub should_quit: bool,
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(api: ConsoleApi<C>, tx: mpsc::UnboundedSender<Tagged>, target: impl Into<String>) -> Self {
        Self {
            api,
            tx,
            scope: ViewScope::new(),
            route: Route::Welcome,
            screen: Screen::Welcome,
            input_mode: InputMode::Normal,
            input: Input::default(),
            notice: None,
            logger_state: TuiWidgetState::new(),
            target: target.into(),
            should_quit: false,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.scope.epoch()
    }

    /// Leave the current screen and build a fresh one for `route`.
    ///
    /// The old screen's scope is cancelled, so nothing it started can land
    /// on the new one.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(path = %route, "navigate");
        self.scope = ViewScope::new();
        self.screen = Screen::for_route(&route);
        self.input_mode = if self.screen.is_form() {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
        self.input.reset();
        self.route = route;
        self.load();
    }

    /// Start the fetches the current screen shows
    pub fn load(&mut self) {
        match &mut self.screen {
            Screen::Dashboard(dashboard) => {
                **dashboard = Dashboard::new();
                for request in Dashboard::requests(&self.api) {
                    spawn_tagged(&self.scope, &self.tx, request, AppEvent::Dashboard);
                }
            }
            Screen::Reports(reports) => {
                **reports = Reports::new();
                for request in Reports::requests(&self.api) {
                    spawn_tagged(&self.scope, &self.tx, request, AppEvent::Report);
                }
            }
            Screen::Customers { view, .. } => {
                let generation = view.list.store.begin_load();
                let (api, filter) = (self.api.clone(), view.filter);
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.list_customers(filter).await },
                    move |result| AppEvent::Customers(generation, result),
                );
            }
            Screen::Employees { view, .. } => {
                let generation = view.list.store.begin_load();
                let (api, filter) = (self.api.clone(), view.filter);
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.list_employees(filter).await },
                    move |result| AppEvent::Employees(generation, result),
                );
            }
            Screen::Admins(t) => {
                let generation = t.list.store.begin_load();
                let api = self.api.clone();
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.list_admins().await },
                    move |result| AppEvent::Admins(generation, result),
                );
            }
            Screen::ProductBookings(t) => {
                let generation = t.list.store.begin_load();
                let api = self.api.clone();
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.product_bookings().await },
                    move |result| AppEvent::ProductBookings(generation, result),
                );
            }
            Screen::ServiceBookings(t) => {
                let generation = t.list.store.begin_load();
                let api = self.api.clone();
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.service_bookings().await },
                    move |result| AppEvent::ServiceBookings(generation, result),
                );
            }
            Screen::Profile { id, admin } => {
                *admin = Aggregate::Loading;
                let (api, id) = (self.api.clone(), id.clone());
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.admin_profile(&id).await },
                    AppEvent::Profile,
                );
            }
            Screen::Welcome | Screen::Login(_) | Screen::AddCustomer(_) | Screen::AddEmployee(_) => {}
        }
    }

    // =========================================================================
    // Background results
    // =========================================================================

    pub fn handle_event(&mut self, tagged: Tagged) {
        if tagged.epoch != self.scope.epoch() {
            tracing::debug!(epoch = tagged.epoch, "dropping result for a closed screen");
            return;
        }

        let mut next_route = None;
        match (tagged.event, &mut self.screen) {
            (AppEvent::Dashboard(update), Screen::Dashboard(dashboard)) => dashboard.apply(update),
            (AppEvent::Report(update), Screen::Reports(reports)) => reports.apply(update),
            (AppEvent::Customers(generation, result), Screen::Customers { view, selected }) => {
                if view.list.store.finish_load(generation, result) {
                    *selected = 0;
                }
            }
            (AppEvent::Employees(generation, result), Screen::Employees { view, selected }) => {
                if view.list.store.finish_load(generation, result) {
                    *selected = 0;
                }
            }
            (AppEvent::Admins(generation, result), Screen::Admins(t)) => {
                t.list.store.finish_load(generation, result);
                t.clamp();
            }
            (AppEvent::ProductBookings(generation, result), Screen::ProductBookings(t)) => {
                t.list.store.finish_load(generation, result);
                t.clamp();
            }
            (AppEvent::ServiceBookings(generation, result), Screen::ServiceBookings(t)) => {
                t.list.store.finish_load(generation, result);
                t.clamp();
            }
            (AppEvent::Profile(result), Screen::Profile { admin, .. }) => {
                if let Err(e) = &result {
                    tracing::error!(error = %e, "failed to load admin profile");
                }
                *admin = Aggregate::from_result(result);
            }
            (AppEvent::CustomerMutation(pending, result), Screen::Customers { view, .. }) => {
                let label = pending.action.label();
                self.notice = Some(match settle(&mut view.list.store, pending, result) {
                    Ok(()) => Notice::info(format!("{} done", label)),
                    Err(e) => Notice::error(e.to_string()),
                });
            }
            (AppEvent::EmployeeMutation(pending, result), Screen::Employees { view, selected }) => {
                let label = pending.action.label();
                self.notice = Some(match settle(&mut view.list.store, pending, result) {
                    Ok(()) => Notice::info(format!("{} done", label)),
                    Err(e) => Notice::error(e.to_string()),
                });
                let len = view.list.visible().len();
                *selected = (*selected).min(len.saturating_sub(1));
            }
            (AppEvent::CustomerAdded(result), Screen::AddCustomer(form)) => form.finish(&result),
            (AppEvent::EmployeeAdded(result), Screen::AddEmployee(form)) => form.finish(&result),
            (AppEvent::LoggedIn(result), Screen::Login(form)) => {
                form.finish(&result);
                if result.is_ok() {
                    self.notice = Some(Notice::info(LoginForm::success_message()));
                    next_route = Some(Route::Dashboard);
                }
            }
            (event, _) => {
                tracing::debug!(?event, "result does not match the current screen");
            }
        }

        if let Some(route) = next_route {
            self.navigate(route);
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_form_key(key),
            InputMode::Search => self.handle_search_key(key),
            InputMode::Goto => self.handle_goto_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.navigate(self.route.next()),
            KeyCode::BackTab => self.navigate(self.route.prev()),
            KeyCode::Char('g') | KeyCode::Char(':') => {
                self.input = Input::default();
                self.input_mode = InputMode::Goto;
            }
            KeyCode::Char('/') if self.screen.is_searchable() => {
                self.input = Input::new(self.screen.query().to_string());
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('e') if self.screen.is_form() => self.input_mode = InputMode::Editing,
            KeyCode::Char('r') => {
                self.notice = None;
                self.load();
            }
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Up | KeyCode::Char('k') => self.screen.step(-1),
            KeyCode::Down | KeyCode::Char('j') => self.screen.step(1),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Esc if matches!(self.screen, Screen::Profile { .. }) => {
                self.navigate(Route::Admins)
            }
            KeyCode::Char(c) => self.row_action(c),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.with_form(|f| f.next()),
            KeyCode::BackTab | KeyCode::Up => self.with_form(|f| f.prev()),
            KeyCode::Backspace => self.with_form(|f| f.backspace()),
            KeyCode::Char(c) => self.with_form(|f| f.push(c)),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            _ => {
                self.input.handle_event(&Event::Key(key));
                let query = self.input.value().to_string();
                self.screen.set_query(&query);
            }
        }
    }

    fn handle_goto_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                let path = self.input.value().to_string();
                self.input.reset();
                self.input_mode = InputMode::Normal;
                match Route::parse(&path) {
                    Some(route) => self.navigate(route),
                    None => {
                        tracing::warn!(path = %path, "unknown route");
                        self.notice = Some(Notice::error(format!("No page at {}", path)));
                    }
                }
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn cycle_filter(&mut self) {
        match &mut self.screen {
            Screen::Customers { view, .. } => view.filter = view.filter.next(),
            Screen::Employees { view, .. } => view.filter = view.filter.next(),
            _ => return,
        }
        self.load();
    }

    fn open_selected(&mut self) {
        match &self.screen {
            Screen::Welcome => self.navigate(Route::Login),
            Screen::Admins(t) => {
                if let Some(id) = t.selected_id() {
                    self.navigate(Route::Profile(id));
                }
            }
            Screen::ProductBookings(t) => {
                if let Some(id) = t.selected_id() {
                    let receipt = console_client::endpoints::product_booking_receipt(&id);
                    self.notice = Some(Notice::info(format!("Receipt: {}", receipt)));
                }
            }
            _ => {}
        }
    }

    /// Status actions on the selected row
    fn row_action(&mut self, key: char) {
        match &self.screen {
            Screen::Customers { .. } => {
                let action = match key {
                    'a' => CustomerAction::Approve,
                    'x' => CustomerAction::Reject,
                    's' => CustomerAction::Suspend,
                    'v' => CustomerAction::Reactivate,
                    _ => return,
                };
                self.customer_action(action);
            }
            Screen::Employees { .. } => {
                let action = match key {
                    's' => EmployeeAction::Suspend,
                    'a' => EmployeeAction::Activate,
                    'd' => EmployeeAction::Delete,
                    _ => return,
                };
                self.employee_action(action);
            }
            _ => {}
        }
    }

    pub fn customer_action(&mut self, action: CustomerAction) {
        let begun = match &mut self.screen {
            Screen::Customers { view, selected } => {
                let Some(id) = view.list.visible_id(*selected) else {
                    return;
                };
                begin(&mut view.list.store, &id, action)
            }
            _ => return,
        };
        match begun {
            Ok(pending) => {
                let api = self.api.clone();
                let request = pending.request.clone();
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.mutate(&request).await },
                    move |result| AppEvent::CustomerMutation(pending, result),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "customer action rejected");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    pub fn employee_action(&mut self, action: EmployeeAction) {
        let begun = match &mut self.screen {
            Screen::Employees { view, selected } => {
                let Some(id) = view.list.visible_id(*selected) else {
                    return;
                };
                begin(&mut view.list.store, &id, action)
            }
            _ => return,
        };
        match begun {
            Ok(pending) => {
                let api = self.api.clone();
                let request = pending.request.clone();
                spawn_tagged(
                    &self.scope,
                    &self.tx,
                    async move { api.mutate(&request).await },
                    move |result| AppEvent::EmployeeMutation(pending, result),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "employee action rejected");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    fn with_form(&mut self, edit: impl FnOnce(&mut dyn FormEdit)) {
        match &mut self.screen {
            Screen::Login(form) => edit(form),
            Screen::AddCustomer(form) => edit(form),
            Screen::AddEmployee(form) => edit(form),
            _ => {}
        }
    }

    pub fn submit_form(&mut self) {
        let prepared = match &mut self.screen {
            Screen::Login(form) => form.prepare().map(Submission::Login),
            Screen::AddCustomer(form) => form.prepare().map(Submission::Customer),
            Screen::AddEmployee(form) => form.prepare().map(Submission::Employee),
            _ => return,
        };
        let submission = match prepared {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "form not submitted");
                return;
            }
        };

        let api = self.api.clone();
        match submission {
            Submission::Login(request) => spawn_tagged(
                &self.scope,
                &self.tx,
                async move { api.login(&request).await },
                AppEvent::LoggedIn,
            ),
            Submission::Customer(customer) => spawn_tagged(
                &self.scope,
                &self.tx,
                async move { api.add_customer(&customer).await },
                AppEvent::CustomerAdded,
            ),
            Submission::Employee(employee) => spawn_tagged(
                &self.scope,
                &self.tx,
                async move { api.add_employee(&employee).await },
                AppEvent::EmployeeAdded,
            ),
        }
    }
}

/// Run `fut` inside `scope` and post its wrapped output to the event loop
fn spawn_tagged<F, W>(scope: &ViewScope, tx: &mpsc::UnboundedSender<Tagged>, fut: F, wrap: W)
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
    W: FnOnce(F::Output) -> AppEvent + Send + 'static,
{
    let tx = tx.clone();
    scope.spawn(fut, move |epoch, output| {
        if tx.send(Tagged { epoch, event: wrap(output) }).is_err() {
            tracing::debug!("event loop gone");
        }
    });
}

/// Keystroke editing over any form
trait FormEdit {
    fn next(&mut self);
    fn prev(&mut self);
    fn push(&mut self, c: char);
    fn backspace(&mut self);
}

impl<F: Form> FormEdit for FormView<F> {
    fn next(&mut self) {
        self.focus_next();
    }

    fn prev(&mut self) {
        self.focus_prev();
    }

    fn push(&mut self, c: char) {
        if let Some(field) = self.focused_mut() {
            field.push(c);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_client::OneshotHttpClient;
    use console_mock::MockState;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> (App<OneshotHttpClient>, mpsc::UnboundedReceiver<Tagged>) {
        let state = Arc::new(MockState::seeded());
        let api = ConsoleApi::new(OneshotHttpClient::new(console_mock::router(state)));
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(api, tx, "test"), rx)
    }

    async fn drain(app: &mut App<OneshotHttpClient>, rx: &mut mpsc::UnboundedReceiver<Tagged>, n: usize) {
        for _ in 0..n {
            if let Some(tagged) = rx.recv().await {
                app.handle_event(tagged);
            }
        }
    }

    #[tokio::test]
    async fn test_customers_load_and_approve() {
        let (mut app, mut rx) = app();
        app.navigate(Route::Customers);
        drain(&mut app, &mut rx, 1).await;

        app.handle_key(key(KeyCode::Char('a')));
        drain(&mut app, &mut rx, 1).await;

        let Screen::Customers { view, .. } = &app.screen else {
            panic!("wrong screen");
        };
        assert_eq!(
            view.list.store.get("c-1001").unwrap().status,
            shared::models::CustomerStatus::Active
        );
        assert_eq!(app.notice, Some(Notice::info("Approve done")));
    }

    #[tokio::test]
    async fn test_results_for_closed_screen_are_dropped() {
        let (mut app, _rx) = app();
        app.navigate(Route::Customers);
        let stale = app.epoch();
        app.navigate(Route::Employees);

        app.handle_event(Tagged {
            epoch: stale,
            event: AppEvent::Customers(1, Ok(vec![])),
        });
        let Screen::Employees { view, .. } = &app.screen else {
            panic!("wrong screen");
        };
        assert!(view.list.store.is_loading());
    }

    #[tokio::test]
    async fn test_slow_list_from_previous_filter_is_dropped() {
        let (mut app, _rx) = app();
        app.navigate(Route::Customers);
        let epoch = app.epoch();
        app.handle_key(key(KeyCode::Char('f')));

        let Screen::Customers { view, .. } = &app.screen else {
            panic!("wrong screen");
        };
        assert_eq!(view.filter, console_client::CustomerListFilter::Active);

        let row = |id: &str, status: &str| -> Customer {
            serde_json::from_value(serde_json::json!({"_id": id, "status": status})).unwrap()
        };
        // The Active fetch (generation 2) lands before the All fetch (generation 1)
        app.handle_event(Tagged {
            epoch,
            event: AppEvent::Customers(2, Ok(vec![row("c-2", "active")])),
        });
        app.handle_event(Tagged {
            epoch,
            event: AppEvent::Customers(
                1,
                Ok(vec![row("c-1", "pending"), row("c-2", "active")]),
            ),
        });

        let Screen::Customers { view, .. } = &app.screen else {
            panic!("wrong screen");
        };
        assert!(
            view.list
                .store
                .records()
                .iter()
                .all(|c| c.status == shared::models::CustomerStatus::Active)
        );
        assert_eq!(view.list.store.len(), 1);
    }

    #[tokio::test]
    async fn test_search_narrows_rows() {
        let (mut app, mut rx) = app();
        app.navigate(Route::Employees);
        drain(&mut app, &mut rx, 1).await;

        app.handle_key(key(KeyCode::Char('/')));
        for c in "priya".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Normal);
        let Screen::Employees { view, .. } = &app.screen else {
            panic!("wrong screen");
        };
        assert_eq!(view.list.visible_id(0).as_deref(), Some("e-2003"));
        assert_eq!(view.list.visible().len(), 1);
    }

    #[tokio::test]
    async fn test_goto_rejects_unknown_paths() {
        let (mut app, _rx) = app();
        app.handle_key(key(KeyCode::Char('g')));
        for c in "/nowhere".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.route, Route::Welcome);
        assert!(app.notice.as_ref().is_some_and(|n| n.is_error));

        app.handle_key(key(KeyCode::Char(':')));
        for c in "/adminList".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.route, Route::Admins);
    }

    #[tokio::test]
    async fn test_login_navigates_to_dashboard() {
        let (mut app, mut rx) = app();
        app.navigate(Route::Login);
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "admin@firebliss.test".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "admin123".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        drain(&mut app, &mut rx, 1).await;

        assert_eq!(app.route, Route::Dashboard);
        assert!(matches!(app.screen, Screen::Dashboard(_)));
    }
}
