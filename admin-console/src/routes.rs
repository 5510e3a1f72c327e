//! Route table
//!
//! Maps the console's paths to screens. Paths match case-insensitively and
//! the leading `/` is optional.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Login,
    Dashboard,
    Customers,
    AddCustomer,
    Employees,
    AddEmployee,
    Admins,
    Reports,
    ProductBookings,
    ServiceBookings,
    Profile(String),
}

impl Route {
    /// Screens reachable from the navigation bar, in bar order
    pub const NAV: [Route; 11] = [
        Route::Welcome,
        Route::Login,
        Route::Dashboard,
        Route::Customers,
        Route::AddCustomer,
        Route::Employees,
        Route::AddEmployee,
        Route::Admins,
        Route::Reports,
        Route::ProductBookings,
        Route::ServiceBookings,
    ];

    /// Resolve a path, `None` for anything unknown
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_start_matches('/');
        let lowered = trimmed.to_ascii_lowercase();

        if let Some(id) = lowered
            .strip_prefix("profile/")
            .map(|_| &trimmed["profile/".len()..])
        {
            let id = id.trim_end_matches('/');
            return (!id.is_empty() && !id.contains('/')).then(|| Route::Profile(id.to_string()));
        }

        let route = match lowered.trim_end_matches('/') {
            "" => Route::Welcome,
            "login" => Route::Login,
            "admindash" => Route::Dashboard,
            "user" => Route::Customers,
            "addcustomer" => Route::AddCustomer,
            "employee" => Route::Employees,
            "addemployee" => Route::AddEmployee,
            "adminlist" => Route::Admins,
            "reports" => Route::Reports,
            "productreport" => Route::ProductBookings,
            "servicebookingreport" => Route::ServiceBookings,
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Welcome => "/".into(),
            Route::Login => "/login".into(),
            Route::Dashboard => "/admindash".into(),
            Route::Customers => "/user".into(),
            Route::AddCustomer => "/addCustomer".into(),
            Route::Employees => "/employee".into(),
            Route::AddEmployee => "/addemployee".into(),
            Route::Admins => "/adminList".into(),
            Route::Reports => "/reports".into(),
            Route::ProductBookings => "/productReport".into(),
            Route::ServiceBookings => "/serviceBookingReport".into(),
            Route::Profile(id) => format!("/profile/{}", id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Welcome => "Home",
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Customers => "Customers",
            Route::AddCustomer => "Add Customer",
            Route::Employees => "Employees",
            Route::AddEmployee => "Add Employee",
            Route::Admins => "Admins",
            Route::Reports => "Reports",
            Route::ProductBookings => "Product Bookings",
            Route::ServiceBookings => "Service Bookings",
            Route::Profile(_) => "Profile",
        }
    }

    /// Position in the navigation bar
    pub fn nav_index(&self) -> Option<usize> {
        Self::NAV.iter().position(|r| r == self)
    }

    pub fn next(&self) -> Route {
        let i = self.nav_index().map_or(0, |i| (i + 1) % Self::NAV.len());
        Self::NAV[i].clone()
    }

    pub fn prev(&self) -> Route {
        let len = Self::NAV.len();
        let i = self.nav_index().map_or(0, |i| (i + len - 1) % len);
        Self::NAV[i].clone()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
