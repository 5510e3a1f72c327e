//! Mock API state

use std::collections::{HashSet, VecDeque};

use parking_lot::Mutex;

use shared::models::{
    Admin, Customer, Employee, ProductBooking, ProductSummary, ServiceBooking, ServiceSummary,
};

/// Most recent mutations kept for inspection
pub const MUTATION_LOG_CAP: usize = 256;

/// Everything the mock service persists
#[derive(Debug, Clone, Default)]
pub struct MockData {
    pub customers: Vec<Customer>,
    pub employees: Vec<Employee>,
    pub admins: Vec<Admin>,
    /// `(email, password)` pairs accepted by login
    pub credentials: Vec<(String, String)>,
    pub products: Vec<ProductSummary>,
    pub services: Vec<ServiceSummary>,
    pub product_bookings: Vec<ProductBooking>,
    pub service_bookings: Vec<ServiceBooking>,
}

/// Shared router state
#[derive(Debug, Default)]
pub struct MockState {
    pub data: Mutex<MockData>,
    /// Paths (without leading `/`) that answer 500
    faults: Mutex<HashSet<String>>,
    /// Latest mutating requests, oldest first
    mutations: Mutex<VecDeque<String>>,
}

impl MockState {
    pub fn new(data: MockData) -> Self {
        Self {
            data: Mutex::new(data),
            faults: Mutex::new(HashSet::new()),
            mutations: Mutex::new(VecDeque::new()),
        }
    }

    /// State pre-filled with demo records
    pub fn seeded() -> Self {
        Self::new(crate::seed::demo_data())
    }

    /// Make every request to `path` fail until `heal` is called
    pub fn fail(&self, path: &str) {
        self.faults
            .lock()
            .insert(path.trim_start_matches('/').to_string());
    }

    pub fn heal(&self, path: &str) {
        self.faults.lock().remove(path.trim_start_matches('/'));
    }

    pub fn is_failing(&self, path: &str) -> bool {
        self.faults.lock().contains(path.trim_start_matches('/'))
    }

    pub(crate) fn record_mutation(&self, description: String) {
        let mut log = self.mutations.lock();
        if log.len() == MUTATION_LOG_CAP {
            log.pop_front();
        }
        log.push_back(description);
    }

    /// `"METHOD path"` of the last `MUTATION_LOG_CAP` PUT/POST/DELETE
    /// requests, in order
    pub fn mutations(&self) -> Vec<String> {
        self.mutations.lock().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_injection_ignores_leading_slash() {
        let state = MockState::seeded();
        state.fail("/api/report/total-revenue");
        assert!(state.is_failing("api/report/total-revenue"));
        state.heal("api/report/total-revenue");
        assert!(!state.is_failing("/api/report/total-revenue"));
    }

    #[test]
    fn test_mutation_log_keeps_only_the_latest() {
        let state = MockState::default();
        for i in 0..MUTATION_LOG_CAP + 10 {
            state.record_mutation(format!("PUT row/{i}"));
        }
        let log = state.mutations();
        assert_eq!(log.len(), MUTATION_LOG_CAP);
        assert_eq!(log.first().map(String::as_str), Some("PUT row/10"));
        assert_eq!(
            log.last().cloned(),
            Some(format!("PUT row/{}", MUTATION_LOG_CAP + 9))
        );
    }

    #[test]
    fn test_seed_has_pending_customers() {
        let state = MockState::seeded();
        let data = state.data.lock();
        assert!(
            data.customers
                .iter()
                .any(|c| c.status == shared::models::CustomerStatus::Pending)
        );
        assert!(!data.credentials.is_empty());
    }
}
