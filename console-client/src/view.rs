//! List views
//!
//! A list view is the store a screen owns plus the search query typed over
//! it. The visible rows are derived on demand and never cached.

use shared::models::{Customer, Employee};
use shared::{Record, Searchable};

use crate::api::{CustomerListFilter, EmployeeListFilter};
use crate::filter::filter;
use crate::store::EntityListStore;

/// A store with a search box over it
#[derive(Debug, Clone)]
pub struct ListView<T: Record> {
    pub store: EntityListStore<T>,
    query: String,
}

impl<T: Record> Default for ListView<T> {
    fn default() -> Self {
        Self {
            store: EntityListStore::new(),
            query: String::new(),
        }
    }
}

impl<T: Record + Searchable> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rows matching the current query, in list order
    pub fn visible(&self) -> Vec<&T> {
        filter(self.store.records(), &self.query)
    }

    /// Id of the `index`th visible row
    pub fn visible_id(&self, index: usize) -> Option<String> {
        self.visible().get(index).map(|record| record.id().to_string())
    }
}

/// Customers screen state
#[derive(Debug, Clone, Default)]
pub struct CustomersView {
    pub list: ListView<Customer>,
    pub filter: CustomerListFilter,
}

/// Employees screen state
#[derive(Debug, Clone, Default)]
pub struct EmployeesView {
    pub list: ListView<Employee>,
    pub filter: EmployeeListFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_follows_store_and_query() {
        let mut view = ListView::<Employee>::new();
        view.store.replace_all(
            serde_json::from_value(serde_json::json!([
                {"_id": "1", "firstName": "Grace", "lastName": "Hopper", "email": "g@navy.mil", "role": "r", "status": "active"},
                {"_id": "2", "firstName": "Edsger", "lastName": "Dijkstra", "email": "e@tue.nl", "role": "r", "status": "suspended"},
            ]))
            .unwrap(),
        );
        assert_eq!(view.visible().len(), 2);

        view.set_query("dijk");
        assert_eq!(view.visible_id(0).as_deref(), Some("2"));
        assert_eq!(view.visible_id(1), None);

        view.store.remove("2");
        assert!(view.visible().is_empty());
    }
}
