//! Status transition controller
//!
//! Each operator action is checked against an explicit transition table,
//! sent as exactly one remote mutation, and applied to the owning list only
//! once the service confirms it.
//!
//! The work is split in two halves so a view can put the network call on a
//! background task: `begin` validates and marks the row busy, `settle` applies
//! the result. `TransitionController::run` chains both for sequential callers.

use serde::de::DeserializeOwned;
use std::fmt::Debug;
use thiserror::Error;

use shared::StatusRecord;
use shared::models::{Customer, CustomerStatus, Employee, EmployeeStatus, EmployeeStatusUpdate};

use crate::api::MutationRequest;
use crate::endpoints;
use crate::store::EntityListStore;
use crate::{ClientError, ClientResult, ConsoleApi, HttpClient};

/// What a confirmed mutation does to the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<S> {
    SetStatus(S),
    Remove,
}

/// An operator action on one record type
pub trait Transition: Copy + Debug + Send + Sync + 'static {
    type Entity: StatusRecord + DeserializeOwned;

    /// Result of the action from `from`, `None` when the table forbids it
    fn outcome(
        self,
        from: <Self::Entity as StatusRecord>::Status,
    ) -> Option<Outcome<<Self::Entity as StatusRecord>::Status>>;

    /// Remote mutation addressed by `id`
    fn request(self, id: &str) -> MutationRequest;

    fn label(self) -> &'static str;
}

// =============================================================================
// Customer
// =============================================================================

/// Customer account actions
///
/// ```text
/// pending   --approve-->    active
/// pending   --reject--->    rejected
/// active    --suspend-->    suspended
/// active    --reactivate--> active
/// suspended --reactivate--> active
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    Approve,
    Reject,
    Suspend,
    Reactivate,
}

impl CustomerAction {
    pub const ALL: [CustomerAction; 4] = [
        CustomerAction::Approve,
        CustomerAction::Reject,
        CustomerAction::Suspend,
        CustomerAction::Reactivate,
    ];

    /// Actions the table allows from `status`, in display order
    pub fn available(status: CustomerStatus) -> Vec<CustomerAction> {
        Self::ALL
            .into_iter()
            .filter(|action| action.outcome(status).is_some())
            .collect()
    }

    fn path_segment(self) -> &'static str {
        match self {
            CustomerAction::Approve => "approve",
            CustomerAction::Reject => "reject",
            CustomerAction::Suspend => "suspend",
            CustomerAction::Reactivate => "reactivate",
        }
    }
}

impl Transition for CustomerAction {
    type Entity = Customer;

    fn outcome(self, from: CustomerStatus) -> Option<Outcome<CustomerStatus>> {
        use CustomerAction::*;
        use CustomerStatus::*;

        let to = match (from, self) {
            (Pending, Approve) => Active,
            (Pending, Reject) => Rejected,
            (Active, Suspend) => Suspended,
            (Active | Suspended, Reactivate) => Active,
            _ => return None,
        };
        Some(Outcome::SetStatus(to))
    }

    fn request(self, id: &str) -> MutationRequest {
        MutationRequest::Put {
            path: endpoints::customer_action(self.path_segment(), id),
            body: None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CustomerAction::Approve => "Approve",
            CustomerAction::Reject => "Reject",
            CustomerAction::Suspend => "Suspend",
            CustomerAction::Reactivate => "Reactivate",
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// Employee account actions
///
/// ```text
/// active    --suspend-->  suspended
/// suspended --activate--> active
/// (either)  --delete--->  removed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeAction {
    Suspend,
    Activate,
    Delete,
}

impl EmployeeAction {
    pub const ALL: [EmployeeAction; 3] = [
        EmployeeAction::Suspend,
        EmployeeAction::Activate,
        EmployeeAction::Delete,
    ];

    pub fn available(status: EmployeeStatus) -> Vec<EmployeeAction> {
        Self::ALL
            .into_iter()
            .filter(|action| action.outcome(status).is_some())
            .collect()
    }
}

impl Transition for EmployeeAction {
    type Entity = Employee;

    fn outcome(self, from: EmployeeStatus) -> Option<Outcome<EmployeeStatus>> {
        use EmployeeAction::*;
        use EmployeeStatus::*;

        match (from, self) {
            (Active, Suspend) => Some(Outcome::SetStatus(Suspended)),
            (Suspended, Activate) => Some(Outcome::SetStatus(Active)),
            (Active | Suspended, Delete) => Some(Outcome::Remove),
            _ => None,
        }
    }

    fn request(self, id: &str) -> MutationRequest {
        let status = match self {
            EmployeeAction::Suspend => EmployeeStatus::Suspended,
            EmployeeAction::Activate => EmployeeStatus::Active,
            EmployeeAction::Delete => {
                return MutationRequest::Delete {
                    path: endpoints::employee_delete(id),
                };
            }
        };
        MutationRequest::Put {
            path: endpoints::employee_status(id),
            body: serde_json::to_value(EmployeeStatusUpdate { status }).ok(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            EmployeeAction::Suspend => "Suspend",
            EmployeeAction::Activate => "Activate",
            EmployeeAction::Delete => "Delete",
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Why an action was not applied
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Record {0} is not in the list")]
    NotFound(String),

    #[error("{action} is not allowed while the record is {status}")]
    InvalidTransition {
        action: &'static str,
        status: String,
    },

    #[error("A change to record {0} is already in progress")]
    InFlight(String),

    #[error("{action} failed: {source}")]
    Remote {
        action: &'static str,
        #[source]
        source: ClientError,
    },
}

/// A validated action waiting for its remote result
#[derive(Debug, Clone)]
pub struct PendingMutation<A: Transition> {
    pub id: String,
    pub action: A,
    pub request: MutationRequest,
    outcome: Outcome<<A::Entity as StatusRecord>::Status>,
}

/// Validate `action` against the row's current status and mark the row busy.
///
/// Nothing is sent and nothing changes when this returns an error.
pub fn begin<A: Transition>(
    store: &mut EntityListStore<A::Entity>,
    id: &str,
    action: A,
) -> Result<PendingMutation<A>, ActionError> {
    let status = store
        .get(id)
        .map(|record| record.status())
        .ok_or_else(|| ActionError::NotFound(id.to_string()))?;

    let outcome = action
        .outcome(status)
        .ok_or_else(|| ActionError::InvalidTransition {
            action: action.label(),
            status: format!("{:?}", status).to_lowercase(),
        })?;

    if !store.mark_in_flight(id) {
        return Err(ActionError::InFlight(id.to_string()));
    }
    store.clear_row_error(id);

    Ok(PendingMutation {
        id: id.to_string(),
        action,
        request: action.request(id),
        outcome,
    })
}

/// Apply the remote result of a pending mutation.
///
/// Success patches the status (or removes the row); when the service echoes
/// the updated record back, that copy is adopted instead. A fault leaves the
/// row untouched and records a row-scoped error.
pub fn settle<A: Transition>(
    store: &mut EntityListStore<A::Entity>,
    pending: PendingMutation<A>,
    result: ClientResult<serde_json::Value>,
) -> Result<(), ActionError> {
    let PendingMutation {
        id, action, outcome, ..
    } = pending;
    store.clear_in_flight(&id);

    let body = match result {
        Ok(body) => body,
        Err(source) => {
            tracing::warn!(id = %id, action = action.label(), error = %source, "mutation failed");
            store.set_row_error(&id, format!("{} failed: {}", action.label(), source));
            return Err(ActionError::Remote {
                action: action.label(),
                source,
            });
        }
    };

    match outcome {
        Outcome::Remove => {
            store.remove(&id);
        }
        Outcome::SetStatus(status) => match adopt::<A::Entity>(&body, &id) {
            Some(record) => {
                store.replace_record(record);
            }
            None => {
                store.patch_status(&id, status);
            }
        },
    }
    tracing::info!(id = %id, action = action.label(), "mutation applied");
    Ok(())
}

/// The updated record, if the mutation response carries one for `id`.
///
/// Accepts the record itself or the record under `data`.
fn adopt<T: StatusRecord + DeserializeOwned>(body: &serde_json::Value, id: &str) -> Option<T> {
    [Some(body), body.get("data")]
        .into_iter()
        .flatten()
        .filter(|candidate| candidate.get("_id").and_then(|v| v.as_str()) == Some(id))
        .find_map(|candidate| serde_json::from_value::<T>(candidate.clone()).ok())
}

/// Runs transitions end to end against the remote service
pub struct TransitionController<C> {
    api: ConsoleApi<C>,
}

impl<C: HttpClient> TransitionController<C> {
    pub fn new(api: ConsoleApi<C>) -> Self {
        Self { api }
    }

    /// Validate, send, and apply one action.
    pub async fn run<A: Transition>(
        &self,
        store: &mut EntityListStore<A::Entity>,
        id: &str,
        action: A,
    ) -> Result<(), ActionError> {
        let pending = begin(store, id, action)?;
        let result = self.api.mutate(&pending.request).await;
        settle(store, pending, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, status: CustomerStatus) -> Customer {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "firstName": "Ada",
            "email": "ada@example.com",
            "status": status,
        }))
        .unwrap()
    }

    fn employee(id: &str, status: EmployeeStatus) -> Employee {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "role": "manager",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_customer_transition_table() {
        use CustomerAction::*;
        use CustomerStatus::*;

        assert_eq!(Approve.outcome(Pending), Some(Outcome::SetStatus(Active)));
        assert_eq!(Reject.outcome(Pending), Some(Outcome::SetStatus(Rejected)));
        assert_eq!(Suspend.outcome(Active), Some(Outcome::SetStatus(Suspended)));
        assert_eq!(Reactivate.outcome(Active), Some(Outcome::SetStatus(Active)));
        assert_eq!(Reactivate.outcome(Suspended), Some(Outcome::SetStatus(Active)));

        for action in CustomerAction::ALL {
            assert_eq!(action.outcome(Rejected), None);
            assert_eq!(action.outcome(Unknown), None);
        }
        assert_eq!(Approve.outcome(Active), None);
        assert_eq!(Suspend.outcome(Pending), None);
    }

    #[test]
    fn test_available_actions_follow_table() {
        assert_eq!(
            CustomerAction::available(CustomerStatus::Pending),
            vec![CustomerAction::Approve, CustomerAction::Reject]
        );
        assert_eq!(
            CustomerAction::available(CustomerStatus::Suspended),
            vec![CustomerAction::Reactivate]
        );
        assert!(CustomerAction::available(CustomerStatus::Rejected).is_empty());
        assert_eq!(
            EmployeeAction::available(EmployeeStatus::Active),
            vec![EmployeeAction::Suspend, EmployeeAction::Delete]
        );
        assert!(EmployeeAction::available(EmployeeStatus::Unknown).is_empty());
    }

    #[test]
    fn test_employee_requests() {
        let put = EmployeeAction::Suspend.request("e1");
        assert_eq!(
            put,
            MutationRequest::Put {
                path: "api/addemp/updateStatus/e1".into(),
                body: Some(serde_json::json!({"status": "suspended"})),
            }
        );
        assert_eq!(
            EmployeeAction::Delete.request("e1"),
            MutationRequest::Delete {
                path: "api/addemp/deleteEmployee/e1".into()
            }
        );
        assert_eq!(
            CustomerAction::Approve.request("c9").path(),
            "add/customer/approve/c9"
        );
    }

    #[test]
    fn test_approve_then_delete_scenario() {
        let mut customers = EntityListStore::new();
        customers.replace_all(vec![
            customer("1", CustomerStatus::Pending),
            customer("2", CustomerStatus::Active),
        ]);
        let pending = begin(&mut customers, "1", CustomerAction::Approve).unwrap();
        settle(&mut customers, pending, Ok(serde_json::Value::Null)).unwrap();
        let statuses: Vec<_> = customers.records().iter().map(|c| c.status).collect();
        assert_eq!(statuses, [CustomerStatus::Active, CustomerStatus::Active]);

        let mut employees = EntityListStore::new();
        employees.replace_all(vec![
            employee("1", EmployeeStatus::Active),
            employee("2", EmployeeStatus::Active),
        ]);
        let pending = begin(&mut employees, "2", EmployeeAction::Delete).unwrap();
        settle(&mut employees, pending, Ok(serde_json::json!({"message": "deleted"}))).unwrap();
        assert_eq!(employees.len(), 1);
        assert!(employees.get("2").is_none());
    }

    #[test]
    fn test_fault_leaves_list_unchanged() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![employee("1", EmployeeStatus::Active)]);
        let before = store.records().to_vec();

        let pending = begin(&mut store, "1", EmployeeAction::Suspend).unwrap();
        let err = settle(
            &mut store,
            pending,
            Err(ClientError::Internal("down".into())),
        )
        .unwrap_err();

        assert!(matches!(err, ActionError::Remote { action: "Suspend", .. }));
        assert_eq!(store.records(), before.as_slice());
        assert!(store.row_error("1").unwrap().contains("down"));
        assert!(!store.is_in_flight("1"));
    }

    #[test]
    fn test_invalid_and_duplicate_actions_are_rejected() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![customer("1", CustomerStatus::Rejected)]);
        assert!(matches!(
            begin(&mut store, "1", CustomerAction::Approve),
            Err(ActionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            begin(&mut store, "nope", CustomerAction::Approve),
            Err(ActionError::NotFound(_))
        ));

        store.replace_all(vec![customer("2", CustomerStatus::Pending)]);
        let _first = begin(&mut store, "2", CustomerAction::Approve).unwrap();
        assert!(matches!(
            begin(&mut store, "2", CustomerAction::Reject),
            Err(ActionError::InFlight(_))
        ));
    }

    #[test]
    fn test_refresh_does_not_reopen_an_in_flight_row() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![customer("1", CustomerStatus::Pending)]);
        let pending = begin(&mut store, "1", CustomerAction::Approve).unwrap();

        store.replace_all(vec![customer("1", CustomerStatus::Pending)]);
        assert!(matches!(
            begin(&mut store, "1", CustomerAction::Reject),
            Err(ActionError::InFlight(_))
        ));

        settle(&mut store, pending, Ok(serde_json::Value::Null)).unwrap();
        assert_eq!(store.get("1").unwrap().status, CustomerStatus::Active);
        assert!(begin(&mut store, "1", CustomerAction::Suspend).is_ok());
    }

    #[test]
    fn test_echoed_record_is_adopted() {
        let mut store = EntityListStore::new();
        store.replace_all(vec![customer("1", CustomerStatus::Pending)]);

        let echoed = serde_json::json!({
            "_id": "1",
            "firstName": "Ada",
            "email": "ada@newdomain.com",
            "status": "active",
        });
        let pending = begin(&mut store, "1", CustomerAction::Approve).unwrap();
        settle(&mut store, pending, Ok(echoed)).unwrap();
        assert_eq!(
            store.get("1").unwrap().email.as_deref(),
            Some("ada@newdomain.com")
        );

        // A body about some other record is ignored
        store.replace_all(vec![customer("2", CustomerStatus::Active)]);
        let pending = begin(&mut store, "2", CustomerAction::Suspend).unwrap();
        let other = serde_json::json!({"data": {"_id": "9", "status": "pending"}});
        settle(&mut store, pending, Ok(other)).unwrap();
        assert_eq!(store.get("2").unwrap().status, CustomerStatus::Suspended);
    }
}
