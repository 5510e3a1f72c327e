//! Record traits
//!
//! Every list the console shows is a `Vec` of some `Record`. Lists whose rows
//! carry a lifecycle status additionally implement `StatusRecord`.

use std::fmt::Debug;

/// A row identified by the opaque `_id` the remote service assigned.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// A record governed by a closed status enumeration.
pub trait StatusRecord: Record {
    type Status: Copy + Eq + Debug + Send + Sync + 'static;

    fn status(&self) -> Self::Status;

    /// Replace the status only. Every other field is left untouched.
    fn set_status(&mut self, status: Self::Status);
}

/// Fields the search box matches against.
///
/// Absent fields are reported as `None` and never match.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<&str>>;
}
