//! Search filter
//!
//! Narrows a list to the rows where any searched field contains the query,
//! ignoring case. Holds no state; callers re-run it whenever the query or the
//! list changes.

use shared::Searchable;

/// Rows of `records` matching `query`, in list order.
///
/// An empty query matches everything. Absent fields never match.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| matches(*record, &needle))
        .collect()
}

/// Whether `record` matches an already lowercased needle
pub fn matches<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Customer, Employee};

    fn customers() -> Vec<Customer> {
        serde_json::from_value(serde_json::json!([
            {"_id": "1", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@calc.org", "phone": 5550101, "status": "pending"},
            {"_id": "2", "firstName": "Alan", "lastName": "Turing", "email": "alan@bletchley.uk", "status": "active"},
            {"_id": "3", "name": "Walk-in", "status": "active"},
            {"_id": "4", "firstName": "Linus", "email": "LINUS@kernel.org", "phone": "555-0199", "status": "suspended"},
        ]))
        .unwrap()
    }

    fn ids<'a>(rows: &[&'a Customer]) -> Vec<&'a str> {
        rows.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let list = customers();
        assert_eq!(ids(&filter(&list, "")), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let list = customers();
        assert_eq!(ids(&filter(&list, "LOVE")), ["1"]);
        assert_eq!(ids(&filter(&list, "kernel")), ["4"]);
        assert_eq!(ids(&filter(&list, "a")), ["1", "2"]);
    }

    #[test]
    fn test_phone_matches_as_string() {
        let list = customers();
        assert_eq!(ids(&filter(&list, "555")), ["1", "4"]);
        assert_eq!(ids(&filter(&list, "0101")), ["1"]);
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let list = customers();
        assert!(filter(&list, "walk").is_empty());
        assert!(filter(&list, "zzz").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let list = customers();
        for query in ["", "a", "L", "org", "555", "x"] {
            let rows = filter(&list, query);
            let mut last = None;
            for row in &rows {
                let pos = list.iter().position(|c| c.id == row.id).unwrap();
                assert!(last.is_none_or(|prev| pos > prev));
                last = Some(pos);
                assert!(matches(*row, &query.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_employee_role_is_not_searched() {
        let list: Vec<Employee> = serde_json::from_value(serde_json::json!([
            {"_id": "e1", "firstName": "Grace", "lastName": "Hopper", "email": "g@navy.mil", "role": "admiral", "status": "active"}
        ]))
        .unwrap();
        assert!(filter(&list, "admiral").is_empty());
        assert_eq!(filter(&list, "HOP").len(), 1);
    }
}
