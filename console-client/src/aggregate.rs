//! Per-aggregate fetch state

use crate::ClientResult;

/// One independently fetched value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Aggregate<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Aggregate<T> {
    pub fn from_result(result: ClientResult<T>) -> Self {
        match result {
            Ok(value) => Aggregate::Ready(value),
            Err(e) => Aggregate::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Aggregate::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Aggregate::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Aggregate::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[test]
    fn test_from_result() {
        let ready: Aggregate<u64> = Aggregate::from_result(Ok(3));
        assert_eq!(ready.value(), Some(&3));
        assert!(ready.is_settled());

        let failed: Aggregate<u64> =
            Aggregate::from_result(Err(ClientError::Internal("boom".into())));
        assert_eq!(failed.error(), Some("Internal error: boom"));
        assert!(failed.value().is_none());

        assert!(Aggregate::<u64>::default().is_loading());
    }
}
