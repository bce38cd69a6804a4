use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Failures ip-api reports through the `message` field of a `fail` response.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFailure {
    #[error("ip is from reserved ip range")]
    ReservedRange,

    #[error("ip is from private ip range")]
    PrivateRange,

    #[error("invalid query")]
    InvalidQuery,
}

static SERVICE_FAILURES: LazyLock<HashMap<&'static str, ServiceFailure>> = LazyLock::new(|| {
    HashMap::from([
        ("reserved range", ServiceFailure::ReservedRange),
        ("private range", ServiceFailure::PrivateRange),
        ("invalid query", ServiceFailure::InvalidQuery),
    ])
});

/// Maps a raw service message onto a known failure, matching exactly.
pub fn lookup(message: &str) -> Option<ServiceFailure> {
    SERVICE_FAILURES.get(message).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_messages() {
        assert_eq!(lookup("reserved range"), Some(ServiceFailure::ReservedRange));
        assert_eq!(lookup("private range"), Some(ServiceFailure::PrivateRange));
        assert_eq!(lookup("invalid query"), Some(ServiceFailure::InvalidQuery));
    }

    #[test]
    fn unknown_and_empty_messages() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("some unknown reason"), None);
        assert_eq!(lookup("Private Range"), None);
    }
}
