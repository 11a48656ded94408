use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket for one issued query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub id: u64,
    pub query: String,
}

/// Tracks the most recently requested query so stale responses can be dropped.
///
/// In-flight searches are never cancelled; whoever receives a response checks
/// its ticket and discards it when a newer query has been issued since.
#[derive(Debug, Default)]
pub struct LatestQuery {
    latest: AtomicU64,
}

impl LatestQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new query; it supersedes every earlier ticket
    pub fn issue(&self, query: impl Into<String>) -> QueryTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        QueryTicket { id, query: query.into() }
    }

    pub fn is_current(&self, ticket: &QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.id
    }

    /// Pass the value through only if the ticket is still current
    pub fn accept<T>(&self, ticket: &QueryTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!("Dropping stale response for '{}'", ticket.query);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_query_supersedes() {
        let latest = LatestQuery::new();
        let first = latest.issue("bre");
        assert!(latest.is_current(&first));

        let second = latest.issue("breaking");
        assert!(!latest.is_current(&first));
        assert_eq!(latest.accept(&first, 1), None);
        assert_eq!(latest.accept(&second, 2), Some(2));
    }
}
