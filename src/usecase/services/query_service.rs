use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::domain::entities::query::{PageResult, QueryState};
use crate::domain::entities::user::User;
use crate::usecase::ports::repo::{RepoError, UserRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub ticket: RequestTicket,
    pub value: T,
}

/// Simulated remote access to the user dataset.
///
/// Every fetch takes a ticket from [`QueryService::begin`]; only the newest
/// ticket is current, so the shell can drop responses that arrive out of order.
pub struct QueryService {
    repo: Arc<dyn UserRepository>,
    latency: Duration,
    latest: AtomicU64,
}

impl QueryService {
    pub fn new(repo: Arc<dyn UserRepository>, latency: Duration) -> Self {
        Self {
            repo,
            latency,
            latest: AtomicU64::new(0),
        }
    }

    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    pub async fn fetch(
        &self,
        ticket: RequestTicket,
        query: &QueryState,
    ) -> Result<Tagged<PageResult>, RepoError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.repo.query_page(query) {
            Ok(page) => {
                debug!(
                    ticket = ticket.0,
                    total_count = page.total_count,
                    rows = page.rows.len(),
                    "fetched users"
                );
                Ok(Tagged {
                    ticket,
                    value: page,
                })
            }
            Err(err) => {
                error!(ticket = ticket.0, error = %err, "user query failed");
                Err(err)
            }
        }
    }

    /// Whole dataset without latency, for client-side grids.
    pub fn all_users(&self) -> Result<Vec<User>, RepoError> {
        self.repo.all_users()
    }

    pub fn dataset_size(&self) -> usize {
        self.repo.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::query::PageSpec;

    struct FixedRepo;

    impl UserRepository for FixedRepo {
        fn count(&self) -> usize {
            0
        }

        fn all_users(&self) -> Result<Vec<User>, RepoError> {
            Ok(Vec::new())
        }

        fn query_page(&self, query: &QueryState) -> Result<PageResult, RepoError> {
            match query.page {
                Some(page) if page.index > 100 => {
                    Err(RepoError::Message("page out of service".to_string()))
                }
                _ => Ok(PageResult::default()),
            }
        }
    }

    fn service() -> QueryService {
        QueryService::new(Arc::new(FixedRepo), Duration::ZERO)
    }

    #[test]
    fn only_the_newest_ticket_is_current() {
        let service = service();

        let first = service.begin();
        let second = service.begin();

        assert!(first < second);
        assert!(!service.is_current(first));
        assert!(service.is_current(second));
    }

    #[tokio::test]
    async fn fetch_tags_result_with_its_ticket() {
        let service = service();
        let ticket = service.begin();

        let tagged = service
            .fetch(ticket, &QueryState::default())
            .await
            .expect("fetch should succeed");

        assert_eq!(tagged.ticket, ticket);
        assert_eq!(tagged.value, PageResult::default());
    }

    #[tokio::test]
    async fn stale_response_is_detectable_after_newer_request() {
        let service = service();
        let stale = service.begin();
        let fresh = service.begin();

        let stale_result = service
            .fetch(stale, &QueryState::default())
            .await
            .expect("fetch should succeed");

        assert!(!service.is_current(stale_result.ticket));
        assert!(service.is_current(fresh));
    }

    #[tokio::test]
    async fn repository_errors_are_surfaced() {
        let service = service();
        let ticket = service.begin();
        let query = QueryState {
            page: Some(PageSpec::new(500, 10)),
            ..QueryState::default()
        };

        let err = service
            .fetch(ticket, &query)
            .await
            .expect_err("fetch should fail");

        assert!(err.to_string().contains("page out of service"));
    }
}
