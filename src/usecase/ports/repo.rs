use std::path::PathBuf;

use crate::domain::entities::query::{PageResult, QueryState};
use crate::domain::entities::user::User;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("failed to decode user dataset: {0}")]
    Dataset(#[from] serde_json::Error),
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Message(String),
}

pub trait UserRepository: Send + Sync {
    fn count(&self) -> usize;
    fn all_users(&self) -> Result<Vec<User>, RepoError>;
    fn query_page(&self, query: &QueryState) -> Result<PageResult, RepoError>;
}
