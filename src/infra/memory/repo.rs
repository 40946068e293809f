use std::sync::Arc;

use crate::domain::entities::query::{PageResult, QueryState};
use crate::domain::entities::user::User;
use crate::infra::memory::executor::execute;
use crate::usecase::ports::repo::{RepoError, UserRepository};

pub struct InMemoryUserRepo {
    users: Arc<[User]>,
}

impl InMemoryUserRepo {
    pub fn new(users: Arc<[User]>) -> Self {
        Self { users }
    }
}

impl UserRepository for InMemoryUserRepo {
    fn count(&self) -> usize {
        self.users.len()
    }

    fn all_users(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.to_vec())
    }

    fn query_page(&self, query: &QueryState) -> Result<PageResult, RepoError> {
        Ok(execute(&self.users, query))
    }
}
