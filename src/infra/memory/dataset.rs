use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::User;
use crate::usecase::ports::repo::RepoError;

const BUNDLED_USERS: &str = include_str!("../../../assets/users.json");

pub fn decode_users(json: &str) -> Result<Arc<[User]>, RepoError> {
    let users: Vec<User> = serde_json::from_str(json)?;
    Ok(users.into())
}

pub fn bundled_users() -> Result<Arc<[User]>, RepoError> {
    decode_users(BUNDLED_USERS)
}

pub fn load_users_file(path: &Path) -> Result<Arc<[User]>, RepoError> {
    let json = std::fs::read_to_string(path).map_err(|source| RepoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let users = decode_users(&json)?;
    info!(path = %path.display(), count = users.len(), "loaded user dataset");
    Ok(users)
}

/// The configured file when one is set, the bundled dataset otherwise.
pub fn load_users(path: Option<&Path>) -> Result<Arc<[User]>, RepoError> {
    match path {
        Some(path) => load_users_file(path),
        None => bundled_users(),
    }
}
