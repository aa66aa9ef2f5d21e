use crate::path::PathError;
use crate::registry::RegistryError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error("{path} does not exist.")]
    RouteNotFound { path: String },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type RouterResult<T> = Result<T, RouterError>;
