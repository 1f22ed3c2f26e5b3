use thiserror::Error;

pub mod app;
pub mod category;
pub mod event;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The payload points at a row that does not exist.
    #[error("{0}")]
    InvalidReference(String),

    /// The store rejected or could not run a query.
    #[error("persistence failure: {0}")]
    PersistenceFailure(String),
}

impl ServiceError {
    pub fn persistence<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::PersistenceFailure(msg.into()))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
