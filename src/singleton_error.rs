use thiserror::Error;

/// Errors returned by the non-initializing singleton operations.
///
/// `get_or_init` and `get_instance` never fail; only reads that must not
/// construct (`get`) and eager initialization (`try_init`) can.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SingletonError {
    #[error("singleton not initialized: {type_name}")]
    Uninitialized { type_name: &'static str },

    #[error("singleton already initialized: {type_name}")]
    AlreadyInitialized { type_name: &'static str },
}
