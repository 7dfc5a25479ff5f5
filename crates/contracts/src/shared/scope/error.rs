use super::unit::UnitId;
use thiserror::Error;

/// Ошибки иерархии компаний и выбора области видимости
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// Unknown id passed to `resolve`/`select`
    #[error("organizational unit not found: {0}")]
    NotFound(UnitId),

    /// Registry violates the three-level forest invariant
    #[error("malformed scope registry: {0}")]
    Malformed(String),

    /// Scope configuration could not be parsed
    #[error("invalid scope configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ScopeError {
    fn from(err: toml::de::Error) -> Self {
        ScopeError::Config(err.to_string())
    }
}

pub type ScopeResult<T> = Result<T, ScopeError>;
