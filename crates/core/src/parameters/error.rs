//! Parameter error types
//!
//! Provides error types for parameter store operations.

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Parameter name is not registered
    Unknown,
    /// Parameter name exceeds the storage limit
    NameTooLong,
    /// Store is full
    StoreFull,
    /// Read-only parameter cannot be modified
    ReadOnly,
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::Unknown => write!(f, "unknown parameter"),
            ParameterError::NameTooLong => write!(f, "parameter name too long"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
            ParameterError::ReadOnly => write!(f, "parameter is read-only"),
        }
    }
}
