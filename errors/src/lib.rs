//! Conditional Stack Error Types
//!
//! This crate defines the errors reported by the `ifstack` engine.
//! Both kinds are recoverable: the operation that produced them leaves the
//! stack untouched, and the caller decides whether to keep scanning.

use thiserror::Error;

/// `ELSE` with no open `IF`, or a second `ELSE` for the same `IF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ELSE without IF, or ELSE already taken for this IF")]
pub struct ElseWithoutIf;

/// `ENDIF` with no open `IF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ENDIF without preceding IF")]
pub struct EndifWithoutIf;

/// Any error the conditional stack can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConditionalError {
    #[error(transparent)]
    ElseWithoutIf(#[from] ElseWithoutIf),
    #[error(transparent)]
    EndifWithoutIf(#[from] EndifWithoutIf),
}

/// Result type for operations that may fail with any [`ConditionalError`]
pub type ConditionalResult<T> = Result<T, ConditionalError>;
