// dynakind-core/src/core/status.rs
// ============================================================================
// Module: Status Documents
// Description: Generic status/error document returned by REST operations.
// Purpose: Represent the non-envelope shape the codec delegates verbatim.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! REST operations that do not return a resource return a status document.
//! The dynamic codec never interprets these; it hands them to the
//! general-purpose delegate codec unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Status Document
// ============================================================================

/// Outcome carried by a status document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StatusOutcome {
    /// The operation completed.
    Success,
    /// The operation failed.
    Failure,
}

/// Generic status/error document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDocument {
    /// Operation outcome.
    pub status: StatusOutcome,
    /// Human-readable description of the outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable reason token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Suggested HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

impl StatusDocument {
    /// Creates a success status with no further detail.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            status: StatusOutcome::Success,
            message: None,
            reason: None,
            code: None,
        }
    }

    /// Creates a failure status with a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: StatusOutcome::Failure,
            message: Some(message.into()),
            reason: None,
            code: None,
        }
    }
}
