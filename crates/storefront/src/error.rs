//! Error taxonomy for the storefront.
//!
//! Almost nothing here ever reaches a caller: the demo degrades silently by
//! design. The variants exist so the internal fallible paths stay explicit
//! and so the degradation sites have something precise to log.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors the store can hit while reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted state is not JSON, or not the expected shape.
    /// Recovered locally by falling back to an empty value.
    #[error("malformed persisted state: {0}")]
    MalformedState(#[from] serde_json::Error),

    /// The storage collaborator failed. Reads degrade to "no data"; writes
    /// degrade to in-memory-only for that call.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
