//! Error taxonomy for the render pipeline.
//!
//! Nothing is recovered locally: every variant aborts the whole render and
//! surfaces through the binary as a failed invocation. There is no retry,
//! no partial render, and no cached fallback.
//!
//! Converter parse failures are deliberately NOT errors; they render as a
//! fixed placeholder line instead (see [`crate::items::Converter`]).

use thiserror::Error;

/// Fatal pipeline errors.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A referenced entity id is absent from the fetched snapshot.
    #[error("entity `{entity_id}` missing from the fetched snapshot")]
    Lookup {
        /// The entity id that failed to resolve.
        entity_id: String,
    },

    /// The states request itself failed (connect, TLS, HTTP status).
    #[error("states request failed")]
    Transport(#[from] Box<ureq::Error>),

    /// The response body could not be read.
    #[error("failed to read states response body")]
    Body(#[from] std::io::Error),

    /// The response body was not the expected JSON shape.
    #[error("states payload is not a valid state list")]
    Decode(#[from] serde_json::Error),

    /// An icon name resolved to nothing in the symbol catalog.
    #[error("unknown symbol `{name}` in icon catalog")]
    UnknownSymbol {
        /// The resolved icon name that has no catalog entry.
        name: String,
    },
}
