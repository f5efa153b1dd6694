use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DataLoadError – the only error the directory ever surfaces
// ---------------------------------------------------------------------------

/// Failure to obtain the company collection from its source.
///
/// Raised only by the loader. Everything downstream of a successful load
/// (revenue parsing, country extraction) degrades per record instead.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The source could not be read at all.
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON, or its records have the wrong shape.
    #[error("could not decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The payload decoded, but the top-level value is not an array.
    #[error("'{}' does not contain a sequence of records (found {found})", path.display())]
    NotASequence { path: PathBuf, found: &'static str },
}
