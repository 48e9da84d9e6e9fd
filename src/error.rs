//! Error taxonomy.
//!
//! None of these are fatal to a request: the engine skips the offending record
//! and keeps going. Empty input is not an error at all.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A free-parking rule without a usable `From ... Until` clause.
    #[error("malformed rule text: {rule:?}")]
    MalformedRuleText { rule: String },

    /// A start-time token that does not look like `Nov 12 Mon 9:00am`.
    #[error("unparseable time token: {token:?}")]
    UnparseableTimeToken { token: String },

    /// A calendar day id that is not a `YYYYMMDD` date.
    #[error("invalid calendar date id: {id:?}")]
    InvalidDateId { id: String },

    /// A payload record without a field it cannot do without.
    #[error("{record} without {field:?}")]
    MissingField { record: &'static str, field: &'static str },

    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
