// src/error.rs

/// Why a single location entry could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("no link containing `{marker}` in entry")]
    MissingAnchor { marker: String },
    #[error("link `{href}` has no argument list")]
    MalformedCall { href: String },
    #[error("link `{href}` does not start its argument list with an integer")]
    InvalidId { href: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("entry #{index}: {source}")]
    Extract {
        index: usize,
        #[source]
        source: ExtractError,
    },

    #[error("no location with id {0}")]
    UnknownLocation(i64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
