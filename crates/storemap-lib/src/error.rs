use thiserror::Error;

/// Convenient result alias for the storemap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Two sections in one layout normalise to the same name.
    #[error("duplicate section name encountered: {name}")]
    DuplicateSection { name: String },

    /// A connection carried a weight that is zero, negative, or not finite.
    #[error("invalid weight {weight} on connection {from} -> {to}; weights must be positive")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when a section name could not be found in the venue.
    #[error("unknown section name: {name}")]
    UnknownSection { name: String },

    /// Raised when no route could be found between two known sections.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when one or more shopping-list entries match no section.
    #[error("unresolved items: {}", format_names(.names))]
    UnresolvedItems { names: Vec<String> },

    /// Raised when a computed route plan lacks any sections.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}
