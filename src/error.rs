use thiserror::Error;

/// Errors raised while loading or compiling a policy document.
///
/// Evaluation itself raises no errors of its own: a field that cannot be
/// resolved or a value that fails its check is an unsatisfied constraint,
/// not a failure. Errors injected through fallible leaf closures propagate
/// to the caller unchanged (see [`crate::tree::try_evaluate`]).
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern '{pattern}' for path {path}: {source}")]
    InvalidPattern {
        path: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("policy parse error: {message}")]
    Parse { message: String },
}

pub type Result<T> = std::result::Result<T, PolicyError>;

impl PolicyError {
    pub fn invalid_pattern<S: Into<String>>(path: S, pattern: S, source: regex::Error) -> Self {
        Self::InvalidPattern {
            path: path.into(),
            pattern: pattern.into(),
            source,
        }
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
