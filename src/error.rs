use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error variants that can occur in appdata operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// A filesystem operation failed. The underlying `io::Error` is carried
    /// untranslated so callers see exactly what the filesystem reported.
    File { path: PathBuf, source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/* # Why separate ErrorKind and AppDataError?
This two-layer design keeps the structural variants (with their file paths and
io sources) separate from the runtime context strings attached during
propagation:
- ErrorKind: pattern-matchable variants with specific context
- AppDataError: wraps ErrorKind with a stack of context strings
*/

/// Error type wrapping ErrorKind with optional context.
#[derive(Debug)]
pub struct AppDataError {
    kind: ErrorKind,
    context: Vec<String>,
}

impl AppDataError {
    /// Creates a new error from an ErrorKind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
        }
    }

    /// Creates a message-only error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Creates a file error for the given path from an underlying io error.
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(ErrorKind::File {
            path: path.into(),
            source,
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    /// Allows pattern matching on specific error variants.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` if this error stems from a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// Returns `true` if this error stems from insufficient permissions.
    pub fn is_permission_denied(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::PermissionDenied)
    }

    /// Returns the `io::ErrorKind` of the underlying filesystem error, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match &self.kind {
            ErrorKind::File { source, .. } => Some(source.kind()),
            ErrorKind::Message { .. } => None,
        }
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl From<ErrorKind> for AppDataError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for AppDataError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::File { source, .. } => Some(source),
            ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for AppDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ctx) in self.context.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", ctx)?;
            } else {
                write!(f, ": {}", ctx)?;
            }
        }

        if !self.context.is_empty() {
            write!(f, ": ")?;
        }

        match &self.kind {
            ErrorKind::File { path, source } => {
                write!(f, "File error at {}: {}", path.display(), source)
            }
            ErrorKind::Message { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/* # Why use Box<AppDataError> in the result type?
Boxing keeps the Ok path small; the error payload (path + context strings) is
only allocated when something actually goes wrong.
*/

/// Standard result type for appdata operations.
pub type AppDataResult<T> = std::result::Result<T, Box<AppDataError>>;

/// Constructs a boxed message error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::error::AppDataError::message(format!($($arg)*)))
    };
}

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    /// Eager evaluation: context is evaluated immediately.
    fn context(self, context: impl Into<String>) -> AppDataResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> AppDataResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for AppDataResult<T> {
    fn context(self, context: impl Into<String>) -> AppDataResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> AppDataResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}
