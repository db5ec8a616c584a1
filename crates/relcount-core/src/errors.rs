use thiserror::Error;

/// Result type alias using RelCountError
pub type Result<T> = std::result::Result<T, RelCountError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Configuration content is malformed or has unknown keys
    InvalidInput,
    /// Configuration file could not be read
    Io,
    /// A collaborator outside this crate (event dispatcher) failed
    ExternalService,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for
/// debugging. Built from `RelCountError` at logging boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised around the counting protocol
///
/// Counter mutation itself never fails: a missing parent, a parent without
/// counting capability, or a disabled flag all mean "leave the counter
/// alone". What can fail is the collaborator work around it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelCountError {
    /// The event dispatcher rejected a deletion notification
    #[error("Failed to dispatch {event_type} for entity {entity_id}: {reason}")]
    DispatchFailed {
        event_type: String,
        entity_id: String,
        reason: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {message}")]
    ConfigRead { path: String, message: String },

    /// Configuration content could not be parsed
    #[error("Invalid counting configuration: {message}")]
    ConfigParse { message: String },
}

impl From<RelCountError> for ExError {
    fn from(err: RelCountError) -> Self {
        match err {
            RelCountError::DispatchFailed {
                event_type,
                entity_id,
                reason,
            } => ExError::new(ExErrorKind::ExternalService)
                .with_op("dispatch_event")
                .with_entity_id(entity_id)
                .with_message(format!("{} dispatch failed: {}", event_type, reason)),

            RelCountError::ConfigRead { path, message } => ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("{}: {}", path, message)),

            RelCountError::ConfigParse { message } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_config")
                .with_message(message),
        }
    }
}

impl From<toml::de::Error> for RelCountError {
    fn from(err: toml::de::Error) -> Self {
        RelCountError::ConfigParse {
            message: err.to_string(),
        }
    }
}
