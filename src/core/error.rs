//! Error types for the ulog system

pub type Result<T> = std::result::Result<T, UlogError>;

/// errno reported when a semaphore operation targets a destroyed signal
pub const EINVAL: i32 = 22;

/// errno reported when posting would push a semaphore past its maximum
pub const EOVERFLOW: i32 = 75;

#[derive(Debug, thiserror::Error)]
pub enum UlogError {
    /// Memory for the scratch buffer or a registry entry could not be reserved
    #[error("Allocation of {requested} bytes failed")]
    Allocation {
        requested: usize,
        #[source]
        source: Option<std::collections::TryReserveError>,
    },

    /// A manager already exists for this service
    #[error("Log manager already initialized")]
    AlreadyInitialized,

    /// The operation needs a live manager and there is none
    #[error("Log manager not initialized")]
    NotInitialized,

    /// Scratch buffers must hold at least one byte
    #[error("Invalid buffer size: {size}")]
    InvalidBufferSize { size: usize },

    /// Failure of the underlying synchronization primitive
    #[error("{operation} errno:{code}")]
    Primitive { operation: String, code: i32 },

    /// Insert or remove reported by the module collection
    #[error("Module collection error: {0}")]
    Collection(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UlogError {
    /// Create an allocation error for a request of `requested` bytes
    pub fn allocation(requested: usize, source: std::collections::TryReserveError) -> Self {
        UlogError::Allocation {
            requested,
            source: Some(source),
        }
    }

    /// Create a primitive error carrying a system-style error code
    pub fn primitive(operation: impl Into<String>, code: i32) -> Self {
        UlogError::Primitive {
            operation: operation.into(),
            code,
        }
    }

    /// Create a collection error
    pub fn collection<S: Into<String>>(msg: S) -> Self {
        UlogError::Collection(msg.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        UlogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// The system error code carried by primitive failures
    pub fn code(&self) -> Option<i32> {
        match self {
            UlogError::Primitive { code, .. } => Some(*code),
            _ => None,
        }
    }
}
