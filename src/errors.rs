use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    StoreRead {
        path: String,
        reason: String,
    },
    StoreWrite {
        path: String,
        source: std::io::Error,
    },
    Validation(String),
    DateParse {
        name: String,
        value: String,
        source: chrono::ParseError,
    },
    NotFound(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid JSON data: {}", e)
            }
            AppError::StoreRead { path, reason } => {
                write!(f, "Could not read contacts from {}: {}", path, reason)
            }
            AppError::StoreWrite { path, source } => {
                write!(f, "Could not write contacts to {}: {}", path, source)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::DateParse { name, value, source } => {
                write!(
                    f,
                    "Invalid birth date '{}' for contact {}: {}",
                    value, name, source
                )
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::StoreWrite { source, .. } => Some(source),
            AppError::DateParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
