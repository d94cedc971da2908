use std::error::Error;
use std::fmt;

use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ClipboardError {
    Unavailable(String),
    WriteFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl Error for ClipboardError {}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write(&self, content: &str) -> Result<(), ClipboardError>;
}
