use super::{DrillError, ErrorCode};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to DrillError with context
    fn to_drill(self, context: impl Into<String>) -> Result<T, DrillError>;

    /// Convert to a configuration error tied to a file
    fn to_config_error(self, code: u16, path: &Path) -> Result<T, DrillError>;

    /// Convert to an I/O error tied to a file
    fn to_io_error(self, path: &Path) -> Result<T, DrillError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_drill(self, context: impl Into<String>) -> Result<T, DrillError> {
        self.map_err(|e| DrillError::other(context).with_source(e))
    }

    fn to_config_error(self, code: u16, path: &Path) -> Result<T, DrillError> {
        self.map_err(|e| {
            let source = e.into();
            DrillError::config_with_code(code, source.to_string(), Some(path.to_path_buf()))
                .with_source(source)
        })
    }

    fn to_io_error(self, path: &Path) -> Result<T, DrillError> {
        self.map_err(|e| {
            let source = e.into();
            DrillError::io_with_code(
                ErrorCode::IO_READ_FAILED,
                source.to_string(),
                Some(path.to_path_buf()),
            )
            .with_source(source)
        })
    }
}
