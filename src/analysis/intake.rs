use crate::models::RfpDocument;

/// Accepted document types and size limit for the intake entry point.
#[derive(Debug, Clone)]
pub struct FileConstraints {
    pub accepted_extensions: Vec<String>,
    pub max_size_mb: u64,
}

impl Default for FileConstraints {
    fn default() -> Self {
        Self {
            accepted_extensions: vec![".pdf".into(), ".docx".into(), ".doc".into()],
            max_size_mb: 10,
        }
    }
}

/// A document rejected before any service call. Surfaced to the user as a
/// validation error rather than silently dropping the selection.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Unsupported file type {extension:?}; accepted: {}", accepted.join(", "))]
    UnsupportedType {
        extension: String,
        accepted: Vec<String>,
    },
    #[error("File is {size_mb:.1} MB; the maximum is {max_size_mb} MB")]
    TooLarge { size_mb: f64, max_size_mb: u64 },
}

impl FileConstraints {
    /// Validate a document against the accepted extensions and size limit.
    pub fn check(&self, doc: &RfpDocument) -> Result<(), IntakeError> {
        let extension = doc.extension().unwrap_or_default();
        if !self
            .accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(&extension))
        {
            return Err(IntakeError::UnsupportedType {
                extension,
                accepted: self.accepted_extensions.clone(),
            });
        }

        if doc.size_mb() > self.max_size_mb as f64 {
            return Err(IntakeError::TooLarge {
                size_mb: doc.size_mb(),
                max_size_mb: self.max_size_mb,
            });
        }

        Ok(())
    }
}
