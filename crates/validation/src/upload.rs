//! File-upload constraints.

use serde::{Deserialize, Serialize};

use crate::result::ValidationResult;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Metadata of an uploaded file, as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Size ceiling and mime-type whitelist for uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConstraints {
    pub max_size: u64,
    pub allowed_mime_types: Vec<String>,
}

impl Default for FileConstraints {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_mime_types: ["image/jpeg", "image/png", "image/gif", "image/webp"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl FileConstraints {
    /// Presence is required; size and mime type are then checked independently.
    pub fn check(&self, file: Option<&FileUpload>) -> ValidationResult {
        let Some(file) = file else {
            return ValidationResult::single("File is required");
        };

        let mut errors = Vec::new();
        if file.size > self.max_size {
            errors.push(format!("File size must not exceed {} bytes", self.max_size));
        }
        if !self.allowed_mime_types.iter().any(|m| m == &file.mime_type) {
            errors.push(format!("File type {} is not allowed", file.mime_type));
        }
        ValidationResult::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(size: u64, mime: &str) -> FileUpload {
        FileUpload {
            file_name: "avatar".to_string(),
            size,
            mime_type: mime.to_string(),
        }
    }

    #[test]
    fn missing_file_is_required() {
        let result = FileConstraints::default().check(None);
        assert_eq!(result.errors(), ["File is required"]);
    }

    #[test]
    fn accepted_file_passes() {
        assert!(FileConstraints::default().check(Some(&upload(1024, "image/png"))).is_valid());
    }

    #[test]
    fn size_limit_is_inclusive() {
        let c = FileConstraints::default();
        assert!(c.check(Some(&upload(DEFAULT_MAX_UPLOAD_BYTES, "image/jpeg"))).is_valid());
        assert!(!c.check(Some(&upload(DEFAULT_MAX_UPLOAD_BYTES + 1, "image/jpeg"))).is_valid());
    }

    #[test]
    fn oversize_and_wrong_type_are_both_reported() {
        let c = FileConstraints {
            max_size: 10,
            allowed_mime_types: vec!["text/plain".to_string()],
        };
        let result = c.check(Some(&upload(11, "application/x-sh")));
        assert_eq!(
            result.errors(),
            ["File size must not exceed 10 bytes", "File type application/x-sh is not allowed"]
        );
    }
}
