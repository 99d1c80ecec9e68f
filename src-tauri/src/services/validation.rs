//! Client-side selection rules, checked before anything touches the network.

use crate::error::ValidationError;
use crate::models::file::FileEntry;

/// Upper bound on files per submission.
pub const MAX_FILES: usize = 2;
pub const POM_SUFFIX: &str = ".pom";
pub const AAR_SUFFIX: &str = ".aar";

/// Check a selection. Rules run in order and the first failure wins:
/// empty, too many, then the `.pom` + `.aar` pair.
pub fn validate_files(files: &[FileEntry]) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    if files.len() > MAX_FILES {
        return Err(ValidationError::TooManyFiles);
    }
    let has_pom = files.iter().any(|f| f.has_suffix(POM_SUFFIX));
    let has_aar = files.iter().any(|f| f.has_suffix(AAR_SUFFIX));
    if !(has_pom && has_aar) {
        return Err(ValidationError::MissingRequiredTypes);
    }
    Ok(())
}
