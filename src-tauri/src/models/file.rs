//! File entry model for selection and drag-and-drop resolution.

/// A file picked by the user, as shown in the selection list.
///
/// Content is not held in memory; it is read from `file_path` when the
/// multipart body is built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
}

impl FileEntry {
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.file_name.ends_with(suffix)
    }
}
