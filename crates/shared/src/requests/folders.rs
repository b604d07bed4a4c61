use serde::{Deserialize, Serialize};

/// Body of the folder mutations. `POST /createFolder` sends `path`, the
/// `/folders` routes send `folderPath`; either is accepted everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRequest {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub folder_path: Option<String>,
}

impl FolderRequest {
    /// The first non-blank of `folderPath` and `path`.
    pub fn requested_path(&self) -> Option<&str> {
        self.folder_path
            .as_deref()
            .into_iter()
            .chain(self.path.as_deref())
            .find(|p| !p.trim().is_empty())
    }
}
