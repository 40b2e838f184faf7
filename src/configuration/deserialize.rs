pub mod file_paths {
    use crate::utils::path::normalize_file_path;
    use serde::{Deserialize, Deserializer};
    use serde_derive::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    enum PathsEntry {
        Single(String),
        Array(Vec<String>),
    }

    /// A list of paths, or one string of paths separated by commas or newlines.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let paths = match PathsEntry::deserialize(deserializer)? {
            PathsEntry::Single(paths) => paths
                .split(|c: char| c == ',' || c == '\n')
                .map(normalize_file_path)
                .collect::<Vec<_>>(),
            PathsEntry::Array(paths) => paths.iter().map(|p| normalize_file_path(p)).collect(),
        };
        Ok(paths.into_iter().filter(|p| !p.is_empty()).collect())
    }
}

pub mod dir_path {
    use crate::utils::path::normalize_dir_path;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(|dir| {
            dir.filter(|d| !d.trim().is_empty())
                .map(|d| normalize_dir_path(&d, true))
        })
    }
}
