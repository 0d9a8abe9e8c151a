use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::channel::CHANNEL_NAME;
use crate::logger::{LOG_LEVEL_ERROR, LOG_LEVEL_INFO, LOG_LEVEL_WARN};

const CONFIG_FILE: &str = "file_picker.json";

/// Plugin settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    pub channel_name: String,
    pub folder_dialog_title: String,
    pub files_dialog_title: String,
    /// Subfolder of the temp root that picked files are reported under.
    pub temp_subfolder: String,
    /// Overrides the system temp directory when set.
    pub temp_root: Option<PathBuf>,
    /// Read file contents when the caller asks for `withData`.
    pub load_file_bytes: bool,
    pub log_level_mask: u8,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            channel_name: CHANNEL_NAME.to_string(),
            folder_dialog_title: "Select folder".to_string(),
            files_dialog_title: "Select files".to_string(),
            temp_subfolder: "file_picker".to_string(),
            temp_root: None,
            load_file_bytes: false,
            log_level_mask: LOG_LEVEL_ERROR | LOG_LEVEL_WARN | LOG_LEVEL_INFO,
        }
    }
}

impl PluginConfig {
    fn get_path() -> PathBuf {
        let mut path = std::env::current_exe().unwrap_or_default();
        path.set_file_name(CONFIG_FILE);
        path
    }

    /// Load from `file_picker.json` next to the host executable.
    pub fn load() -> Self {
        Self::load_from(&Self::get_path())
    }

    /// A missing or malformed file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text).unwrap_or_else(|e| {
                log::warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn temp_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = PluginConfig::from_json("{}").unwrap();
        assert_eq!(config, PluginConfig::default());
        assert_eq!(config.channel_name, "miguelruivo.flutter.plugins.filepicker");
        assert_eq!(config.temp_subfolder, "file_picker");
        assert!(!config.load_file_bytes);
    }

    #[test]
    fn partial_override() {
        let config = PluginConfig::from_json(
            r#"{"filesDialogTitle": "Choose", "tempRoot": "D:\\scratch", "loadFileBytes": true}"#,
        )
        .unwrap();
        assert_eq!(config.files_dialog_title, "Choose");
        assert_eq!(config.folder_dialog_title, "Select folder");
        assert_eq!(config.temp_root(), PathBuf::from("D:\\scratch"));
        assert!(config.load_file_bytes);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PluginConfig::from_json("{not json").is_err());
        assert!(PluginConfig::from_json(r#"{"loadFileBytes": "yes"}"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"folderDialogTitle": "Pick a folder", "logLevelMask": 15}"#).unwrap();

        let config = PluginConfig::load_from(&path);
        assert_eq!(config.folder_dialog_title, "Pick a folder");
        assert_eq!(config.log_level_mask, 15);
        assert_eq!(config.files_dialog_title, "Select files");
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert_eq!(PluginConfig::load_from(&missing), PluginConfig::default());

        let malformed = dir.path().join(CONFIG_FILE);
        std::fs::write(&malformed, "{\"channelName\": 42").unwrap();
        assert_eq!(PluginConfig::load_from(&malformed), PluginConfig::default());
    }

    #[test]
    fn temp_root_defaults_to_system_temp() {
        assert_eq!(PluginConfig::default().temp_root(), std::env::temp_dir());
    }
}
