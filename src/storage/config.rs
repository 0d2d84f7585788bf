use std::path::PathBuf;

/// Directory name used under the platform configuration directory
pub const APP_DIR_NAME: &str = "crypto-tracker";
/// File name of the preference store
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// `<config dir>/crypto-tracker/preferences.json`, `None` when the platform has no config dir
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
}
