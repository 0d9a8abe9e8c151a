//! Native Windows file and folder picker exposed over a host method channel.
//!
//! The host registers the plugin once ([`plugin::register_native`] on Windows,
//! or [`plugin::register_with_registrar`] with any [`dialog::DialogBackend`])
//! and then routes every channel message through a single dispatch function.

pub mod channel;
pub mod config;
pub mod dialog;
pub mod error;
pub mod file_info;
pub mod filters;
pub mod logger;
pub mod platform;
pub mod plugin;
pub mod value;
pub mod wide;

#[cfg(windows)]
pub mod com;
#[cfg(windows)]
pub mod types;

pub use channel::{MethodCall, MethodResponse, MethodResult, PluginRegistrar, CHANNEL_NAME};
pub use config::PluginConfig;
pub use dialog::{DialogBackend, DialogOutcome, DialogRequest, FilePickerDelegate};
pub use error::PickerError;
pub use file_info::FileInfo;
pub use filters::Category;
pub use plugin::{register_with_registrar, FilePickerPlugin};
pub use value::EncodableValue;

#[cfg(windows)]
pub use plugin::register_native;
