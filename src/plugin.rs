//! Method-channel façade: argument parsing, dispatch, and registration.

use log::{debug, error, info};

use crate::channel::{MethodCall, MethodResponse, MethodResult, PluginRegistrar};
use crate::config::PluginConfig;
use crate::dialog::{DialogBackend, FilePickerDelegate, Staging};
use crate::error::{PickerError, Result};
use crate::filters::Category;
use crate::platform::VersionSource;
use crate::value::EncodableValue;

pub const METHOD_PLATFORM_VERSION: &str = "getPlatformVersion";
pub const METHOD_DIR: &str = "dir";

const ARG_ALLOWED_EXTENSIONS: &str = "allowedExtensions";
const ARG_ALLOW_MULTIPLE: &str = "allowMultipleSelection";
const ARG_WITH_DATA: &str = "withData";

/// Arguments of a category pick, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickFilesArgs {
    pub allowed_extensions: Vec<String>,
    pub allow_multiple: bool,
    pub with_data: bool,
}

impl PickFilesArgs {
    /// Absent or non-map arguments behave like an empty map.
    pub fn parse(arguments: Option<&EncodableValue>) -> Result<Self> {
        let args = arguments.filter(|a| a.is_map()).unwrap_or(&EncodableValue::Null);

        let allowed_extensions: Vec<String> = args
            .get(ARG_ALLOWED_EXTENSIONS)
            .and_then(EncodableValue::as_list)
            .map(|list| list.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
            .unwrap_or_default();

        Ok(Self {
            allowed_extensions,
            allow_multiple: required_bool(args, ARG_ALLOW_MULTIPLE)?,
            with_data: required_bool(args, ARG_WITH_DATA)?,
        })
    }
}

fn required_bool(args: &EncodableValue, name: &str) -> Result<bool> {
    args.get(name)
        .and_then(EncodableValue::as_bool)
        .ok_or_else(|| PickerError::ArgumentMissing(name.to_string()))
}

impl From<PickerError> for MethodResponse {
    fn from(err: PickerError) -> Self {
        match err {
            // A dismissed dialog is not a failure.
            PickerError::Cancelled => MethodResponse::Success(None),
            other => MethodResponse::Error(other.to_string()),
        }
    }
}

pub struct FilePickerPlugin<B, V> {
    backend: B,
    version: V,
    config: PluginConfig,
}

impl<B: DialogBackend, V: VersionSource> FilePickerPlugin<B, V> {
    pub fn new(backend: B, version: V, config: PluginConfig) -> Self {
        Self { backend, version, config }
    }

    /// Entry point the host calls for every message on the channel.
    pub fn handle_method_call(&self, call: &MethodCall, result: Box<dyn MethodResult>) {
        self.dispatch(call).send(result);
    }

    pub fn dispatch(&self, call: &MethodCall) -> MethodResponse {
        debug!("method call {:?}", call.method);
        let response = match call.method.as_str() {
            METHOD_PLATFORM_VERSION => {
                MethodResponse::Success(Some(self.version.tier().label().into()))
            }
            METHOD_DIR => self.pick_folder(),
            name => match Category::from_method(name) {
                Some(category) => self.pick_files(category, call.arguments.as_ref()),
                None => MethodResponse::NotImplemented,
            },
        };
        if let MethodResponse::Error(message) = &response {
            error!("{} failed: {}", call.method, message);
        }
        response
    }

    fn delegate(&self, title: &str) -> FilePickerDelegate<&B> {
        FilePickerDelegate::new(&self.backend, title)
    }

    fn pick_folder(&self) -> MethodResponse {
        match self.delegate(&self.config.folder_dialog_title).pick_folder() {
            Ok(path) => MethodResponse::Success(Some(path.into())),
            Err(e) => e.into(),
        }
    }

    fn pick_files(&self, category: Category, arguments: Option<&EncodableValue>) -> MethodResponse {
        let args = match PickFilesArgs::parse(arguments) {
            Ok(args) => args,
            Err(e) => return e.into(),
        };

        let staging = Staging {
            temp_root: self.config.temp_root(),
            subfolder: self.config.temp_subfolder.clone(),
            load_file_bytes: self.config.load_file_bytes,
        };
        let extensions = category.filters_with(args.allowed_extensions);

        match self
            .delegate(&self.config.files_dialog_title)
            .pick_files(extensions, args.allow_multiple, args.with_data, &staging)
        {
            Ok(files) => {
                info!("{} picked {} file(s)", category.as_str(), files.len());
                let list = files.iter().map(|f| f.to_map()).collect::<Vec<_>>();
                MethodResponse::Success(Some(EncodableValue::List(list)))
            }
            Err(e) => e.into(),
        }
    }
}

/// Install `plugin` as the handler of its configured channel.
pub fn register_with_registrar<B, V>(registrar: &mut dyn PluginRegistrar, plugin: FilePickerPlugin<B, V>)
where
    B: DialogBackend + 'static,
    V: VersionSource + 'static,
{
    let channel = plugin.config.channel_name.clone();
    registrar.set_method_call_handler(
        &channel,
        Box::new(move |call: &MethodCall, result: Box<dyn MethodResult>| plugin.handle_method_call(call, result)),
    );
    info!("file picker registered on channel {}", channel);
}

/// Register the plugin backed by the real shell dialog.
#[cfg(windows)]
pub fn register_native(registrar: &mut dyn PluginRegistrar) -> Result<()> {
    use crate::com::{ComApartment, ComDialog};
    use crate::logger::init_logger;
    use crate::platform::NativeVersion;

    let config = PluginConfig::load();
    init_logger(config.log_level_mask);
    ComApartment::initialize()?;
    register_with_registrar(registrar, FilePickerPlugin::new(ComDialog, NativeVersion, config));
    Ok(())
}
