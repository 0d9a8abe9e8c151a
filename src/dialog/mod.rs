//! One native open-dialog interaction, independent of how the dialog is shown.

use std::path::PathBuf;

use log::{debug, trace, warn};

use crate::error::{PickerError, Result};
use crate::file_info::FileInfo;

/// `HRESULT_FROM_WIN32(ERROR_CANCELLED)`, reported when the user dismisses the dialog.
pub const HRESULT_CANCELLED: i32 = 0x800704C7_u32 as i32;

/// Option flags applied once before the dialog is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogOptions {
    pub pick_folders: bool,
    pub allow_multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    /// Wildcard patterns; each one is both the filter label and its pattern.
    pub filters: Vec<String>,
    pub options: DialogOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Selected(Vec<String>),
    Cancelled,
    Failed { code: i32, message: String },
    /// A string crossing the native boundary could not be converted.
    Undecodable(String),
}

impl DialogOutcome {
    /// Classify a failing status. `describe` is only consulted for non-cancel codes.
    pub fn from_failure(code: i32, describe: impl FnOnce(i32) -> String) -> Self {
        if code == HRESULT_CANCELLED {
            DialogOutcome::Cancelled
        } else {
            DialogOutcome::Failed { code, message: describe(code) }
        }
    }

    fn into_paths(self) -> Result<Vec<String>> {
        match self {
            DialogOutcome::Selected(paths) => Ok(paths),
            DialogOutcome::Cancelled => Err(PickerError::Cancelled),
            DialogOutcome::Failed { code, message } => {
                let message = if message.trim().is_empty() {
                    format!("native dialog failed (HRESULT 0x{:08X})", code as u32)
                } else {
                    message.trim_end().to_string()
                };
                Err(PickerError::NativeDialog { code, message })
            }
            DialogOutcome::Undecodable(reason) => Err(PickerError::Encoding(reason)),
        }
    }
}

/// Shows a configured dialog modally and reports what the user chose.
///
/// Implementations block the calling thread until the dialog is dismissed.
pub trait DialogBackend {
    fn show(&self, request: &DialogRequest) -> DialogOutcome;
}

impl<B: DialogBackend + ?Sized> DialogBackend for &B {
    fn show(&self, request: &DialogRequest) -> DialogOutcome {
        (**self).show(request)
    }
}

/// Where picked files are reported to live, and whether their bytes are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staging {
    pub temp_root: PathBuf,
    pub subfolder: String,
    pub load_file_bytes: bool,
}

/// Owns a single dialog interaction. Both pick operations consume it.
pub struct FilePickerDelegate<B> {
    backend: B,
    title: String,
}

impl<B: DialogBackend> FilePickerDelegate<B> {
    pub fn new(backend: B, title: impl Into<String>) -> Self {
        Self { backend, title: title.into() }
    }

    pub fn pick_folder(self) -> Result<String> {
        let request = DialogRequest {
            title: self.title,
            filters: Vec::new(),
            options: DialogOptions { pick_folders: true, allow_multiple: false },
        };
        let paths = self.backend.show(&request).into_paths()?;
        // An OK with nothing selected is indistinguishable from a cancel for the caller.
        paths.into_iter().next().ok_or(PickerError::Cancelled)
    }

    pub fn pick_files(
        self,
        extensions: Vec<String>,
        allow_multiple: bool,
        include_data: bool,
        staging: &Staging,
    ) -> Result<Vec<FileInfo>> {
        let request = DialogRequest {
            title: self.title,
            filters: extensions,
            options: DialogOptions { pick_folders: false, allow_multiple },
        };
        trace!("showing file dialog with {} filter(s), multiple={}", request.filters.len(), allow_multiple);
        let paths = self.backend.show(&request).into_paths()?;

        let read_bytes = include_data && staging.load_file_bytes;
        if include_data && !read_bytes {
            debug!("withData requested but file bytes are not loaded; returning empty byte buffers");
        }

        let files = paths
            .iter()
            .map(|source| {
                let mut info = FileInfo::for_source(source, &staging.temp_root, &staging.subfolder);
                if read_bytes {
                    match std::fs::read(source) {
                        Ok(bytes) => info.set_bytes(bytes),
                        Err(e) => warn!("could not read {}: {}", source, e),
                    }
                }
                info
            })
            .collect();
        Ok(files)
    }
}


#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::testing::FakeDialog;
    use super::*;

    fn staging(root: &Path) -> Staging {
        Staging { temp_root: root.to_path_buf(), subfolder: "file_picker".into(), load_file_bytes: false }
    }

    #[test]
    fn folder_pick_configures_single_folder_mode() {
        let fake = FakeDialog::selecting(&[r"C:\Projects"]);
        let path = FilePickerDelegate::new(&fake, "Select folder").pick_folder().unwrap();
        assert_eq!(path, r"C:\Projects");

        let request = fake.last_request().unwrap();
        assert_eq!(request.title, "Select folder");
        assert!(request.filters.is_empty());
        assert_eq!(request.options, DialogOptions { pick_folders: true, allow_multiple: false });
    }

    #[test]
    fn folder_pick_with_empty_selection_is_cancel() {
        let fake = FakeDialog::selecting(&[]);
        let err = FilePickerDelegate::new(&fake, "t").pick_folder().unwrap_err();
        assert_eq!(err, PickerError::Cancelled);
    }

    #[test]
    fn cancel_status_is_distinguished_from_failure() {
        let cancelled = DialogOutcome::from_failure(HRESULT_CANCELLED, |_| unreachable!());
        assert_eq!(cancelled, DialogOutcome::Cancelled);

        let failed = DialogOutcome::from_failure(-2147467259, |_| "Unspecified error\r\n".into());
        let fake = FakeDialog::new(failed);
        let err = FilePickerDelegate::new(&fake, "t")
            .pick_files(vec![], false, false, &staging(Path::new("tmp")))
            .unwrap_err();
        assert_eq!(err, PickerError::NativeDialog { code: -2147467259, message: "Unspecified error".into() });
    }

    #[test]
    fn undecodable_result_is_an_encoding_error() {
        let fake = FakeDialog::new(DialogOutcome::Undecodable("unpaired surrogate".into()));
        let err = FilePickerDelegate::new(&fake, "t").pick_folder().unwrap_err();
        assert_eq!(err, PickerError::Encoding("unpaired surrogate".into()));

        let fake = FakeDialog::new(DialogOutcome::Undecodable("unpaired surrogate".into()));
        let err = FilePickerDelegate::new(&fake, "t")
            .pick_files(vec![], true, false, &staging(Path::new("tmp")))
            .unwrap_err();
        assert!(matches!(err, PickerError::Encoding(_)));
    }

    #[test]
    fn failure_without_message_gets_one() {
        let fake = FakeDialog::new(DialogOutcome::Failed { code: 0x80004005_u32 as i32, message: String::new() });
        let err = FilePickerDelegate::new(&fake, "t").pick_folder().unwrap_err();
        assert_eq!(err.to_string(), "native dialog failed (HRESULT 0x80004005)");
    }

    #[test]
    fn files_are_staged_under_temp_subfolder() {
        let fake = FakeDialog::selecting(&[r"D:\a\one.png", "D:/b/two.jpg"]);
        let root = Path::new("tmp-root");
        let files = FilePickerDelegate::new(&fake, "Select files")
            .pick_files(vec!["*.png".into()], true, false, &staging(root))
            .unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name(), r"D:\a\one.png");
        assert_eq!(files[0].path(), root.join("file_picker").join("one.png").to_string_lossy());
        assert_eq!(files[1].path(), root.join("file_picker").join("two.jpg").to_string_lossy());

        let request = fake.last_request().unwrap();
        assert_eq!(request.filters, vec!["*.png"]);
        assert_eq!(request.options, DialogOptions { pick_folders: false, allow_multiple: true });
    }

    #[test]
    fn with_data_leaves_bytes_empty_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("blob.bin");
        std::fs::write(&source, vec![7u8; 4096]).unwrap();
        let source = source.to_string_lossy().into_owned();

        let fake = FakeDialog::selecting(&[source.as_str()]);
        let files = FilePickerDelegate::new(&fake, "t")
            .pick_files(vec![], false, true, &staging(dir.path()))
            .unwrap();
        assert!(files[0].bytes().is_empty());
        assert_eq!(files[0].size_kb(), 0);
    }

    #[test]
    fn with_data_reads_bytes_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("blob.bin");
        std::fs::write(&source, vec![7u8; 4096]).unwrap();
        let source = source.to_string_lossy().into_owned();

        let mut staging = staging(dir.path());
        staging.load_file_bytes = true;
        let fake = FakeDialog::selecting(&[source.as_str()]);
        let files = FilePickerDelegate::new(&fake, "t")
            .pick_files(vec![], false, true, &staging)
            .unwrap();
        assert_eq!(files[0].bytes().len(), 4096);
        assert_eq!(files[0].size_kb(), 4);

        // withData=false never reads, even when enabled.
        let fake = FakeDialog::selecting(&[source.as_str()]);
        let files = FilePickerDelegate::new(&fake, "t")
            .pick_files(vec![], false, false, &staging)
            .unwrap();
        assert!(files[0].bytes().is_empty());
    }
}
