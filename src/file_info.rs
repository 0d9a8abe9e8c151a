use std::path::{Path, PathBuf};

use crate::value::EncodableValue;

/// One selected file, as reported back to the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileInfo {
    bytes: Vec<u8>,
    path: String,
    name: String,
    size_kb: i32,
}

impl FileInfo {
    /// Build the record for `source`, rewriting its destination into
    /// `<temp_root>/<subfolder>/<file name>`.
    pub fn for_source(source: &str, temp_root: &Path, subfolder: &str) -> Self {
        let destination = destination_path(source, temp_root, subfolder);
        Self {
            bytes: Vec::new(),
            path: destination.to_string_lossy().into_owned(),
            name: source.to_string(),
            size_kb: 0,
        }
    }

    pub fn set_bytes(&mut self, bytes: Vec<u8>) {
        self.size_kb = i32::try_from(bytes.len() >> 10).unwrap_or(i32::MAX);
        self.bytes = bytes;
    }

    pub fn bytes(&self) -> &[u8] { &self.bytes }
    pub fn path(&self) -> &str { &self.path }
    pub fn name(&self) -> &str { &self.name }
    pub fn size_kb(&self) -> i32 { self.size_kb }

    pub fn to_map(&self) -> EncodableValue {
        EncodableValue::Map(vec![
            ("bytes".to_string(), EncodableValue::Uint8List(self.bytes.clone())),
            ("path".to_string(), EncodableValue::String(self.path.clone())),
            ("name".to_string(), EncodableValue::String(self.name.clone())),
            ("size".to_string(), EncodableValue::Int32(self.size_kb)),
        ])
    }
}

/// Everything after the last `/` or `\`. Both separators are accepted
/// regardless of the platform the crate runs on.
pub fn file_name_of(source: &str) -> &str {
    match source.rfind(|c: char| c == '/' || c == '\\') {
        Some(pos) => &source[pos + 1..],
        None => source,
    }
}

pub fn destination_path(source: &str, temp_root: &Path, subfolder: &str) -> PathBuf {
    temp_root.join(subfolder).join(file_name_of(source))
}
