//! OS version tiers reported by `getPlatformVersion`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionTier {
    TenOrGreater,
    Eight,
    Seven,
    Unrecognized,
}

impl VersionTier {
    pub fn from_version(v: OsVersion) -> Self {
        match (v.major, v.minor) {
            (major, _) if major >= 10 => VersionTier::TenOrGreater,
            // 6.2 is Windows 8, 6.3 is 8.1
            (6, minor) if minor >= 2 => VersionTier::Eight,
            (6, 1) => VersionTier::Seven,
            _ => VersionTier::Unrecognized,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VersionTier::TenOrGreater => "Windows 10+",
            VersionTier::Eight => "Windows 8",
            VersionTier::Seven => "Windows 7",
            VersionTier::Unrecognized => "Windows",
        }
    }
}

/// Where the running OS version comes from.
pub trait VersionSource {
    fn os_version(&self) -> Option<OsVersion>;

    fn tier(&self) -> VersionTier {
        self.os_version()
            .map(VersionTier::from_version)
            .unwrap_or(VersionTier::Unrecognized)
    }
}

#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeVersion;

#[cfg(windows)]
impl VersionSource for NativeVersion {
    fn os_version(&self) -> Option<OsVersion> {
        use crate::types::{OSVERSIONINFOW, RtlGetVersion};

        let mut info: OSVERSIONINFOW = unsafe { std::mem::zeroed() };
        info.dwOSVersionInfoSize = std::mem::size_of::<OSVERSIONINFOW>() as u32;
        // STATUS_SUCCESS == 0
        if unsafe { RtlGetVersion(&mut info) } != 0 {
            log::warn!("RtlGetVersion failed");
            return None;
        }
        Some(OsVersion {
            major: info.dwMajorVersion,
            minor: info.dwMinorVersion,
            build: info.dwBuildNumber,
        })
    }
}
