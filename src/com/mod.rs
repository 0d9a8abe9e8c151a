//! Windows COM plumbing: one-time apartment setup and HRESULT text.

pub mod file_dialog;

use std::ptr;
use std::sync::OnceLock;

use log::{info, trace, warn};
use windows_sys::Win32::Foundation::{RPC_E_CHANGED_MODE, S_FALSE, S_OK};
use windows_sys::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED};
use windows_sys::Win32::System::Diagnostics::Debug::{
    FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
};

use crate::error::{PickerError, Result};
use crate::types::HRESULT;
use crate::wide::from_wide;

pub use file_dialog::ComDialog;

static COM_INIT: OnceLock<HRESULT> = OnceLock::new();

/// Process-wide COM initialization for the thread the host registers us on.
pub struct ComApartment;

impl ComApartment {
    /// Runs `CoInitializeEx` at most once; later calls replay the first result.
    pub fn initialize() -> Result<()> {
        let hr = *COM_INIT.get_or_init(|| unsafe {
            // windows-sys defines COINIT_APARTMENTTHREADED as i32, CoInitializeEx expects u32
            CoInitializeEx(ptr::null(), COINIT_APARTMENTTHREADED as u32)
        });

        match hr {
            S_OK => {
                info!("COM initialized (apartment threaded)");
                Ok(())
            }
            S_FALSE => {
                trace!("COM already initialized on this thread");
                Ok(())
            }
            RPC_E_CHANGED_MODE => {
                // The host picked a multithreaded apartment first; the dialog still works there.
                warn!("COM already initialized with a different concurrency model");
                Ok(())
            }
            failed => Err(PickerError::NativeDialog { code: failed, message: hresult_message(failed) }),
        }
    }
}

/// System description of an HRESULT, or an empty string if there is none.
pub fn hresult_message(code: HRESULT) -> String {
    let mut buffer = [0u16; 512];
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            ptr::null(),
            code as u32,
            0,
            buffer.as_mut_ptr(),
            buffer.len() as u32,
            ptr::null(),
        )
    };
    let len = (len as usize).min(buffer.len());
    from_wide(&buffer[..len])
        .map(|s| s.trim_end().to_string())
        .unwrap_or_default()
}
