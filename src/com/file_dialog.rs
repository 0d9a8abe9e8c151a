use std::ffi::c_void;
use std::marker::PhantomData;
use std::ptr;

use log::{trace, warn};
use windows_sys::Win32::System::Com::{CoCreateInstance, CoTaskMemFree, CLSCTX_ALL};

use crate::com::hresult_message;
use crate::dialog::{DialogBackend, DialogOutcome, DialogRequest};
use crate::error::PickerError;
use crate::types::*;
use crate::wide::{from_wide_ptr, to_wstring_checked};

/// Owned interface pointer; released on drop.
struct ComObject<V> {
    raw: *mut c_void,
    _vtbl: PhantomData<V>,
}

impl<V> ComObject<V> {
    /// # Safety
    /// `raw` must be a non-null interface pointer whose vtable starts with `V`.
    unsafe fn from_raw(raw: *mut c_void) -> Self {
        Self { raw, _vtbl: PhantomData }
    }

    fn vtbl(&self) -> &V {
        unsafe { &**(self.raw as *mut *const V) }
    }
}

impl<V> Drop for ComObject<V> {
    fn drop(&mut self) {
        unsafe {
            let unknown = &**(self.raw as *mut *const IUnknownVtbl);
            (unknown.release)(self.raw);
        }
    }
}

/// Why a dialog run stopped before producing paths.
enum RunError {
    Status(HRESULT),
    Encoding(String),
}

impl From<HRESULT> for RunError {
    fn from(hr: HRESULT) -> Self { RunError::Status(hr) }
}

impl From<PickerError> for RunError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::Encoding(reason) => RunError::Encoding(reason),
            other => RunError::Encoding(other.to_string()),
        }
    }
}

fn check(hr: HRESULT) -> Result<(), HRESULT> {
    if hr < 0 { Err(hr) } else { Ok(()) }
}

/// Backend that shows the real shell `IFileOpenDialog`.
///
/// COM must already be initialized on the calling thread (see
/// [`ComApartment`](crate::com::ComApartment)).
#[derive(Debug, Default, Clone, Copy)]
pub struct ComDialog;

impl DialogBackend for ComDialog {
    fn show(&self, request: &DialogRequest) -> DialogOutcome {
        match unsafe { run_dialog(request) } {
            Ok(paths) => DialogOutcome::Selected(paths),
            Err(RunError::Status(hr)) => DialogOutcome::from_failure(hr, hresult_message),
            Err(RunError::Encoding(reason)) => DialogOutcome::Undecodable(reason),
        }
    }
}

unsafe fn run_dialog(request: &DialogRequest) -> Result<Vec<String>, RunError> { unsafe {
    let mut p_dialog: *mut c_void = ptr::null_mut();
    check(CoCreateInstance(&CLSID_FILE_OPEN_DIALOG, ptr::null_mut(), CLSCTX_ALL, &IID_IFILE_OPEN_DIALOG, &mut p_dialog))?;
    let dialog = ComObject::<IFileOpenDialogVtbl>::from_raw(p_dialog);
    let vtbl = dialog.vtbl();

    let title = to_wstring_checked(&request.title)?;
    check((vtbl.set_title)(dialog.raw, title.as_ptr()))?;

    // The wide buffers must outlive SetFileTypes; the dialog copies them.
    if !request.filters.is_empty() {
        let wide: Vec<Vec<u16>> = request
            .filters
            .iter()
            .map(|f| to_wstring_checked(f))
            .collect::<crate::error::Result<_>>()?;
        let specs: Vec<COMDLG_FILTERSPEC> = wide
            .iter()
            .map(|w| COMDLG_FILTERSPEC { psz_name: w.as_ptr(), psz_spec: w.as_ptr() })
            .collect();
        check((vtbl.set_file_types)(dialog.raw, specs.len() as u32, specs.as_ptr()))?;
    }

    let mut flags = FOS_FORCEFILESYSTEM;
    if request.options.pick_folders {
        flags |= FOS_PICKFOLDERS;
    }
    if request.options.allow_multiple {
        flags |= FOS_ALLOWMULTISELECT;
    }
    let mut current_options = 0;
    check((vtbl.get_options)(dialog.raw, &mut current_options))?;
    check((vtbl.set_options)(dialog.raw, current_options | flags))?;

    trace!("showing IFileOpenDialog {:?} (options 0x{:X})", request.title, current_options | flags);
    check((vtbl.show)(dialog.raw, ptr::null_mut()))?;

    let mut p_results: *mut c_void = ptr::null_mut();
    check((vtbl.get_results)(dialog.raw, &mut p_results))?;
    let results = ComObject::<IShellItemArrayVtbl>::from_raw(p_results);
    let results_vtbl = results.vtbl();

    let mut count = 0;
    check((results_vtbl.get_count)(results.raw, &mut count))?;

    let mut paths = Vec::with_capacity(count as usize);
    for i in 0..count {
        let mut p_item: *mut c_void = ptr::null_mut();
        check((results_vtbl.get_item_at)(results.raw, i, &mut p_item))?;
        if p_item.is_null() {
            return Err(RunError::Status(E_POINTER));
        }
        let item = ComObject::<IShellItemVtbl>::from_raw(p_item);
        paths.push(path_from_item(&item)?);
    }

    Ok(paths)
}}

/// Extract a filesystem path from an IShellItem, freeing the OS string.
unsafe fn path_from_item(item: &ComObject<IShellItemVtbl>) -> Result<String, RunError> { unsafe {
    let mut name_ptr: PWSTR = ptr::null_mut();
    check((item.vtbl().get_display_name)(item.raw, SIGDN_FILESYSPATH, &mut name_ptr))?;
    if name_ptr.is_null() {
        return Err(RunError::Status(E_POINTER));
    }
    let result = from_wide_ptr(name_ptr);
    CoTaskMemFree(name_ptr as _);
    if let Err(e) = &result {
        warn!("dialog result is not valid UTF-16: {}", e);
    }
    Ok(result?)
}}
