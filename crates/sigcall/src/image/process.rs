//! Main-module lookup for the current process

use tracing::debug;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::ProcessStatus::{GetModuleInformation, MODULEINFO};
use windows::Win32::System::Threading::GetCurrentProcess;

use crate::error::{Error, Result};
use crate::image::LoadedImage;

/// Query the base address and size of the running executable's image.
pub fn main_module() -> Result<LoadedImage> {
    let module = unsafe { GetModuleHandleW(None) }
        .map_err(|e| Error::ImageQueryFailed(e.to_string()))?;

    let mut info = MODULEINFO::default();
    unsafe {
        GetModuleInformation(
            GetCurrentProcess(),
            module,
            &mut info,
            std::mem::size_of::<MODULEINFO>() as u32,
        )
    }
    .map_err(|e| Error::ImageQueryFailed(e.to_string()))?;

    let base = info.lpBaseOfDll as u64;
    let size = info.SizeOfImage as usize;
    debug!("main module: base=0x{:X}, size=0x{:X}", base, size);

    Ok(unsafe { LoadedImage::from_raw(base, size) })
}
