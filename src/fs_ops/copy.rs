//! Safe copy-and-rename helper:
//! - Copies to a hidden temp file in the destination directory
//! - Renames temp -> dest, so the final name never shows a partial copy
//! - Cleans up the temp file if either step fails

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use crate::errors::FmError;

use super::helpers::io_error_with_help;
use super::util;

/// Copy `src` to `dest` (overwriting an existing `dest`). Returns bytes copied.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<u64, FmError> {
    let dest_dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp_path = util::unique_temp_path(dest_dir);

    // Source-side and destination-side failures name their own path.
    let mut reader = File::open(src).map_err(io_error_with_help("open source file", src))?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(io_error_with_help("create temporary file", &tmp_path))?;

    let copied = io::copy(&mut reader, &mut writer).and_then(|n| writer.sync_all().map(|()| n));
    drop(writer);
    let bytes = match copied {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_error_with_help("copy to temporary file", &tmp_path)(e));
        }
    };
    if let Ok(meta) = reader.metadata() {
        let _ = fs::set_permissions(&tmp_path, meta.permissions());
    }

    if let Err(e) = fs::rename(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("replace destination file", dest)(e));
    }
    Ok(bytes)
}
