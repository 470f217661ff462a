//! Small file helpers shared by the readers and writers.

use std::path::Path;

use crate::error::DataError;

/// Write `contents` to a sibling temp file, then rename it over `path`.
///
/// Readers see either the old file or the complete new one.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), DataError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| DataError::io(parent, e))?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);

    std::fs::write(tmp, contents).map_err(|e| DataError::io(tmp, e))?;
    std::fs::rename(tmp, path).map_err(|e| DataError::io(path, e))?;
    Ok(())
}

/// Read a required input file, reporting a missing file distinctly.
pub(crate) fn read_input(path: &Path) -> Result<String, DataError> {
    if !path.exists() {
        return Err(DataError::missing_input(path));
    }
    std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))
}
