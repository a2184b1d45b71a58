//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use crate::error::{Error, LastError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Creates the directory `path` and all of its missing parents.
pub fn ensure_dir<P>(path: &P) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() == true {
        return Ok(());
    }
    std::fs::create_dir_all(path)
        .map_err(|e| Error::CreateDir(path.to_path_buf(), LastError(e.to_string())))
}

/// Writes `bytes` to a new file at `dst`.
///
/// The bytes are first written to a temporary file in the same directory and
/// then moved into place, so `dst` either holds the complete contents or does
/// not exist at all. An existing file at `dst` is never replaced.
pub fn write_new_file(dst: &PathBuf, bytes: &[u8]) -> Result<(), Error> {
    let to_err = |e: std::io::Error| Error::WriteFile(dst.clone(), LastError(e.to_string()));

    let dir = match dst.parent() {
        Some(p) if p.as_os_str().is_empty() == false => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut temp_file = NamedTempFile::new_in(&dir).map_err(to_err)?;
    temp_file.write_all(bytes).map_err(to_err)?;
    temp_file.flush().map_err(to_err)?;
    temp_file.persist_noclobber(dst).map_err(|e| to_err(e.error))?;
    Ok(())
}

/// Resolves a relative path into a full path if given relative to some `root` path.
///
/// Absolute paths are returned unchanged.
pub fn resolve_rel_path(root: &Path, p: &Path) -> PathBuf {
    match p.is_relative() {
        true => root.join(p),
        false => p.to_path_buf(),
    }
}
