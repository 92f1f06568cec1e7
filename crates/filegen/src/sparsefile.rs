// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    fs,
    io::{self, Seek, SeekFrom, Write},
    path::Path,
};

use log::{debug, error, warn};

use crate::FileCreation;

/// Creates a sparse file at the specified path with the given size.
///
/// Any existing content is truncated. A single zero byte is written at the
/// final offset so the file reports exactly `size` bytes; whether the gap
/// is allocated on disk depends on the file system.
///
/// If writing fails, the file is removed only when this call created it.
/// Existing files and special files are left in place.
///
/// # Arguments
/// * `path` - Path where the sparse file should be created
/// * `size` - Size in bytes for the sparse file, zero gives an empty file
///
/// # Returns
/// `Result<(), FileCreation>` carrying the path and OS error on failure
pub fn create<P>(path: P, size: u64) -> Result<(), FileCreation>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let fail = |source: io::Error| {
        error!("❌ Failed to create {}: {}", path.display(), source);
        FileCreation {
            path: path.to_owned(),
            source,
        }
    };

    // Reject before opening so an existing file is not truncated for nothing
    let last = last_offset(size).map_err(fail)?;

    let (file, created) = open(path).map_err(fail)?;

    // File is closed on drop, before any cleanup below
    if let Err(e) = write_last_byte(file, last) {
        if created {
            if let Err(cleanup) = fs::remove_file(path) {
                warn!("Could not remove partial file {}: {}", path.display(), cleanup);
            }
        }
        return Err(fail(e));
    }

    Ok(())
}

// Open for writing, reporting whether the file was newly created
fn open(path: &Path) -> io::Result<(fs::File, bool)> {
    match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok((file, true)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("{} exists, truncating", path.display());
            let file = fs::OpenOptions::new().write(true).truncate(true).open(path)?;
            Ok((file, false))
        }
        Err(e) => Err(e),
    }
}

// Offset of the final byte, `None` for an empty file
fn last_offset(size: u64) -> io::Result<Option<u64>> {
    let Some(last) = size.checked_sub(1) else {
        return Ok(None);
    };

    // lseek rejects offsets past i64::MAX
    if i64::try_from(last).is_err() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("size of {size} bytes exceeds the maximum file offset"),
        ));
    }

    Ok(Some(last))
}

// Seek to the final offset and write a single zero byte there
fn write_last_byte(mut file: fs::File, last: Option<u64>) -> io::Result<()> {
    let Some(last) = last else {
        debug!("Zero length requested, leaving file empty");
        return Ok(());
    };

    file.seek(SeekFrom::Start(last))?;
    file.write_all(&[0])?;
    file.flush()?;
    Ok(())
}
