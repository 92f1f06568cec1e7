// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Creation of placeholder files of an exact size.
//!
//! Raw field values are checked by [`FileRequest::validate`], sizes are
//! converted with [`units::to_bytes`] and the file itself is written by
//! [`sparsefile::create`]. [`generate`] ties these together.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

mod errors;
pub use errors::*;

mod extension;
pub use extension::Extension;

pub mod sparsefile;
pub mod units;

mod validate;
pub use validate::{matches_size_pattern, FileRequest, FileSpec};

/// The outcome of a successful generate operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Where the file was written
    pub path: PathBuf,
    /// Length of the file in bytes
    pub size: u64,
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.path.display(), self.size)
    }
}

/// Work out where a file for `spec` should be written.
///
/// Follows the conventions of a save dialog: no destination means the
/// default file name in the working directory, a directory receives the
/// default file name, and a path without an extension gets one appended.
pub fn resolve_destination(spec: &FileSpec, destination: Option<&Path>) -> PathBuf {
    let Some(destination) = destination else {
        return PathBuf::from(spec.file_name());
    };

    if destination.is_dir() {
        debug!("{} is a directory, using default file name", destination.display());
        return destination.join(spec.file_name());
    }

    if destination.extension().is_none() {
        let mut path = destination.as_os_str().to_owned();
        path.push(".");
        path.push(spec.extension.as_str());
        return PathBuf::from(path);
    }

    destination.to_owned()
}

/// Create the file described by `spec`.
///
/// # Arguments
/// * `spec` - A validated file request
/// * `destination` - Optional file or directory to write to, see [`resolve_destination`]
///
/// # Returns
/// The final path and size on success, [`Error::FileCreation`] otherwise
pub fn generate(spec: &FileSpec, destination: Option<&Path>) -> Result<Generated, Error> {
    let path = resolve_destination(spec, destination);
    let size = spec.size_bytes();

    if size == 0 {
        warn!("{} {} rounds to zero bytes, creating an empty file", spec.size, spec.unit);
    }

    info!("Creating {} ({}) at {}", spec.file_name(), units::format_size(size), path.display());
    sparsefile::create(&path, size)?;
    info!("✅ Created {}", path.display());

    Ok(Generated { path, size })
}
