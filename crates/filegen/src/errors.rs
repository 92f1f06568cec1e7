// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Error type for the filegen crate
#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[diagnostic(transparent)]
    #[error(transparent)]
    MissingField(#[from] MissingField),

    #[diagnostic(transparent)]
    #[error(transparent)]
    UnknownExtension(#[from] UnknownExtension),

    #[diagnostic(transparent)]
    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnit),

    #[diagnostic(transparent)]
    #[error(transparent)]
    InvalidSize(#[from] InvalidSize),

    #[diagnostic(transparent)]
    #[error(transparent)]
    FileCreation(#[from] FileCreation),
}

/// The fields a file request is made of, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Extension,
    Size,
    Unit,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("file name"),
            Field::Extension => f.write_str("file extension"),
            Field::Size => f.write_str("file size"),
            Field::Unit => f.write_str("size unit"),
        }
    }
}

/// Error for a required field left empty
#[derive(Debug, Diagnostic, Error)]
#[error("missing field: {field}")]
#[diagnostic(severity(error), help("fill in all fields and try again"))]
pub struct MissingField {
    pub field: Field,
}

/// Error for an extension outside of the known set
#[derive(Debug, Diagnostic, Error)]
#[error("unknown extension: {value}")]
#[diagnostic(severity(error))]
pub struct UnknownExtension {
    pub value: String,

    #[help]
    pub advice: Option<String>,
}

/// Error for a size unit outside of the known set
#[derive(Debug, Diagnostic, Error)]
#[error("unknown size unit: {value}")]
#[diagnostic(severity(error))]
pub struct UnknownUnit {
    pub value: String,

    #[help]
    pub advice: Option<String>,
}

/// Error for size text that is not a usable positive number
#[derive(Debug, Diagnostic, Error)]
#[error("invalid file size '{value}': {reason}")]
#[diagnostic(
    severity(error),
    help("use a positive number with at most two decimal places, e.g. 10 or 2.5")
)]
pub struct InvalidSize {
    pub value: String,

    pub reason: &'static str,
}

/// Error for any file system failure while materializing a file
#[derive(Debug, Diagnostic, Error)]
#[error("failed to create {}: {source}", .path.display())]
#[diagnostic(severity(error))]
pub struct FileCreation {
    pub path: PathBuf,

    #[source]
    pub source: io::Error,
}
