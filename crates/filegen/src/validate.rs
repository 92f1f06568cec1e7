// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::{
    units::{self, SizeUnit, SizeValue},
    Error, Extension, Field, MissingField,
};

/// Digits, an optional decimal point and at most two fractional digits
static SIZE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Check whether `text` is an acceptable (possibly partial) size entry.
///
/// The empty string matches so that a field can be cleared while typing;
/// it is still rejected when a request is validated.
pub fn matches_size_pattern(text: &str) -> bool {
    let regex =
        SIZE_PATTERN.get_or_init(|| Regex::new(r"^\d*\.?\d{0,2}$").expect("Failed to initialise known-working regex"));
    // \d is Unicode aware, only ASCII digits can be parsed later
    regex.is_match(text) && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Raw field values as entered by the user
#[derive(Debug, Clone)]
pub struct FileRequest {
    pub name: Option<String>,
    pub extension: Option<String>,
    pub size: Option<String>,
    pub unit: Option<String>,
}

/// A validated request for a file of a given size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    /// Base file name without extension
    pub name: String,
    pub extension: Extension,
    pub size: SizeValue,
    pub unit: SizeUnit,
}

impl FileRequest {
    /// Validate all fields, reporting the first problem found.
    ///
    /// Missing fields are checked before anything is parsed, in form order.
    pub fn validate(&self) -> Result<FileSpec, Error> {
        let name = required(&self.name, Field::Name)?;
        let extension = required(&self.extension, Field::Extension)?;
        let size = required(&self.size, Field::Size)?;
        let unit = required(&self.unit, Field::Unit)?;

        let extension = extension.parse::<Extension>()?;
        let unit = unit.parse::<SizeUnit>()?;
        let size = size.parse::<SizeValue>()?;

        let spec = FileSpec {
            name: name.to_owned(),
            extension,
            size,
            unit,
        };
        debug!("Validated request: {} {} for {}", spec.size, spec.unit, spec.file_name());
        Ok(spec)
    }
}

// Trimmed, non-empty field value
fn required(value: &Option<String>, field: Field) -> Result<&str, MissingField> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(MissingField { field })
}

impl FileSpec {
    /// The requested size converted to bytes
    pub fn size_bytes(&self) -> u64 {
        units::to_bytes(self.size, self.unit)
    }

    /// Default file name, `{name}.{extension}`
    pub fn file_name(&self) -> String {
        self.extension.file_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn request(name: &str, extension: &str, size: &str, unit: &str) -> FileRequest {
        FileRequest {
            name: Some(name.into()),
            extension: Some(extension.into()),
            size: Some(size.into()),
            unit: Some(unit.into()),
        }
    }

    #[test]
    fn test_pattern_accepts() {
        for text in ["", "0", "12", "12.", "12.3", "12.34", ".5", ".", "0.01", "1048576"] {
            assert!(matches_size_pattern(text), "rejected {text:?}");
        }
    }

    #[test]
    fn test_pattern_rejects() {
        for text in [
            "12.345", "abc", "1a", "-1", "+1", "1,5", " 1", "1 ", "1..2", "1.2.3", "1e5", "٣",
        ] {
            assert!(!matches_size_pattern(text), "accepted {text:?}");
        }
    }

    #[test]
    fn test_validate() {
        let spec = request(" report ", "PDF", "1.5", "megabytes").validate().unwrap();
        assert_eq!(spec.name, "report");
        assert_eq!(spec.extension, Extension::Pdf);
        assert_eq!(spec.unit, SizeUnit::Megabytes);
        assert_eq!(spec.size_bytes(), 1_572_864);
        assert_eq!(spec.file_name(), "report.pdf");
    }

    #[test]
    fn test_missing_fields() {
        let full = request("a", "txt", "1", "bytes");
        let cases = [
            (FileRequest { name: None, ..full.clone() }, Field::Name),
            (
                FileRequest {
                    extension: Some("".into()),
                    ..full.clone()
                },
                Field::Extension,
            ),
            (
                FileRequest {
                    size: Some("  ".into()),
                    ..full.clone()
                },
                Field::Size,
            ),
            (FileRequest { unit: None, ..full.clone() }, Field::Unit),
        ];

        for (req, expected) in cases {
            match req.validate() {
                Err(Error::MissingField(MissingField { field })) => assert_eq!(field, expected),
                other => panic!("expected missing {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_reported_before_invalid() {
        let req = FileRequest {
            name: None,
            ..request("a", "nope", "abc", "bytes")
        };
        assert!(matches!(req.validate(), Err(Error::MissingField(_))));
    }

    #[test]
    fn test_invalid_size() {
        for size in ["abc", "0", "0.00", "1.234", "."] {
            assert!(
                matches!(request("a", "txt", size, "kb").validate(), Err(Error::InvalidSize(_))),
                "accepted {size:?}"
            );
        }
    }

    #[test]
    fn test_unknown_choices() {
        assert!(matches!(
            request("a", "bmp", "1", "kb").validate(),
            Err(Error::UnknownExtension(_))
        ));
        assert!(matches!(
            request("a", "txt", "1", "parsecs").validate(),
            Err(Error::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_zero_bytes_allowed() {
        let spec = request("tiny", "txt", "0.2", "bytes").validate().unwrap();
        assert_eq!(spec.size_bytes(), 0);
    }
}
