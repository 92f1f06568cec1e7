// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::UnknownExtension;

/// A known file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Txt,
    Doc,
    Docx,
    Pdf,
    Xls,
    Xlsx,
    Jpg,
    Jpeg,
    Png,
    Gif,
    Mp3,
    Mp4,
    Avi,
    Mov,
    Zip,
    Rar,
    SevenZip,
    Exe,
    Dll,
    Py,
    Java,
    Html,
    Css,
    Js,
    Json,
    Xml,
    Csv,
    Ppt,
    Pptx,
    Sql,
}

/// Lookup from lowercase extension text
static EXTENSIONS: phf::Map<&'static str, Extension> = phf::phf_map! {
    "txt" => Extension::Txt,
    "doc" => Extension::Doc,
    "docx" => Extension::Docx,
    "pdf" => Extension::Pdf,
    "xls" => Extension::Xls,
    "xlsx" => Extension::Xlsx,
    "jpg" => Extension::Jpg,
    "jpeg" => Extension::Jpeg,
    "png" => Extension::Png,
    "gif" => Extension::Gif,
    "mp3" => Extension::Mp3,
    "mp4" => Extension::Mp4,
    "avi" => Extension::Avi,
    "mov" => Extension::Mov,
    "zip" => Extension::Zip,
    "rar" => Extension::Rar,
    "7z" => Extension::SevenZip,
    "exe" => Extension::Exe,
    "dll" => Extension::Dll,
    "py" => Extension::Py,
    "java" => Extension::Java,
    "html" => Extension::Html,
    "css" => Extension::Css,
    "js" => Extension::Js,
    "json" => Extension::Json,
    "xml" => Extension::Xml,
    "csv" => Extension::Csv,
    "ppt" => Extension::Ppt,
    "pptx" => Extension::Pptx,
    "sql" => Extension::Sql,
};

impl Extension {
    /// Every known extension, in catalogue order
    pub const ALL: [Extension; 30] = [
        Extension::Txt,
        Extension::Doc,
        Extension::Docx,
        Extension::Pdf,
        Extension::Xls,
        Extension::Xlsx,
        Extension::Jpg,
        Extension::Jpeg,
        Extension::Png,
        Extension::Gif,
        Extension::Mp3,
        Extension::Mp4,
        Extension::Avi,
        Extension::Mov,
        Extension::Zip,
        Extension::Rar,
        Extension::SevenZip,
        Extension::Exe,
        Extension::Dll,
        Extension::Py,
        Extension::Java,
        Extension::Html,
        Extension::Css,
        Extension::Js,
        Extension::Json,
        Extension::Xml,
        Extension::Csv,
        Extension::Ppt,
        Extension::Pptx,
        Extension::Sql,
    ];

    /// The extension without a leading dot
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Txt => "txt",
            Extension::Doc => "doc",
            Extension::Docx => "docx",
            Extension::Pdf => "pdf",
            Extension::Xls => "xls",
            Extension::Xlsx => "xlsx",
            Extension::Jpg => "jpg",
            Extension::Jpeg => "jpeg",
            Extension::Png => "png",
            Extension::Gif => "gif",
            Extension::Mp3 => "mp3",
            Extension::Mp4 => "mp4",
            Extension::Avi => "avi",
            Extension::Mov => "mov",
            Extension::Zip => "zip",
            Extension::Rar => "rar",
            Extension::SevenZip => "7z",
            Extension::Exe => "exe",
            Extension::Dll => "dll",
            Extension::Py => "py",
            Extension::Java => "java",
            Extension::Html => "html",
            Extension::Css => "css",
            Extension::Js => "js",
            Extension::Json => "json",
            Extension::Xml => "xml",
            Extension::Csv => "csv",
            Extension::Ppt => "ppt",
            Extension::Pptx => "pptx",
            Extension::Sql => "sql",
        }
    }

    /// Default file name for a base name, e.g. `report.pdf`
    pub fn file_name(&self, name: &str) -> String {
        format!("{name}.{self}")
    }

    /// Glob pattern for a save dialog filter, e.g. `*.pdf`
    pub fn filter_pattern(&self) -> String {
        format!("*.{self}")
    }

    /// Label for a save dialog filter, e.g. `PDF files`
    pub fn filter_label(&self) -> String {
        format!("{} files", self.as_str().to_uppercase())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = UnknownExtension;

    /// Parse an extension, ignoring case and a leading dot
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().trim_start_matches('.').to_lowercase();
        EXTENSIONS
            .get(wanted.as_str())
            .copied()
            .ok_or_else(|| UnknownExtension {
                value: value.to_owned(),
                advice: Some(format!("supported extensions: {}", Extension::ALL.iter().join(", "))),
            })
    }
}
