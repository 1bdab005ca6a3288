//! Output format table.
//!
//! The set of target formats is closed: every variant has exactly one label
//! and one literal file extension, and the lookup is a plain `match`.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target format for a converted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Txt,
    Html,
    Rtf,
    Odt,
    Epub,
    Markdown,
}

impl OutputFormat {
    /// All formats in the order they are offered to the user.
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Pdf,
        OutputFormat::Txt,
        OutputFormat::Html,
        OutputFormat::Rtf,
        OutputFormat::Odt,
        OutputFormat::Epub,
        OutputFormat::Markdown,
    ];

    /// Short identifier, e.g. `"markdown"`.
    pub fn value(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Txt => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Rtf => "rtf",
            OutputFormat::Odt => "odt",
            OutputFormat::Epub => "epub",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Human readable name shown in the format selector.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "PDF Document",
            OutputFormat::Txt => "Plain Text",
            OutputFormat::Html => "HTML Document",
            OutputFormat::Rtf => "Rich Text Format",
            OutputFormat::Odt => "OpenDocument Text",
            OutputFormat::Epub => "EPUB eBook",
            OutputFormat::Markdown => "Markdown",
        }
    }

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => ".pdf",
            OutputFormat::Txt => ".txt",
            OutputFormat::Html => ".html",
            OutputFormat::Rtf => ".rtf",
            OutputFormat::Odt => ".odt",
            OutputFormat::Epub => ".epub",
            OutputFormat::Markdown => ".md",
        }
    }

    /// Appends this format's extension to a base name.
    pub fn file_name_for(self, base_name: &str) -> String {
        format!("{}{}", base_name, self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|format| format.value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConvertError::UnknownFormat(s.to_string()))
    }
}
