//! Text extraction from resume files.
//!
//! Thin collaborator in front of the engine: picks a reader by file
//! extension and hands back plain text. Missing files and unrecognized
//! extensions are distinct error conditions so the CLI can report them
//! precisely.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, ResumeCheckError};

/// Extensions the extractor understands, in display order.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt", "md"];

pub struct TextExtractor {
    xml_tag: Regex,
}

impl TextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            xml_tag: Regex::new(r"<[^>]+>").expect("Invalid regex"),
        }
    }

    /// Extracts plain text from a resume file, dispatching on extension.
    ///
    /// # Errors
    /// - `FileNotFound` when the path does not exist
    /// - `UnsupportedFormat` for an unrecognized extension
    /// - `Extraction` when a recognized file cannot be decoded
    pub fn extract(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeCheckError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Self::extract_pdf(path),
            "docx" | "doc" => self.extract_docx(path),
            "txt" | "md" => Self::extract_plain(path),
            _ => Err(ResumeCheckError::UnsupportedFormat { extension }),
        }
    }

    fn extract_plain(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| ResumeCheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn extract_pdf(path: &Path) -> Result<String> {
        pdf_extract::extract_text(path).map_err(|e| ResumeCheckError::Extraction {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// A DOCX file is a zip container; the document body lives in
    /// `word/document.xml`. Paragraph close tags become newlines before the
    /// remaining markup is stripped.
    fn extract_docx(&self, path: &Path) -> Result<String> {
        let extraction_error = |reason: String| ResumeCheckError::Extraction {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|source| ResumeCheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| extraction_error(e.to_string()))?;
        let mut document = archive
            .by_name("word/document.xml")
            .map_err(|e| extraction_error(e.to_string()))?;

        let mut xml = String::new();
        document
            .read_to_string(&mut xml)
            .map_err(|e| extraction_error(e.to_string()))?;

        Ok(self.strip_document_xml(&xml))
    }

    fn strip_document_xml(&self, xml: &str) -> String {
        let with_breaks = xml
            .replace("</w:p>", "\n")
            .replace("<w:tab/>", "\t")
            .replace("<w:br/>", "\n");
        let stripped = self.xml_tag.replace_all(&with_breaks, "");
        stripped
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
