use std::{
    fs,
    path::Path,
    sync::Arc,
};

use crate::core::RankerError;

pub const PDF_MIME: &str = "application/pdf";

/// A résumé held in memory until it is submitted or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), content_type: content_type.into(), bytes: bytes.into() }
    }

    pub fn from_path(path: &Path) -> Result<Self, RankerError> {
        Self::from_path_with_mime(path, None)
    }

    /// Reads `path` into memory. A declared MIME type (as supplied by a drop
    /// event) wins over the one derived from the extension.
    pub fn from_path_with_mime(path: &Path, declared: Option<&str>) -> Result<Self, RankerError> {
        let name = display_name(path);
        let content_type = declared
            .filter(|mime| !mime.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(path).to_string());
        let bytes = fs::read(path)
            .map_err(|e| RankerError::UnreadableFile { name: name.clone(), source: Box::new(e) })?;

        Ok(Self::new(name, content_type, bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn size_label(&self) -> String {
        kb_label(self.size())
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(PDF_MIME)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("Unknown file")
        .to_string()
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension =
        path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("txt") => "text/plain",
        Some("md") | Some("markdown") => "text/markdown",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Ordered set of résumés chosen for the next submission.
#[derive(Debug, Default, Clone)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `batch` as a whole. If any file in it is not a PDF, nothing is
    /// added and the error names every offending file.
    pub fn add_batch(&mut self, batch: Vec<SelectedFile>) -> Result<usize, RankerError> {
        let invalid: Vec<String> =
            batch.iter().filter(|file| !file.is_pdf()).map(|file| file.name.clone()).collect();

        if !invalid.is_empty() {
            return Err(RankerError::InvalidFiles(invalid));
        }

        let added = batch.len();
        self.files.extend(batch);
        Ok(added)
    }

    pub fn remove(&mut self, index: usize) -> Option<SelectedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_size(&self) -> usize {
        self.files.iter().map(SelectedFile::size).sum()
    }

    pub fn total_size_label(&self) -> String {
        kb_label(self.total_size())
    }
}

fn kb_label(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Loads every path into memory. The first unreadable file fails the whole batch.
pub fn load_batch<'a>(
    paths: impl IntoIterator<Item = (&'a Path, Option<&'a str>)>,
) -> Result<Vec<SelectedFile>, RankerError> {
    paths.into_iter().map(|(path, mime)| SelectedFile::from_path_with_mime(path, mime)).collect()
}
