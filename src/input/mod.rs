use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub mod grid;
pub mod open;

use crate::model::mask::{Mask, RawImage};

pub use grid::TextGridDecoder;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no image {index:02} for method '{method}' under {}", dir.display())]
    NotFound {
        method: String,
        index: usize,
        dir: PathBuf,
    },
    #[error("method directory not found: {}", .0.display())]
    MissingMethod(PathBuf),
    #[error("parse error in {}: {msg}", path.display())]
    Parse { path: PathBuf, msg: String },
}

/// Turns one image file into raw pixel values.
pub trait MaskDecoder {
    fn decode(&self, path: &Path) -> Result<RawImage, LoadError>;
}

/// Anything that can hand out the mask of `method` for a 1-based image index.
pub trait MaskSource {
    fn load_image(&self, method: &str, index: usize) -> Result<Mask, LoadError>;
}

/// `<root>/<method>/NN*` directory convention.
#[derive(Debug, Clone)]
pub struct DatasetDir<D> {
    root: PathBuf,
    decoder: D,
}

impl DatasetDir<TextGridDecoder> {
    pub fn text(root: impl Into<PathBuf>) -> Self {
        Self::new(root, TextGridDecoder)
    }
}

impl<D: MaskDecoder> DatasetDir<D> {
    pub fn new(root: impl Into<PathBuf>, decoder: D) -> Self {
        Self {
            root: root.into(),
            decoder,
        }
    }

    pub fn method_dir(&self, method: &str) -> PathBuf {
        self.root.join(method)
    }
}

impl<D: MaskDecoder> MaskSource for DatasetDir<D> {
    fn load_image(&self, method: &str, index: usize) -> Result<Mask, LoadError> {
        let dir = self.method_dir(method);
        let path = find_image_path(&dir, method, index)?;
        debug!(method, index, path = %path.display(), "loading mask");
        Ok(self.decoder.decode(&path)?.to_mask())
    }
}

/// First file (by name) in `dir` whose name starts with the two-digit index.
pub fn find_image_path(dir: &Path, method: &str, index: usize) -> Result<PathBuf, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingMethod(dir.to_path_buf()));
    }
    let prefix = format!("{index:02}");
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(&prefix) {
            candidates.push(entry.path());
        }
    }
    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| LoadError::NotFound {
            method: method.to_string(),
            index,
            dir: dir.to_path_buf(),
        })
}

pub fn load_series<S: MaskSource + ?Sized>(
    source: &S,
    method: &str,
    count: usize,
) -> Result<Vec<Mask>, LoadError> {
    (1..=count)
        .map(|index| source.load_image(method, index))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
