//! Preview loaders used by renderers.
//!
//! The navigator only classifies entries; a front end that wants to show a
//! [`FileKind::Text`](crate::FileKind::Text) or
//! [`FileKind::Image`](crate::FileKind::Image) entry loads it through these
//! helpers.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// The number of bytes to inspect for binary (null-byte) detection.
const BINARY_CHECK_SIZE: usize = 8192;

/// Replaces tabs with spaces and drops other control characters so a line
/// can be drawn in a terminal cell grid.
fn sanitize_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    for c in line.chars() {
        if c == '\t' {
            result.push_str("    ");
        } else if !c.is_control() {
            result.push(c);
        }
    }
    result
}

/// A truncated text preview of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    /// The preview lines (up to `max_lines`).
    pub lines: Vec<String>,
    /// Total number of lines in the file.
    pub total_lines: usize,
    /// `true` when the file has more lines than were kept.
    pub is_truncated: bool,
}

impl TextPreview {
    /// Reads at most `max_lines` lines from the file at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// [`CoreError::Unreadable`] if the file cannot be read, is larger than
    /// `max_bytes`, or looks binary (a null byte in the first 8 KiB).
    pub fn load(path: &Path, max_lines: usize, max_bytes: u64) -> CoreResult<Self> {
        let unreadable = || CoreError::Unreadable(path.to_path_buf());

        let size = fs::metadata(path).map_err(|_| unreadable())?.len();
        if size > max_bytes {
            tracing::debug!("{} too large to preview ({size} bytes)", path.display());
            return Err(unreadable());
        }

        // The file may have grown since the metadata call; never read past the cap.
        let mut bytes = Vec::new();
        fs::File::open(path)
            .and_then(|file| file.take(max_bytes.saturating_add(1)).read_to_end(&mut bytes))
            .map_err(|e| {
                tracing::warn!("cannot read {}: {e}", path.display());
                unreadable()
            })?;
        if bytes.len() as u64 > max_bytes {
            tracing::debug!("{} grew past {max_bytes} bytes while reading", path.display());
            return Err(unreadable());
        }

        if is_binary(&bytes) {
            return Err(unreadable());
        }

        let text = String::from_utf8_lossy(&bytes);
        let mut lines = Vec::with_capacity(max_lines.min(256));
        let mut total_lines = 0;

        for line in text.lines() {
            total_lines += 1;
            if lines.len() < max_lines {
                lines.push(sanitize_line(line));
            }
        }

        Ok(Self {
            lines,
            total_lines,
            is_truncated: total_lines > max_lines,
        })
    }
}

/// Returns `true` if `bytes` contains a null byte within the first 8 KiB.
pub fn is_binary(bytes: &[u8]) -> bool {
    let end = bytes.len().min(BINARY_CHECK_SIZE);
    bytes[..end].contains(&0)
}

/// Header metadata of an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub file_size: u64,
}

impl ImageInfo {
    /// Reads the dimensions and format of the image at `path` without
    /// decoding its pixels.
    ///
    /// # Errors
    ///
    /// [`CoreError::Unreadable`] if the file cannot be opened or its header
    /// is not a supported image format.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let unreadable = |e: &dyn std::fmt::Display| {
            tracing::warn!("cannot read image {}: {e}", path.display());
            CoreError::Unreadable(path.to_path_buf())
        };

        let file_size = fs::metadata(path).map_err(|e| unreadable(&e))?.len();

        let reader = image::ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| unreadable(&e))?;
        let format = reader
            .format()
            .map(|f| format!("{f:?}"))
            .unwrap_or_else(|| "Unknown".to_string());
        let (width, height) = reader.into_dimensions().map_err(|e| unreadable(&e))?;

        Ok(Self {
            width,
            height,
            format,
            file_size,
        })
    }
}
