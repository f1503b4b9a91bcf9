// SPDX-License-Identifier: MPL-2.0
//! Image file handling for the upload form.
//!
//! Reads the chosen file into an [`ImageFile`] and renders effect previews.

pub mod filter;

use crate::domain::form::ImageFile;
use crate::error::{Error, Result};
use std::path::Path;

/// Supported media extensions
pub mod extensions {
    /// Image file extensions accepted by the file chooser
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];
}

pub use extensions::IMAGE_EXTENSIONS;

/// Returns `true` if the path carries one of the accepted image extensions.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Reads an image file from disk into memory.
///
/// # Errors
///
/// Returns [`Error::Image`] for unsupported extensions and [`Error::Io`] if
/// the file cannot be read.
pub async fn load_image_file(path: impl AsRef<Path>) -> Result<ImageFile> {
    let path = path.as_ref();
    if !is_supported_image(path) {
        return Err(Error::Image(format!(
            "unsupported file type: {}",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::info!("loaded {name} ({} bytes)", bytes.len());
    Ok(ImageFile::new(name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("cat.PNG")));
        assert!(is_supported_image(Path::new("dir/cat.jpeg")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[tokio::test]
    async fn load_reads_name_and_bytes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("cat.png");
        fs::write(&path, [1u8, 2, 3]).expect("write");

        let file = load_image_file(&path).await.expect("load");
        assert_eq!(file.name, "cat.png");
        assert_eq!(&*file.bytes, &[1, 2, 3]);
    }

    #[tokio::test]
    async fn load_rejects_unsupported_extension() {
        let err = load_image_file("notes.txt").await.expect_err("rejected");
        assert!(matches!(err, Error::Image(_)));
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempdir().expect("temp dir");
        let err = load_image_file(dir.path().join("missing.png"))
            .await
            .expect_err("missing");
        assert!(matches!(err, Error::Io(_)));
    }
}
