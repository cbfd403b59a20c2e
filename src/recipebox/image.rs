//! Image uploads for recipes.
//!
//! The store treats `image_url` as an opaque string. This module is what the
//! caller runs before handing it one: check that the payload is an image and
//! fits under the size ceiling, then inline it as a `data:` URL.

use crate::error::{RecipeBoxError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::Path;

/// 2 MiB
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Media type for a file name, from its extension.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        "bmp" => Some("image/bmp"),
        "txt" => Some("text/plain"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

pub fn validate_image(media_type: &str, size: u64, max: u64) -> Result<()> {
    if !media_type.starts_with("image/") {
        return Err(RecipeBoxError::NotAnImage(media_type.to_string()));
    }
    if size > max {
        return Err(RecipeBoxError::ImageTooLarge { size, max });
    }
    Ok(())
}

/// Validates and encodes an in-memory payload as `data:<type>;base64,<data>`.
pub fn to_data_url(media_type: &str, bytes: &[u8], max: u64) -> Result<String> {
    validate_image(media_type, bytes.len() as u64, max)?;
    Ok(format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)))
}

/// Reads an image file into a data URL. The size is checked before the file
/// is read.
pub fn load_image_file(path: &Path, max: u64) -> Result<String> {
    let media_type = media_type_for_path(path)
        .ok_or_else(|| RecipeBoxError::NotAnImage(path.display().to_string()))?;
    let size = fs::metadata(path)?.len();
    validate_image(media_type, size, max)?;

    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), size, media_type, "image loaded");
    to_data_url(media_type, &bytes, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_small_images() {
        let url = to_data_url("image/png", b"abc", MAX_IMAGE_BYTES).unwrap();
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn rejects_non_images() {
        let err = to_data_url("text/plain", b"abc", MAX_IMAGE_BYTES).unwrap_err();
        assert!(matches!(err, RecipeBoxError::NotAnImage(_)));
        assert!(err.to_string().starts_with("Please select an image file"));
    }

    #[test]
    fn rejects_oversized_images() {
        let err = validate_image("image/jpeg", MAX_IMAGE_BYTES + 1, MAX_IMAGE_BYTES).unwrap_err();
        assert!(matches!(
            err,
            RecipeBoxError::ImageTooLarge { size, max }
                if size == MAX_IMAGE_BYTES + 1 && max == MAX_IMAGE_BYTES
        ));
        assert!(err.to_string().starts_with("Image must be under 2MB"));

        assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES, MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn infers_media_types() {
        assert_eq!(media_type_for_path(Path::new("a/b.JPG")), Some("image/jpeg"));
        assert_eq!(media_type_for_path(Path::new("b.webp")), Some("image/webp"));
        assert_eq!(media_type_for_path(Path::new("notes.txt")), Some("text/plain"));
        assert_eq!(media_type_for_path(Path::new("noext")), None);
    }

    #[test]
    fn loads_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("pic.png");
        fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();
        let url = load_image_file(&png, MAX_IMAGE_BYTES).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let big = dir.path().join("big.jpg");
        fs::write(&big, vec![0u8; 2048]).unwrap();
        assert!(matches!(
            load_image_file(&big, 1024),
            Err(RecipeBoxError::ImageTooLarge { .. })
        ));

        let text = dir.path().join("notes.txt");
        fs::write(&text, "hi").unwrap();
        assert!(matches!(
            load_image_file(&text, MAX_IMAGE_BYTES),
            Err(RecipeBoxError::NotAnImage(_))
        ));
    }
}
