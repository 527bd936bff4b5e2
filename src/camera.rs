// Photo capture is mocked: there is no native camera bridge, so a capture
// yields a placeholder image URI labelled with the activity category.

use crate::error::AppError;
use crate::filesystem;
use crate::models::ActivityCategory;
use base64::Engine;
use std::path::Path;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/400x300.png";

/// Returns the URI of the "captured" photo for an activity of `category`
pub fn capture_photo(category: ActivityCategory) -> String {
    log::debug!("Camera not available, using placeholder");
    format!("{}?text={}+Activity", PLACEHOLDER_BASE, category.label())
}

/// Guesses a MIME type from the file extension
fn guess_mime_from_ext(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}

/// Reads a local image and returns it as a base64 data URL
pub fn image_path_to_data_url(path: &Path) -> Result<String, AppError> {
    let mime = guess_mime_from_ext(path);
    let data = std::fs::read(path)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(data);
    Ok(format!("data:{};base64,{}", mime, b64))
}

/// `src` for an `img` element: remote URIs pass through, local files are inlined
pub fn image_src(uri: &str) -> String {
    if !filesystem::is_local_file_uri(uri) {
        return uri.to_string();
    }
    let path = filesystem::local_path_from_uri(uri);
    image_path_to_data_url(&path).unwrap_or_else(|e| {
        log::warn!("Cannot load image {}: {}", path.display(), e);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_photo_labels_category() {
        assert_eq!(
            capture_photo(ActivityCategory::Travel),
            "https://via.placeholder.com/400x300.png?text=Travel+Activity"
        );
    }

    #[test]
    fn test_remote_uri_passes_through() {
        let uri = capture_photo(ActivityCategory::Other);
        assert_eq!(image_src(&uri), uri);
    }

    #[test]
    fn test_local_file_becomes_data_url() {
        let path = std::env::temp_dir().join(format!("smarttracker-{}.png", uuid::Uuid::new_v4()));
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let src = image_src(&format!("file://{}", path.display()));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(src, "data:image/png;base64,AQID");
    }

    #[test]
    fn test_missing_local_file_yields_empty_src() {
        assert_eq!(image_src("/definitely/not/here.jpg"), "");
    }

    #[test]
    fn test_picker_photo_in_stored_record_is_inlined() {
        let path = std::env::temp_dir().join(format!("rn_image_picker_{}.jpg", uuid::Uuid::new_v4()));
        std::fs::write(&path, [0xFFu8, 0xD8, 0xFF]).unwrap();

        let json = format!(
            r#"{{"id":"1736159400000-abc123def","title":"Gym","description":"",
                "timestamp":"2025-01-06T10:30:00.000Z","latitude":33.6844,"longitude":73.0479,
                "address":"Islamabad, Pakistan","imageUri":"file://{}","category":"health",
                "isSynced":false}}"#,
            path.display()
        );
        let activity: crate::models::Activity = serde_json::from_str(&json).unwrap();

        let src = image_src(&activity.image_uri);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(src, "data:image/jpeg;base64,/9j/");
    }
}
