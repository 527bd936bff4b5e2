use crate::error::AppError;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// A single logged event with location, photo and category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub image_uri: String,
    pub category: ActivityCategory,
    pub is_synced: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Work,
    Personal,
    Travel,
    Health,
    Education,
    #[default]
    Other,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Work,
        ActivityCategory::Personal,
        ActivityCategory::Travel,
        ActivityCategory::Health,
        ActivityCategory::Education,
        ActivityCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Work => "work",
            ActivityCategory::Personal => "personal",
            ActivityCategory::Travel => "travel",
            ActivityCategory::Health => "health",
            ActivityCategory::Education => "education",
            ActivityCategory::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityCategory::Work => "💼",
            ActivityCategory::Personal => "👤",
            ActivityCategory::Travel => "✈️",
            ActivityCategory::Health => "❤️",
            ActivityCategory::Education => "📚",
            ActivityCategory::Other => "📌",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Work => "Work",
            ActivityCategory::Personal => "Personal",
            ActivityCategory::Travel => "Travel",
            ActivityCategory::Health => "Health",
            ActivityCategory::Education => "Education",
            ActivityCategory::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ActivityCategory::Work => "#3B82F6",
            ActivityCategory::Personal => "#8B5CF6",
            ActivityCategory::Travel => "#F59E0B",
            ActivityCategory::Health => "#22C55E",
            ActivityCategory::Education => "#EC4899",
            ActivityCategory::Other => "#6B7280",
        }
    }
}

/// Transient form state of the capture screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub category: ActivityCategory,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: String,
    pub image_uri: Option<String>,
}

impl ActivityDraft {
    /// Validates the form; the error text is shown to the user as-is
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text_fields(&self.title, &self.description, "Please enter activity title")?;

        if self.latitude.is_none() || self.longitude.is_none() {
            return Err(AppError::Validation(
                "Location is required. Please wait or use mock location.".to_string(),
            ));
        }

        if self.image_uri.as_deref().map_or(true, |u| u.trim().is_empty()) {
            return Err(AppError::Validation("Please capture a photo".to_string()));
        }

        Ok(())
    }

    /// Turns a valid draft into a new, not yet synced activity
    pub fn into_activity(self) -> Result<Activity, AppError> {
        self.validate()?;

        let (latitude, longitude, image_uri) = match (self.latitude, self.longitude, self.image_uri)
        {
            (Some(lat), Some(lng), Some(uri)) => (lat, lng, uri),
            _ => return Err(AppError::Validation("Incomplete activity".to_string())),
        };

        let now = Utc::now();
        Ok(Activity {
            id: generate_activity_id(now),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            latitude,
            longitude,
            address: self.address,
            image_uri,
            category: self.category,
            is_synced: false,
        })
    }
}

impl Activity {
    /// Applies edited fields and flags the record for re-sync
    pub fn apply_edit(
        &self,
        title: &str,
        description: &str,
        category: ActivityCategory,
    ) -> Result<Activity, AppError> {
        validate_text_fields(title, description, "Title cannot be empty")?;

        Ok(Activity {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            category,
            is_synced: false,
            ..self.clone()
        })
    }

    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// e.g. "Monday, January 6, 2025"
    pub fn format_date(&self) -> String {
        match self.parsed_timestamp() {
            Some(dt) => dt.format("%A, %B %-d, %Y").to_string(),
            None => self.timestamp.clone(),
        }
    }

    /// Zero-padded 12-hour clock in UTC, e.g. "09:05 AM"
    pub fn format_time(&self) -> String {
        match self.parsed_timestamp() {
            Some(dt) => dt.format("%I:%M %p").to_string(),
            None => String::new(),
        }
    }

    pub fn format_coordinates(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }

    /// Short age of the activity relative to `now` ("5m ago", "2d ago")
    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        let Some(ts) = self.parsed_timestamp() else {
            return self.timestamp.clone();
        };

        let diff_ms = (now - ts).num_milliseconds().max(0);
        let mins = diff_ms / 60_000;
        let hours = diff_ms / 3_600_000;
        let days = diff_ms / 86_400_000;

        if mins < 1 {
            "Just now".to_string()
        } else if mins < 60 {
            format!("{}m ago", mins)
        } else if hours < 24 {
            format!("{}h ago", hours)
        } else {
            format!("{}d ago", days)
        }
    }
}

fn validate_text_fields(title: &str, description: &str, empty_title_msg: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation(empty_title_msg.to_string()));
    }
    if title.trim().chars().count() > TITLE_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Title must not exceed {} characters",
            TITLE_MAX_LEN
        )));
    }
    if description.trim().chars().count() > DESCRIPTION_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Description must not exceed {} characters",
            DESCRIPTION_MAX_LEN
        )));
    }
    Ok(())
}

/// `<unix millis>-<9 lowercase base36 chars>`
pub fn generate_activity_id(now: DateTime<Utc>) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> ActivityDraft {
        ActivityDraft {
            title: "  Morning run  ".to_string(),
            description: " 5k around the park ".to_string(),
            category: ActivityCategory::Health,
            latitude: Some(33.6844),
            longitude: Some(73.0479),
            address: "Islamabad, Pakistan".to_string(),
            image_uri: Some("https://via.placeholder.com/400x300.png".to_string()),
        }
    }

    fn activity_at(timestamp: &str) -> Activity {
        let mut a = draft().into_activity().unwrap();
        a.timestamp = timestamp.to_string();
        a
    }

    #[test]
    fn test_into_activity_trims_and_starts_unsynced() {
        let activity = draft().into_activity().unwrap();
        assert_eq!(activity.title, "Morning run");
        assert_eq!(activity.description, "5k around the park");
        assert_eq!(activity.category, ActivityCategory::Health);
        assert!(!activity.is_synced);
        assert!(activity.parsed_timestamp().is_some());
        assert!(activity.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_validate_blank_title() {
        let mut d = draft();
        d.title = "   ".to_string();
        let err = d.validate().unwrap_err();
        assert_eq!(err.user_message(), "Please enter activity title");
    }

    #[test]
    fn test_validate_missing_location() {
        let mut d = draft();
        d.longitude = None;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_missing_photo() {
        let mut d = draft();
        d.image_uri = None;
        assert_eq!(
            d.validate().unwrap_err().user_message(),
            "Please capture a photo"
        );
    }

    #[test]
    fn test_validate_title_too_long() {
        let mut d = draft();
        d.title = "x".repeat(TITLE_MAX_LEN + 1);
        assert!(d.validate().is_err());
        d.title = "x".repeat(TITLE_MAX_LEN);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_generated_id_format() {
        let now = Utc.with_ymd_and_hms(2025, 1, 6, 10, 30, 0).unwrap();
        let id = generate_activity_id(now);
        let (millis, suffix) = id.split_once('-').unwrap();
        assert_eq!(millis, now.timestamp_millis().to_string());
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_json_uses_camel_case_fields() {
        let activity = draft().into_activity().unwrap();
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["isSynced"], false);
        assert_eq!(json["category"], "health");
        assert!(json.get("imageUri").is_some());
    }

    #[test]
    fn test_apply_edit_resets_sync_flag() {
        let mut original = draft().into_activity().unwrap();
        original.is_synced = true;

        let edited = original
            .apply_edit(" Evening walk ", "", ActivityCategory::Personal)
            .unwrap();
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.title, "Evening walk");
        assert_eq!(edited.category, ActivityCategory::Personal);
        assert!(!edited.is_synced);

        let err = original.apply_edit("", "", ActivityCategory::Work).unwrap_err();
        assert_eq!(err.user_message(), "Title cannot be empty");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2025, 1, 6, 12, 0, 0).unwrap();
        assert_eq!(activity_at("2025-01-06T11:59:30.000Z").relative_time(now), "Just now");
        assert_eq!(activity_at("2025-01-06T11:15:00.000Z").relative_time(now), "45m ago");
        assert_eq!(activity_at("2025-01-06T09:00:00.000Z").relative_time(now), "3h ago");
        assert_eq!(activity_at("2025-01-03T12:00:00.000Z").relative_time(now), "3d ago");
        assert_eq!(activity_at("2025-01-06T13:00:00.000Z").relative_time(now), "Just now");
        assert_eq!(activity_at("garbage").relative_time(now), "garbage");
    }

    #[test]
    fn test_format_date_and_time() {
        let a = activity_at("2025-01-06T10:30:00.000Z");
        assert_eq!(a.format_date(), "Monday, January 6, 2025");
        assert_eq!(a.format_time(), "10:30 AM");
        assert_eq!(activity_at("2025-01-06T09:05:00.000Z").format_time(), "09:05 AM");
        assert_eq!(activity_at("2025-01-06T21:45:00.000Z").format_time(), "09:45 PM");

        let broken = activity_at("not-a-date");
        assert_eq!(broken.format_date(), "not-a-date");
        assert_eq!(broken.format_time(), "");
    }

    #[test]
    fn test_category_serialization_and_colors() {
        for category in ActivityCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert_eq!(ActivityCategory::Travel.color(), "#F59E0B");
        assert_eq!(ActivityCategory::default(), ActivityCategory::Other);
    }
}
