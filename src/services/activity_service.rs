use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::Activity;
use crate::services::storage_service;
use rusqlite::Connection;

/// Key holding the full activity list, newest first
pub const STORAGE_KEY: &str = "@smarttracker_activities";
/// Key holding the capped copy of the newest activities
pub const OFFLINE_KEY: &str = "@smarttracker_offline";

/// Activity log persisted as one JSON list in the key-value store.
///
/// Every mutation is read-modify-write of the whole list without a
/// transaction; concurrent writers race and the last write wins.
pub struct ActivityStore<'c> {
    conn: &'c Connection,
    max_offline: usize,
}

impl<'c> ActivityStore<'c> {
    pub fn new(conn: &'c Connection, config: &AppConfig) -> Self {
        Self {
            conn,
            max_offline: config.max_offline,
        }
    }

    /// Loads all activities; unreadable JSON counts as an empty log
    pub fn get_activities(&self) -> Result<Vec<Activity>, AppError> {
        read_list(self.conn, STORAGE_KEY)
    }

    /// Writes the full list, then refreshes the offline cache
    pub fn save_activities(&self, activities: &[Activity]) -> Result<(), AppError> {
        let json = serde_json::to_string(activities)?;
        storage_service::set_item(self.conn, STORAGE_KEY, &json)?;

        let cached = &activities[..activities.len().min(self.max_offline)];
        let json = serde_json::to_string(cached)?;
        storage_service::set_item(self.conn, OFFLINE_KEY, &json)?;
        Ok(())
    }

    /// Prepends a new activity and returns the updated list
    pub fn add_activity(&self, activity: Activity) -> Result<Vec<Activity>, AppError> {
        let mut activities = self.get_activities()?;
        if activities.iter().any(|a| a.id == activity.id) {
            return Err(AppError::Validation(format!(
                "Activity {} already exists",
                activity.id
            )));
        }
        activities.insert(0, activity);
        self.save_activities(&activities)?;
        Ok(activities)
    }

    /// Replaces the stored record with the same id; unknown ids change nothing
    pub fn update_activity(&self, activity: &Activity) -> Result<Vec<Activity>, AppError> {
        let mut activities = self.get_activities()?;
        match activities.iter_mut().find(|a| a.id == activity.id) {
            Some(slot) => *slot = activity.clone(),
            None => log::debug!("Update skipped, activity {} no longer stored", activity.id),
        }
        self.save_activities(&activities)?;
        Ok(activities)
    }

    pub fn delete_activity(&self, id: &str) -> Result<Vec<Activity>, AppError> {
        let mut activities = self.get_activities()?;
        activities.retain(|a| a.id != id);
        self.save_activities(&activities)?;
        Ok(activities)
    }

    pub fn get_activity(&self, id: &str) -> Result<Activity, AppError> {
        self.get_activities()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound("Activity".to_string()))
    }

    /// The capped copy of the newest activities
    pub fn get_offline_activities(&self) -> Vec<Activity> {
        read_list(self.conn, OFFLINE_KEY).unwrap_or_else(|e| {
            log::warn!("Offline cache unavailable: {}", e);
            Vec::new()
        })
    }
}

fn read_list(conn: &Connection, key: &str) -> Result<Vec<Activity>, AppError> {
    let Some(json) = storage_service::get_item(conn, key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&json) {
        Ok(list) => Ok(list),
        Err(e) => {
            log::error!("Get activities error ({}): {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Case-insensitive search over title, description and address
pub fn filter_activities(activities: &[Activity], query: &str) -> Vec<Activity> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return activities.to_vec();
    }
    activities
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&query)
                || a.description.to_lowercase().contains(&query)
                || a.address.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivityStats {
    pub total: usize,
    pub synced: usize,
    pub pending: usize,
}

impl From<&[Activity]> for ActivityStats {
    fn from(activities: &[Activity]) -> Self {
        let synced = activities.iter().filter(|a| a.is_synced).count();
        Self {
            total: activities.len(),
            synced,
            pending: activities.len() - synced,
        }
    }
}
