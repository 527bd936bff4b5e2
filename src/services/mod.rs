pub mod activity_service;
pub mod geocoding_service;
pub mod location_service;
pub mod storage_service;
pub mod sync_service;

pub use activity_service::{filter_activities, ActivityStats, ActivityStore};
pub use sync_service::{
    manual_sync, sync_all_pending, sync_to_server, HttpSyncTarget, ManualSyncOutcome, SyncTarget,
};
