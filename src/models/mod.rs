pub mod activity;
pub mod device;
pub mod flashcard;

pub use activity::{Activity, ActivityCategory, ActivityDraft};
pub use device::{DashboardState, Device, DeviceDraft, DeviceType};
pub use flashcard::{Flashcard, QuizState};
