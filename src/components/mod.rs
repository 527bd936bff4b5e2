pub mod activity_detail;
pub mod add_log;
pub mod alert;
pub mod category_picker;
pub mod flashcards;
pub mod home;
pub mod navigation;
pub mod smart_home;
pub mod tracker_home;

pub use activity_detail::ActivityDetailScreen;
pub use add_log::AddLogScreen;
pub use flashcards::FlashcardQuizScreen;
pub use home::HubScreen;
pub use navigation::NavigationBar;
pub use smart_home::{DeviceDetailScreen, SmartHomeScreen};
pub use tracker_home::TrackerHomeScreen;
