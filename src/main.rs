use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod camera;
mod components;
mod config;
mod database;
mod error;
mod filesystem;
mod i18n;
mod models;
mod services;

use components::{
    ActivityDetailScreen, AddLogScreen, DeviceDetailScreen, FlashcardQuizScreen, HubScreen,
    NavigationBar, SmartHomeScreen, TrackerHomeScreen,
};
use models::DashboardState;

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("smarttracker"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Hub,
    TrackerHome,
    AddLog,
    ActivityDetail(String), // activity id
    Flashcards,
    SmartHome,
    DeviceDetail(u64),
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    let mut current_screen = use_signal(|| Screen::Hub);
    // Shared between dashboard and device detail so edits survive navigation
    use_context_provider(|| Signal::new(DashboardState::new()));

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Hub => rsx! {
                        HubScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::TrackerHome => rsx! {
                        TrackerHomeScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::AddLog => rsx! {
                        AddLogScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::ActivityDetail(id) => rsx! {
                        ActivityDetailScreen { activity_id: id, on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Flashcards => rsx! {
                        FlashcardQuizScreen {}
                    },
                    Screen::SmartHome => rsx! {
                        SmartHomeScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::DeviceDetail(id) => rsx! {
                        DeviceDetailScreen { device_id: id, on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }

            // Bottom Navigation Bar
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }
        }
    }
}
