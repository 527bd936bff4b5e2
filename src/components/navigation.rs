use crate::Screen;
use dioxus::prelude::*;

const ACTIVE: &str = "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #6366F1; color: #ffffff;";
const INACTIVE: &str = "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #ffffff; color: #333;";

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 10px; background: #f0f0f0; border-top: 1px solid #ddd;";

    let tracker_active = matches!(
        current_screen,
        Screen::TrackerHome | Screen::AddLog | Screen::ActivityDetail(_)
    );
    let home_active = matches!(current_screen, Screen::SmartHome | Screen::DeviceDetail(_));

    rsx! {
        div {
            style: "{nav_style}",

            button {
                style: if matches!(current_screen, Screen::Hub) { ACTIVE } else { INACTIVE },
                onclick: move |_| on_navigate.call(Screen::Hub),
                "🏠 Labs"
            }

            button {
                style: if tracker_active { ACTIVE } else { INACTIVE },
                onclick: move |_| on_navigate.call(Screen::TrackerHome),
                "📍 Tracker"
            }

            button {
                style: if matches!(current_screen, Screen::Flashcards) { ACTIVE } else { INACTIVE },
                onclick: move |_| on_navigate.call(Screen::Flashcards),
                "🧠 Quiz"
            }

            button {
                style: if home_active { ACTIVE } else { INACTIVE },
                onclick: move |_| on_navigate.call(Screen::SmartHome),
                "💡 Devices"
            }
        }
    }
}
