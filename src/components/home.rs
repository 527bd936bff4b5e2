use crate::database;
use crate::filesystem;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn HubScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut db_status = use_signal(|| Err(t!("status-initializing")));

    // Check storage on mount
    use_effect(move || match database::test_connection() {
        Ok(()) => db_status.set(Ok(())),
        Err(e) => {
            log::error!("Storage check failed: {}", e);
            db_status.set(Err(format!("❌ {}", e.user_message())));
        }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #F9FAFB;",
            h1 { style: "color: #6366F1; text-align: center; margin-bottom: 24px; margin-top: 48px; font-size: 28px; font-weight: 700;",
                "📱 "
                {t!("hub-title")}
            }
            if let Err(status) = db_status() {
                // Status Card
                div { style: "background: white; border-radius: 12px; padding: 16px; margin-bottom: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
                    h2 { style: "margin: 0 0 12px 0; font-size: 18px; color: #333;",
                        {t!("status-title")}
                    }
                    p { style: "font-size: 14px; color: #555; margin: 0;", "{status}" }
                }
            }
            // Exercises
            div { style: "background: white; border-radius: 12px; padding: 16px; margin-bottom: 32px; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
                div { style: "display: flex; flex-direction: column; gap: 12px;",
                    button {
                        style: "padding: 16px; font-size: 16px; background: #6366F1; color: white; border: none; border-radius: 10px; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::TrackerHome),
                        "📍 SmartTracker"
                    }
                    button {
                        style: "padding: 16px; font-size: 16px; background: #6C63FF; color: white; border: none; border-radius: 10px; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::Flashcards),
                        "🧠 "
                        {t!("hub-flashcards")}
                    }
                    button {
                        style: "padding: 16px; font-size: 16px; background: #ff8c00; color: white; border: none; border-radius: 10px; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::SmartHome),
                        "💡 "
                        {t!("hub-smart-home")}
                    }
                }
            }

            // Info Card
            div { style: "background: #f8f9fa; padding: 16px; margin: 16px 0; border-radius: 8px; border: 1px solid #e0e0e0;",
                h3 { style: "margin: 0 0 12px 0; font-size: 14px; color: #666; font-weight: 600;",
                    "ℹ️ System-Info"
                }
                p { style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "OS: {std::env::consts::OS}"
                }
                p { style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "Arch: {std::env::consts::ARCH}"
                }
                p { style: "font-size: 11px; color: #888; margin: 4px 0; word-break: break-all;",
                    "DB: {filesystem::get_database_path().display()}"
                }
            }
        }
    }
}
