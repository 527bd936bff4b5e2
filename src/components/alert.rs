use dioxus::prelude::*;

/// A blocking message shown on top of the current screen
#[derive(Clone, PartialEq, Debug)]
pub struct AlertMessage {
    pub title: String,
    pub message: String,
}

impl AlertMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

const OVERLAY_STYLE: &str = "position: fixed; inset: 0; background: rgba(0,0,0,0.45); display: flex; align-items: center; justify-content: center; z-index: 100;";
const BOX_STYLE: &str = "background: white; border-radius: 12px; padding: 20px; width: 80%; max-width: 360px; box-shadow: 0 8px 24px rgba(0,0,0,0.2);";

#[component]
pub fn AlertDialog(alert: AlertMessage, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { style: OVERLAY_STYLE,
            div { style: BOX_STYLE,
                h3 { style: "margin: 0 0 8px 0; font-size: 18px; color: #111827;", "{alert.title}" }
                p { style: "margin: 0 0 20px 0; font-size: 14px; color: #4B5563;", "{alert.message}" }
                button {
                    style: "width: 100%; padding: 12px; background: #6366F1; color: white; border: none; border-radius: 8px; font-size: 16px;",
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { style: OVERLAY_STYLE,
            div { style: BOX_STYLE,
                h3 { style: "margin: 0 0 8px 0; font-size: 18px; color: #111827;", "{title}" }
                p { style: "margin: 0 0 20px 0; font-size: 14px; color: #4B5563;", "{message}" }
                div { style: "display: flex; gap: 10px;",
                    button {
                        style: "flex: 1; padding: 12px; background: #E5E7EB; color: #374151; border: none; border-radius: 8px; font-size: 16px;",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        style: "flex: 1; padding: 12px; background: #EF4444; color: white; border: none; border-radius: 8px; font-size: 16px;",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
