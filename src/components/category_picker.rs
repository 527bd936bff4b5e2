use crate::models::ActivityCategory;
use dioxus::prelude::*;

/// Horizontal row of category chips
#[component]
pub fn CategoryPicker(selected: ActivityCategory, on_select: EventHandler<ActivityCategory>) -> Element {
    rsx! {
        div { style: "display: flex; gap: 8px; overflow-x: auto; padding-bottom: 4px;",
            for cat in ActivityCategory::ALL {
                button {
                    key: "{cat.as_str()}",
                    style: if cat == selected {
                        format!("flex-shrink: 0; padding: 8px 12px; border: none; border-radius: 16px; font-size: 14px; background: {}; color: #FFFFFF;", cat.color())
                    } else {
                        "flex-shrink: 0; padding: 8px 12px; border: none; border-radius: 16px; font-size: 14px; background: #F3F4F6; color: #374151;".to_string()
                    },
                    onclick: move |_| on_select.call(cat),
                    "{cat.icon()} {cat.label()}"
                }
            }
        }
    }
}
