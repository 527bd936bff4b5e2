use crate::camera;
use crate::components::add_log::spawn_background_sync;
use crate::components::alert::{AlertDialog, AlertMessage, ConfirmDialog};
use crate::components::category_picker::CategoryPicker;
use crate::config;
use crate::database;
use crate::models::activity::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::models::{Activity, ActivityCategory};
use crate::services::ActivityStore;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn ActivityDetailScreen(activity_id: String, on_navigate: EventHandler<Screen>) -> Element {
    let mut activity = use_signal(|| None::<Activity>);
    let mut load_error = use_signal(|| None::<String>);
    let mut is_editing = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(ActivityCategory::default);
    let mut is_deleting = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut alert = use_signal(|| None::<AlertMessage>);

    let id = activity_id.clone();
    use_effect(move || {
        let loaded = database::init_database()
            .and_then(|conn| ActivityStore::new(&conn, &config::load_config()).get_activity(&id));
        match loaded {
            Ok(a) => {
                title.set(a.title.clone());
                description.set(a.description.clone());
                category.set(a.category);
                activity.set(Some(a));
            }
            Err(e) => {
                log::error!("Failed to load activity {}: {}", id, e);
                load_error.set(Some(e.user_message()));
            }
        }
    });

    let on_cancel_edit = move |_| {
        if let Some(a) = activity() {
            title.set(a.title);
            description.set(a.description);
            category.set(a.category);
        }
        is_editing.set(false);
    };

    let on_save = move |_| {
        let Some(current) = activity() else {
            return;
        };
        let updated = match current.apply_edit(&title(), &description(), category()) {
            Ok(updated) => updated,
            Err(e) => {
                alert.set(Some(AlertMessage::new(t!("alert-required-title"), e.user_message())));
                return;
            }
        };

        let result = database::init_database().and_then(|conn| {
            ActivityStore::new(&conn, &config::load_config()).update_activity(&updated)
        });
        match result {
            Ok(_) => {
                activity.set(Some(updated.clone()));
                spawn_background_sync(updated);
                is_editing.set(false);
                alert.set(Some(AlertMessage::new(
                    t!("alert-success-title"),
                    t!("alert-activity-updated"),
                )));
            }
            Err(e) => {
                log::error!("Update error: {}", e);
                alert.set(Some(AlertMessage::new("Error", t!("error-update-failed"))));
            }
        }
    };

    let id = activity_id.clone();
    let on_delete = move |_: ()| {
        confirm_delete.set(false);
        is_deleting.set(true);
        let result = database::init_database()
            .and_then(|conn| ActivityStore::new(&conn, &config::load_config()).delete_activity(&id));
        match result {
            Ok(_) => on_navigate.call(Screen::TrackerHome),
            Err(e) => {
                log::error!("Delete error: {}", e);
                is_deleting.set(false);
                alert.set(Some(AlertMessage::new("Error", t!("error-delete-failed"))));
            }
        }
    };

    if is_deleting() {
        return rsx! {
            div { style: "display: flex; align-items: center; justify-content: center; min-height: 60vh; color: #EF4444;",
                {t!("deleting")}
            }
        };
    }

    let Some(a) = activity() else {
        return rsx! {
            div { style: "padding: 16px;",
                button { style: "padding: 8px 16px; background: #E5E7EB; color: #333; border: none; border-radius: 8px; font-size: 16px;",
                    onclick: move |_| on_navigate.call(Screen::TrackerHome),
                    "← Back"
                }
                if let Some(err) = load_error() {
                    div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-top: 16px; border-radius: 8px; font-size: 14px;",
                        "⚠️ "
                        {t!("error-load-activity")}
                        ": {err}"
                    }
                }
            }
        };
    };

    let cat = if is_editing() { category() } else { a.category };
    let image = camera::image_src(&a.image_uri);
    let label_style = "display: block; margin-bottom: 6px; font-size: 13px; font-weight: 600; color: #6B7280;";
    let field_style = "width: 100%; padding: 10px; border: 1px solid #E5E7EB; border-radius: 8px; font-size: 15px; box-sizing: border-box;";

    rsx! {
        div { style: "max-width: 600px; margin: 0 auto; background: #F9FAFB; min-height: 100vh;",
            // Header image with sync badge
            div { style: "position: relative;",
                img { src: "{image}", style: "width: 100%; height: 260px; object-fit: cover; background: #E5E7EB; display: block;" }
                button { style: "position: absolute; top: 12px; left: 12px; padding: 8px 14px; background: rgba(255,255,255,0.9); color: #333; border: none; border-radius: 8px; font-size: 15px;",
                    onclick: move |_| on_navigate.call(Screen::TrackerHome),
                    "← Back"
                }
                span { style: if a.is_synced { "position: absolute; top: 12px; right: 12px; padding: 6px 10px; border-radius: 12px; font-size: 12px; color: white; background: #22C55E;" } else { "position: absolute; top: 12px; right: 12px; padding: 6px 10px; border-radius: 12px; font-size: 12px; color: white; background: #F59E0B;" },
                    if a.is_synced { "☁️ Synced" } else { "⏳ Pending" }
                }
            }

            div { style: "padding: 16px;",
                // Category
                if is_editing() {
                    div { style: "margin-bottom: 16px;",
                        label { style: label_style, "Category" }
                        CategoryPicker { selected: category(), on_select: move |c| category.set(c) }
                    }
                } else {
                    span { style: "display: inline-block; padding: 6px 12px; border-radius: 16px; font-size: 13px; font-weight: 600; color: {cat.color()}; background: {cat.color()}20;",
                        "{cat.icon()} {cat.label()}"
                    }
                }

                // Title
                if is_editing() {
                    div { style: "margin: 16px 0;",
                        label { style: label_style, "Title" }
                        input {
                            r#type: "text",
                            value: "{title}",
                            maxlength: "{TITLE_MAX_LEN}",
                            oninput: move |e| title.set(e.value()),
                            style: field_style,
                        }
                    }
                } else {
                    h1 { style: "margin: 16px 0 8px 0; font-size: 24px; color: #111827;", "{a.title}" }
                }

                // Description
                if is_editing() {
                    div { style: "margin-bottom: 16px;",
                        label { style: label_style, "Description" }
                        textarea {
                            value: "{description}",
                            maxlength: "{DESCRIPTION_MAX_LEN}",
                            placeholder: "Add description...",
                            oninput: move |e| description.set(e.value()),
                            style: "{field_style} min-height: 100px;",
                        }
                    }
                } else if a.description.is_empty() {
                    p { style: "color: #9CA3AF; font-style: italic;", {t!("no-description")} }
                } else {
                    p { style: "color: #4B5563; line-height: 1.5;", "{a.description}" }
                }

                // Info cards
                div { style: "display: flex; flex-direction: column; gap: 10px; margin: 16px 0;",
                    InfoCard { icon: "📅", label: "Date & Time", value: a.format_date(), subvalue: a.format_time() }
                    InfoCard { icon: "📍", label: "Location", value: a.address.clone(), subvalue: a.format_coordinates() }
                    InfoCard { icon: "🆔", label: "Activity ID", value: a.id.clone(), subvalue: String::new() }
                }

                // Actions
                div { style: "display: flex; gap: 10px; margin-bottom: 32px;",
                    if is_editing() {
                        button {
                            style: "flex: 1; padding: 12px; background: #E5E7EB; color: #374151; border: none; border-radius: 10px; font-size: 16px;",
                            onclick: on_cancel_edit,
                            "✕ Cancel"
                        }
                        button {
                            style: "flex: 1; padding: 12px; background: #22C55E; color: white; border: none; border-radius: 10px; font-size: 16px;",
                            onclick: on_save,
                            "💾 Save"
                        }
                    } else {
                        button {
                            style: "flex: 1; padding: 12px; background: #6366F1; color: white; border: none; border-radius: 10px; font-size: 16px;",
                            onclick: move |_| is_editing.set(true),
                            "✏️ Edit"
                        }
                        button {
                            style: "flex: 1; padding: 12px; background: #EF4444; color: white; border: none; border-radius: 10px; font-size: 16px;",
                            onclick: move |_| confirm_delete.set(true),
                            "🗑️ Delete"
                        }
                    }
                }
            }

            if confirm_delete() {
                ConfirmDialog {
                    title: t!("confirm-delete-title"),
                    message: t!("confirm-delete-permanent"),
                    confirm_label: t!("delete"),
                    on_confirm: on_delete,
                    on_cancel: move |_| confirm_delete.set(false),
                }
            }

            if let Some(message) = alert() {
                AlertDialog { alert: message, on_dismiss: move |_| alert.set(None) }
            }
        }
    }
}

#[component]
fn InfoCard(icon: &'static str, label: &'static str, value: String, subvalue: String) -> Element {
    rsx! {
        div { style: "display: flex; gap: 12px; background: white; border-radius: 12px; padding: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.06);",
            span { style: "font-size: 22px;", "{icon}" }
            div { style: "flex: 1; min-width: 0;",
                div { style: "font-size: 12px; color: #9CA3AF;", "{label}" }
                div { style: "font-size: 15px; color: #1F2937; word-break: break-all;", "{value}" }
                if !subvalue.is_empty() {
                    div { style: "font-size: 12px; color: #6B7280;", "{subvalue}" }
                }
            }
        }
    }
}
