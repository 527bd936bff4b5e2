use crate::camera;
use crate::components::alert::{AlertDialog, AlertMessage};
use crate::components::category_picker::CategoryPicker;
use crate::config;
use crate::database;
use crate::models::activity::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::models::{Activity, ActivityCategory, ActivityDraft};
use crate::services::location_service::{self, Location};
use crate::services::{self, geocoding_service, ActivityStore, HttpSyncTarget};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Pushes a freshly saved activity in the background; failures only get logged
pub(crate) fn spawn_background_sync(activity: Activity) {
    spawn(async move {
        let app_config = config::load_config();
        let result = match (database::init_database(), HttpSyncTarget::new(&app_config)) {
            (Ok(conn), Ok(target)) => {
                let store = ActivityStore::new(&conn, &app_config);
                services::sync_to_server(&store, &target, &activity).await
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        if let Err(e) = result {
            log::info!("Sync failed: {}", e);
        }
    });
}

#[component]
pub fn AddLogScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(ActivityCategory::default);
    let mut location = use_signal(|| None::<Location>);
    let mut image_uri = use_signal(|| None::<String>);
    let mut is_loading_location = use_signal(|| true);
    let mut is_resolving_address = use_signal(|| false);
    let mut is_saving = use_signal(|| false);
    let mut saved = use_signal(|| false);
    let mut alert = use_signal(|| None::<AlertMessage>);

    // Simulated GPS fix on mount
    use_effect(move || {
        spawn(async move {
            is_loading_location.set(true);
            let fix = location_service::current_location(&config::load_config()).await;
            location.set(Some(location_service::resolve_fix(location(), fix)));
            is_loading_location.set(false);
        });
    });

    let on_lookup_address = move |_| {
        let Some(current) = location() else {
            return;
        };
        spawn(async move {
            is_resolving_address.set(true);
            let address = geocoding_service::get_address(
                &config::load_config(),
                current.latitude,
                current.longitude,
            )
            .await;
            location.set(Some(Location { address, ..current }));
            is_resolving_address.set(false);
        });
    };

    let on_save = move |_| {
        let current = location();
        let draft = ActivityDraft {
            title: title(),
            description: description(),
            category: category(),
            latitude: current.as_ref().map(|l| l.latitude),
            longitude: current.as_ref().map(|l| l.longitude),
            address: current.map(|l| l.address).unwrap_or_default(),
            image_uri: image_uri(),
        };

        let activity = match draft.into_activity() {
            Ok(activity) => activity,
            Err(e) => {
                alert.set(Some(AlertMessage::new(t!("alert-required-title"), e.user_message())));
                return;
            }
        };

        is_saving.set(true);
        let result = database::init_database().and_then(|conn| {
            ActivityStore::new(&conn, &config::load_config()).add_activity(activity.clone())
        });
        is_saving.set(false);

        match result {
            Ok(_) => {
                log::info!("Saved activity {}", activity.id);
                spawn_background_sync(activity);
                saved.set(true);
                alert.set(Some(AlertMessage::new(
                    t!("alert-success-title"),
                    t!("alert-activity-saved"),
                )));
            }
            Err(e) => {
                log::error!("Save error: {}", e);
                alert.set(Some(AlertMessage::new("Error", t!("error-save-failed"))));
            }
        }
    };

    let field_style = "width: 100%; padding: 10px; border: 1px solid #E5E7EB; border-radius: 8px; font-size: 15px; box-sizing: border-box;";
    let label_style = "display: block; margin-bottom: 8px; font-weight: 600; color: #374151;";

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; background: #F9FAFB; min-height: 100vh;",
            div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 20px;",
                button { style: "padding: 8px 16px; background: #E5E7EB; color: #333; border: none; border-radius: 8px; font-size: 16px;",
                    onclick: move |_| on_navigate.call(Screen::TrackerHome),
                    "← Back"
                }
                h2 { style: "margin: 0; color: #6366F1;", {t!("add-log-title")} }
            }

            // Photo
            div { style: "margin-bottom: 20px;",
                label { style: label_style, "📷 Photo" }
                if let Some(uri) = image_uri() {
                    img { src: camera::image_src(&uri), style: "width: 100%; height: 200px; object-fit: cover; border-radius: 12px; background: #F3F4F6;" }
                } else {
                    div { style: "width: 100%; height: 160px; border: 2px dashed #D1D5DB; border-radius: 12px; display: flex; align-items: center; justify-content: center; color: #9CA3AF;",
                        {t!("no-photo")}
                    }
                }
                div { style: "display: flex; gap: 8px; margin-top: 8px;",
                    button {
                        style: "flex: 1; padding: 10px; background: #6366F1; color: white; border: none; border-radius: 8px;",
                        onclick: move |_| image_uri.set(Some(camera::capture_photo(category()))),
                        "📸 Take Photo"
                    }
                    button {
                        style: "flex: 1; padding: 10px; background: #E5E7EB; color: #374151; border: none; border-radius: 8px;",
                        onclick: move |_| image_uri.set(Some(camera::capture_photo(ActivityCategory::Other))),
                        "🖼️ Mock Image"
                    }
                }
            }

            // Location
            div { style: "margin-bottom: 20px; background: white; border-radius: 12px; padding: 12px;",
                label { style: label_style, "📍 Location" }
                if is_loading_location() {
                    p { style: "margin: 0; color: #6B7280;", {t!("location-loading")} }
                } else if let Some(loc) = location() {
                    p { style: "margin: 0 0 4px 0; color: #1F2937;", "{loc.address}" }
                    p { style: "margin: 0; font-size: 12px; color: #9CA3AF;",
                        "{loc.latitude:.4}, {loc.longitude:.4}"
                    }
                }
                div { style: "display: flex; gap: 8px; margin-top: 8px;",
                    button {
                        style: "flex: 1; padding: 8px; background: #E5E7EB; color: #374151; border: none; border-radius: 8px;",
                        onclick: move |_| {
                            location.set(Some(location_service::mock_location()));
                            is_loading_location.set(false);
                        },
                        "🧪 Use Mock Location"
                    }
                    button {
                        style: "flex: 1; padding: 8px; background: #E5E7EB; color: #374151; border: none; border-radius: 8px;",
                        disabled: location().is_none() || is_resolving_address(),
                        onclick: on_lookup_address,
                        if is_resolving_address() { "⏳" } else { "🔎 Lookup Address" }
                    }
                }
            }

            // Category
            div { style: "margin-bottom: 20px;",
                label { style: label_style, "Category" }
                CategoryPicker { selected: category(), on_select: move |c| category.set(c) }
            }

            // Title
            div { style: "margin-bottom: 20px;",
                label { style: label_style, "Title *" }
                input {
                    r#type: "text",
                    value: "{title}",
                    maxlength: "{TITLE_MAX_LEN}",
                    placeholder: "What did you do?",
                    oninput: move |e| title.set(e.value()),
                    style: field_style,
                }
            }

            // Description
            div { style: "margin-bottom: 20px;",
                label { style: label_style, "Description" }
                textarea {
                    value: "{description}",
                    maxlength: "{DESCRIPTION_MAX_LEN}",
                    placeholder: "Add some details...",
                    oninput: move |e| description.set(e.value()),
                    style: "{field_style} min-height: 100px;",
                }
            }

            button {
                disabled: is_saving(),
                onclick: on_save,
                style: "width: 100%; padding: 14px; background: #22C55E; color: white; border: none; border-radius: 10px; font-size: 16px; font-weight: 600; margin-bottom: 32px;",
                if is_saving() { "⏳" } else { "💾 Save Activity" }
            }

            if let Some(message) = alert() {
                AlertDialog {
                    alert: message,
                    on_dismiss: move |_| {
                        alert.set(None);
                        if saved() {
                            on_navigate.call(Screen::TrackerHome);
                        }
                    },
                }
            }
        }
    }
}
