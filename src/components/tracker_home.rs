use crate::camera;
use crate::components::alert::{AlertDialog, AlertMessage, ConfirmDialog};
use crate::config;
use crate::database;
use crate::models::Activity;
use crate::services::{
    self, ActivityStats, ActivityStore, HttpSyncTarget, ManualSyncOutcome, SyncTarget,
};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn TrackerHomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut activities = use_signal(Vec::<Activity>::new);
    let mut search_query = use_signal(String::new);
    let mut is_loading = use_signal(|| true);
    let mut is_online = use_signal(|| true);
    let mut is_syncing = use_signal(|| false);
    let mut alert = use_signal(|| None::<AlertMessage>);
    let mut pending_delete = use_signal(|| None::<Activity>);

    let load_data = move || {
        spawn(async move {
            is_loading.set(true);
            let app_config = config::load_config();

            match database::init_database() {
                Ok(conn) => {
                    let store = ActivityStore::new(&conn, &app_config);
                    match store.get_activities() {
                        Ok(list) => activities.set(list),
                        Err(e) => {
                            log::error!("Get activities error: {}", e);
                            activities.set(store.get_offline_activities());
                        }
                    }
                }
                Err(e) => log::error!("DB error: {}", e),
            }

            let online = match HttpSyncTarget::new(&app_config) {
                Ok(target) => target.check_connection().await,
                Err(_) => false,
            };
            is_online.set(online);
            is_loading.set(false);
        });
    };

    // Load on mount
    use_effect(move || {
        load_data();
    });

    let on_sync = move |_| {
        spawn(async move {
            is_syncing.set(true);
            let app_config = config::load_config();
            let result = match (database::init_database(), HttpSyncTarget::new(&app_config)) {
                (Ok(conn), Ok(target)) => {
                    let store = ActivityStore::new(&conn, &app_config);
                    services::manual_sync(&store, &target).await
                }
                (Err(e), _) | (_, Err(e)) => Err(e),
            };
            is_syncing.set(false);

            let message = match result {
                Ok(ManualSyncOutcome::Offline) => {
                    is_online.set(false);
                    AlertMessage::new(t!("alert-offline-title"), t!("alert-offline-message"))
                }
                Ok(ManualSyncOutcome::AllSynced) => AlertMessage::new(
                    t!("alert-all-synced-title"),
                    t!("alert-all-synced-message"),
                ),
                Ok(ManualSyncOutcome::Synced(synced)) => {
                    load_data();
                    AlertMessage::new(
                        t!("alert-sync-complete-title"),
                        t!("alert-sync-complete-message", count: synced),
                    )
                }
                Err(e) => AlertMessage::new("Error", e.user_message()),
            };
            alert.set(Some(message));
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(activity) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        match database::init_database() {
            Ok(conn) => {
                let store = ActivityStore::new(&conn, &config::load_config());
                match store.delete_activity(&activity.id) {
                    Ok(updated) => activities.set(updated),
                    Err(e) => alert.set(Some(AlertMessage::new("Error", e.user_message()))),
                }
            }
            Err(e) => alert.set(Some(AlertMessage::new("Error", e.user_message()))),
        }
    };

    let all = activities();
    let stats = ActivityStats::from(all.as_slice());
    let filtered = services::filter_activities(&all, &search_query());
    let now = chrono::Utc::now();

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #F9FAFB; position: relative;",

            // Header
            div { style: "background: #6366F1; color: white; border-radius: 16px; padding: 20px; margin-bottom: 16px;",
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h1 { style: "margin: 0; font-size: 24px; font-weight: 700;", "📍 SmartTracker" }
                    span { style: if is_online() { "font-size: 12px; padding: 4px 10px; border-radius: 12px; background: #22C55E;" } else { "font-size: 12px; padding: 4px 10px; border-radius: 12px; background: #EF4444;" },
                        if is_online() { "● Online" } else { "● Offline" }
                    }
                }
                // Stats
                div { style: "display: flex; gap: 12px; margin-top: 16px;",
                    StatBox { value: stats.total, label: t!("stats-total") }
                    StatBox { value: stats.synced, label: t!("stats-synced") }
                    StatBox { value: stats.pending, label: t!("stats-pending") }
                }
            }

            // Search + Sync
            div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                input {
                    r#type: "text",
                    value: "{search_query}",
                    placeholder: t!("search-placeholder"),
                    oninput: move |e| search_query.set(e.value()),
                    style: "flex: 1; padding: 10px 12px; border: 1px solid #E5E7EB; border-radius: 10px; font-size: 14px;",
                }
                if !search_query().is_empty() {
                    button {
                        style: "padding: 10px 12px; background: #E5E7EB; color: #374151; border: none; border-radius: 10px; font-size: 14px;",
                        onclick: move |_| search_query.set(String::new()),
                        "✕"
                    }
                }
                button {
                    disabled: is_syncing(),
                    onclick: on_sync,
                    style: "padding: 10px 14px; background: #22C55E; color: white; border: none; border-radius: 10px; font-size: 14px;",
                    if is_syncing() { "⏳" } else { "☁️ Sync" }
                }
            }

            if !search_query().trim().is_empty() {
                p { style: "font-size: 13px; color: #6B7280; margin: 0 0 8px 0;",
                    {t!("search-found", count: filtered.len())}
                }
            }

            if is_loading() && all.is_empty() {
                p { style: "text-align: center; color: #6B7280;", {t!("loading")} }
            } else if filtered.is_empty() {
                div { style: "text-align: center; padding: 48px 16px; color: #6B7280;",
                    p { style: "font-size: 48px; margin: 0;", "📭" }
                    p { style: "font-size: 16px;", {t!("empty-activities")} }
                }
            } else {
                div { style: "display: flex; flex-direction: column; gap: 12px; margin-bottom: 96px;",
                    for activity in filtered.iter() {
                        ActivityCard {
                            key: "{activity.id}",
                            activity: activity.clone(),
                            relative_time: activity.relative_time(now),
                            on_open: move |id| on_navigate.call(Screen::ActivityDetail(id)),
                            on_delete: move |a| pending_delete.set(Some(a)),
                        }
                    }
                }
            }

            // Floating add button
            button {
                style: "position: fixed; right: 24px; bottom: 96px; width: 56px; height: 56px; border-radius: 28px; background: #6366F1; color: white; font-size: 28px; border: none; box-shadow: 0 4px 12px rgba(0,0,0,0.25);",
                onclick: move |_| on_navigate.call(Screen::AddLog),
                "+"
            }

            if let Some(activity) = pending_delete() {
                ConfirmDialog {
                    title: t!("confirm-delete-title"),
                    message: t!("confirm-delete-named", title: activity.title.clone()),
                    confirm_label: t!("delete"),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }

            if let Some(message) = alert() {
                AlertDialog { alert: message, on_dismiss: move |_| alert.set(None) }
            }
        }
    }
}

#[component]
fn StatBox(value: usize, label: String) -> Element {
    rsx! {
        div { style: "flex: 1; background: rgba(255,255,255,0.15); border-radius: 10px; padding: 10px; text-align: center;",
            div { style: "font-size: 22px; font-weight: 700;", "{value}" }
            div { style: "font-size: 12px; opacity: 0.9;", "{label}" }
        }
    }
}

#[component]
fn ActivityCard(
    activity: Activity,
    relative_time: String,
    on_open: EventHandler<String>,
    on_delete: EventHandler<Activity>,
) -> Element {
    let category = activity.category;
    let image = camera::image_src(&activity.image_uri);
    let id = activity.id.clone();
    let to_delete = activity.clone();

    rsx! {
        div {
            style: "display: flex; gap: 12px; background: white; border-radius: 12px; padding: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); cursor: pointer;",
            onclick: move |_| on_open.call(id.clone()),
            img { src: "{image}", style: "width: 72px; height: 72px; border-radius: 8px; object-fit: cover; background: #F3F4F6;" }
            div { style: "flex: 1; min-width: 0;",
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    span { style: "font-size: 12px; color: {category.color()}; font-weight: 600;",
                        "{category.icon()} {category.label()}"
                    }
                    span { style: "font-size: 12px; color: #9CA3AF;", "{relative_time}" }
                }
                p { style: "margin: 4px 0; font-size: 16px; font-weight: 600; color: #1F2937; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{activity.title}"
                }
                p { style: "margin: 0; font-size: 12px; color: #6B7280;", "📍 {activity.address}" }
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: 6px;",
                    span { style: if activity.is_synced { "font-size: 11px; color: #22C55E;" } else { "font-size: 11px; color: #F59E0B;" },
                        if activity.is_synced { "☁️ Synced" } else { "⏳ Pending" }
                    }
                    button {
                        style: "padding: 4px 8px; font-size: 12px; background: #FEE2E2; color: #EF4444; border: none; border-radius: 6px;",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_delete.call(to_delete.clone());
                        },
                        "🗑️"
                    }
                }
            }
        }
    }
}
