use crate::components::alert::{AlertDialog, AlertMessage, ConfirmDialog};
use crate::models::{DashboardState, Device, DeviceDraft, DeviceType};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

const ACCENT: &str = "#ff8c00";

#[component]
pub fn SmartHomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut dashboard = use_context::<Signal<DashboardState>>();
    let mut show_add = use_signal(|| false);
    let mut pending_remove = use_signal(|| None::<Device>);

    let devices = dashboard().devices;
    let active = devices.iter().filter(|d| d.is_on).count();

    rsx! {
        div { style: "max-width: 600px; margin: 0 auto; min-height: 100vh; background: #FFF8F0; padding: 16px; position: relative;",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                div {
                    h1 { style: "margin: 0; font-size: 24px; color: #333;", "🏠 "
                        {t!("smart-home-title")}
                    }
                    p { style: "margin: 4px 0 0 0; font-size: 13px; color: #777;",
                        {t!("smart-home-active", active: active, total: devices.len())}
                    }
                }
                button {
                    style: "padding: 10px 14px; background: {ACCENT}; color: white; border: none; border-radius: 10px; font-size: 15px;",
                    onclick: move |_| show_add.set(true),
                    "+ "
                    {t!("smart-home-add")}
                }
            }

            if devices.is_empty() {
                p { style: "text-align: center; color: #777; padding: 48px 0;", {t!("smart-home-empty")} }
            } else {
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 32px;",
                    for device in devices.iter() {
                        DeviceCard {
                            key: "{device.id}",
                            device: device.clone(),
                            on_open: move |id| on_navigate.call(Screen::DeviceDetail(id)),
                            on_toggle: move |(id, is_on): (u64, bool)| dashboard.write().toggle(id, is_on),
                            on_remove: move |d| pending_remove.set(Some(d)),
                        }
                    }
                }
            }

            if show_add() {
                AddDeviceModal { on_close: move |_| show_add.set(false) }
            }

            if let Some(device) = pending_remove() {
                ConfirmDialog {
                    title: t!("confirm-remove-device-title", name: device.name.clone()),
                    message: t!("confirm-remove-device-message"),
                    confirm_label: t!("remove"),
                    on_confirm: move |_| {
                        dashboard.write().remove(device.id);
                        pending_remove.set(None);
                    },
                    on_cancel: move |_| pending_remove.set(None),
                }
            }
        }
    }
}

#[component]
fn DeviceCard(
    device: Device,
    on_open: EventHandler<u64>,
    on_toggle: EventHandler<(u64, bool)>,
    on_remove: EventHandler<Device>,
) -> Element {
    let id = device.id;
    let is_on = device.is_on;
    let to_remove = device.clone();

    rsx! {
        div {
            style: if is_on { "background: #FFF1DD; border: 2px solid #ff8c00; border-radius: 14px; padding: 14px; cursor: pointer;" } else { "background: white; border: 2px solid #EEE; border-radius: 14px; padding: 14px; cursor: pointer;" },
            onclick: move |_| on_open.call(id),
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                span { style: "font-size: 13px; color: #555;", "{device.device_type.display_name()}" }
                input {
                    r#type: "checkbox",
                    checked: is_on,
                    onclick: move |e| e.stop_propagation(),
                    onchange: move |e| on_toggle.call((id, e.checked())),
                }
            }
            p { style: "margin: 10px 0 2px 0; font-size: 16px; font-weight: 600; color: #222;", "{device.name}" }
            p { style: "margin: 0; font-size: 12px; color: #888;", "{device.room}" }
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: 10px;",
                span { style: if is_on { "font-size: 12px; font-weight: 600; color: #ff8c00;" } else { "font-size: 12px; font-weight: 600; color: #999;" },
                    "{device.status_text()}"
                }
                button {
                    style: "padding: 4px 8px; font-size: 12px; background: #FEE2E2; color: #EF4444; border: none; border-radius: 6px;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_remove.call(to_remove.clone());
                    },
                    "🗑️"
                }
            }
        }
    }
}

#[component]
fn AddDeviceModal(on_close: EventHandler<()>) -> Element {
    let mut dashboard = use_context::<Signal<DashboardState>>();
    let mut name = use_signal(String::new);
    let mut room = use_signal(String::new);
    let mut device_type = use_signal(DeviceType::default);
    let mut alert = use_signal(|| None::<AlertMessage>);

    let on_add = move |_| {
        let draft = DeviceDraft {
            name: name(),
            room: room(),
            device_type: device_type(),
        };
        let result = dashboard.write().add_device(draft);
        match result {
            Ok(_) => on_close.call(()),
            Err(e) => alert.set(Some(AlertMessage::new(
                t!("alert-validation-title"),
                e.user_message(),
            ))),
        }
    };

    let field_style = "width: 100%; padding: 10px; border: 1px solid #DDD; border-radius: 8px; font-size: 15px; box-sizing: border-box; margin-bottom: 12px;";

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.45); display: flex; align-items: flex-end; justify-content: center; z-index: 50;",
            div { style: "background: white; width: 100%; max-width: 600px; border-radius: 16px 16px 0 0; padding: 20px;",
                h3 { style: "margin: 0 0 16px 0; font-size: 20px; color: #333;", {t!("smart-home-add-title")} }
                input {
                    r#type: "text",
                    value: "{name}",
                    placeholder: "Device name",
                    oninput: move |e| name.set(e.value()),
                    style: field_style,
                }
                input {
                    r#type: "text",
                    value: "{room}",
                    placeholder: "Room",
                    oninput: move |e| room.set(e.value()),
                    style: field_style,
                }
                div { style: "display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 16px;",
                    for kind in DeviceType::ALL {
                        button {
                            key: "{kind.as_str()}",
                            style: if kind == device_type() { "padding: 8px 12px; border: none; border-radius: 16px; font-size: 14px; background: #ff8c00; color: white;" } else { "padding: 8px 12px; border: none; border-radius: 16px; font-size: 14px; background: #F3F4F6; color: #374151;" },
                            onclick: move |_| device_type.set(kind),
                            "{kind.display_name()}"
                        }
                    }
                }
                div { style: "display: flex; gap: 10px;",
                    button {
                        style: "flex: 1; padding: 12px; background: #E5E7EB; color: #374151; border: none; border-radius: 8px; font-size: 16px;",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        style: "flex: 1; padding: 12px; background: {ACCENT}; color: white; border: none; border-radius: 8px; font-size: 16px;",
                        onclick: on_add,
                        {t!("smart-home-add")}
                    }
                }
            }

            if let Some(message) = alert() {
                AlertDialog { alert: message, on_dismiss: move |_| alert.set(None) }
            }
        }
    }
}

#[component]
pub fn DeviceDetailScreen(device_id: u64, on_navigate: EventHandler<Screen>) -> Element {
    let mut dashboard = use_context::<Signal<DashboardState>>();

    let Some(device) = dashboard().get(device_id).cloned() else {
        return rsx! {
            div { style: "padding: 16px;",
                button { style: "padding: 8px 16px; background: #E5E7EB; color: #333; border: none; border-radius: 8px; font-size: 16px;",
                    onclick: move |_| on_navigate.call(Screen::SmartHome),
                    "← Back"
                }
                p { style: "color: #777; margin-top: 24px;", {t!("device-not-found")} }
            }
        };
    };

    let level = device.value.unwrap_or(0);

    rsx! {
        div { style: "max-width: 600px; margin: 0 auto; min-height: 100vh; background: #FFF8F0; padding: 16px;",
            button { style: "padding: 8px 16px; background: #E5E7EB; color: #333; border: none; border-radius: 8px; font-size: 16px;",
                onclick: move |_| on_navigate.call(Screen::SmartHome),
                "← Back"
            }

            div { style: "background: white; border-radius: 16px; padding: 20px; margin-top: 16px; box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
                p { style: "margin: 0; font-size: 14px; color: #888;", "{device.device_type.display_name()} · {device.room}" }
                h1 { style: "margin: 8px 0 16px 0; font-size: 26px; color: #222;", "{device.name}" }

                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-top: 1px solid #EEE;",
                    span { style: "font-size: 16px; color: #333;", {t!("device-status")} }
                    div { style: "display: flex; align-items: center; gap: 10px;",
                        span { style: if device.is_on { "font-weight: 600; color: #ff8c00;" } else { "font-weight: 600; color: #999;" },
                            "{device.status_text()}"
                        }
                        input {
                            r#type: "checkbox",
                            checked: device.is_on,
                            onchange: move |e| dashboard.write().toggle(device_id, e.checked()),
                        }
                    }
                }

                if let Some(label) = device.device_type.control_label() {
                    div { style: "padding: 12px 0; border-top: 1px solid #EEE;",
                        div { style: "display: flex; justify-content: space-between; margin-bottom: 8px;",
                            span { style: "font-size: 16px; color: #333;", "{label}" }
                            span { style: "font-size: 16px; font-weight: 600; color: #ff8c00;", "{level}%" }
                        }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            step: "1",
                            value: "{level}",
                            disabled: !device.is_on,
                            oninput: move |e| {
                                if let Ok(value) = e.value().parse::<f64>() {
                                    dashboard.write().update_value(device_id, value);
                                }
                            },
                            style: "width: 100%;",
                        }
                    }
                } else {
                    p { style: "padding: 12px 0; border-top: 1px solid #EEE; color: #888; margin: 0;",
                        {t!("device-no-controls")}
                    }
                }
            }
        }
    }
}
