use dioxus::prelude::*;

use crate::client::store::Notifications;

/// Stack of transient messages, newest at the bottom
#[component]
pub fn NotificationTray() -> Element {
    let mut notifications = use_context::<Signal<Notifications>>();

    let visible: Vec<_> = notifications.read().iter().cloned().collect();

    rsx!(
        div { class: "toast toast-end z-50",
            for notification in visible {
                div {
                    key: "{notification.id}",
                    class: "{notification.level.alert_class()}",
                    span { "{notification.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| notifications.write().dismiss(notification.id),
                        "✕"
                    }
                }
            }
        }
    )
}
