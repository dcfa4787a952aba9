use dioxus::prelude::*;

use crate::client::router::route_from_path;

/// Replace the current history entry with `to` once mounted
#[component]
pub fn Redirect(to: String) -> Element {
    let nav = navigator();

    use_effect(move || {
        if let Some(route) = route_from_path(&to) {
            nav.replace(route);
        }
    });

    rsx!(
        div { class: "flex justify-center p-8",
            span { class: "loading loading-spinner" }
        }
    )
}
