use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                h1 { class: "text-4xl font-bold", "404" }
                p { "La page {path} n'existe pas." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Retour à l'accueil" }
            }
        }
    )
}
