use dioxus::prelude::*;

/// Page body with an optional heading
#[component]
pub fn Page(class: Option<&'static str>, title: Option<String>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            if let Some(title) = title {
                h1 { class: "text-2xl font-semibold mb-4",
                    "{title}"
                }
            }
            {children}
        }
    )
}
