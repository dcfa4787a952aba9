use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaScrewdriverWrench;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn BrandButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 22,
                    height: 22,
                    icon: FaScrewdriverWrench
                }
                p { class: "text-xl",
                    "Garage Manager"
                }
                p { class: "text-xs",
                    "v0.1.0-alpha.1"
                }
            }
        }
    )
}
