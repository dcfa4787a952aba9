use dioxus::prelude::*;

use crate::{client::components::entity_page, model::shop::ProductDto};

/// Public product catalogue, reachable without a session
#[component]
pub fn PublicShop() -> Element {
    entity_page::<ProductDto>("Boutique", false)
}
