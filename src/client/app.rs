use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::NotificationTray,
        config::ClientConfig,
        router::Route,
        storage::default_storage,
        store::{Notifications, Preferences, SessionEvent, SessionStore},
    },
    model::stats::CountsSnapshot,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component
///
/// Provides the shared handles every view reads through `use_context`:
/// - `SessionStore`, `Preferences`, `ClientConfig`
/// - `Signal<Option<Session>>`, kept in sync with the store through a subscription
/// - `Signal<bool>` for supplier mode
/// - `Signal<Notifications>` and `Signal<Option<CountsSnapshot>>`
#[component]
pub fn App() -> Element {
    let storage = use_hook(default_storage);

    let session_store = use_context_provider({
        let storage = storage.clone();
        move || SessionStore::new(storage)
    });
    let preferences = use_context_provider(move || Preferences::new(storage));
    use_context_provider({
        let preferences = preferences.clone();
        move || {
            let config = ClientConfig::resolve(&preferences);
            tracing::info!(api_base_url = %config.api_base_url, "Client configured");
            config
        }
    });

    let session = use_context_provider({
        let session_store = session_store.clone();
        move || Signal::new(session_store.load())
    });
    use_context_provider(move || Signal::new(preferences.supplier_mode()));
    use_context_provider(|| Signal::new(Notifications::default()));
    use_context_provider(|| Signal::new(None::<CountsSnapshot>));

    // Mirror logins and logouts into the session signal for as long as the app lives
    use_hook(move || {
        let counts = consume_context::<Signal<Option<CountsSnapshot>>>();

        Rc::new(session_store.subscribe(move |event| {
            let (mut session, mut counts) = (session, counts);

            match event {
                SessionEvent::LoggedIn(logged_in) => session.set(Some(logged_in.clone())),
                SessionEvent::LoggedOut => {
                    session.set(None);
                    counts.set(None);
                }
            }
        }))
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
        NotificationTray {}
    }
}
