use dioxus::prelude::*;

use crate::{
    client::{
        access::{guard_path, GuardDecision},
        components::{
            auth::{AuthNavbar, Sidebar},
            Redirect,
        },
        router::Route,
        store::Session,
        util::RequestScope,
    },
};

/// Layout of every page that requires a session
///
/// The guard runs on every render, so a logout or a role change anywhere in the app
/// immediately sends the user to the login page or their own dashboard.
#[component]
pub fn AuthLayout() -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let route = use_route::<Route>();

    let scope = use_hook(RequestScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    // Refresh the menu counters whenever the logged in user changes
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::{
            client::{
                api::{EntityApi, RestClient},
                config::ClientConfig,
            },
            model::stats::CountsSnapshot,
        };

        let mut counts = use_context::<Signal<Option<CountsSnapshot>>>();
        let config = use_context::<ClientConfig>();

        use_resource(move || {
            let token = session.read().as_ref().map(|session| session.token.clone());
            let api = RestClient::new(config.clone(), token.clone());
            let scope = scope.clone();

            async move {
                if token.is_none() {
                    return;
                }

                match api.stats(&scope).await {
                    Ok(snapshot) => {
                        if counts.peek().as_ref() != Some(&snapshot) {
                            counts.set(Some(snapshot));
                        }
                    }
                    Err(err) if err.is_cancelled() => (),
                    Err(err) => tracing::warn!("Failed to load menu counters: {}", err),
                }
            }
        });
    }

    let path = route.to_string();

    if let GuardDecision::RedirectTo(target) = guard_path(&path, session.read().as_ref()) {
        return rsx!(Redirect { to: target });
    }

    rsx! {
        AuthNavbar {}
        div { class: "flex",
            Sidebar {}
            div { class: "flex-1 min-w-0",
                Outlet::<Route> {}
            }
        }
    }
}
