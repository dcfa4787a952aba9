//! The list page every entity shares.
//!
//! Fetch once on mount, filter locally, reload after each mutation. The request scope
//! is cancelled when the page unmounts so late responses never touch its state.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::Page,
        config::ClientConfig,
        list::EntityList,
        store::{Notifications, Session},
        util::RequestScope,
    },
    model::entity::{Entity, StatusTone},
};

/// Badge rendering a free-form status string
#[component]
pub fn StatusBadge(status: String) -> Element {
    let tone = StatusTone::from_status(&status);

    rsx!(
        span { class: "{tone.badge_class()}", "{status}" }
    )
}

/// Render the list page of `T`
///
/// Called from a route component; hooks run in that component's scope.
pub fn entity_page<T: Entity>(title: &'static str, can_delete: bool) -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let notifications = use_context::<Signal<Notifications>>();
    let mut list = use_signal(EntityList::<T>::default);

    let scope = use_hook(RequestScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    #[cfg(feature = "web")]
    {
        use crate::client::api::{load_records, RestClient};

        let config = use_context::<ClientConfig>();
        let scope = scope.clone();
        let mut notifications = notifications;

        use_hook(move || {
            spawn(async move {
                let token = session.peek().as_ref().map(|session| session.token.clone());
                let api = RestClient::new(config, token);

                let result = load_records::<T, _>(&api, &scope).await;

                if let Some((level, message)) = list.write().apply_fetch(result) {
                    notifications.write().push(level, message);
                }
            })
        });
    }

    let headers = T::headers();
    let rows: Vec<T> = list.read().filtered().into_iter().cloned().collect();
    let loaded = list.read().is_loaded();
    let mutating = list.read().is_mutating();
    let query = list.read().query().to_string();

    rsx!(
        Page { title: title.to_string(),
            div { class: "flex items-center gap-2 mb-4",
                label { class: "input input-bordered flex items-center gap-2 w-full max-w-md",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaMagnifyingGlass
                    }
                    input {
                        r#type: "search",
                        class: "grow",
                        placeholder: "Rechercher...",
                        value: "{query}",
                        oninput: move |evt| list.write().set_query(evt.value()),
                    }
                }
                span { class: "text-sm opacity-70",
                    "{rows.len()} / {list.read().records().len()}"
                }
            }
            if !loaded {
                div { class: "skeleton h-32 w-full" }
            } else if rows.is_empty() {
                div { class: "alert", "Aucun élément à afficher" }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                for header in headers.iter() {
                                    th { "{header}" }
                                }
                                if can_delete {
                                    th {}
                                }
                            }
                        }
                        tbody {
                            for (index, record) in rows.into_iter().enumerate() {
                                EntityRow::<T> {
                                    key: "{record.id().unwrap_or(index as i64)}",
                                    record: record,
                                    list: list,
                                    notifications: notifications,
                                    scope: scope.clone(),
                                    can_delete: can_delete && !mutating,
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[derive(Props, Clone)]
struct EntityRowProps<T: Entity> {
    record: T,
    list: Signal<EntityList<T>>,
    notifications: Signal<Notifications>,
    scope: RequestScope,
    can_delete: bool,
}

impl<T: Entity> PartialEq for EntityRowProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record && self.can_delete == other.can_delete
    }
}

#[allow(non_snake_case)]
fn EntityRow<T: Entity>(props: EntityRowProps<T>) -> Element {
    let cells = props.record.cells();
    let has_status = props.record.status().is_some();
    let status_index = T::headers().iter().position(|header| *header == "Statut");
    let id = props.record.id();

    rsx!(
        tr {
            for (index, cell) in cells.into_iter().enumerate() {
                td {
                    if has_status && Some(index) == status_index {
                        StatusBadge { status: cell }
                    } else {
                        "{cell}"
                    }
                }
            }
            if props.can_delete {
                td {
                    if let Some(id) = id {
                        DeleteButton::<T> {
                            id: id,
                            list: props.list,
                            notifications: props.notifications,
                            scope: props.scope.clone(),
                        }
                    }
                }
            }
        }
    )
}

#[derive(Props, Clone)]
struct DeleteButtonProps<T: Entity> {
    id: i64,
    list: Signal<EntityList<T>>,
    notifications: Signal<Notifications>,
    scope: RequestScope,
}

impl<T: Entity> PartialEq for DeleteButtonProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[allow(non_snake_case)]
fn DeleteButton<T: Entity>(props: DeleteButtonProps<T>) -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let config = use_context::<ClientConfig>();

    let DeleteButtonProps {
        id,
        list,
        notifications,
        scope,
    } = props;

    rsx!(
        button {
            class: "btn btn-ghost btn-sm",
            onclick: move |_| {
                let token = session.peek().as_ref().map(|session| session.token.clone());

                spawn_delete(id, list, notifications, scope.clone(), config.clone(), token);
            },
            Icon {
                width: 14,
                height: 14,
                icon: FaTrash
            }
        }
    )
}

/// Delete a record and reload the list, at most one mutation at a time
#[cfg(feature = "web")]
fn spawn_delete<T: Entity>(
    id: i64,
    mut list: Signal<EntityList<T>>,
    mut notifications: Signal<Notifications>,
    scope: RequestScope,
    config: ClientConfig,
    token: Option<String>,
) {
    use crate::client::{
        api::RestClient,
        list::{submit, Mutation},
    };

    if !list.write().begin_mutation() {
        return;
    }

    spawn(async move {
        let api = RestClient::new(config, token);
        let mutation = Mutation::<T>::Delete(id);

        let result = submit(&api, &scope, &mutation).await;
        if scope.is_cancelled() {
            return;
        }

        let shown = list.write().apply_mutation(&mutation, result);
        for (level, message) in shown {
            notifications.write().push(level, message);
        }

        list.write().end_mutation();
    });
}

#[cfg(not(feature = "web"))]
fn spawn_delete<T: Entity>(
    id: i64,
    _list: Signal<EntityList<T>>,
    _notifications: Signal<Notifications>,
    _scope: RequestScope,
    _config: ClientConfig,
    _token: Option<String>,
) {
    dioxus_logger::tracing::warn!(resource = %T::RESOURCE, id, "No backend client in this build, delete skipped");
}
