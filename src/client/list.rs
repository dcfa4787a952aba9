//! Shared controller behind every entity list page.
//!
//! A page fetches its records once on mount, keeps them in an [`EntityList`], filters
//! them locally as the user types, and reloads the whole list after any mutation. A
//! failed fetch never replaces the records already on screen.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{load_records, EntityApi},
        error::Error,
        store::notification::{Notification, NotificationLevel},
        util::RequestScope,
    },
    model::entity::Entity,
};

/// A create, update, or delete request on an entity
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<T> {
    Create(T),
    Update(i64, T),
    Delete(i64),
}

impl<T: Entity> Mutation<T> {
    /// Success message shown once the mutation went through
    pub fn success_message(&self) -> String {
        let label = T::RESOURCE.label();

        match self {
            Mutation::Create(_) => format!("{} : élément ajouté", label),
            Mutation::Update(..) => format!("{} : modifications enregistrées", label),
            Mutation::Delete(_) => format!("{} : élément supprimé", label),
        }
    }
}

/// A mutation the backend accepted, with the reload that followed it
///
/// The reload is reported on its own: it failing never means the mutation did.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationOutcome<T> {
    pub reloaded: Result<Vec<T>, Error>,
}

/// In-memory records of a list page
#[derive(Clone, Debug, PartialEq)]
pub struct EntityList<T> {
    records: Vec<T>,
    query: String,
    loaded: bool,
    mutating: bool,
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            loaded: false,
            mutating: false,
        }
    }
}

impl<T: Entity> EntityList<T> {
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether at least one fetch succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the current query, in their original order
    ///
    /// Matching is a case-insensitive substring test against the entity's search fields;
    /// a blank query matches everything.
    pub fn filtered(&self) -> Vec<&T> {
        let needle = self.query.trim().to_lowercase();

        if needle.is_empty() {
            return self.records.iter().collect();
        }

        self.records
            .iter()
            .filter(|record| {
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Apply the outcome of a fetch
    ///
    /// Success replaces the records wholesale. A failure keeps the previous records and
    /// returns the notification to show; a cancelled fetch changes nothing.
    pub fn apply_fetch(
        &mut self,
        result: Result<Vec<T>, Error>,
    ) -> Option<(NotificationLevel, String)> {
        match result {
            Ok(records) => {
                self.records = records;
                self.loaded = true;
                None
            }
            Err(Error::Cancelled) => None,
            Err(err) => {
                tracing::error!(
                    resource = %T::RESOURCE,
                    kept = self.records.len(),
                    "Failed to load list: {}",
                    err
                );

                Notification::from_error(&err)
            }
        }
    }

    /// Apply the outcome of a mutation, returning the notifications to show
    ///
    /// An accepted mutation always reports success; a failed reload after it is then
    /// handled like any failed fetch, keeping the current records. A rejected mutation
    /// reports its error and leaves the records alone.
    pub fn apply_mutation(
        &mut self,
        mutation: &Mutation<T>,
        result: Result<MutationOutcome<T>, Error>,
    ) -> Vec<(NotificationLevel, String)> {
        match result {
            Ok(outcome) => {
                let mut notifications =
                    vec![(NotificationLevel::Success, mutation.success_message())];
                notifications.extend(self.apply_fetch(outcome.reloaded));
                notifications
            }
            Err(Error::Cancelled) => Vec::new(),
            Err(err) => {
                tracing::warn!(resource = %T::RESOURCE, "Mutation rejected: {}", err);

                Notification::from_error(&err).into_iter().collect()
            }
        }
    }

    /// Mark a mutation as started, refusing when one is already in flight
    pub fn begin_mutation(&mut self) -> bool {
        if self.mutating {
            tracing::debug!(resource = %T::RESOURCE, "Ignoring mutation, one is already in flight");
            return false;
        }

        self.mutating = true;
        true
    }

    pub fn end_mutation(&mut self) {
        self.mutating = false;
    }
}

/// Validate and send a mutation, then reload the list
///
/// Validation failures return before any network call. `Err` means the mutation itself
/// failed; once the backend accepted it the result is `Ok`, carrying the reload.
pub async fn submit<T, A>(
    api: &A,
    scope: &RequestScope,
    mutation: &Mutation<T>,
) -> Result<MutationOutcome<T>, Error>
where
    T: Entity,
    A: EntityApi,
{
    let encode = |record: &T| {
        serde_json::to_value(record)
            .map_err(|e| Error::ParseError(format!("Failed to encode {}: {}", T::RESOURCE, e)))
    };

    match mutation {
        Mutation::Create(record) => {
            record.validate()?;
            api.create(T::RESOURCE, encode(record)?, scope).await?;
        }
        Mutation::Update(id, record) => {
            record.validate()?;
            api.update(T::RESOURCE, *id, encode(record)?, scope).await?;
        }
        Mutation::Delete(id) => {
            api.delete(T::RESOURCE, *id, scope).await?;
        }
    }

    tracing::debug!(resource = %T::RESOURCE, "Mutation succeeded, reloading list");

    Ok(MutationOutcome {
        reloaded: load_records(api, scope).await,
    })
}
