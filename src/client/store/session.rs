//! The single source of truth for "is a user logged in, and as whom".
//!
//! Views never read the persisted token or user record themselves; they go through a
//! [`SessionStore`] handle and subscribe to its [`SessionEvent`]s to learn about logins
//! and logouts that happened elsewhere in the application.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use dioxus_logger::tracing;

use crate::{
    client::{
        access::role::resolve_role,
        error::{Error, StorageError, ValidationError},
        storage::{KeyValueStorage, TOKEN_KEY, USER_KEY},
    },
    model::user::{Role, UserRecord},
};

/// A logged in user: bearer token plus the user record returned at login
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

impl Session {
    pub fn role(&self) -> Role {
        resolve_role(&self.user)
    }
}

/// Change notification published by the session store
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    LoggedIn(Session),
    LoggedOut,
}

type Listener = Rc<dyn Fn(&SessionEvent)>;

/// Handle onto the persisted session
///
/// Cheap to clone; all clones share the same storage and subscriber list.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<SessionStoreRef>,
}

/// Shared state behind every [`SessionStore`] clone
pub struct SessionStoreRef {
    storage: Rc<dyn KeyValueStorage>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

/// Keeps a session listener registered; dropping it unsubscribes
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    store: Weak<SessionStoreRef>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: Rc::new(SessionStoreRef {
                storage,
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    /// Read the persisted session
    ///
    /// Returns None when the token or user record is missing, the record does not parse,
    /// or its role is not one of the known roles. An invalid pair is cleared from storage
    /// so the next load starts clean. Storage failures are treated as "no session".
    pub fn load(&self) -> Option<Session> {
        let storage = &self.inner.storage;

        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|token| !token.trim().is_empty()),
            Err(err) => {
                tracing::warn!("Failed to read session token, treating as logged out: {}", err);
                return None;
            }
        };
        let user_blob = match storage.get(USER_KEY) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!("Failed to read session user, treating as logged out: {}", err);
                return None;
            }
        };

        match (token, user_blob) {
            (None, None) => None,
            (Some(token), Some(blob)) => match Self::parse_user(&blob) {
                Ok(user) => Some(Session { token, user }),
                Err(reason) => {
                    tracing::warn!("Clearing corrupted session: {}", reason);
                    self.remove_persisted();
                    None
                }
            },
            (token, _) => {
                tracing::warn!(
                    has_token = token.is_some(),
                    "Clearing incomplete session, token and user must both be present"
                );
                self.remove_persisted();
                None
            }
        }
    }

    /// Parse a persisted user blob, requiring a known role
    fn parse_user(blob: &str) -> Result<UserRecord, String> {
        let user: UserRecord = serde_json::from_str(blob)
            .map_err(|e| format!("user record is not a valid JSON object: {}", e))?;

        let raw_role = user.role.as_deref().unwrap_or_default();

        if Role::parse_known(raw_role).is_none() {
            return Err(format!("unknown role {:?}", raw_role));
        }

        Ok(user)
    }

    /// Persist a new session and notify subscribers
    ///
    /// Holds the same invariant as [`SessionStore::load`], so whatever is saved loads
    /// back. A record without a role is stored with its resolved role; a record whose
    /// role is not one of the known roles is refused and nothing is persisted.
    pub fn save(&self, token: &str, user: &UserRecord) -> Result<Session, Error> {
        let user = Self::admissible_user(user)?;

        let blob = serde_json::to_string(&user).map_err(|e| StorageError::Serialize {
            key: USER_KEY.to_string(),
            reason: e.to_string(),
        })?;

        let storage = &self.inner.storage;
        if let Err(err) = storage
            .set(TOKEN_KEY, token)
            .and_then(|_| storage.set(USER_KEY, &blob))
        {
            self.remove_persisted();
            return Err(err.into());
        }

        let session = Session {
            token: token.to_string(),
            user,
        };

        tracing::info!(role = %session.role(), "Session saved");

        self.publish(&SessionEvent::LoggedIn(session.clone()));

        Ok(session)
    }

    /// The record as it may be persisted, with an empty role replaced by the resolved one
    fn admissible_user(user: &UserRecord) -> Result<UserRecord, ValidationError> {
        let raw_role = user.role.as_deref().map(str::trim).unwrap_or_default();

        if raw_role.is_empty() {
            let mut user = user.clone();
            user.role = Some(resolve_role(&user).to_string());

            return Ok(user);
        }

        if Role::parse_known(raw_role).is_none() {
            tracing::warn!(role = %raw_role, "Refusing to save a session with an unknown role");

            return Err(ValidationError::InvalidValue {
                field: "role",
                reason: format!("rôle inconnu « {} »", raw_role),
            });
        }

        Ok(user.clone())
    }

    /// Remove the persisted session and notify subscribers
    pub fn clear(&self) {
        self.remove_persisted();

        tracing::info!("Session cleared");

        self.publish(&SessionEvent::LoggedOut);
    }

    /// Effective role of the logged in user, if any
    pub fn effective_role(&self) -> Option<Role> {
        self.load().map(|session| session.role())
    }

    /// Register a listener for login and logout events
    ///
    /// Listeners run synchronously, in subscription order, on the thread that changed
    /// the session. The listener stays registered for as long as the returned
    /// [`Subscription`] lives.
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);

        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn publish(&self, event: &SessionEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    fn remove_persisted(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.inner.storage.remove(key) {
                tracing::warn!("Failed to remove {} from storage: {}", key, err);
            }
        }
    }
}
