//! The backend collaborator surface.
//!
//! The REST backend is an external dependency: the portal only needs "a list of records"
//! and "a save/delete call" from it. [`EntityApi`] and [`AuthApi`] are the ports views
//! depend on; `RestClient` is the browser implementation and tests substitute an
//! in-memory one. Every call takes the [`RequestScope`] of the view that issued it.

#[cfg(feature = "web")]
pub mod rest;

#[cfg(feature = "web")]
pub use rest::RestClient;

use serde_json::Value;

use crate::{
    client::{
        error::{ApiError, Error},
        store::{Session, SessionStore},
        util::{normalize_as, RequestScope},
    },
    model::{
        api::{AuthDto, LoginDto, RegisterDto},
        entity::{Entity, Resource},
        stats::CountsSnapshot,
        user::UserRecord,
    },
};

/// CRUD operations on every resource family, plus the stats counters
///
/// List responses are returned raw; callers run them through the normalizer.
#[allow(async_fn_in_trait)]
pub trait EntityApi {
    async fn list(&self, resource: Resource, scope: &RequestScope) -> Result<Value, Error>;

    async fn get(&self, resource: Resource, id: i64, scope: &RequestScope) -> Result<Value, Error>;

    async fn create(
        &self,
        resource: Resource,
        body: Value,
        scope: &RequestScope,
    ) -> Result<Value, Error>;

    async fn update(
        &self,
        resource: Resource,
        id: i64,
        body: Value,
        scope: &RequestScope,
    ) -> Result<Value, Error>;

    async fn delete(&self, resource: Resource, id: i64, scope: &RequestScope) -> Result<(), Error>;

    async fn stats(&self, scope: &RequestScope) -> Result<CountsSnapshot, Error>;
}

/// Authentication endpoints
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginDto, scope: &RequestScope) -> Result<AuthDto, Error>;

    async fn register(&self, form: &RegisterDto, scope: &RequestScope) -> Result<AuthDto, Error>;

    async fn current_user(&self, scope: &RequestScope) -> Result<UserRecord, Error>;
}

/// Fetch, normalize, and decode the records of an entity type
pub async fn load_records<T, A>(api: &A, scope: &RequestScope) -> Result<Vec<T>, Error>
where
    T: Entity,
    A: EntityApi,
{
    let raw = api.list(T::RESOURCE, scope).await?;

    Ok(normalize_as(raw))
}

/// Log in and persist the resulting session
///
/// The credentials are validated before any request is sent. Subscribers of the
/// session store are notified once the session is saved.
pub async fn sign_in<A: AuthApi>(
    api: &A,
    sessions: &SessionStore,
    credentials: &LoginDto,
    scope: &RequestScope,
) -> Result<Session, Error> {
    credentials.validate()?;

    let auth = api.login(credentials, scope).await?;

    persist(sessions, auth)
}

/// Register a new account and log it in
pub async fn sign_up<A: AuthApi>(
    api: &A,
    sessions: &SessionStore,
    form: &RegisterDto,
    scope: &RequestScope,
) -> Result<Session, Error> {
    form.validate()?;

    let auth = api.register(form, scope).await?;

    persist(sessions, auth)
}

/// Save the session, returning it as persisted
///
/// A user whose role the portal does not know is refused here, so the caller sees the
/// error and no session is opened.
fn persist(sessions: &SessionStore, auth: AuthDto) -> Result<Session, Error> {
    sessions.save(&auth.token, &auth.user)
}

/// Re-read the logged in user from the backend and persist it with the current token
///
/// Fails with an authorization error when there is no session to refresh.
pub async fn refresh_user<A: AuthApi>(
    api: &A,
    sessions: &SessionStore,
    scope: &RequestScope,
) -> Result<Session, Error> {
    let Some(current) = sessions.load() else {
        return Err(ApiError::Status {
            status: 401,
            message: None,
        }
        .into());
    };

    let user = api.current_user(scope).await?;

    persist(
        sessions,
        AuthDto {
            token: current.token,
            user,
        },
    )
}
