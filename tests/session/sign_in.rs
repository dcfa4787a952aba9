use std::{cell::RefCell, rc::Rc};

use garage_portal::{
    client::{
        access::{dashboard_path, guard_path, GuardDecision},
        api::{refresh_user, sign_in, sign_up},
        error::{ApiError, Error, ValidationError},
        store::SessionEvent,
        util::RequestScope,
    },
    model::{
        api::{LoginDto, RegisterDto},
        user::Role,
    },
};
use serde_json::json;
use garage_test_utils::prelude::*;

use crate::util::{mock::MockApi, seeded_store};

fn credentials(email: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
// Logging in persists the session, notifies subscribers, and opens the role's dashboard
async fn login_lands_on_dashboard() -> Result<(), TestError> {
    let api = MockApi::new().with_account("admin@garage.test", TEST_PASSWORD, user::admin());
    let (store, _) = seeded_store(StorageSeed::new())?;
    let events = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&events);
    let _subscription = store.subscribe(move |event| recorded.borrow_mut().push(event.clone()));

    let session = sign_in(&api, &store, &credentials("admin@garage.test"), &RequestScope::new())
        .await
        .unwrap();

    let dashboard = dashboard_path(&session.role());
    assert_eq!(dashboard, "/dashboard/admin");
    assert_eq!(guard_path(&dashboard, store.load().as_ref()), GuardDecision::Allow);
    assert!(matches!(events.borrow().as_slice(), [SessionEvent::LoggedIn(_)]));

    Ok(())
}

#[tokio::test]
// Wrong credentials surface the server's message and leave no session behind
async fn rejected_login_keeps_logged_out() -> Result<(), TestError> {
    let api = MockApi::new().with_account("client@garage.test", TEST_PASSWORD, user::client());
    let (store, storage) = seeded_store(StorageSeed::new())?;

    let result = sign_in(
        &api,
        &store,
        &LoginDto {
            email: "client@garage.test".to_string(),
            password: "mauvais".to_string(),
        },
        &RequestScope::new(),
    )
    .await;

    let message = result.unwrap_err().user_message();
    assert_eq!(message.as_deref(), Some("Email ou mot de passe incorrect"));
    assert!(storage.is_empty());

    Ok(())
}

#[tokio::test]
// Blank credentials never reach the backend
async fn blank_login_is_not_sent() -> Result<(), TestError> {
    let api = MockApi::new();
    let (store, _) = seeded_store(StorageSeed::new())?;

    let result = sign_in(&api, &store, &credentials(" "), &RequestScope::new()).await;

    assert!(matches!(result, Err(Error::ValidationError(_))));
    assert_eq!(api.calls(), 0);

    Ok(())
}

#[tokio::test]
// Signing up as a garage logs the new account in with the garage UI
async fn signup_as_garage() -> Result<(), TestError> {
    let api = MockApi::new();
    let (store, _) = seeded_store(StorageSeed::new())?;
    let form = RegisterDto {
        name: "Garage du Port".to_string(),
        email: "port@garage.test".to_string(),
        password: TEST_PASSWORD.to_string(),
        role: "garage".to_string(),
    };

    let session = sign_up(&api, &store, &form, &RequestScope::new()).await.unwrap();

    assert_eq!(dashboard_path(&session.role()), "/dashboard/garage");
    assert_eq!(store.load().map(|session| session.user.email), Some(Some(form.email.clone())));

    // The same email cannot register twice
    let duplicate = sign_up(&api, &store, &form, &RequestScope::new()).await;
    assert!(matches!(
        duplicate,
        Err(Error::ApiError(ApiError::Status { status: 409, .. }))
    ));

    Ok(())
}

#[tokio::test]
// Refreshing re-reads the user while keeping the current token
async fn refresh_keeps_token() -> Result<(), TestError> {
    let api = MockApi::new().with_account("client@garage.test", TEST_PASSWORD, user::client());
    let (store, _) = seeded_store(StorageSeed::new())?;
    let scope = RequestScope::new();

    let session = sign_in(&api, &store, &credentials("client@garage.test"), &scope)
        .await
        .unwrap();
    let refreshed = refresh_user(&api, &store, &scope).await.unwrap();

    assert_eq!(refreshed.token, session.token);
    assert_eq!(refreshed.user, session.user);

    store.clear();
    let result = refresh_user(&api, &store, &scope).await;
    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::Status { status: 401, .. }))
    ));

    Ok(())
}

#[tokio::test]
// A backend user without a role logs in with its resolved role and survives a reload
async fn roleless_login_survives_reload() -> Result<(), TestError> {
    let api = MockApi::new()
        .with_account("port@garage.test", TEST_PASSWORD, json!({ "id": 3, "garage_id": TEST_GARAGE_ID }))
        .with_account("anonyme@garage.test", TEST_PASSWORD, json!({ "id": 4, "role": "" }));
    let (store, _) = seeded_store(StorageSeed::new())?;

    let session = sign_in(&api, &store, &credentials("port@garage.test"), &RequestScope::new())
        .await
        .unwrap();

    assert_eq!(session.role(), Role::Garage);
    assert_eq!(store.load().map(|session| session.role()), Some(Role::Garage));

    let session = sign_in(&api, &store, &credentials("anonyme@garage.test"), &RequestScope::new())
        .await
        .unwrap();

    assert_eq!(session.role(), Role::Client);
    assert_eq!(store.load(), Some(session));

    Ok(())
}

#[tokio::test]
// A role the portal does not know is refused and no session is opened
async fn unknown_role_login_is_refused() -> Result<(), TestError> {
    let api = MockApi::new().with_account(
        "root@garage.test",
        TEST_PASSWORD,
        user::with_role("superadmin"),
    );
    let (store, storage) = seeded_store(StorageSeed::new())?;
    let events = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&events);
    let _subscription = store.subscribe(move |event| recorded.borrow_mut().push(event.clone()));

    let result = sign_in(&api, &store, &credentials("root@garage.test"), &RequestScope::new()).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InvalidValue { field: "role", .. }))
    ));
    assert!(store.load().is_none());
    assert!(storage.is_empty());
    assert!(events.borrow().is_empty());

    Ok(())
}

#[tokio::test]
// A login payload whose user id is a numeric string decodes and persists
async fn textual_user_id_login() -> Result<(), TestError> {
    let api = MockApi::new().with_account(
        "admin@garage.test",
        TEST_PASSWORD,
        json!({ "id": "5", "name": "A", "nom": "A", "role": "admin" }),
    );
    let (store, _) = seeded_store(StorageSeed::new())?;

    let session = sign_in(&api, &store, &credentials("admin@garage.test"), &RequestScope::new())
        .await
        .unwrap();

    assert_eq!(session.user.id, Some(5));
    assert_eq!(store.load().and_then(|session| session.user.id), Some(5));

    Ok(())
}
