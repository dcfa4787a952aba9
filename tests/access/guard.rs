use garage_portal::{
    client::access::{guard, guard_path, GuardDecision},
    model::user::Role,
};
use garage_test_utils::prelude::*;

use crate::util::seeded_store;

#[test]
// An admin opening an admin-only page is let through
fn admin_allowed_on_admin_route() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new().with_session(user::admin()))?;
    let session = store.load();

    let decision = guard("/clients", Some(&[Role::Admin][..]), session.as_ref());

    assert_eq!(decision, GuardDecision::Allow);
    assert_eq!(guard_path("/clients", session.as_ref()), GuardDecision::Allow);

    Ok(())
}

#[test]
// An admin opening a garage-only page lands on the admin dashboard
fn admin_redirected_from_garage_route() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new().with_session(user::admin()))?;
    let session = store.load();

    assert_eq!(
        guard_path("/garage-demandes", session.as_ref()),
        GuardDecision::RedirectTo("/dashboard/admin".to_string())
    );

    Ok(())
}

#[test]
// A mechanic affiliated with a garage is treated as a garage everywhere
fn affiliated_mecanicien_gets_garage_pages() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new().with_session(user::affiliated_mecanicien()))?;
    let session = store.load();

    assert_eq!(guard_path("/garage-demandes", session.as_ref()), GuardDecision::Allow);
    assert_eq!(
        guard_path("/rendez-vous", session.as_ref()),
        GuardDecision::RedirectTo("/dashboard/garage".to_string())
    );

    Ok(())
}

#[test]
// Without a stored token, guarded pages go to login while public pages stay reachable
fn visitor_without_token() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new())?;
    let session = store.load();

    assert!(session.is_none());
    assert_eq!(guard_path("/", None), GuardDecision::Allow);
    assert_eq!(guard_path("/boutique-client", None), GuardDecision::Allow);
    assert_eq!(
        guard_path("/profil", None),
        GuardDecision::RedirectTo("/login".to_string())
    );
    assert_eq!(
        guard_path("/dashboard/client", None),
        GuardDecision::RedirectTo("/login".to_string())
    );

    Ok(())
}

#[test]
// A corrupted stored user behaves exactly like a logged out visitor
fn corrupted_session_redirects_to_login() -> Result<(), TestError> {
    let (store, storage) = seeded_store(
        StorageSeed::new()
            .with_token(TEST_TOKEN)
            .with_raw("user", "{not json"),
    )?;

    let session = store.load();

    assert_eq!(
        guard_path("/factures", session.as_ref()),
        GuardDecision::RedirectTo("/login".to_string())
    );
    assert!(storage.is_empty());

    Ok(())
}

#[test]
// A client cannot reach the admin dashboard by changing the case of the path
fn dashboard_segment_case_is_not_a_bypass() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new().with_session(user::client()))?;
    let session = store.load();

    for path in ["/dashboard/Admin", "/dashboard/ADMIN", "/dashboard/admin/"] {
        assert_eq!(
            guard_path(path, session.as_ref()),
            GuardDecision::RedirectTo("/dashboard/client".to_string()),
            "{}",
            path
        );
    }
    assert_eq!(guard_path("/dashboard/Client", session.as_ref()), GuardDecision::Allow);

    Ok(())
}

#[test]
// A visitor opening any dashboard path, known role or not, is sent to login
fn dashboard_requires_login() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new())?;
    let session = store.load();

    for path in ["/dashboard/Admin", "/dashboard/xyz", "/dashboard/garage"] {
        assert_eq!(
            guard_path(path, session.as_ref()),
            GuardDecision::RedirectTo("/login".to_string()),
            "{}",
            path
        );
    }

    Ok(())
}

#[test]
// An unknown dashboard segment sends a logged in user to their own dashboard
fn unknown_dashboard_segment_redirects_home() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new().with_session(user::affiliated_mecanicien()))?;
    let session = store.load();

    assert_eq!(
        guard_path("/dashboard/xyz", session.as_ref()),
        GuardDecision::RedirectTo("/dashboard/garage".to_string())
    );

    Ok(())
}
