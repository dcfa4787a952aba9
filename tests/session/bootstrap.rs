use garage_portal::{
    client::storage::KeyValueStorage,
    model::user::Role,
};
use garage_test_utils::prelude::*;
use serde_json::json;

use crate::util::seeded_store;

#[test]
// A persisted session survives a reload with every user field intact
fn persisted_session_is_restored() -> Result<(), TestError> {
    let (store, _) = seeded_store(StorageSeed::new().with_session(user::garage()).touched())?;

    let session = store.load().ok_or_else(|| TestError::Fixture("no session".into()))?;

    assert_eq!(session.token, TEST_TOKEN);
    assert_eq!(session.role(), Role::Garage);
    assert!(session.user.extra.contains_key("updated_at"));

    Ok(())
}

#[test]
// Unknown roles never produce a session and leave storage clean
fn unknown_role_self_heals() -> Result<(), TestError> {
    let (store, storage) = seeded_store(
        StorageSeed::new()
            .with_session(user::with_role("superviseur"))
            .with_supplier_mode(true),
    )?;

    assert!(store.load().is_none());
    assert!(store.load().is_none());
    assert_eq!(storage.get("token").ok().flatten(), None);
    assert_eq!(storage.get("supplierMode").ok().flatten(), Some("1".to_string()));

    Ok(())
}

#[test]
// A user record stored with a numeric garage id still resolves to the garage UI
fn numeric_garage_id_is_accepted() -> Result<(), TestError> {
    let (store, _) = seeded_store(
        StorageSeed::new().with_session(json!({ "role": "mecanicien", "garage_id": TEST_GARAGE_ID })),
    )?;

    assert_eq!(store.effective_role(), Some(Role::Garage));

    Ok(())
}

#[test]
// The seed builder refuses user fixtures that are not objects
fn seed_rejects_non_object_user() {
    let result = StorageSeed::new().with_session(json!(["admin"])).build();

    assert!(matches!(result, Err(TestError::Fixture(_))));
}

#[test]
// A user stored with a textual id and both name spellings is still a valid session
fn textual_user_id_is_accepted() -> Result<(), TestError> {
    let (store, storage) = seeded_store(StorageSeed::new().with_session(
        json!({ "id": "5", "name": "Durand", "nom": "Durand", "role": "admin" }),
    ))?;

    let session = store.load().ok_or_else(|| TestError::Fixture("no session".into()))?;

    assert_eq!(session.user.id, Some(5));
    assert_eq!(session.role(), Role::Admin);
    assert!(!storage.is_empty());

    Ok(())
}
