use garage_portal::{
    client::{
        error::{Error, ValidationError},
        list::{submit, EntityList, Mutation},
        store::NotificationLevel,
        util::RequestScope,
    },
    model::{
        entity::Resource,
        garage::{ClientDto, ServiceRequestDto},
    },
};
use garage_test_utils::prelude::*;
use serde_json::json;

use crate::util::mock::MockApi;

#[tokio::test]
// A record missing a required field is rejected before any request is sent
async fn validation_blocks_network() {
    let api = MockApi::new();
    let incomplete = ClientDto {
        email: Some("sans-nom@mail.fr".to_string()),
        ..Default::default()
    };

    let result = submit(&api, &RequestScope::new(), &Mutation::Create(incomplete)).await;

    assert_eq!(
        result,
        Err(Error::ValidationError(ValidationError::MissingField("nom")))
    );
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
// A successful create reloads the list with the new record
async fn create_reloads_list() {
    let api = MockApi::new().with_records(Resource::Clients, envelope::records(1));
    let client = ClientDto {
        last_name: Some("Petit".to_string()),
        email: Some("petit@mail.fr".to_string()),
        ..Default::default()
    };

    let outcome = submit(&api, &RequestScope::new(), &Mutation::Create(client))
        .await
        .unwrap();
    let records = outcome.reloaded.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].last_name.as_deref(), Some("Petit"));
    // create + reload
    assert_eq!(api.calls(), 2);
}

#[tokio::test]
// Update and delete go through the same reload
async fn update_then_delete() {
    let api = MockApi::new().with_records(
        Resource::Clients,
        vec![json!({ "id": 1, "nom": "Durand", "email": "durand@mail.fr" })],
    );
    let scope = RequestScope::new();
    let mut list = EntityList::<ClientDto>::default();

    let renamed = Mutation::Update(
        1,
        ClientDto {
            last_name: Some("Durand-Lefort".to_string()),
            email: Some("durand@mail.fr".to_string()),
            ..Default::default()
        },
    );
    list.apply_mutation(&renamed, submit(&api, &scope, &renamed).await);
    assert_eq!(list.records()[0].last_name.as_deref(), Some("Durand-Lefort"));

    let delete = Mutation::<ClientDto>::Delete(1);
    list.apply_mutation(&delete, submit(&api, &scope, &delete).await);
    assert!(list.records().is_empty());
    assert!(api.stored(Resource::Clients).is_empty());
}

#[tokio::test]
// A failed delete leaves both the backend and the list untouched
async fn failed_delete_keeps_rows() {
    let api = MockApi::new().with_records(Resource::Clients, envelope::records(2));
    let scope = RequestScope::new();
    let mut list = EntityList::<ClientDto>::default();
    list.apply_fetch(garage_portal::client::api::load_records(&api, &scope).await);

    assert!(list.begin_mutation());
    let delete = Mutation::<ClientDto>::Delete(99);
    let shown = list.apply_mutation(&delete, submit(&api, &scope, &delete).await);
    list.end_mutation();

    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, NotificationLevel::Error);
    assert_eq!(list.records().len(), 2);
    assert_eq!(api.stored(Resource::Clients).len(), 2);
}

#[tokio::test]
// A delete the backend accepted is reported as done even when the reload fails
async fn accepted_delete_with_failed_reload() {
    let api = MockApi::new().with_records(Resource::Clients, envelope::records(2));
    let scope = RequestScope::new();
    let mut list = EntityList::<ClientDto>::default();
    list.apply_fetch(garage_portal::client::api::load_records(&api, &scope).await);
    api.set_failing_lists(true);

    let delete = Mutation::<ClientDto>::Delete(1);
    let result = submit(&api, &scope, &delete).await;

    assert!(matches!(&result, Ok(outcome) if outcome.reloaded.is_err()));

    let shown = list.apply_mutation(&delete, result);
    let levels: Vec<_> = shown.iter().map(|(level, _)| *level).collect();

    assert_eq!(levels, vec![NotificationLevel::Success, NotificationLevel::Error]);
    assert_eq!(shown[0].1, delete.success_message());
    // the stale rows stay on screen until the next successful fetch
    assert_eq!(list.records().len(), 2);
    assert_eq!(api.stored(Resource::Clients).len(), 1);
}

#[tokio::test]
// A service request is created once even though the sender may not read the list back
async fn service_request_sent_without_readable_list() {
    let api = MockApi::new();
    api.set_failing_lists(true);
    let request = ServiceRequestDto {
        service_name: Some("Vidange".to_string()),
        description: Some("Bruit au freinage".to_string()),
        ..Default::default()
    };

    let outcome = submit(&api, &RequestScope::new(), &Mutation::Create(request))
        .await
        .unwrap();

    assert!(outcome.reloaded.is_err());
    assert_eq!(api.stored(Resource::ServiceRequests).len(), 1);
}
