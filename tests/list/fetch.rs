use garage_portal::{
    client::{api::load_records, error::Error, list::EntityList, util::RequestScope},
    model::{entity::Resource, garage::ClientDto},
};
use garage_test_utils::prelude::*;
use serde_json::json;

use crate::util::mock::{Envelope, MockApi};

#[tokio::test]
// `{success: true, value: [...]}` renders one row per record
async fn value_envelope_renders_rows() {
    let api = MockApi::new()
        .with_records(Resource::Clients, vec![json!({ "id": 1 }), json!({ "id": 2 })])
        .with_envelope(Envelope::Value);
    let scope = RequestScope::new();
    let mut list = EntityList::<ClientDto>::default();

    let notification = list.apply_fetch(load_records(&api, &scope).await);

    assert!(notification.is_none());
    assert_eq!(list.filtered().len(), 2);
}

#[tokio::test]
// Every envelope shape yields the same records
async fn every_envelope_yields_same_rows() {
    for shape in [Envelope::Bare, Envelope::Data, Envelope::Value, Envelope::Named] {
        let api = MockApi::new()
            .with_records(Resource::Clients, envelope::records(3))
            .with_envelope(shape);

        let clients: Vec<ClientDto> = load_records(&api, &RequestScope::new()).await.unwrap();

        let ids: Vec<_> = clients.iter().map(|client| client.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)], "{:?}", shape);
    }
}

#[tokio::test]
// A failed reload keeps the rows already on screen and raises one error notification
async fn failed_reload_keeps_rows() {
    let api = MockApi::new().with_records(Resource::Clients, envelope::records(2));
    let scope = RequestScope::new();
    let mut list = EntityList::<ClientDto>::default();
    list.apply_fetch(load_records(&api, &scope).await);

    api.set_failing(true);
    let notification = list.apply_fetch(load_records(&api, &scope).await);

    assert_eq!(list.records().len(), 2);
    let (_, message) = notification.unwrap();
    assert_eq!(message, "Erreur interne du serveur");
}

#[tokio::test]
// A fetch issued from a torn-down view never reaches the backend or the list
async fn cancelled_scope_skips_fetch() {
    let api = MockApi::new().with_records(Resource::Clients, envelope::records(2));
    let scope = RequestScope::new();
    let mut list = EntityList::<ClientDto>::default();

    scope.cancel();
    let result = load_records::<ClientDto, _>(&api, &scope).await;

    assert_eq!(result, Err(Error::Cancelled));
    assert!(list.apply_fetch(result).is_none());
    assert!(!list.is_loaded());
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
// Search narrows the loaded rows without another request
async fn search_is_local() {
    let api = MockApi::new().with_records(
        Resource::Clients,
        vec![
            json!({ "id": 1, "nom": "Durand", "email": "durand@mail.fr" }),
            json!({ "id": 2, "nom": "Martin", "email": "martin@mail.fr" }),
        ],
    );
    let scope = RequestScope::new();
    let mut list = EntityList::<ClientDto>::default();
    list.apply_fetch(load_records(&api, &scope).await);

    list.set_query("MART");

    assert_eq!(list.filtered().len(), 1);
    assert_eq!(api.calls(), 1);
}
