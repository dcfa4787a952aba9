use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use garage_portal::{
    client::{
        api::{AuthApi, EntityApi},
        error::{ApiError, Error},
        util::RequestScope,
    },
    model::{
        api::{AuthDto, LoginDto, RegisterDto},
        entity::Resource,
        stats::CountsSnapshot,
        user::UserRecord,
    },
};
use garage_test_utils::fixtures::envelope;
use serde_json::{json, Value};

/// Envelope shape the mock wraps list responses in
#[derive(Clone, Copy, Debug, Default)]
pub enum Envelope {
    #[default]
    Bare,
    Data,
    Value,
    Named,
}

/// In-memory backend implementing both API ports
#[derive(Default)]
pub struct MockApi {
    records: RefCell<HashMap<Resource, Vec<Value>>>,
    accounts: RefCell<Vec<(String, String, Value)>>,
    current_user: RefCell<Option<Value>>,
    envelope: Cell<Envelope>,
    failing: Cell<bool>,
    failing_lists: Cell<bool>,
    calls: Cell<usize>,
    next_id: Cell<i64>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(100),
            ..Default::default()
        }
    }

    pub fn with_records(self, resource: Resource, records: Vec<Value>) -> Self {
        self.records.borrow_mut().insert(resource, records);
        self
    }

    pub fn with_account(self, email: &str, password: &str, user: Value) -> Self {
        self.accounts
            .borrow_mut()
            .push((email.to_string(), password.to_string(), user));
        self
    }

    pub fn with_envelope(self, envelope: Envelope) -> Self {
        self.envelope.set(envelope);
        self
    }

    /// Make every following call fail with a server error
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Make only list calls fail, mutations keep going through
    pub fn set_failing_lists(&self, failing: bool) {
        self.failing_lists.set(failing);
    }

    /// Number of calls that reached the backend
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn stored(&self, resource: Resource) -> Vec<Value> {
        self.records
            .borrow()
            .get(&resource)
            .cloned()
            .unwrap_or_default()
    }

    fn hit(&self) -> Result<(), Error> {
        self.calls.set(self.calls.get() + 1);

        if self.failing.get() {
            return Err(ApiError::Status {
                status: 500,
                message: Some("Erreur interne du serveur".to_string()),
            }
            .into());
        }

        Ok(())
    }

    fn wrap(&self, resource: Resource, records: Vec<Value>) -> Value {
        match self.envelope.get() {
            Envelope::Bare => envelope::bare(records),
            Envelope::Data => envelope::data(records),
            Envelope::Value => envelope::value(records),
            Envelope::Named => envelope::named(resource.path(), records),
        }
    }

    fn not_found(resource: Resource, id: i64) -> Error {
        ApiError::Status {
            status: 404,
            message: Some(format!("{} {} introuvable", resource, id)),
        }
        .into()
    }

    fn record_id(record: &Value) -> Option<i64> {
        record.get("id").and_then(Value::as_i64)
    }

    fn auth(&self, user: Value) -> Result<AuthDto, Error> {
        let token = format!("token-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        *self.current_user.borrow_mut() = Some(user.clone());

        AuthDto::from_value(json!({ "token": token, "user": user }))
            .ok_or_else(|| ApiError::Decode("invalid auth payload".to_string()).into())
    }
}

impl EntityApi for MockApi {
    async fn list(&self, resource: Resource, scope: &RequestScope) -> Result<Value, Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                if self.failing_lists.get() {
                    return Err(ApiError::Status {
                        status: 403,
                        message: Some("Accès refusé".to_string()),
                    }
                    .into());
                }

                Ok::<_, Error>(self.wrap(resource, self.stored(resource)))
            })
            .await
    }

    async fn get(&self, resource: Resource, id: i64, scope: &RequestScope) -> Result<Value, Error> {
        scope
            .run_fallible(async {
                self.hit()?;
                self.stored(resource)
                    .into_iter()
                    .find(|record| Self::record_id(record) == Some(id))
                    .ok_or_else(|| Self::not_found(resource, id))
            })
            .await
    }

    async fn create(
        &self,
        resource: Resource,
        mut body: Value,
        scope: &RequestScope,
    ) -> Result<Value, Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                let id = self.next_id.get();
                self.next_id.set(id + 1);
                body["id"] = json!(id);

                self.records
                    .borrow_mut()
                    .entry(resource)
                    .or_default()
                    .push(body.clone());

                Ok::<_, Error>(body)
            })
            .await
    }

    async fn update(
        &self,
        resource: Resource,
        id: i64,
        mut body: Value,
        scope: &RequestScope,
    ) -> Result<Value, Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                let mut records = self.records.borrow_mut();
                let record = records
                    .get_mut(&resource)
                    .and_then(|records| {
                        records
                            .iter_mut()
                            .find(|record| Self::record_id(record) == Some(id))
                    })
                    .ok_or_else(|| Self::not_found(resource, id))?;

                body["id"] = json!(id);
                *record = body.clone();

                Ok::<_, Error>(body)
            })
            .await
    }

    async fn delete(&self, resource: Resource, id: i64, scope: &RequestScope) -> Result<(), Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                let mut records = self.records.borrow_mut();
                let list = records.entry(resource).or_default();
                let before = list.len();
                list.retain(|record| Self::record_id(record) != Some(id));

                if list.len() == before {
                    return Err(Self::not_found(resource, id));
                }

                Ok(())
            })
            .await
    }

    async fn stats(&self, scope: &RequestScope) -> Result<CountsSnapshot, Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                let snapshot = self.records.borrow().iter().fold(
                    CountsSnapshot::default(),
                    |snapshot, (resource, records)| {
                        snapshot.with(resource.count_key(), records.len() as u64)
                    },
                );

                Ok::<_, Error>(snapshot)
            })
            .await
    }
}

impl AuthApi for MockApi {
    async fn login(&self, credentials: &LoginDto, scope: &RequestScope) -> Result<AuthDto, Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                let user = self
                    .accounts
                    .borrow()
                    .iter()
                    .find(|(email, password, _)| {
                        *email == credentials.email && *password == credentials.password
                    })
                    .map(|(_, _, user)| user.clone());

                match user {
                    Some(user) => self.auth(user),
                    None => Err(ApiError::Status {
                        status: 401,
                        message: Some("Email ou mot de passe incorrect".to_string()),
                    }
                    .into()),
                }
            })
            .await
    }

    async fn register(&self, form: &RegisterDto, scope: &RequestScope) -> Result<AuthDto, Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                if self
                    .accounts
                    .borrow()
                    .iter()
                    .any(|(email, _, _)| *email == form.email)
                {
                    return Err(ApiError::Status {
                        status: 409,
                        message: Some("Email déjà utilisé".to_string()),
                    }
                    .into());
                }

                let user = json!({ "id": self.next_id.get(), "nom": form.name, "email": form.email, "role": form.role });
                self.accounts
                    .borrow_mut()
                    .push((form.email.clone(), form.password.clone(), user.clone()));

                self.auth(user)
            })
            .await
    }

    async fn current_user(&self, scope: &RequestScope) -> Result<UserRecord, Error> {
        scope
            .run_fallible(async {
                self.hit()?;

                let user = self.current_user.borrow().clone().ok_or(ApiError::Status {
                    status: 401,
                    message: None,
                })?;

                serde_json::from_value(user).map_err(|e| Error::from(ApiError::Decode(e.to_string())))
            })
            .await
    }
}
