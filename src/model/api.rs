use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{
    user::{Role, UserRecord},
    validation::ValidationError,
};

/// The body returned by the backend when a request fails
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message, some endpoints call it `error`, others `message`
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

impl ErrorDto {
    /// Extract a displayable message from an arbitrary error body
    pub fn message_from(body: &Value) -> Option<String> {
        let dto: ErrorDto = serde_json::from_value(body.clone()).ok()?;

        dto.error
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}

/// Credentials submitted to the login endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Registration form submitted to the signup endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterDto {
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl LoginDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("mot de passe"));
        }

        Ok(())
    }
}

impl RegisterDto {
    /// Roles a visitor may pick when signing up
    pub const SELF_SERVICE_ROLES: [Role; 2] = [Role::Client, Role::Garage];

    pub const MIN_PASSWORD_LEN: usize = 6;

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("nom"));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidValue {
                field: "email",
                reason: "adresse invalide".to_string(),
            });
        }
        if self.password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(ValidationError::InvalidValue {
                field: "mot de passe",
                reason: format!("au moins {} caractères", Self::MIN_PASSWORD_LEN),
            });
        }
        if !Self::SELF_SERVICE_ROLES.contains(&Role::parse(&self.role)) {
            return Err(ValidationError::InvalidValue {
                field: "rôle",
                reason: format!("{:?} n'est pas proposé à l'inscription", self.role),
            });
        }

        Ok(())
    }
}

/// Token and user record returned by login and registration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthDto {
    pub token: String,
    pub user: UserRecord,
}

impl AuthDto {
    /// Decode an auth payload that may be bare or wrapped in a `data` envelope
    pub fn from_value(body: Value) -> Option<AuthDto> {
        match body {
            Value::Object(mut map) => {
                if let Some(inner @ Value::Object(_)) = map.remove("data") {
                    if let Some(dto) = Self::from_value(inner) {
                        return Some(dto);
                    }
                }

                serde_json::from_value(Value::Object(map)).ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    mod error_dto_message_tests {
        use serde_json::json;

        use crate::model::api::ErrorDto;

        #[test]
        /// Expect the `error` field to be used as the message
        fn test_message_from_error_field() {
            let body = json!({ "error": "Client introuvable" });

            assert_eq!(
                ErrorDto::message_from(&body),
                Some("Client introuvable".to_string())
            );
        }

        #[test]
        /// Expect the `message` field to be accepted as an alias
        fn test_message_from_message_field() {
            let body = json!({ "success": false, "message": "Email déjà utilisé" });

            assert_eq!(
                ErrorDto::message_from(&body),
                Some("Email déjà utilisé".to_string())
            );
        }

        #[test]
        /// Expect None for blank messages and non-object bodies
        fn test_message_from_blank_or_invalid() {
            assert_eq!(ErrorDto::message_from(&json!({ "error": "   " })), None);
            assert_eq!(ErrorDto::message_from(&json!("oops")), None);
            assert_eq!(ErrorDto::message_from(&json!({})), None);
        }
    }

    mod auth_dto_tests {
        use serde_json::json;

        use crate::model::api::AuthDto;

        #[test]
        /// Expect a bare `{token, user}` payload to decode
        fn test_auth_dto_bare() {
            let body = json!({ "token": "abc", "user": { "email": "a@b.fr", "role": "client" } });

            let dto = AuthDto::from_value(body).unwrap();

            assert_eq!(dto.token, "abc");
            assert_eq!(dto.user.role.as_deref(), Some("client"));
        }

        #[test]
        /// Expect a payload wrapped in a `data` envelope to decode
        fn test_auth_dto_data_envelope() {
            let body = json!({
                "success": true,
                "data": { "token": "xyz", "user": { "email": "g@b.fr", "role": "garage" } }
            });

            let dto = AuthDto::from_value(body).unwrap();

            assert_eq!(dto.token, "xyz");
        }

        #[test]
        /// Expect None when the token is missing
        fn test_auth_dto_missing_token() {
            let body = json!({ "user": { "role": "client" } });

            assert!(AuthDto::from_value(body).is_none());
        }
    }

    mod validate_tests {
        use crate::model::{
            api::{LoginDto, RegisterDto},
            validation::ValidationError,
        };

        fn register(role: &str, password: &str) -> RegisterDto {
            RegisterDto {
                name: "Garage du Centre".to_string(),
                email: "contact@centre.fr".to_string(),
                password: password.to_string(),
                role: role.to_string(),
            }
        }

        #[test]
        /// Expect blank login fields to be rejected
        fn test_login_missing_fields() {
            let login = LoginDto {
                email: "  ".to_string(),
                password: "secret".to_string(),
            };

            assert_eq!(login.validate(), Err(ValidationError::MissingField("email")));
        }

        #[test]
        /// Expect only client and garage to be offered at signup
        fn test_register_roles() {
            assert!(register("client", "secret1").validate().is_ok());
            assert!(register("Garage", "secret1").validate().is_ok());
            assert!(register("admin", "secret1").validate().is_err());
        }

        #[test]
        /// Expect short passwords to be rejected
        fn test_register_short_password() {
            assert!(matches!(
                register("client", "abc").validate(),
                Err(ValidationError::InvalidValue { field: "mot de passe", .. })
            ));
        }

        #[test]
        /// Expect every signup rejection to name a field the form shows inline
        fn test_register_errors_name_form_fields() {
            let mut blank_name = register("client", "secret1");
            blank_name.name = " ".to_string();
            let mut bad_email = register("client", "secret1");
            bad_email.email = "contact".to_string();

            let fields: Vec<_> = [
                blank_name,
                bad_email,
                register("client", "abc"),
                register("admin", "secret1"),
            ]
            .iter()
            .filter_map(|form| form.validate().err())
            .map(|err| err.field())
            .collect();

            assert_eq!(fields, vec!["nom", "email", "mot de passe", "rôle"]);
        }
    }
}
