use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::entity::{lenient_i64, lenient_string};

/// A portal role as used for navigation and route access decisions
///
/// The four known roles are the only ones a persisted session may carry. `Other`
/// exists so that role resolution stays total when a record comes straight from the
/// backend with a role the portal does not know about.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Mecanicien,
    Garage,
    Client,
    Other(String),
}

impl Role {
    /// Every role a session may legitimately hold
    pub const KNOWN: [Role; 4] = [Role::Admin, Role::Mecanicien, Role::Garage, Role::Client];

    /// Parse a raw role string, case-insensitive and whitespace-trimmed
    pub fn parse(raw: &str) -> Role {
        let normalized = raw.trim().to_lowercase();

        match normalized.as_str() {
            "admin" => Role::Admin,
            "mecanicien" => Role::Mecanicien,
            "garage" => Role::Garage,
            "client" => Role::Client,
            _ => Role::Other(normalized),
        }
    }

    /// Parse a raw role string, returning None unless it is one of the known roles
    pub fn parse_known(raw: &str) -> Option<Role> {
        match Self::parse(raw) {
            Role::Other(_) => None,
            role => Some(role),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Mecanicien => "mecanicien",
            Role::Garage => "garage",
            Role::Client => "client",
            Role::Other(raw) => raw.as_str(),
        }
    }

    /// Human readable label shown in the navbar
    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Administrateur",
            Role::Mecanicien => "Mécanicien",
            Role::Garage => "Garage partenaire",
            Role::Client => "Client",
            Role::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// The user record returned by the auth endpoints and persisted with the session
///
/// Only `role` and `garage_id` drive portal behavior. Unknown fields, including the
/// French `nom`, are kept in `extra` so the record survives a save/load cycle unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(
        default,
        deserialize_with = "lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The raw role string as stored by the backend
    #[serde(default)]
    pub role: Option<String>,
    /// Garage affiliation, the backend sends it either as a number or a string
    #[serde(
        default,
        deserialize_with = "deserialize_affiliation",
        skip_serializing_if = "Option::is_none"
    )]
    pub garage_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// The user's display name, falling back to `nom` and then their email
    pub fn display_name(&self) -> &str {
        let nom = self.extra.get("nom").and_then(Value::as_str);

        self.name
            .as_deref()
            .into_iter()
            .chain(nom)
            .find(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Utilisateur")
    }

    /// Whether the record carries a non-empty garage affiliation
    pub fn has_garage(&self) -> bool {
        self.garage_id.is_some()
    }
}

fn deserialize_affiliation<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let affiliation = match value {
        Some(Value::String(raw)) => Some(raw.trim().to_string()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    };

    Ok(affiliation.filter(|id| !id.is_empty()))
}
