//! The contract every list-managed record implements, plus the lenient field decoders
//! the record types share.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::{stats::CountKey, validation::ValidationError};

/// A REST resource family exposed by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Clients,
    Employees,
    Vehicles,
    Repairs,
    Invoices,
    Parts,
    Suppliers,
    Services,
    Appointments,
    Garages,
    ServiceRequests,
    Products,
    Orders,
}

impl Resource {
    /// Path of the resource relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Clients => "clients",
            Resource::Employees => "employes",
            Resource::Vehicles => "vehicules",
            Resource::Repairs => "reparations",
            Resource::Invoices => "factures",
            Resource::Parts => "pieces",
            Resource::Suppliers => "fournisseurs",
            Resource::Services => "services",
            Resource::Appointments => "rendezvous",
            Resource::Garages => "garages",
            Resource::ServiceRequests => "demandes-service",
            Resource::Products => "boutique/produits",
            Resource::Orders => "boutique/commandes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resource::Clients => "Clients",
            Resource::Employees => "Employés",
            Resource::Vehicles => "Véhicules",
            Resource::Repairs => "Réparations",
            Resource::Invoices => "Factures",
            Resource::Parts => "Pièces",
            Resource::Suppliers => "Fournisseurs",
            Resource::Services => "Services",
            Resource::Appointments => "Rendez-vous",
            Resource::Garages => "Garages",
            Resource::ServiceRequests => "Demandes de service",
            Resource::Products => "Produits",
            Resource::Orders => "Commandes",
        }
    }

    /// The live counter reported for this resource by the stats endpoint
    pub fn count_key(&self) -> CountKey {
        match self {
            Resource::Clients => CountKey::Clients,
            Resource::Employees => CountKey::Employees,
            Resource::Vehicles => CountKey::Vehicles,
            Resource::Repairs => CountKey::Repairs,
            Resource::Invoices => CountKey::Invoices,
            Resource::Parts => CountKey::Parts,
            Resource::Suppliers => CountKey::Suppliers,
            Resource::Services => CountKey::Services,
            Resource::Appointments => CountKey::Appointments,
            Resource::Garages => CountKey::Garages,
            Resource::ServiceRequests => CountKey::ServiceRequests,
            Resource::Products => CountKey::Products,
            Resource::Orders => CountKey::Orders,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A domain record managed by a list page
pub trait Entity: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    const RESOURCE: Resource;

    fn id(&self) -> Option<i64>;

    /// Text fields the local search matches against
    fn search_fields(&self) -> Vec<&str>;

    /// Column headers of the list table
    fn headers() -> &'static [&'static str];

    /// Display cells of the list table, one per header
    fn cells(&self) -> Vec<String>;

    /// Raw status string, for records that carry one
    fn status(&self) -> Option<&str> {
        None
    }

    /// Client-side validation run before any create or update call
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Display tone derived from the free-form status strings the backend uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl StatusTone {
    pub fn from_status(status: &str) -> StatusTone {
        let status = status.trim().to_lowercase();

        // "impayée" contains "pay", failures are matched first
        if ["annul", "refus", "impay", "retard", "cancel", "rejet"]
            .iter()
            .any(|needle| status.contains(needle))
        {
            StatusTone::Error
        } else if ["termin", "pay", "livr", "confirm", "valid", "done", "complet"]
            .iter()
            .any(|needle| status.contains(needle))
        {
            StatusTone::Success
        } else if ["cours", "progress", "expédi", "expedi", "diagnostic"]
            .iter()
            .any(|needle| status.contains(needle))
        {
            StatusTone::Info
        } else if ["attente", "pending", "planif", "nouveau", "nouvelle"]
            .iter()
            .any(|needle| status.contains(needle))
        {
            StatusTone::Warning
        } else {
            StatusTone::Neutral
        }
    }

    /// daisyUI badge class for the tone
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "badge badge-ghost",
            StatusTone::Info => "badge badge-info",
            StatusTone::Success => "badge badge-success",
            StatusTone::Warning => "badge badge-warning",
            StatusTone::Error => "badge badge-error",
        }
    }
}

/// Require a non-blank text field
pub fn require_text(field: &'static str, value: &Option<String>) -> Result<(), ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Require a strictly positive amount when one is given
pub fn require_positive(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(amount) if amount <= 0.0 || !amount.is_finite() => Err(ValidationError::InvalidValue {
            field,
            reason: "doit être strictement positif".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Collect the present text fields of a record for searching
pub fn present<'a>(fields: &[&'a Option<String>]) -> Vec<&'a str> {
    fields.iter().filter_map(|field| field.as_deref()).collect()
}

pub fn text_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn money_cell(value: Option<f64>) -> String {
    value
        .map(|amount| format!("{:.2} €", amount))
        .unwrap_or_default()
}

pub fn number_cell(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Format a backend date (RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`) as `DD/MM/YYYY`
///
/// Values that do not parse are shown as received.
pub fn date_cell(value: &Option<String>) -> String {
    let Some(raw) = value.as_deref() else {
        return String::new();
    };

    parse_date(raw)
        .map(|datetime| datetime.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.naive_utc());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Accept a number, a numeric string, or nothing
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(raw)) => raw.trim().replace(',', ".").parse().ok(),
        _ => None,
    })
}

/// Accept an integer, an integer string, or nothing
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(raw)) => raw.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a string or a number rendered as a string
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => Some(raw),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
