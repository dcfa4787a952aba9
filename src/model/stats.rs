use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A live counter reported by the stats endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountKey {
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

impl CountKey {
    /// Keys the backend may use for this counter, English first
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            CountKey::Clients => &["clients"],
            CountKey::Employees => &["employees", "employes", "users"],
            CountKey::Vehicles => &["vehicles", "vehicules"],
            CountKey::Repairs => &["repairs", "reparations"],
            CountKey::Invoices => &["invoices", "factures"],
            CountKey::Parts => &["parts", "pieces"],
            CountKey::Suppliers => &["suppliers", "fournisseurs"],
            CountKey::Services => &["services"],
            CountKey::Appointments => &["appointments", "rendezvous", "rendez_vous"],
            CountKey::Garages => &["garages"],
            CountKey::ServiceRequests => &["service_requests", "demandes", "demandes_service"],
            CountKey::Products => &["products", "produits"],
            CountKey::Orders => &["orders", "commandes"],
        }
    }
}

/// Entity counts used for menu badges and dashboard cards
///
/// Every counter is optional: a counter the backend omits, or sends as something
/// other than a non-negative integer, is simply unknown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountsSnapshot {
    counts: Map<String, Value>,
}

impl CountsSnapshot {
    /// Decode a stats response, bare or wrapped in a `data` envelope
    pub fn from_value(body: Value) -> CountsSnapshot {
        let counts = match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Object(inner)) => inner,
                Some(other) => {
                    map.insert("data".to_string(), other);
                    map
                }
                None => map,
            },
            _ => Map::new(),
        };

        CountsSnapshot { counts }
    }

    pub fn get(&self, key: CountKey) -> Option<u64> {
        key.aliases()
            .iter()
            .find_map(|alias| self.counts.get(*alias))
            .and_then(|value| match value {
                Value::Number(number) => number.as_u64(),
                Value::String(raw) => raw.trim().parse().ok(),
                _ => None,
            })
    }

    pub fn with(mut self, key: CountKey, count: u64) -> CountsSnapshot {
        self.counts
            .insert(key.aliases()[0].to_string(), Value::from(count));
        self
    }
}
