//! Stock and catalogue records: parts, suppliers, and the services a garage offers.

use serde::{Deserialize, Serialize};

use crate::model::{
    entity::{
        lenient_f64, lenient_i64, lenient_string, money_cell, number_cell, present,
        require_positive, require_text, text_cell, Entity, Resource,
    },
    validation::ValidationError,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reference: Option<String>,
    #[serde(default, alias = "prix", deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, alias = "quantite", deserialize_with = "lenient_i64")]
    pub stock: Option<i64>,
    #[serde(default, alias = "fournisseur")]
    pub supplier: Option<String>,
}

impl PartDto {
    /// Parts at or under this quantity are flagged as low stock
    pub const LOW_STOCK_THRESHOLD: i64 = 5;

    pub fn is_low_stock(&self) -> bool {
        self.stock
            .is_some_and(|stock| stock <= Self::LOW_STOCK_THRESHOLD)
    }
}

impl Entity for PartDto {
    const RESOURCE: Resource = Resource::Parts;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.name, &self.reference, &self.supplier])
    }

    fn headers() -> &'static [&'static str] {
        &["Nom", "Référence", "Prix", "Stock", "Fournisseur"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.name),
            text_cell(&self.reference),
            money_cell(self.price),
            number_cell(self.stock),
            text_cell(&self.supplier),
        ]
    }

    fn status(&self) -> Option<&str> {
        self.is_low_stock().then_some("en attente de réassort")
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.name)?;
        require_positive("prix", self.price)?;
        match self.stock {
            Some(stock) if stock < 0 => Err(ValidationError::InvalidValue {
                field: "quantite",
                reason: "ne peut pas être négative".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default, alias = "telephone", deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Entity for SupplierDto {
    const RESOURCE: Resource = Resource::Suppliers;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.name, &self.contact, &self.email])
    }

    fn headers() -> &'static [&'static str] {
        &["Nom", "Contact", "Téléphone", "Email"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.name),
            text_cell(&self.contact),
            text_cell(&self.phone),
            text_cell(&self.email),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "prix", deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, alias = "duree", deserialize_with = "lenient_i64")]
    pub duration_minutes: Option<i64>,
}

impl Entity for ServiceDto {
    const RESOURCE: Resource = Resource::Services;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.name, &self.description])
    }

    fn headers() -> &'static [&'static str] {
        &["Service", "Description", "Prix", "Durée"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.name),
            text_cell(&self.description),
            money_cell(self.price),
            self.duration_minutes
                .map(|minutes| format!("{} min", minutes))
                .unwrap_or_default(),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.name)?;
        require_positive("prix", self.price)
    }
}
