//! Boutique records: catalogue products and customer orders.

use serde::{Deserialize, Serialize};

use crate::model::{
    entity::{
        date_cell, lenient_f64, lenient_i64, money_cell, number_cell, present, require_positive,
        require_text, text_cell, Entity, Resource,
    },
    validation::ValidationError,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "categorie")]
    pub category: Option<String>,
    #[serde(default, alias = "prix", deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductDto {
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |stock| stock > 0)
    }
}

impl Entity for ProductDto {
    const RESOURCE: Resource = Resource::Products;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.name, &self.description, &self.category])
    }

    fn headers() -> &'static [&'static str] {
        &["Produit", "Catégorie", "Prix", "Stock"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.name),
            text_cell(&self.category),
            money_cell(self.price),
            number_cell(self.stock),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.name)?;
        require_positive("prix", self.price)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "client_nom")]
    pub client_name: Option<String>,
    #[serde(default, alias = "montant_total", deserialize_with = "lenient_f64")]
    pub total: Option<f64>,
    #[serde(default, alias = "statut")]
    pub status: Option<String>,
    #[serde(default, alias = "date_commande")]
    pub ordered_at: Option<String>,
}

impl Entity for OrderDto {
    const RESOURCE: Resource = Resource::Orders;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.client_name, &self.status])
    }

    fn headers() -> &'static [&'static str] {
        &["Client", "Total", "Statut", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.client_name),
            money_cell(self.total),
            text_cell(&self.status),
            date_cell(&self.ordered_at),
        ]
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
