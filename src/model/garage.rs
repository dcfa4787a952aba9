//! Workshop records: clients, staff, vehicles and the work done on them.

use serde::{Deserialize, Serialize};

use crate::model::{
    entity::{
        date_cell, lenient_f64, lenient_i64, lenient_string, money_cell, present, require_positive,
        require_text, text_cell, Entity, Resource,
    },
    validation::ValidationError,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "nom")]
    pub last_name: Option<String>,
    #[serde(default, alias = "prenom")]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "telephone", deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, alias = "adresse")]
    pub address: Option<String>,
}

impl Entity for ClientDto {
    const RESOURCE: Resource = Resource::Clients;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.last_name, &self.first_name, &self.email, &self.phone])
    }

    fn headers() -> &'static [&'static str] {
        &["Nom", "Prénom", "Email", "Téléphone", "Adresse"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.last_name),
            text_cell(&self.first_name),
            text_cell(&self.email),
            text_cell(&self.phone),
            text_cell(&self.address),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.last_name)?;
        require_text("email", &self.email)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "specialite")]
    pub speciality: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub garage_id: Option<String>,
}

impl Entity for EmployeeDto {
    const RESOURCE: Resource = Resource::Employees;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.name, &self.email, &self.role, &self.speciality])
    }

    fn headers() -> &'static [&'static str] {
        &["Nom", "Email", "Rôle", "Spécialité"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.name),
            text_cell(&self.email),
            text_cell(&self.role),
            text_cell(&self.speciality),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.name)?;
        require_text("email", &self.email)?;
        require_text("role", &self.role)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "immatriculation")]
    pub plate: Option<String>,
    #[serde(default, alias = "marque")]
    pub brand: Option<String>,
    #[serde(default, alias = "modele")]
    pub model: Option<String>,
    #[serde(default, alias = "annee", deserialize_with = "lenient_i64")]
    pub year: Option<i64>,
    #[serde(default, alias = "kilometrage", deserialize_with = "lenient_i64")]
    pub mileage: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub client_id: Option<i64>,
}

impl Entity for VehicleDto {
    const RESOURCE: Resource = Resource::Vehicles;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.plate, &self.brand, &self.model])
    }

    fn headers() -> &'static [&'static str] {
        &["Immatriculation", "Marque", "Modèle", "Année", "Kilométrage"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.plate),
            text_cell(&self.brand),
            text_cell(&self.model),
            self.year.map(|year| year.to_string()).unwrap_or_default(),
            self.mileage
                .map(|km| format!("{} km", km))
                .unwrap_or_default(),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("immatriculation", &self.plate)?;
        require_text("marque", &self.brand)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RepairDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "statut")]
    pub status: Option<String>,
    #[serde(default, alias = "date_debut")]
    pub started_at: Option<String>,
    #[serde(default, alias = "cout", deserialize_with = "lenient_f64")]
    pub cost: Option<f64>,
    #[serde(default, alias = "vehicule_id", deserialize_with = "lenient_i64")]
    pub vehicle_id: Option<i64>,
    #[serde(default, alias = "mecanicien")]
    pub mechanic: Option<String>,
}

impl Entity for RepairDto {
    const RESOURCE: Resource = Resource::Repairs;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.description, &self.status, &self.mechanic])
    }

    fn headers() -> &'static [&'static str] {
        &["Description", "Statut", "Début", "Coût", "Mécanicien"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.description),
            text_cell(&self.status),
            date_cell(&self.started_at),
            money_cell(self.cost),
            text_cell(&self.mechanic),
        ]
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("description", &self.description)?;
        require_positive("cout", self.cost)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "numero", deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(default, alias = "client_nom")]
    pub client_name: Option<String>,
    #[serde(default, alias = "montant", deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(default, alias = "statut")]
    pub status: Option<String>,
    #[serde(default, alias = "date_emission")]
    pub issued_at: Option<String>,
}

impl Entity for InvoiceDto {
    const RESOURCE: Resource = Resource::Invoices;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.number, &self.client_name, &self.status])
    }

    fn headers() -> &'static [&'static str] {
        &["Numéro", "Client", "Montant", "Statut", "Émise le"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.number),
            text_cell(&self.client_name),
            money_cell(self.amount),
            text_cell(&self.status),
            date_cell(&self.issued_at),
        ]
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("client", &self.client_name)?;
        match self.amount {
            Some(_) => require_positive("montant", self.amount),
            None => Err(ValidationError::MissingField("montant")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "date_heure", alias = "date")]
    pub scheduled_at: Option<String>,
    #[serde(default, alias = "motif")]
    pub reason: Option<String>,
    #[serde(default, alias = "client_nom")]
    pub client_name: Option<String>,
    #[serde(default, alias = "statut")]
    pub status: Option<String>,
}

impl Entity for AppointmentDto {
    const RESOURCE: Resource = Resource::Appointments;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.reason, &self.client_name, &self.status])
    }

    fn headers() -> &'static [&'static str] {
        &["Date", "Motif", "Client", "Statut"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_cell(&self.scheduled_at),
            text_cell(&self.reason),
            text_cell(&self.client_name),
            text_cell(&self.status),
        ]
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("date", &self.scheduled_at)?;
        require_text("motif", &self.reason)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GarageDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default, alias = "ville")]
    pub city: Option<String>,
    #[serde(default, alias = "telephone", deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Entity for GarageDto {
    const RESOURCE: Resource = Resource::Garages;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[&self.name, &self.city, &self.email])
    }

    fn headers() -> &'static [&'static str] {
        &["Nom", "Ville", "Téléphone", "Email"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.name),
            text_cell(&self.city),
            text_cell(&self.phone),
            text_cell(&self.email),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("nom", &self.name)
    }
}

/// A client's request for work, routed to a partner garage
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequestDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, alias = "service")]
    pub service_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "client_nom")]
    pub client_name: Option<String>,
    #[serde(default, alias = "date_souhaitee")]
    pub preferred_date: Option<String>,
    #[serde(default, alias = "statut")]
    pub status: Option<String>,
}

impl Entity for ServiceRequestDto {
    const RESOURCE: Resource = Resource::ServiceRequests;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        present(&[
            &self.service_name,
            &self.description,
            &self.client_name,
            &self.status,
        ])
    }

    fn headers() -> &'static [&'static str] {
        &["Service", "Description", "Client", "Date souhaitée", "Statut"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text_cell(&self.service_name),
            text_cell(&self.description),
            text_cell(&self.client_name),
            date_cell(&self.preferred_date),
            text_cell(&self.status),
        ]
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("service", &self.service_name)?;
        require_text("description", &self.description)
    }
}
