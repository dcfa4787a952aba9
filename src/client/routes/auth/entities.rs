//! One list page per entity, all built on the shared list page.

use dioxus::prelude::*;

use crate::{
    client::components::entity_page,
    model::{
        garage::{
            AppointmentDto, ClientDto, EmployeeDto, GarageDto, InvoiceDto, RepairDto,
            ServiceRequestDto, VehicleDto,
        },
        inventory::{PartDto, ServiceDto, SupplierDto},
        shop::{OrderDto, ProductDto},
    },
};

#[component]
pub fn Clients() -> Element {
    entity_page::<ClientDto>("Clients", true)
}

#[component]
pub fn Employees() -> Element {
    entity_page::<EmployeeDto>("Employés", true)
}

#[component]
pub fn Vehicles() -> Element {
    entity_page::<VehicleDto>("Véhicules", true)
}

#[component]
pub fn Repairs() -> Element {
    entity_page::<RepairDto>("Réparations", true)
}

#[component]
pub fn Invoices() -> Element {
    entity_page::<InvoiceDto>("Factures", true)
}

#[component]
pub fn Parts() -> Element {
    entity_page::<PartDto>("Pièces", true)
}

#[component]
pub fn Suppliers() -> Element {
    entity_page::<SupplierDto>("Fournisseurs", true)
}

#[component]
pub fn Services() -> Element {
    entity_page::<ServiceDto>("Services", true)
}

#[component]
pub fn Appointments() -> Element {
    entity_page::<AppointmentDto>("Rendez-vous", true)
}

#[component]
pub fn Garages() -> Element {
    entity_page::<GarageDto>("Garages", true)
}

#[component]
pub fn Products() -> Element {
    entity_page::<ProductDto>("Produits", true)
}

#[component]
pub fn Orders() -> Element {
    entity_page::<OrderDto>("Commandes", true)
}

#[component]
pub fn GarageRequests() -> Element {
    entity_page::<ServiceRequestDto>("Demandes de service", false)
}

// The backend scopes these lists to the bearer of the token
#[component]
pub fn MyVehicles() -> Element {
    entity_page::<VehicleDto>("Mes véhicules", false)
}

#[component]
pub fn MyAppointments() -> Element {
    entity_page::<AppointmentDto>("Mes rendez-vous", false)
}
