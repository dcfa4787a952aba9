use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{auth::AuthLayout, Navbar},
    routes::{
        auth::{
            Appointments, Clients, Dashboard, Employees, GarageRequests, Garages, Invoices,
            MyAppointments, MyVehicles, Orders, Parts, Products, Profile, Repairs,
            ServiceRequestForm, Services, Suppliers, Vehicles,
        },
        Home, Login, NotFound, PublicShop, Signup,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/signup")]
        Signup {},

        #[route("/boutique-client")]
        PublicShop {},

    #[end_layout]

    #[layout(AuthLayout)]

        #[route("/dashboard/:role")]
        Dashboard { role: String },

        #[route("/clients")]
        Clients {},

        #[route("/employes")]
        Employees {},

        #[route("/vehicules")]
        Vehicles {},

        #[route("/reparations")]
        Repairs {},

        #[route("/factures")]
        Invoices {},

        #[route("/pieces")]
        Parts {},

        #[route("/fournisseurs")]
        Suppliers {},

        #[route("/services")]
        Services {},

        #[route("/rendez-vous")]
        Appointments {},

        #[route("/garages")]
        Garages {},

        #[route("/produits")]
        Products {},

        #[route("/commandes")]
        Orders {},

        #[route("/garage-demandes")]
        GarageRequests {},

        #[route("/mes-vehicules")]
        MyVehicles {},

        #[route("/mes-rendez-vous")]
        MyAppointments {},

        #[route("/demande-service")]
        ServiceRequestForm {},

        #[route("/profil")]
        Profile {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Parse an application path into a route, logging paths that do not parse
pub fn route_from_path(path: &str) -> Option<Route> {
    match path.parse::<Route>() {
        Ok(route) => Some(route),
        Err(err) => {
            tracing::error!("Cannot route to {}: {}", path, err);
            None
        }
    }
}
