pub mod dashboard;
pub mod entities;
pub mod profile;
pub mod service_request;

pub use dashboard::Dashboard;
pub use entities::{
    Appointments, Clients, Employees, GarageRequests, Garages, Invoices, MyAppointments,
    MyVehicles, Orders, Parts, Products, Repairs, Services, Suppliers, Vehicles,
};
pub use profile::Profile;
pub use service_request::ServiceRequestForm;
