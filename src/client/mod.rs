pub mod access;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod list;
pub mod router;
pub mod routes;
pub mod storage;
pub mod store;
pub mod util;

pub use app::App;
