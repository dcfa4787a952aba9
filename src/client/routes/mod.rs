pub mod auth;
pub mod home;
pub mod login;
pub mod not_found;
pub mod shop;
pub mod signup;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use shop::PublicShop;
pub use signup::Signup;
