pub mod layout;
pub mod navbar;
pub mod sidebar;

pub use layout::AuthLayout;
pub use navbar::AuthNavbar;
pub use sidebar::Sidebar;
