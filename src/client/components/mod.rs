pub mod auth;
pub mod brand;
pub mod entity_page;
pub mod field_error;
pub mod icon;
pub mod navbar;
pub mod notification_tray;
pub mod page;
pub mod redirect;

pub use brand::BrandButton;
pub use entity_page::{entity_page, StatusBadge};
pub use field_error::FieldError;
pub use icon::NavIconView;
pub use navbar::Navbar;
pub use notification_tray::NotificationTray;
pub use page::Page;
pub use redirect::Redirect;
