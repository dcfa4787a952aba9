pub mod notification;
pub mod preferences;
pub mod session;

pub use notification::{Notification, NotificationLevel, Notifications};
pub use preferences::Preferences;
pub use session::{Session, SessionEvent, SessionStore, Subscription};
