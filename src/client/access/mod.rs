//! Role-based access and navigation.
//!
//! Everything the portal decides from "who is logged in" flows through here: the role
//! resolver turns a stored user record into the effective role, the route guard decides
//! whether a page renders or redirects, and the menu builder lists the links a role sees.
//! All three are pure functions so they can be re-evaluated on every navigation.

pub mod guard;
pub mod menu;
pub mod role;
pub mod routes;

pub use guard::{guard, guard_path, GuardDecision};
pub use menu::{build_menu, MenuOptions, NavigationEntry};
pub use role::resolve_role;
pub use routes::{dashboard_path, dashboard_role, permission_for, RouteAccess};
