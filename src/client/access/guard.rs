use dioxus_logger::tracing;

use crate::{
    client::{
        access::{
            role::resolve_role,
            routes::{dashboard_path, dashboard_role, permission_for, RouteAccess},
        },
        store::session::Session,
    },
    model::user::Role,
};

pub const LOGIN_PATH: &str = "/login";

/// Outcome of a route guard check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectTo(String),
}

/// Decide whether `route` renders for `session`
///
/// `required_roles` of None means any logged in user. A missing session always redirects
/// to the login page; a role mismatch silently sends the user to their own dashboard.
/// Pure and uncached: call it again on every navigation.
pub fn guard(route: &str, required_roles: Option<&[Role]>, session: Option<&Session>) -> GuardDecision {
    let Some(session) = session.filter(|session| !session.token.is_empty()) else {
        tracing::debug!(route = %route, "No session, redirecting to login");

        return GuardDecision::RedirectTo(LOGIN_PATH.to_string());
    };

    let Some(required_roles) = required_roles else {
        return GuardDecision::Allow;
    };

    let role = resolve_role(&session.user);

    if required_roles.contains(&role) {
        GuardDecision::Allow
    } else {
        let target = dashboard_path(&role);

        tracing::debug!(
            route = %route,
            role = %role,
            target = %target,
            "Role not permitted on route, redirecting to own dashboard"
        );

        GuardDecision::RedirectTo(target)
    }
}

/// Guard a path using the static route table
///
/// A `/dashboard/{role}` path is only open to that role, whatever the segment's case.
/// Public paths and paths missing from the table are never guarded, the latter render
/// the not-found page.
pub fn guard_path(path: &str, session: Option<&Session>) -> GuardDecision {
    if let Some(role) = dashboard_role(path) {
        return guard(path, Some(std::slice::from_ref(&role)), session);
    }

    match permission_for(path) {
        None | Some(RouteAccess::Public) => GuardDecision::Allow,
        Some(RouteAccess::Authenticated) => guard(path, None, session),
        Some(RouteAccess::Roles(roles)) => guard(path, Some(roles), session),
    }
}
