use crate::model::user::Role;

/// Who may view a route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Rendered for everyone, logged in or not
    Public,
    /// Any logged in user
    Authenticated,
    /// Logged in users whose effective role is in the set
    Roles(&'static [Role]),
}

const ADMIN: &[Role] = &[Role::Admin];
const MECANICIEN: &[Role] = &[Role::Mecanicien];
const GARAGE: &[Role] = &[Role::Garage];
const CLIENT: &[Role] = &[Role::Client];
const WORKSHOP: &[Role] = &[Role::Admin, Role::Mecanicien, Role::Garage];
const ADMIN_MECANICIEN: &[Role] = &[Role::Admin, Role::Mecanicien];
const ADMIN_GARAGE: &[Role] = &[Role::Admin, Role::Garage];
const BILLING: &[Role] = &[Role::Admin, Role::Garage, Role::Client];

/// Static permissions of every known route path
pub const ROUTE_TABLE: &[(&str, RouteAccess)] = &[
    ("/", RouteAccess::Public),
    ("/login", RouteAccess::Public),
    ("/signup", RouteAccess::Public),
    ("/boutique-client", RouteAccess::Public),
    ("/dashboard/admin", RouteAccess::Roles(ADMIN)),
    ("/dashboard/mecanicien", RouteAccess::Roles(MECANICIEN)),
    ("/dashboard/garage", RouteAccess::Roles(GARAGE)),
    ("/dashboard/client", RouteAccess::Roles(CLIENT)),
    ("/clients", RouteAccess::Roles(ADMIN)),
    ("/employes", RouteAccess::Roles(ADMIN)),
    ("/garages", RouteAccess::Roles(ADMIN)),
    ("/produits", RouteAccess::Roles(ADMIN)),
    ("/commandes", RouteAccess::Roles(ADMIN)),
    ("/vehicules", RouteAccess::Roles(WORKSHOP)),
    ("/reparations", RouteAccess::Roles(WORKSHOP)),
    ("/pieces", RouteAccess::Roles(WORKSHOP)),
    ("/services", RouteAccess::Roles(ADMIN_GARAGE)),
    ("/rendez-vous", RouteAccess::Roles(ADMIN_MECANICIEN)),
    ("/fournisseurs", RouteAccess::Roles(ADMIN_GARAGE)),
    ("/factures", RouteAccess::Roles(BILLING)),
    ("/garage-demandes", RouteAccess::Roles(GARAGE)),
    ("/mes-vehicules", RouteAccess::Roles(CLIENT)),
    ("/mes-rendez-vous", RouteAccess::Roles(CLIENT)),
    ("/demande-service", RouteAccess::Roles(CLIENT)),
    ("/profil", RouteAccess::Authenticated),
];

const DASHBOARD_PREFIX: &str = "/dashboard/";

/// Strip the query string, fragment, and trailing slashes of a path
fn canonical(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Look up the access rule of a path, ignoring any query string, fragment, or trailing slash
pub fn permission_for(path: &str) -> Option<RouteAccess> {
    let path = canonical(path);

    ROUTE_TABLE
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, access)| *access)
}

/// The role a `/dashboard/{role}` path is scoped to
///
/// Any single segment after the prefix counts, in any case, since the router renders a
/// dashboard for all of them. Returns None for every other path.
pub fn dashboard_role(path: &str) -> Option<Role> {
    canonical(path)
        .strip_prefix(DASHBOARD_PREFIX)
        .filter(|segment| !segment.is_empty() && !segment.contains('/'))
        .map(Role::parse)
}

/// The landing page of a role
pub fn dashboard_path(role: &Role) -> String {
    format!("/dashboard/{}", role)
}
