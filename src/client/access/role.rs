use crate::model::user::{Role, UserRecord};

/// Derive the effective role used for every UI decision
///
/// This is the only place the fallback chain is applied; login, signup, and session
/// bootstrap all call it.
///
/// 1. `garage` stays `garage`.
/// 2. A `mecanicien` affiliated with a garage is shown the garage UI.
/// 3. Any other non-empty role is kept as is (lower-cased).
/// 4. A record without a role but with a garage affiliation is a garage.
/// 5. Everything else is a client.
pub fn resolve_role(user: &UserRecord) -> Role {
    let raw = user
        .role
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_lowercase();

    if raw == "garage" {
        return Role::Garage;
    }

    if raw == "mecanicien" && user.has_garage() {
        return Role::Garage;
    }

    if !raw.is_empty() {
        return Role::parse(&raw);
    }

    if user.has_garage() {
        return Role::Garage;
    }

    Role::Client
}
