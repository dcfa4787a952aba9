//! Navigation menu construction.
//!
//! Each role has a fixed, ordered list of entries. Entries are built fresh on every
//! render from the effective role, the live counters (when the stats call succeeded),
//! and the persisted UI toggles passed in through [`MenuOptions`].

use self::{
    BadgeSource::{Count, Fixed},
    ColorToken::*,
    PriorityTier::{Primary as High, Secondary as Mid, Tertiary as Low},
};
use crate::{
    client::access::routes::dashboard_path,
    model::{
        stats::{CountKey, CountsSnapshot},
        user::Role,
    },
};

/// Badge text shown in place of a live counter that is not available
pub const BADGE_PLACEHOLDER: &str = "...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Clients,
    Employees,
    Vehicles,
    Repairs,
    Invoices,
    Parts,
    Suppliers,
    Services,
    Appointments,
    Garages,
    Requests,
    Shop,
    Orders,
    Profile,
}

/// daisyUI tone of an entry's badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Primary,
    Secondary,
    Accent,
    Info,
    Success,
    Warning,
    Neutral,
}

impl ColorToken {
    pub fn badge_class(&self) -> &'static str {
        match self {
            ColorToken::Primary => "badge badge-primary",
            ColorToken::Secondary => "badge badge-secondary",
            ColorToken::Accent => "badge badge-accent",
            ColorToken::Info => "badge badge-info",
            ColorToken::Success => "badge badge-success",
            ColorToken::Warning => "badge badge-warning",
            ColorToken::Neutral => "badge badge-neutral",
        }
    }
}

/// How prominently an entry is displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityTier {
    Primary,
    Secondary,
    Tertiary,
}

/// Where an entry's badge text comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeSource {
    None,
    Fixed(&'static str),
    Count(CountKey),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub icon: NavIcon,
    pub route: String,
    pub badge: Option<String>,
    pub color: ColorToken,
    pub priority: PriorityTier,
}

/// Persisted UI toggles that affect the menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuOptions {
    /// Show the supplier catalogue to garage accounts
    pub supplier_mode: bool,
}

/// Static description of an entry before badges are resolved
struct EntrySpec {
    label: &'static str,
    icon: NavIcon,
    route: &'static str,
    badge: BadgeSource,
    color: ColorToken,
    priority: PriorityTier,
}

const fn entry(
    label: &'static str,
    icon: NavIcon,
    route: &'static str,
    badge: BadgeSource,
    color: ColorToken,
    priority: PriorityTier,
) -> EntrySpec {
    EntrySpec {
        label,
        icon,
        route,
        badge,
        color,
        priority,
    }
}

const PROFILE: EntrySpec = entry("Mon profil", NavIcon::Profile, "/profil", BadgeSource::None, Neutral, Low);
const PUBLIC_SHOP: EntrySpec = entry("Boutique", NavIcon::Shop, "/boutique-client", BadgeSource::None, Accent, Low);

const ADMIN_ENTRIES: &[EntrySpec] = &[
    entry("Clients", NavIcon::Clients, "/clients", Count(CountKey::Clients), Primary, High),
    entry("Employés", NavIcon::Employees, "/employes", Count(CountKey::Employees), Secondary, Mid),
    entry("Véhicules", NavIcon::Vehicles, "/vehicules", Count(CountKey::Vehicles), Info, High),
    entry("Réparations", NavIcon::Repairs, "/reparations", Count(CountKey::Repairs), Warning, High),
    entry("Factures", NavIcon::Invoices, "/factures", Count(CountKey::Invoices), Success, High),
    entry("Rendez-vous", NavIcon::Appointments, "/rendez-vous", Count(CountKey::Appointments), Info, Mid),
    entry("Pièces", NavIcon::Parts, "/pieces", Count(CountKey::Parts), Neutral, Mid),
    entry("Fournisseurs", NavIcon::Suppliers, "/fournisseurs", Count(CountKey::Suppliers), Neutral, Mid),
    entry("Services", NavIcon::Services, "/services", Count(CountKey::Services), Secondary, Mid),
    entry("Garages", NavIcon::Garages, "/garages", Count(CountKey::Garages), Primary, Mid),
    entry("Produits", NavIcon::Shop, "/produits", Count(CountKey::Products), Accent, Low),
    entry("Commandes", NavIcon::Orders, "/commandes", Count(CountKey::Orders), Accent, Low),
    PROFILE,
];

const MECANICIEN_ENTRIES: &[EntrySpec] = &[
    entry("Réparations", NavIcon::Repairs, "/reparations", Count(CountKey::Repairs), Warning, High),
    entry("Rendez-vous", NavIcon::Appointments, "/rendez-vous", Count(CountKey::Appointments), Info, High),
    entry("Véhicules", NavIcon::Vehicles, "/vehicules", BadgeSource::None, Info, Mid),
    entry("Pièces", NavIcon::Parts, "/pieces", BadgeSource::None, Neutral, Mid),
    PROFILE,
];

const GARAGE_ENTRIES: &[EntrySpec] = &[
    entry("Demandes", NavIcon::Requests, "/garage-demandes", Count(CountKey::ServiceRequests), Warning, High),
    entry("Réparations", NavIcon::Repairs, "/reparations", Count(CountKey::Repairs), Warning, High),
    entry("Véhicules", NavIcon::Vehicles, "/vehicules", BadgeSource::None, Info, Mid),
    entry("Factures", NavIcon::Invoices, "/factures", Count(CountKey::Invoices), Success, Mid),
    entry("Services", NavIcon::Services, "/services", BadgeSource::None, Secondary, Mid),
    entry("Pièces", NavIcon::Parts, "/pieces", BadgeSource::None, Neutral, Low),
    PROFILE,
];

/// Only shown to garage accounts with supplier mode enabled, before the profile entry
const GARAGE_SUPPLIERS: EntrySpec = entry("Fournisseurs", NavIcon::Suppliers, "/fournisseurs", Fixed("Pro"), Accent, Low);

const CLIENT_ENTRIES: &[EntrySpec] = &[
    entry("Mes véhicules", NavIcon::Vehicles, "/mes-vehicules", BadgeSource::None, Info, High),
    entry("Mes rendez-vous", NavIcon::Appointments, "/mes-rendez-vous", BadgeSource::None, Info, High),
    entry("Demander un service", NavIcon::Requests, "/demande-service", Fixed("Nouveau"), Accent, High),
    entry("Mes factures", NavIcon::Invoices, "/factures", BadgeSource::None, Success, Mid),
    PUBLIC_SHOP,
    PROFILE,
];

/// Entries of roles the portal does not know: the smallest common set
const BASELINE_ENTRIES: &[EntrySpec] = &[PROFILE, PUBLIC_SHOP];

/// Build the ordered navigation menu of a role
///
/// The dashboard entry always comes first. Count badges use `counts` when available and
/// fall back to [`BADGE_PLACEHOLDER`] so the menu renders even if the stats call failed.
pub fn build_menu(
    role: &Role,
    counts: Option<&CountsSnapshot>,
    options: MenuOptions,
) -> Vec<NavigationEntry> {
    let role_entries: &[EntrySpec] = match role {
        Role::Admin => ADMIN_ENTRIES,
        Role::Mecanicien => MECANICIEN_ENTRIES,
        Role::Garage => GARAGE_ENTRIES,
        Role::Client => CLIENT_ENTRIES,
        Role::Other(_) => BASELINE_ENTRIES,
    };

    let mut menu = Vec::with_capacity(role_entries.len() + 2);

    menu.push(NavigationEntry {
        label: "Tableau de bord",
        icon: NavIcon::Dashboard,
        route: dashboard_path(role),
        badge: None,
        color: Primary,
        priority: High,
    });

    for item in role_entries {
        if *role == Role::Garage && options.supplier_mode && item.route == PROFILE.route {
            menu.push(resolve(&GARAGE_SUPPLIERS, counts));
        }

        menu.push(resolve(item, counts));
    }

    menu
}

fn resolve(item: &EntrySpec, counts: Option<&CountsSnapshot>) -> NavigationEntry {
    let badge = match item.badge {
        BadgeSource::None => None,
        BadgeSource::Fixed(label) => Some(label.to_string()),
        BadgeSource::Count(key) => Some(
            counts
                .and_then(|counts| counts.get(key))
                .map(|count| count.to_string())
                .unwrap_or_else(|| BADGE_PLACEHOLDER.to_string()),
        ),
    };

    NavigationEntry {
        label: item.label,
        icon: item.icon,
        route: item.route.to_string(),
        badge,
        color: item.color,
        priority: item.priority,
    }
}
