use garage_portal::{
    client::access::{build_menu, guard_path, menu::BADGE_PLACEHOLDER, GuardDecision, MenuOptions},
    model::{
        stats::{CountKey, CountsSnapshot},
        user::Role,
    },
};
use garage_test_utils::prelude::*;

use crate::util::seeded_store;

#[test]
// Every link shown to a role opens without a redirect for that role
fn menu_entries_pass_the_guard() -> Result<(), TestError> {
    let fixtures = [
        user::admin(),
        user::mecanicien(),
        user::garage(),
        user::client(),
    ];

    for fixture in fixtures {
        let (store, _) = seeded_store(
            StorageSeed::new()
                .with_session(fixture)
                .with_supplier_mode(true),
        )?;
        let session = store.load().ok_or_else(|| TestError::Fixture("no session".into()))?;
        let role = session.role();

        for supplier_mode in [false, true] {
            for entry in build_menu(&role, None, MenuOptions { supplier_mode }) {
                assert_eq!(
                    guard_path(&entry.route, Some(&session)),
                    GuardDecision::Allow,
                    "{} should open {}",
                    role,
                    entry.route
                );
            }
        }
    }

    Ok(())
}

#[test]
// Badges show live counters when the stats call succeeded and a placeholder otherwise
fn menu_badges_follow_counters() {
    let counts = CountsSnapshot::default().with(CountKey::Clients, 42);

    let with_counts = build_menu(&Role::Admin, Some(&counts), MenuOptions::default());
    let without = build_menu(&Role::Admin, None, MenuOptions::default());

    let clients = |menu: &[garage_portal::client::access::NavigationEntry]| {
        menu.iter()
            .find(|entry| entry.route == "/clients")
            .and_then(|entry| entry.badge.clone())
    };

    assert_eq!(clients(&with_counts), Some("42".to_string()));
    assert_eq!(clients(&without), Some(BADGE_PLACEHOLDER.to_string()));
}
