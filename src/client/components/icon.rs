use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBoxOpen, FaCalendarDays, FaCar, FaFileInvoiceDollar, FaGauge, FaGears, FaInbox,
    FaScrewdriverWrench, FaStore, FaTruck, FaUser, FaUserTie, FaUsers, FaWarehouse, FaWrench,
};
use dioxus_free_icons::Icon;

use crate::client::access::menu::NavIcon;

#[component]
pub fn NavIconView(icon: NavIcon, size: Option<u32>) -> Element {
    let size = size.unwrap_or(18);

    match icon {
        NavIcon::Dashboard => rsx!(Icon { width: size, height: size, icon: FaGauge }),
        NavIcon::Clients => rsx!(Icon { width: size, height: size, icon: FaUsers }),
        NavIcon::Employees => rsx!(Icon { width: size, height: size, icon: FaUserTie }),
        NavIcon::Vehicles => rsx!(Icon { width: size, height: size, icon: FaCar }),
        NavIcon::Repairs => rsx!(Icon { width: size, height: size, icon: FaWrench }),
        NavIcon::Invoices => rsx!(Icon { width: size, height: size, icon: FaFileInvoiceDollar }),
        NavIcon::Parts => rsx!(Icon { width: size, height: size, icon: FaGears }),
        NavIcon::Suppliers => rsx!(Icon { width: size, height: size, icon: FaTruck }),
        NavIcon::Services => rsx!(Icon { width: size, height: size, icon: FaScrewdriverWrench }),
        NavIcon::Appointments => rsx!(Icon { width: size, height: size, icon: FaCalendarDays }),
        NavIcon::Garages => rsx!(Icon { width: size, height: size, icon: FaWarehouse }),
        NavIcon::Requests => rsx!(Icon { width: size, height: size, icon: FaInbox }),
        NavIcon::Shop => rsx!(Icon { width: size, height: size, icon: FaStore }),
        NavIcon::Orders => rsx!(Icon { width: size, height: size, icon: FaBoxOpen }),
        NavIcon::Profile => rsx!(Icon { width: size, height: size, icon: FaUser }),
    }
}
