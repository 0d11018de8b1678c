//! Static dashboard navigation

use dash_common::{MenuEntry, MenuSection, NavIcon};

pub const MAIN_MENU: &[MenuEntry] = &[
    MenuEntry::new("Dashboard", "/dashboard", NavIcon::BarChart),
    MenuEntry::new("Leads", "/leads", NavIcon::UserPlus),
    MenuEntry::new("Customers", "/customers", NavIcon::Users),
    MenuEntry::new("Calendar", "/calendar", NavIcon::Calendar),
];

pub const SUPPORT_MENU: &[MenuEntry] = &[
    MenuEntry::new("Settings", "/settings", NavIcon::Settings),
    MenuEntry::new("Log out", "/help", NavIcon::LogOut),
];

pub const MENU_SECTIONS: &[MenuSection] = &[
    MenuSection {
        title: "Main Menu",
        entries: MAIN_MENU,
    },
    MenuSection {
        title: "Support",
        entries: SUPPORT_MENU,
    },
];
