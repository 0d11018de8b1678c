//! Static navigation menu types and route matching

/// Icon shown next to a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    BarChart,
    UserPlus,
    Users,
    Calendar,
    Settings,
    LogOut,
}

/// A single navigation entry. Defined at build time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: NavIcon,
}

impl MenuEntry {
    pub const fn new(label: &'static str, route: &'static str, icon: NavIcon) -> Self {
        Self { label, route, icon }
    }
}

/// Titled group of entries ("Main Menu", "Support")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

/// Index of the entry to highlight for `current_route`.
///
/// Exact string match only. If several entries share the route, the last one
/// wins so at most one entry is ever active.
pub fn active_index(entries: &[MenuEntry], current_route: &str) -> Option<usize> {
    entries
        .iter()
        .rposition(|entry| entry.route == current_route)
}
