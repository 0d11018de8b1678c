//! App layout: navigation panel, mobile header, routed content

use crate::menu::MENU_SECTIONS;
use crate::Route;
use dash_common::PanelConfig;
use dash_ui::{
    use_panel_provider, CopyrightLine, DashboardLayoutView, MenuList, Panel, PanelContent,
    PanelFooter, PanelGroup, PanelGroupLabel, PanelHeader, PanelHeaderTitle, PanelOpenTrigger,
};
use dioxus::prelude::*;
use tracing::warn;

const BRAND: &str = "Griwa International";

fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Dashboard {} => "Dashboard",
        Route::Leads {} => "Leads",
        Route::Customers {} => "Customers",
        Route::Calendar {} => "Calendar",
        Route::Settings {} => "Settings",
        Route::Help {} => "Help",
    }
}

#[component]
pub fn AppLayout() -> Element {
    let config = use_context::<PanelConfig>();
    let panel = use_panel_provider(config);
    let route = use_route::<Route>();
    let current_route = route.to_string();
    let title = page_title(&route);
    let compact = panel.state().is_compact();

    let on_navigate = move |path: &'static str| {
        match path.parse::<Route>() {
            Ok(target) => {
                navigator().push(target);
            }
            Err(_) => warn!(path, "Menu entry has no matching route"),
        }
        // Following a link from the drawer closes it
        if panel.state().is_mobile {
            panel.set_mobile_open(false);
        }
    };

    rsx! {
        DashboardLayoutView {
            panel,
            sidebar: rsx! {
                Panel { panel,
                    PanelHeader {
                        PanelHeaderTitle { panel, "{BRAND}" }
                    }
                    PanelContent {
                        for section in MENU_SECTIONS.iter() {
                            PanelGroup { key: "{section.title}",
                                PanelGroupLabel { panel, "{section.title}" }
                                MenuList {
                                    entries: section.entries,
                                    current_route: current_route.clone(),
                                    compact,
                                    on_navigate,
                                }
                            }
                        }
                    }
                    PanelFooter {
                        CopyrightLine { owner: BRAND.to_string(), compact }
                    }
                }
            },
            header: rsx! {
                header { class: "flex h-14 items-center gap-4 border-b border-border-subtle px-4",
                    PanelOpenTrigger { panel }
                    h1 { class: "text-lg font-semibold text-white", "{title}" }
                }
            },
            Outlet::<Route> {}
        }
    }
}
