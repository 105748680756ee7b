use dioxus::prelude::*;

/// The four top-level screens of the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Records,
    Write,
    Map,
    My,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Records, Tab::Write, Tab::Map, Tab::My];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Records => "기록",
            Tab::Write => "작성",
            Tab::Map => "지도",
            Tab::My => "마이",
        }
    }
}

/// Shared screen chrome: the active view above a four-tab bottom bar.
///
/// Platform packages provide the navigation callback and an `Outlet` as
/// children, exactly like a router layout.
#[component]
pub fn TabLayoutView(active: Tab, on_navigate: EventHandler<Tab>, children: Element) -> Element {
    rsx! {
        div { class: "app-shell",
            main { class: "app-content", {children} }
            nav { class: "tab-bar",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active { "tab-item active" } else { "tab-item" },
                        onclick: move |_| on_navigate.call(tab),
                        "{tab.label()}"
                    }
                }
            }
        }
    }
}
