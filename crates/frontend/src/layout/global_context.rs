use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// The five managed record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Asset,
    Category,
    User,
    Maintainer,
    Supplier,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Asset,
        EntityKind::Category,
        EntityKind::User,
        EntityKind::Maintainer,
        EntityKind::Supplier,
    ];

    /// First path segment in `?screen=`
    pub fn slug(self) -> &'static str {
        match self {
            EntityKind::Asset => "asset",
            EntityKind::Category => "category",
            EntityKind::User => "users",
            EntityKind::Maintainer => "maintainer",
            EntityKind::Supplier => "supplier",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    /// Sidebar label
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Asset => "Assets",
            EntityKind::Category => "Categories",
            EntityKind::User => "Users",
            EntityKind::Maintainer => "Maintainers",
            EntityKind::Supplier => "Suppliers",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EntityKind::Asset => "asset",
            EntityKind::Category => "category",
            EntityKind::User => "users",
            EntityKind::Maintainer => "maintainer",
            EntityKind::Supplier => "supplier",
        }
    }
}

/// What the content area shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    List(EntityKind),
    Create(EntityKind),
    Edit(EntityKind, String),
}

impl Screen {
    /// `asset/list`, `asset/add`, `asset/update/42`; empty for the dashboard
    pub fn to_path(&self) -> String {
        match self {
            Screen::Dashboard => String::new(),
            Screen::List(kind) => format!("{}/list", kind.slug()),
            Screen::Create(kind) => format!("{}/add", kind.slug()),
            Screen::Edit(kind, id) => format!("{}/update/{}", kind.slug(), id),
        }
    }

    /// Unknown paths fall back to the dashboard
    pub fn from_path(path: &str) -> Self {
        let mut parts = path.trim_matches('/').splitn(3, '/');
        let kind = parts.next().and_then(EntityKind::from_slug);
        match (kind, parts.next(), parts.next()) {
            (Some(kind), Some("list"), None) => Screen::List(kind),
            (Some(kind), Some("add"), None) => Screen::Create(kind),
            (Some(kind), Some("update"), Some(id)) if !id.is_empty() => {
                Screen::Edit(kind, id.to_string())
            }
            _ => Screen::Dashboard,
        }
    }

    /// Entity the screen belongs to (for sidebar highlighting)
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Screen::Dashboard => None,
            Screen::List(kind) | Screen::Create(kind) | Screen::Edit(kind, _) => Some(*kind),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScreenQuery {
    #[serde(default)]
    screen: String,
}

/// `?screen=...` for a screen
pub fn screen_to_query(screen: &Screen) -> String {
    let query = serde_qs::to_string(&ScreenQuery {
        screen: screen.to_path(),
    })
    .unwrap_or_default();
    format!("?{}", query)
}

pub fn screen_from_query(search: &str) -> Screen {
    let query: ScreenQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    Screen::from_path(&query.screen)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub screen: RwSignal<Screen>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            screen: RwSignal::new(Screen::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, screen: Screen) {
        log::debug!("navigate: {:?}", screen);
        self.screen.set(screen);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Restore the screen from the URL once, then keep the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.screen.set(screen_from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.screen.with(screen_to_query);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_paths() {
        assert_eq!(Screen::Edit(EntityKind::Asset, "42".to_string()).to_path(), "asset/update/42");
        assert_eq!(Screen::from_path("users/add"), Screen::Create(EntityKind::User));
        assert_eq!(Screen::from_path("/category/list/"), Screen::List(EntityKind::Category));
        assert_eq!(Screen::from_path("asset/update/"), Screen::Dashboard);
        assert_eq!(Screen::from_path("printer/list"), Screen::Dashboard);
        assert_eq!(Screen::from_path(""), Screen::Dashboard);
    }

    #[test]
    fn test_screen_query_round_trip() {
        let screen = Screen::Edit(EntityKind::Supplier, "s-1".to_string());
        let query = screen_to_query(&screen);
        assert!(query.starts_with("?screen="));
        assert_eq!(screen_from_query(&query), screen);
        assert_eq!(screen_from_query(""), Screen::Dashboard);
        assert_eq!(screen_from_query("?other=1"), Screen::Dashboard);
    }
}
