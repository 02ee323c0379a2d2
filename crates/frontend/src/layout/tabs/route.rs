//! Tab keys for every page the dashboard can show
//!
//! A tab key is the only thing persisted in `?active=`, so every route must
//! survive `key()` → `parse()` unchanged.

use contracts::admin::categories;
use contracts::admin::schema::humanize;

pub const DASHBOARD_KEY: &str = "dashboard";
const CATEGORY_PREFIX: &str = "category__";
const TABLE_PREFIX: &str = "table__";
const CREATE_SUFFIX: &str = "__create";
const SEPARATOR: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRoute {
    Dashboard,
    Category(String),
    Table {
        category: String,
        table: String,
        /// Open with the create dialog already showing
        create: bool,
    },
}

impl TabRoute {
    pub fn table(category: &str, table: &str) -> Self {
        Self::Table {
            category: category.to_string(),
            table: table.to_string(),
            create: false,
        }
    }

    pub fn key(&self) -> String {
        match self {
            Self::Dashboard => DASHBOARD_KEY.to_string(),
            Self::Category(key) => format!("{CATEGORY_PREFIX}{key}"),
            Self::Table {
                category,
                table,
                create,
            } => {
                let suffix = if *create { CREATE_SUFFIX } else { "" };
                format!("{TABLE_PREFIX}{category}{SEPARATOR}{table}{suffix}")
            }
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        if key == DASHBOARD_KEY {
            return Some(Self::Dashboard);
        }
        if let Some(category) = key.strip_prefix(CATEGORY_PREFIX) {
            return (!category.is_empty()).then(|| Self::Category(category.to_string()));
        }
        let rest = key.strip_prefix(TABLE_PREFIX)?;
        let (rest, create) = match rest.strip_suffix(CREATE_SUFFIX) {
            Some(rest) => (rest, true),
            None => (rest, false),
        };
        let (category, table) = rest.split_once(SEPARATOR)?;
        if category.is_empty() || table.is_empty() {
            return None;
        }
        Some(Self::Table {
            category: category.to_string(),
            table: table.to_string(),
            create,
        })
    }

    pub fn title(&self) -> String {
        match self {
            Self::Dashboard => "Dashboard".to_string(),
            Self::Category(key) => categories::find(key)
                .map(|c| c.name.to_string())
                .unwrap_or_else(|| "Category Not Found".to_string()),
            Self::Table { table, create, .. } => {
                let name = humanize(table);
                if *create {
                    format!("{name} (new)")
                } else {
                    name
                }
            }
        }
    }
}

/// Title for an arbitrary key, falling back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    TabRoute::parse(key)
        .map(|route| route.title())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        let routes = [
            TabRoute::Dashboard,
            TabRoute::Category("PLAYERS".into()),
            TabRoute::table("PLAYERS", "players"),
            TabRoute::Table {
                category: "MATCH_INFO".into(),
                table: "match_results".into(),
                create: true,
            },
        ];
        for route in routes {
            assert_eq!(TabRoute::parse(&route.key()), Some(route));
        }
    }

    #[test]
    fn key_formats() {
        assert_eq!(TabRoute::Dashboard.key(), "dashboard");
        assert_eq!(TabRoute::Category("TEAMS".into()).key(), "category__TEAMS");
        assert_eq!(
            TabRoute::table("PLAYERS", "player_contracts").key(),
            "table__PLAYERS__player_contracts"
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert_eq!(TabRoute::parse("a001_connection"), None);
        assert_eq!(TabRoute::parse("category__"), None);
        assert_eq!(TabRoute::parse("table__PLAYERS"), None);
        assert_eq!(TabRoute::parse("table____players"), None);
    }

    #[test]
    fn titles() {
        assert_eq!(TabRoute::Dashboard.title(), "Dashboard");
        assert_eq!(TabRoute::Category("nope".into()).title(), "Category Not Found");
        assert_eq!(tab_label_for_key("table__PLAYERS__players"), "Players");
        assert_eq!(tab_label_for_key("something_else"), "something_else");
    }
}
