//! Static grouping of backend tables into navigation categories

/// A named group of related tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon name understood by the frontend icon set.
    pub icon: &'static str,
    pub tables: &'static [&'static str],
}

impl Category {
    pub fn contains(&self, table: &str) -> bool {
        self.tables.iter().any(|t| *t == table)
    }
}

static CATEGORIES: [Category; 6] = [
    Category {
        key: "MATCH_INFO",
        name: "Match Information",
        description: "Core match data including competitions, seasons, and matches",
        icon: "trophy",
        tables: &["competition", "seasons", "match", "venues", "match_summary"],
    },
    Category {
        key: "PLAYERS",
        name: "Players & Contracts",
        description: "Player information, contracts, and match statistics",
        icon: "users",
        tables: &["players", "player_contracts", "player_match_stats"],
    },
    Category {
        key: "TEAMS",
        name: "Teams & Statistics",
        description: "Team information and match statistics",
        icon: "shield",
        tables: &["teams", "team_match_stats"],
    },
    Category {
        key: "MATCH_DETAILS",
        name: "Match Details",
        description: "Detailed match events and innings data",
        icon: "activity",
        tables: &["innings", "ball_events"],
    },
    Category {
        key: "SOCIAL",
        name: "Social & Content",
        description: "User interactions and content management",
        icon: "message-circle",
        tables: &["users", "posts", "follows"],
    },
    Category {
        key: "INTEGRATIONS",
        name: "External Integrations",
        description: "External provider mappings and integrations",
        icon: "link",
        tables: &["external_providers", "provider_ids_map"],
    },
];

/// All categories in display order.
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Resolves a category key, ignoring case (`players` == `PLAYERS`).
pub fn find(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key.eq_ignore_ascii_case(key))
}

/// Owning category of a table. First match wins.
pub fn category_for_table(table: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.contains(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("players").map(|c| c.name), Some("Players & Contracts"));
        assert_eq!(find("MATCH_INFO").map(|c| c.icon), Some("trophy"));
        assert!(find("unknown").is_none());
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(category_for_table("ball_events").map(|c| c.key), Some("MATCH_DETAILS"));
        assert_eq!(category_for_table("follows").map(|c| c.key), Some("SOCIAL"));
        assert!(category_for_table("audit_log").is_none());
    }

    #[test]
    fn tables_keep_declared_order() {
        assert_eq!(
            find("teams").map(|c| c.tables),
            Some(&["teams", "team_match_stats"][..])
        );
    }

    #[test]
    fn every_table_has_a_single_owner() {
        for category in all() {
            for table in category.tables {
                let owners = all().iter().filter(|c| c.contains(table)).count();
                assert_eq!(owners, 1, "{} listed in {} categories", table, owners);
            }
        }
    }
}
