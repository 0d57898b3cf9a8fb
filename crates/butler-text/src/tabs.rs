//! Tab identifier aliases.

/// Map a historical or alternate tab identifier to its canonical name.
///
/// `suggestions` maps to the empty string, which selects the default view.
/// Unknown identifiers are returned unchanged.
///
/// # Examples
///
/// ```
/// use butler_text::normalize_tab_name;
///
/// assert_eq!(normalize_tab_name("duedates"), "on-dates");
/// assert_eq!(normalize_tab_name("suggestions"), "");
/// assert_eq!(normalize_tab_name("unknown-tab"), "unknown-tab");
/// ```
#[must_use]
pub fn normalize_tab_name(tab: &str) -> &str {
    match tab {
        "rule" | "rules" => "rules",
        "card-button" => "card-buttons",
        "board-button" => "board-buttons",
        "schedule" | "schedules" | "scheduled" => "schedule",
        "on-dates" | "due-dates" | "duedates" | "dates" => "on-dates",
        "suggestions" => "",
        "connected-apps" => "connected-apps",
        _ => tab,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_aliases() {
        assert_eq!(normalize_tab_name("rule"), "rules");
        assert_eq!(normalize_tab_name("rules"), "rules");
    }

    #[test]
    fn test_button_aliases() {
        assert_eq!(normalize_tab_name("card-button"), "card-buttons");
        assert_eq!(normalize_tab_name("board-button"), "board-buttons");
    }

    #[test]
    fn test_schedule_aliases() {
        for tab in ["schedule", "schedules", "scheduled"] {
            assert_eq!(normalize_tab_name(tab), "schedule", "alias {tab}");
        }
    }

    #[test]
    fn test_date_aliases() {
        for tab in ["on-dates", "due-dates", "duedates", "dates"] {
            assert_eq!(normalize_tab_name(tab), "on-dates", "alias {tab}");
        }
    }

    #[test]
    fn test_suggestions_maps_to_default_view() {
        assert_eq!(normalize_tab_name("suggestions"), "");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(normalize_tab_name("unknown-tab"), "unknown-tab");
        assert_eq!(normalize_tab_name("connected-apps"), "connected-apps");
        assert_eq!(normalize_tab_name(""), "");
        assert_eq!(normalize_tab_name("Rules"), "Rules");
    }
}
