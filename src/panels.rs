//! Visibility state for the log viewport, the main surface, content panels,
//! and log details.
//!
//! Requests for a panel or detail that does not exist are silent no-ops.

use tracing::debug;

use crate::content::ContentStore;

#[derive(Debug, Clone)]
pub struct PanelBoard {
    panel_keys: Vec<String>,
    detail_roles: Vec<String>,
    log_visible: bool,
    main_visible: bool,
    active_panel: Option<String>,
    active_detail: Option<String>,
    reveal_count: u32,
    panel_shows: u32,
}

impl PanelBoard {
    pub fn new(store: &ContentStore) -> Self {
        Self {
            panel_keys: store.panels.iter().map(|p| p.key.clone()).collect(),
            detail_roles: store.log_details.iter().map(|d| d.role.clone()).collect(),
            log_visible: false,
            main_visible: false,
            active_panel: None,
            active_detail: None,
            reveal_count: 0,
            panel_shows: 0,
        }
    }

    pub fn show_log_viewport(&mut self) {
        self.log_visible = true;
    }

    pub fn hide_log_viewport(&mut self) {
        self.log_visible = false;
    }

    pub fn reveal_main_surface(&mut self) {
        self.main_visible = true;
        self.reveal_count += 1;
    }

    pub fn hide_main_surface(&mut self) {
        self.main_visible = false;
    }

    /// Shows exactly one panel. Returns `false` and changes nothing when no
    /// panel is bound to `key`.
    pub fn show_panel(&mut self, key: &str) -> bool {
        if !self.has_panel(key) {
            debug!(panel = key, "no such panel, skipping");
            return false;
        }
        self.hide_all_panels();
        self.active_panel = Some(key.to_string());
        self.panel_shows += 1;
        true
    }

    pub fn hide_all_panels(&mut self) {
        self.active_panel = None;
        self.active_detail = None;
    }

    /// Expands one log detail. Returns `false` for an unknown role.
    pub fn show_log_detail(&mut self, role: &str) -> bool {
        self.hide_all_log_details();
        if !self.detail_roles.iter().any(|r| r == role) {
            debug!(role, "no such log detail, skipping");
            return false;
        }
        self.active_detail = Some(role.to_string());
        true
    }

    pub fn hide_all_log_details(&mut self) {
        self.active_detail = None;
    }

    pub fn has_panel(&self, key: &str) -> bool {
        self.panel_keys.iter().any(|k| k == key)
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn is_main_visible(&self) -> bool {
        self.main_visible
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel.as_deref()
    }

    pub fn active_detail(&self) -> Option<&str> {
        self.active_detail.as_deref()
    }

    /// Times the main surface has been revealed.
    pub fn reveal_count(&self) -> u32 {
        self.reveal_count
    }

    /// Times a panel was successfully shown.
    pub fn panel_shows(&self) -> u32 {
        self.panel_shows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_content_store;

    fn board() -> PanelBoard {
        PanelBoard::new(&default_content_store())
    }

    #[test]
    fn test_starts_with_everything_hidden() {
        let board = board();
        assert!(!board.is_log_visible());
        assert!(!board.is_main_visible());
        assert_eq!(board.active_panel(), None);
        assert_eq!(board.reveal_count(), 0);
    }

    #[test]
    fn test_show_panel_replaces_previous() {
        let mut board = board();
        assert!(board.show_panel("summary"));
        assert!(board.show_panel("contact"));
        assert_eq!(board.active_panel(), Some("contact"));
        assert_eq!(board.panel_shows(), 2);
    }

    #[test]
    fn test_unknown_panel_is_a_no_op() {
        let mut board = board();
        board.show_panel("summary");
        assert!(!board.show_panel("does_not_exist"));
        assert_eq!(board.active_panel(), Some("summary"));
        assert_eq!(board.panel_shows(), 1);
    }

    #[test]
    fn test_log_detail_toggle() {
        let mut board = board();
        assert!(board.show_log_detail("desktop"));
        assert_eq!(board.active_detail(), Some("desktop"));

        assert!(board.show_log_detail("techops"));
        assert_eq!(board.active_detail(), Some("techops"));

        // Unknown role hides everything, shows nothing
        assert!(!board.show_log_detail("nobody"));
        assert_eq!(board.active_detail(), None);
    }

    #[test]
    fn test_hide_all_panels_clears_detail() {
        let mut board = board();
        board.show_panel("logs");
        board.show_log_detail("desktop");
        board.hide_all_panels();
        assert_eq!(board.active_panel(), None);
        assert_eq!(board.active_detail(), None);
    }

    #[test]
    fn test_reveal_is_counted() {
        let mut board = board();
        board.reveal_main_surface();
        board.hide_main_surface();
        board.reveal_main_surface();
        assert_eq!(board.reveal_count(), 2);
        assert!(board.is_main_visible());
    }
}
