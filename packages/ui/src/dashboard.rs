//! Dashboard controller state: the dataset list and the current selection.
//!
//! ```text
//! Loading ──list ok──▶ Ready (empty | populated)
//!    │                   ▲  │
//!    └──list err──▶ Failed ─┘ (retry refetches)
//! ```
//!
//! Selection is a bare id; the detail view fetches everything else.

use api::DatasetListItem;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub datasets: Vec<DatasetListItem>,
    pub selected: Option<i64>,
    pub phase: ListPhase,
}

impl DashboardState {
    /// Apply the outcome of a `GET /datasets/`.
    ///
    /// On success an empty selection picks the first entry, and a selection
    /// the list no longer contains (evicted or deleted) falls back to the
    /// first entry. On failure the previous list stays visible.
    pub fn apply_list(&mut self, result: Result<Vec<DatasetListItem>, String>) {
        match result {
            Ok(datasets) => {
                let still_listed = self
                    .selected
                    .is_some_and(|id| datasets.iter().any(|d| d.id == id));
                if !still_listed {
                    self.selected = datasets.first().map(|d| d.id);
                }
                self.datasets = datasets;
                self.phase = ListPhase::Ready;
            }
            Err(message) => {
                self.phase = ListPhase::Failed(message);
            }
        }
    }

    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    /// A dataset was uploaded: it becomes the selection before the refetch
    /// lands, wherever it ends up in the list.
    pub fn apply_upload(&mut self, dataset_id: i64) {
        self.selected = Some(dataset_id);
    }

    /// A dataset was deleted: drop it locally until the refetch lands.
    pub fn apply_delete(&mut self, dataset_id: i64) {
        self.datasets.retain(|d| d.id != dataset_id);
        if self.selected == Some(dataset_id) {
            self.selected = self.datasets.first().map(|d| d.id);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> DatasetListItem {
        DatasetListItem {
            id,
            name: format!("set-{id}.csv"),
            uploaded_at: "2024-05-01T10:00:00Z".to_string(),
            equipment_count: 3,
        }
    }

    #[test]
    fn test_starts_loading() {
        let state = DashboardState::default();
        assert!(state.is_loading());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let mut state = DashboardState::default();
        state.apply_list(Ok(vec![]));
        assert_eq!(state.phase, ListPhase::Ready);
        assert!(state.is_empty());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_first_entry_auto_selected() {
        let mut state = DashboardState::default();
        state.apply_list(Ok(vec![item(7), item(3)]));
        assert_eq!(state.selected, Some(7));
    }

    #[test]
    fn test_existing_selection_kept_on_refetch() {
        let mut state = DashboardState::default();
        state.apply_list(Ok(vec![item(7), item(3)]));
        state.select(3);
        state.apply_list(Ok(vec![item(7), item(3)]));
        assert_eq!(state.selected, Some(3));
    }

    #[test]
    fn test_upload_selects_new_dataset_even_if_not_first() {
        let mut state = DashboardState::default();
        state.apply_list(Ok(vec![item(1), item(2)]));
        state.apply_upload(9);
        state.apply_list(Ok(vec![item(1), item(9), item(2)]));
        assert_eq!(state.selected, Some(9));
        assert_eq!(state.datasets.len(), 3);
    }

    #[test]
    fn test_evicted_selection_falls_back_to_first() {
        let mut state = DashboardState::default();
        state.apply_list(Ok(vec![item(5), item(1)]));
        state.select(1);
        state.apply_list(Ok(vec![item(6), item(5)]));
        assert_eq!(state.selected, Some(6));
    }

    #[test]
    fn test_failed_fetch_keeps_stale_list() {
        let mut state = DashboardState::default();
        state.apply_list(Ok(vec![item(1)]));
        state.apply_list(Err("network error".to_string()));
        assert_eq!(state.error(), Some("network error"));
        assert_eq!(state.datasets.len(), 1);
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_delete_moves_selection() {
        let mut state = DashboardState::default();
        state.apply_list(Ok(vec![item(4), item(2)]));
        state.apply_delete(4);
        assert_eq!(state.selected, Some(2));
        state.apply_delete(2);
        assert_eq!(state.selected, None);
        assert!(state.is_empty());
    }
}
