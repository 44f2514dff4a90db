/// Tracks which placed item is the active selection.
///
/// The planner supports a single active selection. Deleting the selected item
/// clears it; selecting an id that no longer exists is ignored by the planner
/// before it reaches this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use structkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn set_selected_id(&mut self, id: Option<u64>) {
        self.selected_id = id;
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_id == Some(id)
    }

    /// Clears the selection if it points at `id`. Returns true when it did.
    pub fn forget(&mut self, id: u64) -> bool {
        if self.is_selected(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forget_only_clears_matching_id() {
        let mut manager = SelectionManager::new();
        manager.set_selected_id(Some(4));
        assert!(!manager.forget(3));
        assert!(manager.is_selected(4));
        assert!(manager.forget(4));
        assert_eq!(manager.selected_id(), None);
    }
}
