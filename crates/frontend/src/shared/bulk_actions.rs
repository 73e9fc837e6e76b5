/// Выделенные в списке строки для групповых операций
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkSelection {
    ids: Vec<String>,
}

impl BulkSelection {
    pub fn new(initial: Vec<String>) -> Self {
        let mut selection = Self::default();
        for id in initial {
            if !selection.is_selected(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Selected ids in selection order
    pub fn list_elements(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Selects every visible row, or clears the selection when all of them
    /// are already selected.
    pub fn toggle_all(&mut self, visible: &[String]) {
        let all_selected =
            !visible.is_empty() && self.len() == visible.len() && visible.iter().all(|id| self.is_selected(id));
        if all_selected {
            self.reset();
        } else {
            self.ids = visible.to_vec();
        }
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial_selection_is_deduplicated() {
        let selection = BulkSelection::new(ids(&["a", "b", "a"]));
        assert_eq!(selection.list_elements(), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_toggle() {
        let mut selection = BulkSelection::default();
        selection.toggle("a");
        selection.toggle("b");
        assert!(selection.is_selected("a"));
        selection.toggle("a");
        assert!(!selection.is_selected("a"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_all_selects_then_clears() {
        let visible = ids(&["a", "b", "c"]);
        let mut selection = BulkSelection::new(ids(&["b"]));

        selection.toggle_all(&visible);
        assert_eq!(selection.list_elements(), visible.as_slice());

        selection.toggle_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_on_empty_page_does_nothing() {
        let mut selection = BulkSelection::default();
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }
}
