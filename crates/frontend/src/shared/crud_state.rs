//! View state shared by every resource table.
//!
//! A table loads its collection once on mount and afterwards only patches the
//! in-memory list with the object each successful mutation returns.

use contracts::domain::common::Identified;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CrudList<T> {
    pub items: Vec<T>,
    pub is_loaded: bool,
    pub load_failed: bool,
}

impl<T> Default for CrudList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loaded: false,
            load_failed: false,
        }
    }
}

impl<T: Identified + Clone> CrudList<T> {
    /// Replaces the whole list.
    pub fn apply_loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.is_loaded = true;
        self.load_failed = false;
    }

    pub fn apply_load_failed(&mut self) {
        self.items.clear();
        self.is_loaded = true;
        self.load_failed = true;
    }

    /// Replaces the entry with the same id by the server's version.
    ///
    /// Returns `false` when no entry has that id (list unchanged).
    pub fn apply_updated(&mut self, updated: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == updated.id()) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    pub fn apply_deleted(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Appends the server-assigned object.
    pub fn apply_created(&mut self, created: T) {
        self.items.push(created);
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn create_state<T: Send + Sync + 'static>() -> RwSignal<CrudList<T>> {
    RwSignal::new(CrudList::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, name: &str) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn loaded() -> CrudList<Row> {
        let mut list = CrudList::default();
        list.apply_loaded(vec![row("1", "a"), row("2", "b"), row("3", "c")]);
        list
    }

    #[test]
    fn test_load_replaces_list() {
        let mut list = loaded();
        assert_eq!(list.len(), 3);
        assert!(list.is_loaded);

        list.apply_loaded(vec![row("9", "z")]);
        assert_eq!(list.items, vec![row("9", "z")]);
    }

    #[test]
    fn test_load_failure_leaves_list_empty() {
        let mut list = loaded();
        list.apply_load_failed();
        assert!(list.is_empty());
        assert!(list.load_failed);
        assert!(list.is_loaded);
    }

    #[test]
    fn test_update_replaces_exactly_one_entry() {
        let mut list = loaded();
        assert!(list.apply_updated(row("2", "server")));

        let matching: Vec<&Row> = list.items.iter().filter(|r| r.id == "2").collect();
        assert_eq!(matching, vec![&row("2", "server")]);
        assert_eq!(list.len(), 3);
        // position is kept
        assert_eq!(list.items[1].name, "server");
    }

    #[test]
    fn test_update_of_unknown_id_is_ignored() {
        let mut list = loaded();
        assert!(!list.apply_updated(row("42", "x")));
        assert_eq!(list, loaded());
    }

    #[test]
    fn test_delete_removes_one() {
        let mut list = loaded();
        assert!(list.apply_deleted("1"));
        assert_eq!(list.len(), 2);
        assert!(list.find("1").is_none());

        assert!(!list.apply_deleted("1"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_create_appends() {
        let mut list = loaded();
        list.apply_created(row("4", "d"));
        assert_eq!(list.len(), 4);
        assert_eq!(list.items.last(), Some(&row("4", "d")));
    }
}
