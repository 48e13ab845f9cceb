use std::sync::{Arc, Mutex};

use crate::models::TodoItem;

/// The in-memory to-do list.
///
/// Cloning shares the same underlying list. Each method takes the lock once,
/// so a push, a clear and a snapshot never observe each other half-done.
pub struct TodoStore {
    items: Arc<Mutex<Vec<TodoItem>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store holding the single seed item a fresh server starts with.
    pub fn seeded() -> Self {
        Self {
            items: Arc::new(Mutex::new(vec![TodoItem::seed()])),
        }
    }

    pub fn push(&self, item: TodoItem) {
        let mut items = self.items.lock().expect("todo store lock poisoned");
        items.push(item);
    }

    pub fn clear(&self) {
        let mut items = self.items.lock().expect("todo store lock poisoned");
        items.clear();
    }

    /// Copy of the whole list in insertion order.
    pub fn snapshot(&self) -> Vec<TodoItem> {
        let items = self.items.lock().expect("todo store lock poisoned");
        items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("todo store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TodoStore {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}
