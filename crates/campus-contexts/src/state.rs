//! Reconciliation state shared by every domain context.

use campus_types::{Assignment, Course, Enrollment, Lesson, Quiz, Submission};

/// An entity that can live in a context collection.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The server-assigned identifier.
    fn id(&self) -> &str;
}

impl Entity for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Lesson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Quiz {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Enrollment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Assignment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Submission {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Observable state of one entity collection.
///
/// `error` and `message` are mutually exclusive after any operation
/// resolves; both are cleared when the next one begins. Whichever
/// operation resolves last wins the slot.
#[derive(Debug)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            message: None,
        }
    }
}

impl<T: Entity> ResourceState<T> {
    /// Clear both outcome slots before a new operation starts.
    pub fn reset_messages(&mut self) {
        self.error = None;
        self.message = None;
    }

    /// Replace the whole collection with a fresh server listing.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Append a newly created entity.
    pub fn apply_created(&mut self, item: T) {
        self.items.push(item);
    }

    /// Swap the updated entity into place, preserving its position.
    ///
    /// The current selection is refreshed too when it is the same entity.
    /// An update for an entity not in the collection only touches the
    /// selection; the listing catches up on the next fetch.
    pub fn apply_updated(&mut self, item: T) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id() == item.id()) {
            *slot = item.clone();
        }
        if let Some(current) = &self.current {
            if current.id() == item.id() {
                self.current = Some(item);
            }
        }
    }

    /// Drop the deleted entity from the collection and the selection.
    pub fn apply_deleted(&mut self, id: &str) {
        self.items.retain(|i| i.id() != id);
        if let Some(current) = &self.current {
            if current.id() == id {
                self.current = None;
            }
        }
    }

    /// Set or clear the current selection.
    pub fn set_current(&mut self, item: Option<T>) {
        self.current = item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, title: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            instructor: None,
            category: None,
            price: None,
            media: Vec::new(),
            lesson_count: None,
        }
    }

    #[test]
    fn created_entities_are_appended() {
        let mut state = ResourceState::default();
        state.replace_all(vec![course("c-1", "Rust")]);
        state.apply_created(course("c-2", "Tokio"));

        let ids: Vec<&str> = state.items.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["c-1", "c-2"]);
    }

    #[test]
    fn updates_preserve_position() {
        let mut state = ResourceState::default();
        state.replace_all(vec![
            course("c-1", "Rust"),
            course("c-2", "Tokio"),
            course("c-3", "Serde"),
        ]);

        state.apply_updated(course("c-2", "Tokio, revised"));

        assert_eq!(state.items[1].id, "c-2");
        assert_eq!(state.items[1].title, "Tokio, revised");
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn updating_the_selected_entity_refreshes_the_selection() {
        let mut state = ResourceState::default();
        state.replace_all(vec![course("c-1", "Rust")]);
        state.set_current(Some(course("c-1", "Rust")));

        state.apply_updated(course("c-1", "Rust, 2nd ed."));

        assert_eq!(state.current.as_ref().unwrap().title, "Rust, 2nd ed.");
    }

    #[test]
    fn update_for_unknown_entity_leaves_listing_alone() {
        let mut state = ResourceState::default();
        state.replace_all(vec![course("c-1", "Rust")]);

        state.apply_updated(course("c-9", "Phantom"));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "c-1");
    }

    #[test]
    fn delete_drops_entity_and_selection() {
        let mut state = ResourceState::default();
        state.replace_all(vec![course("c-1", "Rust"), course("c-2", "Tokio")]);
        state.set_current(Some(course("c-2", "Tokio")));

        state.apply_deleted("c-2");

        assert_eq!(state.items.len(), 1);
        assert!(state.current.is_none());

        // Deleting again is a no-op.
        state.apply_deleted("c-2");
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn last_resolved_update_of_the_same_entity_wins() {
        let mut state = ResourceState::default();
        state.replace_all(vec![course("c-1", "Rust")]);
        state.set_current(Some(course("c-1", "Rust")));

        // Two edits of the same course resolve out of order: the one
        // applied last overwrites the record wholesale.
        state.apply_updated(course("c-1", "Rust, draft B"));
        state.apply_updated(course("c-1", "Rust, draft A"));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "Rust, draft A");
        assert_eq!(state.current.as_ref().unwrap().title, "Rust, draft A");
    }

    #[test]
    fn last_resolved_outcome_wins_the_slot() {
        let mut state: ResourceState<Course> = ResourceState::default();

        state.reset_messages();
        state.error = Some("No response from the server.".to_string());

        // A later operation clears the stale outcome before resolving.
        state.reset_messages();
        assert!(state.error.is_none());
        state.message = Some("Course Created Successfully!".to_string());

        assert!(state.error.is_none());
        assert_eq!(
            state.message.as_deref(),
            Some("Course Created Successfully!")
        );
    }
}
