use serde::{Deserialize, Serialize};

/// Screen transition requested when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    Won {
        target_count: usize,
        cleared_count: usize,
    },
    Lost,
}

/// Single-slot mailbox for a session's navigation event.
///
/// At most one event is ever accepted, and `take` hands it out once. Reading
/// session state again never re-delivers it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationMailbox {
    pending: Option<NavigationEvent>,
    posted: bool,
}

impl NavigationMailbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` (and drops `event`) if an event was already posted.
    pub fn post(&mut self, event: NavigationEvent) -> bool {
        if self.posted {
            return false;
        }
        self.posted = true;
        self.pending = Some(event);
        true
    }

    pub fn take(&mut self) -> Option<NavigationEvent> {
        self.pending.take()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&NavigationEvent> {
        self.pending.as_ref()
    }

    /// True once an event has been posted, even after it was taken.
    #[must_use]
    pub fn has_posted(&self) -> bool {
        self.posted
    }
}
