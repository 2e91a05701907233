use std::fmt;

use super::snapshot::QuizSnapshot;

/// Handle returned by `QuizSession::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(&QuizSnapshot) + Send>;

/// Callbacks notified synchronously, in subscription order.
#[derive(Default)]
pub(crate) struct ObserverList {
    next_id: u64,
    entries: Vec<(ObserverId, Callback)>,
}

impl ObserverList {
    pub(crate) fn add(&mut self, callback: Callback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Call the most recently added observer only.
    pub(crate) fn notify_last(&mut self, snapshot: &QuizSnapshot) {
        if let Some((_, callback)) = self.entries.last_mut() {
            callback(snapshot);
        }
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, snapshot: &QuizSnapshot) {
        for (_, callback) in &mut self.entries {
            callback(snapshot);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
