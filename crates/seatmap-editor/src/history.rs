//! Undo/Redo history.
//!
//! A linear log of full scene snapshots (seats + decorative objects) with a
//! cursor. Committing after an undo discards the redo branch. Entry types
//! are edited out of band and do not take part in history.
//!
//! Drag and resize gestures preview outside the log and commit once on
//! release, so a whole gesture is a single step.

use seatmap_core::{DecorativeObject, Scene, Seat};

/// The part of a scene that history tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub seats: Vec<Seat>,
    pub objects: Vec<DecorativeObject>,
}

impl Snapshot {
    pub fn of(scene: &Scene) -> Self {
        Self {
            seats: scene.seats.clone(),
            objects: scene.objects.clone(),
        }
    }

    /// Write this snapshot into `scene`, leaving entry types and canvas size.
    pub fn restore_into(&self, scene: &mut Scene) {
        scene.seats.clone_from(&self.seats);
        scene.objects.clone_from(&self.objects);
    }
}

#[derive(Debug, Clone)]
struct Entry {
    snapshot: Snapshot,
    description: String,
}

/// Snapshot log with a cursor at the current state.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Entry>,
    index: usize,
    /// Maximum number of snapshots kept, `None` for unbounded.
    limit: Option<usize>,
}

impl History {
    /// A log holding only `initial`.
    pub fn new(initial: Snapshot, limit: Option<usize>) -> Self {
        Self {
            entries: vec![Entry {
                snapshot: initial,
                description: "initial".to_string(),
            }],
            index: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// Drop every entry and restart from `initial`.
    pub fn reset(&mut self, initial: Snapshot) {
        *self = Self::new(initial, self.limit);
    }

    /// Truncate any redo branch and append `snapshot` as the current state.
    pub fn commit(&mut self, snapshot: Snapshot, description: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Entry {
            snapshot,
            description: description.to_string(),
        });
        self.index += 1;

        if let Some(limit) = self.limit
            && self.entries.len() > limit
        {
            let overflow = self.entries.len() - limit;
            self.entries.drain(..overflow);
            self.index -= overflow;
        }
        log::debug!("commit #{}: {description}", self.index);
    }

    /// Step back. Returns the description of the undone step and the state to
    /// restore, or `None` at the start of the log.
    pub fn undo(&mut self) -> Option<(&str, &Snapshot)> {
        if self.index == 0 {
            return None;
        }
        let undone = self.index;
        self.index -= 1;
        log::debug!("undo #{undone}");
        Some((
            self.entries[undone].description.as_str(),
            &self.entries[self.index].snapshot,
        ))
    }

    /// Step forward. Returns the description of the redone step and the state
    /// to restore, or `None` at the end of the log.
    pub fn redo(&mut self) -> Option<(&str, &Snapshot)> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        log::debug!("redo #{}", self.index);
        let entry = &self.entries[self.index];
        Some((entry.description.as_str(), &entry.snapshot))
    }

    pub fn current(&self) -> &Snapshot {
        &self.entries[self.index].snapshot
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Description of the step `undo` would revert.
    pub fn undo_description(&self) -> Option<&str> {
        self.can_undo()
            .then(|| self.entries[self.index].description.as_str())
    }

    /// Description of the step `redo` would apply.
    pub fn redo_description(&self) -> Option<&str> {
        self.entries
            .get(self.index + 1)
            .map(|e| e.description.as_str())
    }
}
