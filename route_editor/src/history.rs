/// A linear undo/redo log of snapshots. There's always a current snapshot. Committing after some
/// undos throws away everything that could've been redone; there's no branching.
#[derive(Clone, Debug)]
pub struct History<T> {
    snapshots: Vec<T>,
    // Invariant: always a valid index into snapshots
    cursor: usize,
}

impl<T> History<T> {
    pub fn new(initial: T) -> History<T> {
        History {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    /// Makes a new snapshot current, discarding anything that could've been redone.
    pub fn commit(&mut self, snapshot: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        debug!(
            "Committed snapshot {} of {}",
            self.cursor,
            self.snapshots.len()
        );
    }

    /// Steps back to the previous snapshot. Does nothing and returns false when there's nothing
    /// older.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        debug!("Undo to snapshot {}", self.cursor);
        true
    }

    /// Steps forward to a snapshot that was undone. Does nothing and returns false when there's
    /// nothing newer.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        debug!("Redo to snapshot {}", self.cursor);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// How many snapshots are retained, including redoable ones.
    pub fn num_snapshots(&self) -> usize {
        self.snapshots.len()
    }
}

impl<T: Default> Default for History<T> {
    fn default() -> History<T> {
        History::new(T::default())
    }
}
