//! Drag-and-drop reordering shared by rows and columns.

/// Moves the element at `from` to `to`, shifting everything in between by
/// one. Out-of-range or equal indices leave `items` untouched.
///
/// Returns whether anything moved.
pub fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Two-phase drag protocol: remember a source, resolve it on drop.
///
/// `T` is whatever identifies a drag endpoint: a visible column index for
/// headers, a row key for rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragReorder<T> {
    source: Option<T>,
}

impl<T> Default for DragReorder<T> {
    fn default() -> Self {
        Self { source: None }
    }
}

impl<T: PartialEq> DragReorder<T> {
    /// Records the source; a stale source from an interrupted drag is replaced.
    pub fn drag_start(&mut self, source: T) {
        self.source = Some(source);
    }

    /// Ends the drag. Yields `(source, target)` when there was a source and it
    /// differs from `target`.
    pub fn drop_on(&mut self, target: T) -> Option<(T, T)> {
        match self.source.take() {
            Some(source) if source != target => Some((source, target)),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<&T> {
        self.source.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn clear(&mut self) {
        self.source = None;
    }
}
