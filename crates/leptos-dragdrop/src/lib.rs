//! Leptos DragDrop Utilities
//!
//! Index-based drag-and-drop for flat lists in Leptos, built on the native
//! HTML5 drag events (`dragstart`, `dragover`, `drop`, `dragend`).

use leptos::prelude::*;
use web_sys::DragEvent;

/// DnD state signals for one list
#[derive(Clone, Copy)]
pub struct ListDndSignals {
    /// Index of the item being dragged
    pub dragged_index_read: ReadSignal<Option<usize>>,
    pub dragged_index_write: WriteSignal<Option<usize>>,
    /// Index of the item currently under the pointer
    pub over_index_read: ReadSignal<Option<usize>>,
    pub over_index_write: WriteSignal<Option<usize>>,
}

impl ListDndSignals {
    /// Whether `index` is the current drop target (tracked)
    pub fn is_over(&self, index: usize) -> bool {
        self.over_index_read.get() == Some(index)
    }

    /// Whether `index` is the item being dragged (tracked)
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragged_index_read.get() == Some(index)
    }
}

pub fn create_list_dnd() -> ListDndSignals {
    let (dragged_index_read, dragged_index_write) = signal(None::<usize>);
    let (over_index_read, over_index_write) = signal(None::<usize>);
    ListDndSignals {
        dragged_index_read,
        dragged_index_write,
        over_index_read,
        over_index_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &ListDndSignals) {
    dnd.dragged_index_write.set(None);
    dnd.over_index_write.set(None);
}

/// Decide whether a drop on `target` moves anything.
///
/// Returns the source index when a drag is in progress and the target differs.
pub fn resolve_drop(dragged: Option<usize>, target: usize) -> Option<usize> {
    match dragged {
        Some(from) if from != target => Some(from),
        _ => None,
    }
}

/// Move the element at `from` to `to`, shifting everything in between.
///
/// Returns false (and leaves the list untouched) when the move is a no-op or
/// either index is out of range.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}

/// Create dragstart handler for a list item
pub fn make_on_dragstart(dnd: ListDndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        // Firefox refuses to start a drag without payload
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &index.to_string());
        }
        dnd.dragged_index_write.set(Some(index));
    }
}

/// Create dragover handler; accepting the drop requires preventing the default
pub fn make_on_dragover(dnd: ListDndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if dnd.dragged_index_read.get_untracked().is_some()
            && dnd.over_index_read.get_untracked() != Some(index)
        {
            dnd.over_index_write.set(Some(index));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: ListDndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.over_index_read.get_untracked() == Some(index) {
            dnd.over_index_write.set(None);
        }
    }
}

/// Create drop handler for a list item.
///
/// Drag state is always cleared, whether or not `on_move(from, to)` fires.
pub fn make_on_drop<F>(dnd: ListDndSignals, index: usize, on_move: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(usize, usize) + Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let dragged = dnd.dragged_index_read.get_untracked();
        end_drag(&dnd);
        if let Some(from) = resolve_drop(dragged, index) {
            on_move(from, index);
        }
    }
}

/// Create dragend handler (fires after drop, or when released outside the list)
pub fn make_on_dragend(dnd: ListDndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_drop() {
        assert_eq!(resolve_drop(Some(2), 0), Some(2));
        assert_eq!(resolve_drop(Some(1), 1), None);
        assert_eq!(resolve_drop(None, 3), None);
    }

    #[test]
    fn test_reorder_forward() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(reorder(&mut items, 1, 3));
        // b is relocated, c and d shift left
        assert_eq!(items, vec!['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn test_reorder_backward() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(reorder(&mut items, 4, 0));
        assert_eq!(items, vec!['e', 'a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_reorder_is_not_a_swap() {
        let mut items = vec![1, 2, 3];
        reorder(&mut items, 0, 2);
        assert_eq!(items, vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!reorder(&mut items, 1, 1));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!reorder(&mut items, 5, 0));
        assert!(!reorder(&mut items, 0, 3));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_preserves_elements() {
        let original: Vec<u32> = (0..8).collect();
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut items = original.clone();
                reorder(&mut items, from, to);
                assert_eq!(items.len(), original.len());
                assert_eq!(items[to], original[from]);
                let mut sorted = items.clone();
                sorted.sort();
                assert_eq!(sorted, original);
            }
        }
    }
}
