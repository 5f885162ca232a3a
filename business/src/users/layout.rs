//! Which columns are shown, and in what order.

use std::collections::BTreeSet;

use log::debug;

use super::columns::{ColumnDescriptor, ColumnKey};
use super::reorder::relocate;

/// Column order plus visibility.
///
/// `order` is always a permutation of the catalog. `visible` always holds the
/// protected columns (`id`, `actions`); every mutation ends in
/// [`ColumnLayout::enforce_invariants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    order: Vec<ColumnKey>,
    visible: BTreeSet<ColumnKey>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            order: ColumnKey::ALL.to_vec(),
            visible: ColumnKey::ALL.into_iter().collect(),
        }
    }
}

impl ColumnLayout {
    pub fn order(&self) -> &[ColumnKey] {
        &self.order
    }

    pub fn is_visible(&self, key: ColumnKey) -> bool {
        self.visible.contains(&key)
    }

    pub fn visible_keys(&self) -> Vec<ColumnKey> {
        self.order
            .iter()
            .copied()
            .filter(|key| self.visible.contains(key))
            .collect()
    }

    /// Visible descriptors in display order.
    pub fn visible_ordered_columns(&self) -> Vec<&'static ColumnDescriptor> {
        self.visible_keys()
            .into_iter()
            .map(ColumnKey::descriptor)
            .collect()
    }

    /// Shows or hides `key`. Hiding a protected column has no effect.
    pub fn toggle_visibility(&mut self, key: ColumnKey, shown: bool) {
        if shown {
            self.visible.insert(key);
        } else {
            self.visible.remove(&key);
        }
        self.enforce_invariants();
    }

    /// Moves the column shown at `from` to the place of the one shown at `to`.
    ///
    /// Both indices count visible columns only; hidden columns keep their
    /// relative place in the full order. `actions` stays pinned.
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        let visible = self.visible_keys();
        let (Some(&from_key), Some(&to_key)) = (visible.get(from), visible.get(to)) else {
            return false;
        };
        if !is_draggable(from_key) || !is_draggable(to_key) {
            return false;
        }
        let (Some(from_pos), Some(to_pos)) = (self.position(from_key), self.position(to_key))
        else {
            return false;
        };
        let moved = relocate(&mut self.order, from_pos, to_pos);
        if moved {
            debug!("Moved column {from_key} to the place of {to_key}");
        }
        self.enforce_invariants();
        moved
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn position(&self, key: ColumnKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    fn enforce_invariants(&mut self) {
        for key in ColumnKey::PROTECTED {
            self.visible.insert(key);
        }
        debug_assert_eq!(self.order.len(), ColumnKey::ALL.len());
    }
}

/// Header cells that may start a drag or accept a drop.
pub fn is_draggable(key: ColumnKey) -> bool {
    key != ColumnKey::Actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(layout: &ColumnLayout) -> Vec<&'static str> {
        layout
            .visible_ordered_columns()
            .iter()
            .map(|c| c.key.as_str())
            .collect()
    }

    #[test]
    fn default_is_catalog_order_all_visible() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.visible_keys(), ColumnKey::ALL.to_vec());
    }

    #[test]
    fn hidden_columns_are_filtered_out_in_order() {
        let mut layout = ColumnLayout::default();
        layout.toggle_visibility(ColumnKey::Email, false);
        layout.toggle_visibility(ColumnKey::Phone, false);

        assert_eq!(
            keys(&layout),
            vec![
                "id",
                "name",
                "username",
                "age",
                "birthDate",
                "gender",
                "city",
                "company",
                "actions"
            ]
        );
    }

    #[test]
    fn protected_columns_survive_hiding() {
        let mut layout = ColumnLayout::default();
        layout.toggle_visibility(ColumnKey::City, false);
        layout.toggle_visibility(ColumnKey::Id, false);
        layout.toggle_visibility(ColumnKey::Actions, false);

        assert!(layout.is_visible(ColumnKey::Id));
        assert!(layout.is_visible(ColumnKey::Actions));
        assert!(!layout.is_visible(ColumnKey::City));
    }

    #[test]
    fn showing_again_restores_catalog_position() {
        let mut layout = ColumnLayout::default();
        layout.toggle_visibility(ColumnKey::Name, false);
        layout.toggle_visibility(ColumnKey::Name, true);
        assert_eq!(layout.visible_keys(), ColumnKey::ALL.to_vec());
    }

    #[test]
    fn move_column_translates_visible_indices() {
        let mut layout = ColumnLayout::default();
        layout.toggle_visibility(ColumnKey::Username, false);
        // visible: id, name, email, ...
        assert!(layout.move_column(2, 0));

        assert_eq!(&layout.order()[..4], &[
            ColumnKey::Email,
            ColumnKey::Id,
            ColumnKey::Name,
            ColumnKey::Username,
        ]);
        assert_eq!(&keys(&layout)[..3], &["email", "id", "name"]);
    }

    #[test]
    fn actions_column_cannot_be_dragged() {
        let mut layout = ColumnLayout::default();
        let last = layout.visible_keys().len() - 1;

        assert!(!layout.move_column(last, 0));
        assert!(!layout.move_column(0, last));
        assert_eq!(layout, ColumnLayout::default());
    }

    #[test]
    fn out_of_range_or_same_index_is_noop() {
        let mut layout = ColumnLayout::default();
        assert!(!layout.move_column(3, 3));
        assert!(!layout.move_column(0, 42));
        assert_eq!(layout, ColumnLayout::default());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut layout = ColumnLayout::default();
        layout.move_column(1, 4);
        layout.toggle_visibility(ColumnKey::Gender, false);

        layout.reset();
        assert_eq!(layout, ColumnLayout::default());
    }
}
