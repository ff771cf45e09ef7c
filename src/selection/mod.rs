use crate::model::ItemId;
use std::collections::BTreeSet;
use std::rc::Rc;

pub mod store;

pub use store::SelectionStore;

/// Immutable snapshot of selected item ids.
///
/// Clones share the underlying set. Every change goes through [`Selection::toggled`],
/// which returns a fresh snapshot, so an unchanged snapshot keeps its identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Rc<BTreeSet<ItemId>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns a new snapshot with `id`'s membership flipped.
    pub fn toggled(&self, id: ItemId) -> Self {
        let mut ids = (*self.ids).clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self { ids: Rc::new(ids) }
    }

    /// True when both values are the same snapshot, not merely equal sets.
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ids, &other.ids)
    }
}

impl FromIterator<ItemId> for Selection {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            ids: Rc::new(iter.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn toggled_flips_only_the_given_id() {
        let base: Selection = [1, 4, 9].into_iter().collect();

        let removed = base.toggled(4);
        assert!(!removed.contains(4));
        assert!(removed.contains(1) && removed.contains(9));
        assert_eq!(removed.len(), 2);

        let added = base.toggled(5);
        assert!(added.contains(5));
        assert_eq!(added.len(), 4);
    }

    #[test]
    fn toggled_leaves_the_receiver_untouched() {
        let base: Selection = [2].into_iter().collect();
        let next = base.toggled(2);
        assert!(base.contains(2));
        assert!(next.is_empty());
        assert!(!base.same_snapshot(&next));
    }

    #[test]
    fn double_toggle_restores_membership_but_not_identity() {
        let base: Selection = [3, 6].into_iter().collect();
        let round_trip = base.toggled(6).toggled(6);
        assert_eq!(round_trip, base);
        assert!(!round_trip.same_snapshot(&base));
    }

    #[test]
    fn clones_share_the_snapshot() {
        let base = Selection::new().toggled(1);
        let copy = base.clone();
        assert!(copy.same_snapshot(&base));
        assert!(copy.contains(1));
    }
}
