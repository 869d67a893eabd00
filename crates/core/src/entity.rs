//! Things with identity: two products with the same id are the same menu item
//! even if their price or description differ between catalog versions.

pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring every other attribute.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
