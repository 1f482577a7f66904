//! Identity and value-equality markers shared by the domain crates.

/// Something looked up by a stable identifier.
///
/// Products and orders keep their id while their stock, price or items change,
/// and the inventory container finds entries through it.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Compared by value and never mutated once built.
///
/// Order line items are the case here: two items with the same product, quantity
/// and captured unit price are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
