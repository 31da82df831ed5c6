use std::fmt::Debug;

use crate::entities::{Stack, StackValue, Stackable};

/// Structural admissibility rules for a container (stacking rules, fragile items, ...).
/// The packers never inspect a constraint, they only ask these three questions.
pub trait StackConstraint: Debug + Send + Sync {
    /// Coarse pre-filter: can this item ever be loaded?
    fn can_accept(&self, stackable: &Stackable) -> bool;

    /// Can the item be added to the current stack at all?
    fn accepts(&self, stack: &Stack, stackable: &Stackable) -> bool;

    /// Is placing the item in orientation `value` with origin `(x, y, z)` admissible?
    fn supports(
        &self,
        stack: &Stack,
        stackable: &Stackable,
        value: &StackValue,
        x: u32,
        y: u32,
        z: u32,
    ) -> bool;
}
