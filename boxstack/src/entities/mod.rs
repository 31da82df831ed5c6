mod constraint;
mod container;
mod instance;
mod pack_result;
mod placement;
mod stack;
mod stackable;

#[doc(inline)]
pub use stackable::AllowedRotation;

#[doc(inline)]
pub use stackable::StackValue;

#[doc(inline)]
pub use stackable::Stackable;

#[doc(inline)]
pub use stackable::StackableItem;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use container::ContainerStackValue;

#[doc(inline)]
pub use constraint::StackConstraint;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use stack::PackedContainer;

#[doc(inline)]
pub use stack::Stack;

#[doc(inline)]
pub use pack_result::DefaultPackResultComparator;

#[doc(inline)]
pub use pack_result::PackResult;

#[doc(inline)]
pub use pack_result::PackResultComparator;
