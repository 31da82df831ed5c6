mod count;
mod rank;
mod slice;

#[doc(inline)]
pub use count::count_permutations;

#[doc(inline)]
pub use rank::kth_permutation;

#[doc(inline)]
pub use rank::next_permutation;

#[doc(inline)]
pub use rank::skip_prefix;

#[doc(inline)]
pub use slice::PermutationSlice;

#[doc(inline)]
pub use slice::split_permutations;

#[doc(inline)]
pub use slice::without_items;
