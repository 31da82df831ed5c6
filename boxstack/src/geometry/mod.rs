mod extreme_points;

#[doc(inline)]
pub use extreme_points::ExtremePoint;

#[doc(inline)]
pub use extreme_points::ExtremePoints;

#[doc(inline)]
pub use extreme_points::ExtremePointsSnapshot;
