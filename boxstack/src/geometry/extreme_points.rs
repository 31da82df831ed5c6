use std::cmp::Reverse;

use itertools::Itertools;

use crate::entities::{Placement, StackValue};
use crate::util::assertions;

/// Candidate placement origin `(min_x, min_y, min_z)` together with the maximal free box
/// extending from it. Upper bounds are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExtremePoint {
    pub min_x: u32,
    pub min_y: u32,
    pub min_z: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub max_z: u32,
}

impl ExtremePoint {
    pub fn new(min_x: u32, min_y: u32, min_z: u32, max_x: u32, max_y: u32, max_z: u32) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y && min_z <= max_z);
        ExtremePoint {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    pub fn dx(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn dy(&self) -> u32 {
        self.max_y - self.min_y
    }

    pub fn dz(&self) -> u32 {
        self.max_z - self.min_z
    }

    /// Footprint area of the free box
    pub fn area(&self) -> u64 {
        self.dx() as u64 * self.dy() as u64
    }

    pub fn volume(&self) -> u64 {
        self.area() * self.dz() as u64
    }

    /// True if `value` placed at this point's origin stays within the free box
    #[inline(always)]
    pub fn fits_3d(&self, value: &StackValue) -> bool {
        value.fits_within(self.dx(), self.dy(), self.dz())
    }

    /// True if the free box of `other` lies entirely within the free box of `self`
    pub fn contains(&self, other: &ExtremePoint) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.min_z <= other.min_z
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
            && self.max_z >= other.max_z
    }

    /// True if the occupied region of `p` lies entirely within the free box
    pub fn contains_placement(&self, p: &Placement) -> bool {
        self.min_x <= p.x
            && self.min_y <= p.y
            && self.min_z <= p.z
            && self.max_x >= p.end_x()
            && self.max_y >= p.end_y()
            && self.max_z >= p.end_z()
    }

    /// True if the free box and the occupied region of `p` share a volume
    pub fn intersects(&self, p: &Placement) -> bool {
        self.min_x < p.end_x()
            && p.x < self.max_x
            && self.min_y < p.end_y()
            && p.y < self.max_y
            && self.min_z < p.end_z()
            && p.z < self.max_z
    }

    /// The (up to six) parts of the free box which remain free after `p` is placed:
    /// the slabs left, right, in front of, behind, below and above the occupied region.
    fn split(&self, p: &Placement) -> impl Iterator<Item = ExtremePoint> {
        let e = *self;
        [
            (p.x > e.min_x).then(|| ExtremePoint { max_x: p.x, ..e }),
            (p.end_x() < e.max_x).then(|| ExtremePoint {
                min_x: p.end_x(),
                ..e
            }),
            (p.y > e.min_y).then(|| ExtremePoint { max_y: p.y, ..e }),
            (p.end_y() < e.max_y).then(|| ExtremePoint {
                min_y: p.end_y(),
                ..e
            }),
            (p.z > e.min_z).then(|| ExtremePoint { max_z: p.z, ..e }),
            (p.end_z() < e.max_z).then(|| ExtremePoint {
                min_z: p.end_z(),
                ..e
            }),
        ]
        .into_iter()
        .flatten()
    }
}

/// Free-space decomposition of one container (or one level of it) into maximal free boxes,
/// each anchored at an [`ExtremePoint`].
///
/// Every position where a box could be placed without overlapping an earlier placement lies within
/// the free box of at least one point, and no point's free box is contained in another's.
/// Points are kept ordered bottom-up: by `z`, then `y`, then `x`.
#[derive(Clone, Debug)]
pub struct ExtremePoints {
    dx: u32,
    dy: u32,
    dz: u32,
    points: Vec<ExtremePoint>,
    placements: Vec<Placement>,
    min_area_limit: u64,
    min_volume_limit: u64,
}

impl ExtremePoints {
    pub fn new(dx: u32, dy: u32, dz: u32) -> Self {
        let mut eps = ExtremePoints {
            dx,
            dy,
            dz,
            points: vec![],
            placements: vec![],
            min_area_limit: 0,
            min_volume_limit: 0,
        };
        eps.reset(dx, dy, dz);
        eps
    }

    /// Re-initializes to a single point spanning the full `dx * dy * dz` cuboid.
    /// Minimum area and volume limits are retained.
    pub fn reset(&mut self, dx: u32, dy: u32, dz: u32) {
        self.dx = dx;
        self.dy = dy;
        self.dz = dz;
        self.placements.clear();
        self.points.clear();
        let full = ExtremePoint::new(0, 0, 0, dx, dy, dz);
        if full.volume() > 0 && self.above_limits(&full) {
            self.points.push(full);
        }
    }

    /// Registers `placement`, which was placed at the point with index `index`.
    /// Points overlapping the occupied region are replaced by their remaining free parts,
    /// after which points contained in other points are dropped.
    pub fn add(&mut self, index: usize, placement: &Placement) {
        debug_assert!(
            self.points[index].contains_placement(placement),
            "placement {placement:?} does not fit point {:?}",
            self.points[index]
        );

        let (hit, mut untouched): (Vec<_>, Vec<_>) = self
            .points
            .iter()
            .copied()
            .partition(|p| p.intersects(placement));

        let fragments = hit
            .iter()
            .flat_map(|p| p.split(placement))
            .filter(|f| self.above_limits(f))
            .unique()
            .collect_vec();

        // untouched points are maximal and cannot be contained in a fragment of another point
        let retained = fragments
            .iter()
            .enumerate()
            .filter(|(i, f)| {
                !untouched.iter().any(|u| u.contains(f))
                    && !fragments
                        .iter()
                        .enumerate()
                        .any(|(j, g)| *i != j && g.contains(f))
            })
            .map(|(_, f)| *f)
            .collect_vec();

        untouched.extend(retained);
        self.points = untouched;
        self.sort_points();
        self.placements.push(placement.clone());

        debug_assert!(assertions::extreme_points_are_free(self));
        debug_assert!(assertions::extreme_points_are_maximal(self));
    }

    /// Only keep points which could accommodate an item with the given minimum footprint and volume
    pub fn set_minimum_area_and_volume_limit(&mut self, area: u64, volume: u64) {
        self.min_area_limit = area;
        self.min_volume_limit = volume;
        self.apply_limits();
    }

    pub fn set_minimum_area_limit(&mut self, area: u64) {
        self.min_area_limit = area;
        self.apply_limits();
    }

    pub fn set_minimum_volume_limit(&mut self, volume: u64) {
        self.min_volume_limit = volume;
        self.apply_limits();
    }

    pub fn min_area_limit(&self) -> u64 {
        self.min_area_limit
    }

    pub fn min_volume_limit(&self) -> u64 {
        self.min_volume_limit
    }

    pub fn value(&self, index: usize) -> &ExtremePoint {
        &self.points[index]
    }

    pub fn values(&self) -> &[ExtremePoint] {
        &self.points
    }

    pub fn value_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the first point (bottom-up) at which `value` fits
    pub fn first_fit(&self, value: &StackValue) -> Option<usize> {
        self.points.iter().position(|p| p.fits_3d(value))
    }

    /// Largest free footprint area over all points
    pub fn max_area(&self) -> u64 {
        self.points.iter().map(|p| p.area()).max().unwrap_or(0)
    }

    /// Largest free volume over all points
    pub fn max_volume(&self) -> u64 {
        self.points.iter().map(|p| p.volume()).max().unwrap_or(0)
    }

    /// Placements registered since the last reset
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Extents of the cuboid this structure was last reset to
    pub fn extents(&self) -> (u32, u32, u32) {
        (self.dx, self.dy, self.dz)
    }

    /// Saves the current state to be potentially restored to later.
    pub fn save(&self) -> ExtremePointsSnapshot {
        ExtremePointsSnapshot {
            points: self.points.clone(),
            n_placements: self.placements.len(),
            min_area_limit: self.min_area_limit,
            min_volume_limit: self.min_volume_limit,
        }
    }

    /// Restores a state saved since the last reset.
    pub fn restore(&mut self, snapshot: &ExtremePointsSnapshot) {
        assert!(snapshot.n_placements <= self.placements.len());
        self.points.clone_from(&snapshot.points);
        self.placements.truncate(snapshot.n_placements);
        self.min_area_limit = snapshot.min_area_limit;
        self.min_volume_limit = snapshot.min_volume_limit;
    }

    fn above_limits(&self, p: &ExtremePoint) -> bool {
        p.area() >= self.min_area_limit && p.volume() >= self.min_volume_limit
    }

    fn apply_limits(&mut self) {
        let (area, volume) = (self.min_area_limit, self.min_volume_limit);
        self.points
            .retain(|p| p.area() >= area && p.volume() >= volume);
    }

    fn sort_points(&mut self) {
        self.points
            .sort_by_key(|p| (p.min_z, p.min_y, p.min_x, Reverse(p.volume())));
    }
}

/// Saved state of an [`ExtremePoints`] structure
#[derive(Clone, Debug)]
pub struct ExtremePointsSnapshot {
    points: Vec<ExtremePoint>,
    n_placements: usize,
    min_area_limit: u64,
    min_volume_limit: u64,
}
