use std::cmp::Ordering;

use boxstack::entities::{StackValue, Stackable};
use boxstack::geometry::ExtremePoint;

use crate::config::LaffPolicy;

/// An item in one orientation at one extreme point, considered for placement
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub stackable: &'a Stackable,
    pub value: &'a StackValue,
    pub point: &'a ExtremePoint,
}

/// Decides which candidate the largest-area-fit-first packer places next.
/// On ties the candidate found first is kept.
pub trait CandidatePolicy: Send + Sync {
    /// True if `candidate` should replace `best` as the item opening a level.
    /// The level's height is fixed by this choice.
    fn better_first(&self, best: &Candidate, candidate: &Candidate) -> bool;

    /// True if `candidate` should replace `best` as the next item within a level
    fn better_next(&self, best: &Candidate, candidate: &Candidate) -> bool;
}

/// Largest footprint first, the larger volume breaks ties
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestArea;

impl CandidatePolicy for LargestArea {
    fn better_first(&self, best: &Candidate, candidate: &Candidate) -> bool {
        area_then_volume(best, candidate) == Ordering::Greater
    }

    fn better_next(&self, best: &Candidate, candidate: &Candidate) -> bool {
        area_then_volume(best, candidate) == Ordering::Greater
    }
}

/// Largest footprint opens a level, within it the largest volume goes first
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestVolume;

impl CandidatePolicy for LargestVolume {
    fn better_first(&self, best: &Candidate, candidate: &Candidate) -> bool {
        area_then_volume(best, candidate) == Ordering::Greater
    }

    fn better_next(&self, best: &Candidate, candidate: &Candidate) -> bool {
        let (b, c) = (best.value, candidate.value);
        c.volume()
            .cmp(&b.volume())
            .then(c.area().cmp(&b.area()))
            == Ordering::Greater
    }
}

/// Ordering of `candidate` relative to `best`
fn area_then_volume(best: &Candidate, candidate: &Candidate) -> Ordering {
    let (b, c) = (best.value, candidate.value);
    c.area().cmp(&b.area()).then(c.volume().cmp(&b.volume()))
}

impl LaffPolicy {
    pub fn policy(&self) -> Box<dyn CandidatePolicy> {
        match self {
            LaffPolicy::LargestArea => Box::new(LargestArea),
            LaffPolicy::LargestVolume => Box::new(LargestVolume),
        }
    }
}
