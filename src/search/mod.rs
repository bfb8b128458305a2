mod a_star;
pub use a_star::find_path;

use crate::Cost;
use std::cmp::Ordering;

/// An entry of the open list: a Node and the f-score it was pushed with.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed on the f-score to pop the
/// most promising Node first. f-scores are finite (enforced at Edge insertion), which
/// makes `total_cmp` a valid total order here.
pub(crate) struct OpenElement<Id>(pub Id, pub Cost);

impl<Id> PartialEq for OpenElement<Id> {
    fn eq(&self, rhs: &Self) -> bool {
        self.1.total_cmp(&rhs.1) == Ordering::Equal
    }
}
impl<Id> Eq for OpenElement<Id> {}
impl<Id> PartialOrd for OpenElement<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id> Ord for OpenElement<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}
