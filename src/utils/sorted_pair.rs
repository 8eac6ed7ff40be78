use core::ops::Deref;

/// A pair of elements sorted in increasing order.
///
/// This is how unordered pairs of proxies are deduplicated: `SortedPair::new(a, b)` and
/// `SortedPair::new(b, a)` are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SortedPair<T: PartialOrd>([T; 2]);

impl<T: PartialOrd> SortedPair<T> {
    /// Sorts two elements in increasing order into a new pair.
    pub fn new(element1: T, element2: T) -> Self {
        if element1 > element2 {
            SortedPair([element2, element1])
        } else {
            SortedPair([element1, element2])
        }
    }

    /// The smallest element of this pair.
    #[inline]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// The largest element of this pair.
    #[inline]
    pub fn second(&self) -> &T {
        &self.0[1]
    }
}

impl<T: PartialOrd + Copy> SortedPair<T> {
    /// Both elements of this pair as a tuple, smallest first.
    #[inline]
    pub fn as_tuple(&self) -> (T, T) {
        (self.0[0], self.0[1])
    }
}

impl<T: PartialOrd> Deref for SortedPair<T> {
    type Target = [T; 2];

    fn deref(&self) -> &[T; 2] {
        &self.0
    }
}
