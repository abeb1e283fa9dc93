//! Parallel coordinate storage for one class of points.

/// An ordered set of 2D points stored as parallel X and Y sequences.
///
/// Points can only be added as (x, y) pairs, so both sequences always have
/// the same length and index `i` of each refers to the same point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointSet {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point.
    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// X coordinates in insertion order.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Y coordinates in insertion order.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over the points as (x, y) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Collect the points into the pair layout chart widgets consume.
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.iter().collect()
    }
}

impl FromIterator<(f64, f64)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (x, y) in iter {
            set.push(x, y);
        }
        set
    }
}
