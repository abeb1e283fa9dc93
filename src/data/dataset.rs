//! Dataset split into its two plotted classes.

use super::{PointSet, Record};

/// Points of a dataset partitioned by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledDataset {
    /// Points whose label is zero.
    pub class_zero: PointSet,
    /// Points with any other label.
    pub class_other: PointSet,
}

impl LabeledDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a record to the class chosen by its label.
    pub fn insert(&mut self, record: Record) {
        if record.is_class_zero() {
            self.class_zero.push(record.x, record.y);
        } else {
            self.class_other.push(record.x, record.y);
        }
    }

    /// Total number of points across both classes.
    pub fn len(&self) -> usize {
        self.class_zero.len() + self.class_other.len()
    }

    /// Whether neither class holds a point.
    pub fn is_empty(&self) -> bool {
        self.class_zero.is_empty() && self.class_other.is_empty()
    }
}

impl FromIterator<Record> for LabeledDataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut dataset = Self::new();
        for record in iter {
            dataset.insert(record);
        }
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_zero_label_goes_to_other_class() {
        let dataset: LabeledDataset = vec![
            Record::new(1.0, 1.0, 0),
            Record::new(2.0, 2.0, 1),
            Record::new(3.0, 3.0, 2),
            Record::new(4.0, 4.0, -1),
        ]
        .into_iter()
        .collect();

        assert_eq!(dataset.class_zero.to_pairs(), vec![(1.0, 1.0)]);
        assert_eq!(
            dataset.class_other.to_pairs(),
            vec![(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]
        );
        assert_eq!(dataset.len(), 4);
    }
}
