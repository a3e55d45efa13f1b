//! Data Processor Module
//! Counts how many components share each size.

use crate::data::ComponentTable;

/// Number of components observed with one particular size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBucket {
    pub size: f64,
    pub count: usize,
}

/// Component-size frequencies, strictly ascending by size.
///
/// Every bucket has a count of at least one; sizes never observed are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeHistogram {
    buckets: Vec<SizeBucket>,
}

impl SizeHistogram {
    /// Build a histogram from coerced sizes, skipping missing entries.
    pub fn from_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut values: Vec<f64> = sizes
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .collect();
        values.sort_by(f64::total_cmp);

        let mut buckets: Vec<SizeBucket> = Vec::new();
        for value in values {
            match buckets.last_mut() {
                Some(last) if last.size == value => last.count += 1,
                _ => buckets.push(SizeBucket {
                    size: value,
                    count: 1,
                }),
            }
        }

        Self { buckets }
    }

    pub fn buckets(&self) -> &[SizeBucket] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of components counted.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Height of the tallest bar, zero when empty.
    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Smallest and largest observed size.
    pub fn size_range(&self) -> Option<(f64, f64)> {
        let first = self.buckets.first()?;
        let last = self.buckets.last()?;
        Some((first.size, last.size))
    }
}

/// Aggregation over loaded component tables.
pub struct DataProcessor;

impl DataProcessor {
    /// Count components per distinct size.
    pub fn count_sizes(table: &ComponentTable) -> SizeHistogram {
        SizeHistogram::from_sizes(table.sizes().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(histogram: &SizeHistogram) -> Vec<(f64, usize)> {
        histogram
            .buckets()
            .iter()
            .map(|b| (b.size, b.count))
            .collect()
    }

    #[test]
    fn test_counts_sorted_ascending() {
        let sizes = [3.0, 1.0, 3.0, 2.0, 1.0, 3.0].map(Some);
        let histogram = SizeHistogram::from_sizes(sizes);

        assert_eq!(pairs(&histogram), vec![(1.0, 2), (2.0, 1), (3.0, 3)]);
        assert_eq!(histogram.total(), 6);
        assert_eq!(histogram.max_count(), 3);
        assert_eq!(histogram.size_range(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_missing_sizes_are_excluded() {
        let histogram = SizeHistogram::from_sizes(vec![Some(2.0), None, Some(2.0), None]);

        assert_eq!(pairs(&histogram), vec![(2.0, 2)]);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = SizeHistogram::from_sizes(vec![None, None]);

        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.max_count(), 0);
        assert_eq!(histogram.size_range(), None);
    }

    #[test]
    fn test_non_integer_sizes_keep_their_own_bucket() {
        let histogram = SizeHistogram::from_sizes([1.5, 1.0, 1.5].map(Some));

        assert_eq!(pairs(&histogram), vec![(1.0, 1), (1.5, 2)]);
    }
}
