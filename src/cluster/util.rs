use crate::point::Point;

/// Dense symmetric matrix of pairwise Euclidean distances.
///
/// Built once per clustering call and discarded afterwards. O(n²) space,
/// which is the documented scalability bound of this crate: fine for
/// interactive point counts (up to a few thousand), a spatial index would be
/// needed beyond that.
#[derive(Clone, Debug)]
pub(crate) struct DistanceMatrix {
    n: usize,
    values: Vec<f32>,
}

impl DistanceMatrix {
    pub(crate) fn build(points: &[Point]) -> Self {
        let n = points.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(&points[j]);
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.n + j]
    }

    /// All indices within `eps` of point `i`, in ascending index order.
    ///
    /// Includes `i` itself (distance 0). The ascending scan order is part of
    /// the clustering contract: it decides the expansion order and therefore
    /// which cluster claims an ambiguous border point.
    pub(crate) fn neighbors_within(&self, i: usize, eps: f32) -> Vec<usize> {
        (0..self.n).filter(|&j| self.get(i, j) <= eps).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(-1.0, 1.0),
        ];
        let m = DistanceMatrix::build(&points);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert_eq!(m.get(0, 1), 5.0);
    }

    #[test]
    fn test_neighbors_include_self_and_scan_ascending() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let m = DistanceMatrix::build(&points);
        assert_eq!(m.neighbors_within(1, 1.5), vec![0, 1, 3]);
        assert_eq!(m.neighbors_within(2, 0.0), vec![2]);
    }
}
