use std::fmt::{Display, Formatter};

use fixedbitset::FixedBitSet;
use log::warn;

use crate::problem::{Vertex, Weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFormatError {
    TooFewVertices(usize),
    VertexCountMismatch { declared: usize, actual: usize },
    RaggedMatrix { row: usize, len: usize, expected: usize },
    NegativeWeight { from: Vertex, to: Vertex, weight: i64 },
    StopCountMismatch { declared: usize, actual: usize },
    TooFewStops(usize),
    StopOutOfRange(i64),
    DuplicateStop(Vertex),
    /// the heaviest possible segment would not fit into `Weight`
    WeightOverflow { max_weight: i64, arcs: usize },
}

impl Display for DataFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use DataFormatError::*;
        match self {
            TooFewVertices(n) => write!(f, "graph needs at least 2 vertices, got {}", n),
            VertexCountMismatch { declared, actual } => write!(
                f,
                "declared {} vertices but the matrix has {} rows",
                declared, actual
            ),
            RaggedMatrix { row, len, expected } => write!(
                f,
                "matrix row {} has {} entries, expected {}",
                row, len, expected
            ),
            NegativeWeight { from, to, weight } => {
                write!(f, "negative weight {} on arc {}->{}", weight, from, to)
            }
            StopCountMismatch { declared, actual } => write!(
                f,
                "declared {} stop vertices but {} were listed",
                declared, actual
            ),
            TooFewStops(s) => write!(f, "at least 2 stop vertices are required, got {}", s),
            StopOutOfRange(v) => write!(f, "stop vertex {} is out of range", v),
            DuplicateStop(v) => write!(f, "stop vertex {} is listed twice", v),
            WeightOverflow { max_weight, arcs } => write!(
                f,
                "a segment of {} arcs with weight {} exceeds the supported weight range",
                arcs, max_weight
            ),
        }
    }
}

impl std::error::Error for DataFormatError {}

/// Directed weighted graph over `0..n` with a designated set of stop vertices.
///
/// Weights are stored row-major in a single `n * n` buffer.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    data: Vec<Weight>,
    stops: FixedBitSet,
    num_stops: usize,
}

impl Graph {
    /// Builds the graph from raw matrix rows and the listed stop vertices.
    ///
    /// `num_stops` is the declared stop count and has to match `stop_vertices`.
    /// Diagonal entries are dropped since the graph carries no self-loops.
    pub fn from_matrix(
        matrix: &[Vec<i64>],
        num_stops: usize,
        stop_vertices: &[i64],
    ) -> Result<Self, DataFormatError> {
        let n = matrix.len();
        if n < 2 {
            return Err(DataFormatError::TooFewVertices(n));
        }

        let mut data = vec![0; n * n];
        let mut max_weight = 0i64;
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(DataFormatError::RaggedMatrix {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &w) in row.iter().enumerate() {
                if w < 0 {
                    return Err(DataFormatError::NegativeWeight {
                        from: i,
                        to: j,
                        weight: w,
                    });
                }
                if i == j {
                    if w != 0 {
                        warn!("dropping self-loop on vertex {} (weight {})", i, w);
                    }
                    continue;
                }
                max_weight = max_weight.max(w);
                data[i * n + j] = w as Weight;
            }
        }

        // a segment spans at most n - 1 arcs; `Weight::MAX` is reserved for "no bound yet"
        let arcs = n - 1;
        match (arcs as Weight).checked_mul(max_weight as Weight) {
            Some(heaviest) if heaviest < Weight::MAX => {}
            _ => return Err(DataFormatError::WeightOverflow { max_weight, arcs }),
        }

        if stop_vertices.len() != num_stops {
            return Err(DataFormatError::StopCountMismatch {
                declared: num_stops,
                actual: stop_vertices.len(),
            });
        }
        if num_stops < 2 {
            return Err(DataFormatError::TooFewStops(num_stops));
        }

        let mut stops = FixedBitSet::with_capacity(n);
        for &v in stop_vertices {
            if v < 0 || v as usize >= n {
                return Err(DataFormatError::StopOutOfRange(v));
            }
            let v = v as Vertex;
            if stops.contains(v) {
                return Err(DataFormatError::DuplicateStop(v));
            }
            stops.insert(v);
        }

        Ok(Self {
            n,
            data,
            stops,
            num_stops,
        })
    }

    #[inline(always)]
    fn idx(&self, from: Vertex, to: Vertex) -> usize {
        debug_assert!(from < self.n);
        debug_assert!(to < self.n);
        from * self.n + to
    }

    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn num_stops(&self) -> usize {
        self.num_stops
    }

    /// Weight of the arc `from -> to`, `0` if there is none.
    #[inline(always)]
    pub fn weight(&self, from: Vertex, to: Vertex) -> Weight {
        self.data[self.idx(from, to)]
    }

    #[inline(always)]
    pub fn has_arc(&self, from: Vertex, to: Vertex) -> bool {
        self.weight(from, to) > 0
    }

    #[inline(always)]
    pub fn is_stop(&self, v: Vertex) -> bool {
        self.stops.contains(v)
    }

    /// Stop vertices in ascending order.
    pub fn stops(&self) -> impl Iterator<Item=Vertex> + '_ {
        self.stops.ones()
    }

    pub fn successors(&self, from: Vertex) -> impl Iterator<Item=(Vertex, Weight)> + '_ {
        let row = &self.data[from * self.n..(from + 1) * self.n];
        row.iter()
            .enumerate()
            .filter(|(_, &w)| w > 0)
            .map(|(to, &w)| (to, w))
    }
}

#[cfg(test)]
impl Graph {
    pub fn with_arcs(
        n: usize,
        arcs: impl IntoIterator<Item=crate::problem::Arc>,
        stop_vertices: &[Vertex],
    ) -> Result<Self, DataFormatError> {
        let mut matrix = vec![vec![0i64; n]; n];
        for crate::problem::Arc { from, to, weight } in arcs {
            matrix[from][to] = i64::try_from(weight).unwrap_or(i64::MAX);
        }
        let stops: Vec<i64> = stop_vertices.iter().map(|&v| v as i64).collect();
        Self::from_matrix(&matrix, stops.len(), &stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Arc;

    fn matrix(rows: &[&[i64]]) -> Vec<Vec<i64>> {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn weights_are_read_row_major() -> anyhow::Result<()> {
        let graph = Graph::from_matrix(&matrix(&[&[0, 3, 0], &[0, 0, 5], &[7, 0, 0]]), 2, &[0, 2])?;
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.weight(0, 1), 3);
        assert_eq!(graph.weight(1, 2), 5);
        assert_eq!(graph.weight(2, 0), 7);
        assert_eq!(graph.weight(1, 0), 0);
        assert!(!graph.has_arc(0, 2));
        Ok(())
    }

    #[test]
    fn stops_are_reported_in_ascending_order() -> anyhow::Result<()> {
        let graph = Graph::from_matrix(&matrix(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]), 2, &[2, 0])?;
        assert_eq!(graph.stops().collect::<Vec<_>>(), vec![0, 2]);
        assert!(graph.is_stop(2));
        assert!(!graph.is_stop(1));
        assert_eq!(graph.num_stops(), 2);
        Ok(())
    }

    #[test]
    fn successors_skip_missing_arcs() -> anyhow::Result<()> {
        let graph = Graph::from_matrix(&matrix(&[&[0, 4, 0, 2], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]), 2, &[0, 3])?;
        assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![(1, 4), (3, 2)]);
        assert!(graph.successors(1).next().is_none());
        Ok(())
    }

    #[test]
    fn self_loops_are_dropped() -> anyhow::Result<()> {
        let graph = Graph::from_matrix(&matrix(&[&[9, 1], &[1, 0]]), 2, &[0, 1])?;
        assert_eq!(graph.weight(0, 0), 0);
        Ok(())
    }

    #[test]
    fn rejects_single_vertex() {
        let err = Graph::from_matrix(&matrix(&[&[0]]), 1, &[0]).unwrap_err();
        assert_eq!(err, DataFormatError::TooFewVertices(1));
    }

    #[test]
    fn rejects_ragged_matrix() {
        let err = Graph::from_matrix(&matrix(&[&[0, 1], &[1]]), 2, &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            DataFormatError::RaggedMatrix {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let err = Graph::from_matrix(&matrix(&[&[0, -1], &[1, 0]]), 2, &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            DataFormatError::NegativeWeight {
                from: 0,
                to: 1,
                weight: -1
            }
        );
    }

    #[test]
    fn rejects_stop_count_mismatch() {
        let err = Graph::from_matrix(&matrix(&[&[0, 1], &[1, 0]]), 3, &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            DataFormatError::StopCountMismatch {
                declared: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn rejects_invalid_stop_sets() {
        let m = matrix(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]);
        assert_eq!(
            Graph::from_matrix(&m, 1, &[0]).unwrap_err(),
            DataFormatError::TooFewStops(1)
        );
        assert_eq!(
            Graph::from_matrix(&m, 2, &[0, 3]).unwrap_err(),
            DataFormatError::StopOutOfRange(3)
        );
        assert_eq!(
            Graph::from_matrix(&m, 2, &[-1, 0]).unwrap_err(),
            DataFormatError::StopOutOfRange(-1)
        );
        assert_eq!(
            Graph::from_matrix(&m, 2, &[1, 1]).unwrap_err(),
            DataFormatError::DuplicateStop(1)
        );
    }

    #[test]
    fn rejects_weights_whose_segment_sum_overflows() {
        let w = i64::MAX;
        let chain = matrix(&[&[0, w, 0, 0], &[0, 0, w, 0], &[0, 0, 0, w], &[0, 0, 0, 0]]);
        assert_eq!(
            Graph::from_matrix(&chain, 2, &[0, 3]).unwrap_err(),
            DataFormatError::WeightOverflow {
                max_weight: w,
                arcs: 3
            }
        );
    }

    #[test]
    fn accepts_large_weights_that_fit() -> anyhow::Result<()> {
        let w = 1i64 << 62;
        let chain = matrix(&[&[0, w, 0, 0], &[0, 0, w, 0], &[0, 0, 0, w], &[0, 0, 0, 0]]);
        let graph = Graph::from_matrix(&chain, 2, &[0, 3])?;
        assert_eq!(graph.weight(2, 3), 1 << 62);
        Ok(())
    }

    #[test]
    fn builds_from_arcs() -> anyhow::Result<()> {
        let graph = Graph::with_arcs(
            3,
            vec![
                Arc { from: 0, to: 1, weight: 2 },
                Arc { from: 1, to: 2, weight: 3 },
            ],
            &[0, 2],
        )?;
        assert_eq!(graph.weight(0, 1), 2);
        assert_eq!(graph.weight(1, 2), 3);
        assert_eq!(graph.num_stops(), 2);
        Ok(())
    }
}
