use grid_util::Point;
use smallvec::SmallVec;

use crate::{direction::Direction, solver::GridSolver, Warehouse, NEIGHBOUR_ORDER, N_SMALLVEC_SIZE};

/// Unweighted breadth-first search over the 4-connected grid.
#[derive(Clone, Debug)]
pub struct BfsSolver {
    /// Order in which neighbours are expanded. Decides which of several equally short paths
    /// is returned.
    pub order: [Direction; 4],
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver {
            order: NEIGHBOUR_ORDER,
        }
    }
}

impl Default for BfsSolver {
    fn default() -> Self {
        BfsSolver::new()
    }
}

impl GridSolver for BfsSolver {
    type Successors = SmallVec<[Point; N_SMALLVEC_SIZE]>;

    fn successors(&self, warehouse: &Warehouse, node: &Point) -> Self::Successors {
        self.order
            .iter()
            .map(|d| d.step(*node))
            .filter(|p| warehouse.is_traversable(*p))
            .collect()
    }
}
