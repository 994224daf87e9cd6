use core::fmt;

/// The kinds of entity that can occupy a cell of the [Warehouse](crate::Warehouse).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Robot,
    Package,
    Obstacle,
}

/// State of a single grid cell. Each in-bounds coordinate holds exactly one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(EntityKind),
    PathMarker,
}

impl Cell {
    pub const ROBOT: Cell = Cell::Occupied(EntityKind::Robot);
    pub const PACKAGE: Cell = Cell::Occupied(EntityKind::Package);
    pub const OBSTACLE: Cell = Cell::Occupied(EntityKind::Obstacle);

    /// Symbol used by the text rendering:
    /// - `0` empty
    /// - `R` robot
    /// - `P` package
    /// - `1` obstacle
    /// - `*` path marker
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Occupied(EntityKind::Robot) => 'R',
            Cell::Occupied(EntityKind::Package) => 'P',
            Cell::Occupied(EntityKind::Obstacle) => '1',
            Cell::PathMarker => '*',
        }
    }

    /// Inverse of [symbol](Self::symbol).
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '0' => Some(Cell::Empty),
            'R' => Some(Cell::ROBOT),
            'P' => Some(Cell::PACKAGE),
            '1' => Some(Cell::OBSTACLE),
            '*' => Some(Cell::PathMarker),
            _ => None,
        }
    }

    /// Whether the search may enter this cell. The package cell is a destination, not a blocker.
    pub fn is_traversable(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Occupied(EntityKind::Package))
    }

    /// Cells that can be overwritten by a placement without destroying an entity marker.
    pub(crate) fn is_free(&self) -> bool {
        matches!(self, Cell::Empty | Cell::PathMarker)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
