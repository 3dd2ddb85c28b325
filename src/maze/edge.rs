use super::cell::Coordinate;

/// Kind of connection between two neighboring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeType {
    /// Impassable.
    Wall,
    GoodTransition,
    Transition,
    BadTransition,
}

impl EdgeType {
    pub const PASSAGES: [EdgeType; 3] = [
        EdgeType::GoodTransition,
        EdgeType::Transition,
        EdgeType::BadTransition,
    ];

    /// Cost of crossing the edge. Walls report -1 and never contribute to a path.
    pub const fn movement_cost(self) -> i32 {
        match self {
            EdgeType::Wall => -1,
            EdgeType::GoodTransition => 1,
            EdgeType::Transition => 2,
            EdgeType::BadTransition => 3,
        }
    }
}

/// One direction of a connection. The maze always stores the reverse edge with the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Coordinate,
    pub to: Coordinate,
    pub edge_type: EdgeType,
}

impl Edge {
    pub const fn new(from: Coordinate, to: Coordinate, edge_type: EdgeType) -> Self {
        Edge {
            from,
            to,
            edge_type,
        }
    }

    pub const fn reversed(&self) -> Edge {
        Edge::new(self.to, self.from, self.edge_type)
    }

    /// Whether this edge is the canonical direction of its undirected pair (row-major order).
    pub fn is_canonical(&self) -> bool {
        self.from < self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs() {
        assert_eq!(EdgeType::Wall.movement_cost(), -1);
        for passage in EdgeType::PASSAGES {
            assert_ne!(passage, EdgeType::Wall);
            assert!(passage.movement_cost() >= 1);
        }
    }

    #[test]
    fn test_canonical_direction() {
        let edge = Edge::new(
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
            EdgeType::Transition,
        );
        assert!(edge.is_canonical());
        assert!(!edge.reversed().is_canonical());
    }
}
