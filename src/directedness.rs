use std::fmt::{self, Display};

/// Orientation of a single edge.
///
/// A graph may hold edges of both orientations at once, so directedness is a
/// property of each [`Edge`](crate::Edge) rather than of the graph.  A
/// directed edge is reachable only from its source; an undirected edge is one
/// logical edge reachable from both of its ends.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    #[default]
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }

    pub fn is_undirected(self) -> bool {
        self == Directedness::Undirected
    }
}

impl Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directedness::Directed => f.write_str("directed"),
            Directedness::Undirected => f.write_str("undirected"),
        }
    }
}

impl quickcheck::Arbitrary for Directedness {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}
