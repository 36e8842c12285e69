use std::fmt::Display;
use std::io::Write;

use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::CircularList;
use crate::types::Direction;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    direction: Direction,
}

/// Positions of a list, as seen by the `dot` renderer.
struct RingGraph {
    labels: Vec<String>,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for RingGraph {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("ring").expect("static identifier is valid DOT")
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).expect("generated identifier is valid DOT")
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        if *n == 0 {
            dot::LabelText::label(format!("head\n{}", self.labels[*n]))
        } else {
            dot::LabelText::label(self.labels[*n].clone())
        }
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.direction.to_string())
    }

    fn edge_style(&self, e: &Edge) -> dot::Style {
        match e.direction {
            Direction::Forward => dot::Style::Solid,
            Direction::Backward => dot::Style::Dashed,
        }
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for RingGraph {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.labels.len()).collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

fn ring_graph<T: Display>(list: &CircularList<T>) -> RingGraph {
    let n = list.len();
    let mut graph = RingGraph {
        labels: list.iter().map(|v| v.to_string()).collect(),
        edges: Vec::with_capacity(2 * n),
    };
    for i in 0..n {
        graph.edges.push(Edge {
            source: i,
            target: (i + 1) % n,
            direction: Direction::Forward,
        });
        graph.edges.push(Edge {
            source: i,
            target: (i + n - 1) % n,
            direction: Direction::Backward,
        });
    }
    graph
}

/// Writes the ring in DOT format: one node per element labelled with its value,
/// solid `next` edges and dashed `prev` edges. The head is marked.
pub fn render<T: Display, W: Write>(list: &CircularList<T>, w: &mut W) -> std::io::Result<()> {
    let graph = ring_graph(list);
    dot::render(&graph, w)
}

/// Returns the ring in DOT format, see [`render`].
pub fn draw_list<T: Display>(list: &CircularList<T>) -> String {
    let mut buffer = std::io::Cursor::new(Vec::new());
    render(list, &mut buffer).expect("writing into memory cannot fail");
    String::from_utf8_lossy(&buffer.into_inner()).into_owned()
}

/// Writes the ring to a file in DOT format.
pub fn to_dot_file<T: Display>(list: &CircularList<T>, path: &str) -> std::io::Result<()> {
    std::fs::write(path, draw_list(list))
}
