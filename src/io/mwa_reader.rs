use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    marker::PhantomData,
    path::Path,
    str::FromStr,
};

use super::MwaInstance;
use crate::graph::{
    GraphEdgeEditing, GraphNew, Node, NumEdges, NumNodes, Weight, WeightedDigraph, WeightedEdge,
};

pub type Result<T> = std::io::Result<T>;

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name),
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid value {:?} found. Cannot parse {}.", token, $name),
                ));
            }
        }
    }};
}

pub trait MwaReader: Sized {
    fn try_read_mwa<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_mwa_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<W> MwaReader for MwaInstance<W>
where
    W: Weight + FromStr,
{
    fn try_read_mwa<R: BufRead>(reader: R) -> Result<Self> {
        let mwa_reader = MwaEdgeReader::<R, W>::try_new(reader)?;
        let number_of_nodes = mwa_reader.number_of_nodes();
        let number_of_edges = mwa_reader.number_of_edges();
        let root = mwa_reader.root().unwrap_or(0);

        let edges = mwa_reader.collect::<Result<Vec<_>>>()?;
        raise_error_unless!(
            edges.len() as NumEdges == number_of_edges,
            ErrorKind::InvalidData,
            format!(
                "Header announces {number_of_edges} edges, but {} were found",
                edges.len()
            )
        );

        let mut graph = WeightedDigraph::<W>::new(number_of_nodes);
        graph.add_edges(edges);
        Ok(MwaInstance::new(graph, root))
    }

    fn try_read_mwa_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_mwa(buf_reader)
    }
}

/// Streams the edges of an instance; endpoints are translated to 0-based node ids.
pub struct MwaEdgeReader<R, W> {
    lines: Lines<R>,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
    root: Option<Node>,
    _weight: PhantomData<W>,
}

impl<R: BufRead, W: FromStr> MwaEdgeReader<R, W> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut mwa_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            root: None,
            _weight: PhantomData,
        };

        mwa_reader.parse_header()?;
        Ok(mwa_reader)
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the 0-based root if the header names one
    pub fn root(&self) -> Option<Node> {
        self.root
    }
}

impl<R: BufRead, W: FromStr> Iterator for MwaEdgeReader<R, W> {
    type Item = Result<WeightedEdge<W>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

impl<R: BufRead, W: FromStr> MwaEdgeReader<R, W> {
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim_start().starts_with('c') => continue,
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<()> {
        let line = self.next_non_comment_line()?;

        let Some(line) = line else {
            return Err(std::io::Error::new(ErrorKind::InvalidData, "No header found"));
        };

        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            "Invalid header found; line should start with p"
        );

        raise_error_unless!(
            parts.next() == Some("mwa"),
            ErrorKind::InvalidData,
            "Invalid header found; file type should be \"mwa\""
        );

        self.number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        self.number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        if parts.clone().next().is_some() {
            let root: Node = parse_next_value!(parts, "Header>Root");
            raise_error_unless!(
                (1..=self.number_of_nodes).contains(&root),
                ErrorKind::InvalidData,
                format!("Root {root} is out of range [1, {}]", self.number_of_nodes)
            );
            self.root = Some(root - 1);
        }

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid header found; expected end of line"
        );

        Ok(())
    }

    fn parse_edge_line(&mut self) -> Result<Option<WeightedEdge<W>>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");
        let weight: W = parse_next_value!(parts, "Weight");

        for u in [from, dest] {
            raise_error_unless!(
                (1..=self.number_of_nodes).contains(&u),
                ErrorKind::InvalidData,
                format!("Node {u} is out of range [1, {}]", self.number_of_nodes)
            );
        }

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid edge found; expected end of line"
        );

        Ok(Some(WeightedEdge(from - 1, dest - 1, weight)))
    }
}
