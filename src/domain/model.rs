use serde::Deserialize;

/// Graph node identifier, in practice an IP address literal.
pub type Node = String;

/// One row of the edge file as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub src_ip: String,
    pub dest_ip: String,
    #[serde(default)]
    pub dest_port: Option<String>,
    pub dest_port_weight: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub destination: Node,
    pub port: Option<String>,
    pub weight: f64,
}

/// The edge a hop was reached through.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub port: Option<String>,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub node: Node,
    /// `None` for the first hop of a path.
    pub link: Option<Link>,
}

impl Hop {
    pub fn origin(node: impl Into<Node>) -> Self {
        Self {
            node: node.into(),
            link: None,
        }
    }

    pub fn via(edge: &Edge) -> Self {
        Self {
            node: edge.destination.clone(),
            link: Some(Link {
                port: edge.port.clone(),
                weight: edge.weight,
            }),
        }
    }

    pub fn port(&self) -> Option<&str> {
        self.link.as_ref().and_then(|l| l.port.as_deref())
    }

    pub fn weight(&self) -> f64 {
        self.link.as_ref().map_or(0.0, |l| l.weight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub hops: Vec<Hop>,
}

impl Path {
    pub fn start(node: impl Into<Node>) -> Self {
        Self {
            hops: vec![Hop::origin(node)],
        }
    }

    pub fn extended(&self, edge: &Edge) -> Self {
        let mut hops = Vec::with_capacity(self.hops.len() + 1);
        hops.extend(self.hops.iter().cloned());
        hops.push(Hop::via(edge));
        Self { hops }
    }

    pub fn first(&self) -> &Node {
        &self.hops[0].node
    }

    pub fn last(&self) -> &Node {
        &self.hops[self.hops.len() - 1].node
    }

    /// Number of real (non-synthetic) nodes.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn cost(&self) -> f64 {
        self.hops.iter().map(Hop::weight).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.hops.iter().map(|h| h.node.as_str())
    }
}
