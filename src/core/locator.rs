use crate::core::graph::Graph;
use crate::domain::model::Node;
use crate::utils::error::{Result, RouteError};
use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// A start or end argument, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Address(Node),
    /// Host bits given on input are kept here but ignored for membership.
    Subnet(IpNetwork),
}

/// Node identifiers that are not IP addresses are never inside a subnet.
pub fn subnet_contains(subnet: &IpNetwork, node: &str) -> bool {
    node.parse::<IpAddr>().is_ok_and(|ip| subnet.contains(ip))
}

impl Locator {
    /// Tries a CIDR subnet first and falls back to a literal address.
    /// Only `<ip>/<prefix>` counts as a subnet; a bare address stays literal.
    /// Returns `None` for a blank argument.
    pub fn parse(arg: &str) -> Option<Self> {
        let literal = arg.trim();
        if literal.contains('/') {
            if let Ok(subnet) = literal.parse::<IpNetwork>() {
                return Some(Locator::Subnet(subnet));
            }
        }
        if literal.is_empty() {
            None
        } else {
            Some(Locator::Address(literal.to_string()))
        }
    }

    /// Identity shown in the output: a subnet reports its network address.
    pub fn label(&self) -> String {
        match self {
            Locator::Address(node) => node.clone(),
            Locator::Subnet(subnet) => subnet.network().to_string(),
        }
    }

    pub fn matches(&self, node: &str) -> bool {
        match self {
            Locator::Address(address) => address == node,
            Locator::Subnet(subnet) => subnet_contains(subnet, node),
        }
    }
}

/// Multi-source seed set for the search.
#[derive(Debug, Clone, PartialEq)]
pub struct StartSeeds {
    pub label: String,
    pub nodes: Vec<Node>,
}

/// Lazy termination predicate; membership is checked against nodes as the
/// search discovers them.
#[derive(Debug, Clone, PartialEq)]
pub struct EndTarget {
    locator: Locator,
}

impl EndTarget {
    pub fn label(&self) -> String {
        self.locator.label()
    }

    pub fn matches(&self, node: &str) -> bool {
        self.locator.matches(node)
    }
}

/// A subnet seeds from every graph source inside it, in graph order.
/// A literal seeds from itself even if it has no outgoing edges.
pub fn resolve_start(arg: &str, graph: &Graph) -> Result<StartSeeds> {
    let no_start = || RouteError::NoStartNodes {
        locator: arg.to_string(),
    };
    let locator = Locator::parse(arg).ok_or_else(no_start)?;

    let nodes: Vec<Node> = match &locator {
        Locator::Address(node) => vec![node.clone()],
        Locator::Subnet(subnet) => graph
            .sources()
            .filter(|node| subnet_contains(subnet, node))
            .cloned()
            .collect(),
    };
    if nodes.is_empty() {
        return Err(no_start());
    }

    tracing::debug!(start = arg, seeds = nodes.len(), "start locator resolved");
    Ok(StartSeeds {
        label: locator.label(),
        nodes,
    })
}

pub fn resolve_end(arg: &str) -> Result<EndTarget> {
    let locator = Locator::parse(arg).ok_or_else(|| RouteError::NoEndTarget {
        locator: arg.to_string(),
    })?;
    tracing::debug!(end = arg, ?locator, "end locator resolved");
    Ok(EndTarget { locator })
}
