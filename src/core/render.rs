use crate::core::port_names::service_name;
use crate::domain::model::{Link, Path};
use serde::{Deserialize, Serialize};

/// How segments are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathColoring {
    #[default]
    Plain,
    /// Paths tied for the fewest real nodes.
    ByFastest,
    /// Segments whose entering edge weighs exactly the highlight weight.
    ByWeight,
}

impl PathColoring {
    /// Unknown or missing modes mean no highlighting.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("byFastest") => PathColoring::ByFastest,
            Some("byWeight") => PathColoring::ByWeight,
            _ => PathColoring::Plain,
        }
    }
}

/// Fixed fields of the segment protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub delimiter: String,
    pub link_width: u32,
    pub node_type: String,
    pub highlight_color: String,
    pub base_color: String,
    /// Weight singled out by `byWeight`.
    pub highlight_weight: f64,
    pub port_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            delimiter: " ### ".to_string(),
            link_width: 5,
            node_type: "server".to_string(),
            highlight_color: "red".to_string(),
            base_color: "black".to_string(),
            highlight_weight: 10.0,
            port_prefix: "TCP:".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PathRenderer {
    options: RenderOptions,
    coloring: PathColoring,
    named_ports: bool,
}

impl PathRenderer {
    pub fn new(options: RenderOptions, coloring: PathColoring, named_ports: bool) -> Self {
        Self {
            options,
            coloring,
            named_ports,
        }
    }

    fn port_label(&self, port: Option<&str>) -> String {
        let Some(port) = port else {
            return String::new();
        };
        if self.named_ports {
            if let Some(name) = port.parse::<u16>().ok().and_then(service_name) {
                return name.to_string();
            }
        }
        format!("{}{}", self.options.port_prefix, port)
    }

    /// One line per path. Each line starts with a segment from `start_label`
    /// to the first node and ends with one from the last node to `end_label`.
    pub fn render(&self, paths: &[Path], start_label: &str, end_label: &str) -> Vec<String> {
        let fewest_nodes = paths.iter().map(Path::len).min().unwrap_or(0);

        paths
            .iter()
            .map(|path| {
                let fastest = path.len() == fewest_nodes;
                let mut stops: Vec<(&str, Option<&Link>)> = Vec::with_capacity(path.len() + 2);
                stops.push((start_label, None));
                stops.extend(path.hops.iter().map(|h| (h.node.as_str(), h.link.as_ref())));
                stops.push((end_label, None));

                stops
                    .windows(2)
                    .map(|pair| self.segment(pair[0].0, pair[1].0, pair[1].1, fastest, path.len()))
                    .collect::<Vec<_>>()
                    .join(&self.options.delimiter)
            })
            .collect()
    }

    fn segment(
        &self,
        from: &str,
        to: &str,
        link: Option<&Link>,
        fastest: bool,
        node_count: usize,
    ) -> String {
        let weight = link.map_or(0.0, |l| l.weight);
        let highlighted = match self.coloring {
            PathColoring::Plain => false,
            PathColoring::ByFastest => fastest,
            PathColoring::ByWeight => weight == self.options.highlight_weight,
        };
        let color = if highlighted {
            &self.options.highlight_color
        } else {
            &self.options.base_color
        };
        // Synthetic hops print a bare 0, real edges always show a decimal.
        let weight_text = match link {
            Some(l) => float_text(l.weight),
            None => "0".to_string(),
        };

        format!(
            "from={from}, to={to}, linkColor={color}, value={from}, linkWidth={width}, type={kind}, linkText={text}, weight={weight_text}, nodeCount={node_count}",
            width = self.options.link_width,
            kind = self.options.node_type,
            text = self.port_label(link.and_then(|l| l.port.as_deref())),
        )
    }
}

/// Shortest round-trip text with a decimal point, switching to a signed,
/// two-digit exponent outside `1e-4 <= |w| < 1e16` (`1e+16`, `1e-05`).
fn float_text(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
