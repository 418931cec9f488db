use std::collections::HashMap;

use crate::foundation::rng::RandomSource;
use crate::layout::discovery::NodeLayout;
use crate::network::connection::{Connection, ConnectionKind};

/// Probability that an unordered question pair gets a mesh connection.
pub const DEFAULT_MESH_PROBABILITY: f64 = 0.3;

/// Derives the connection set from discovered positions and the active id.
#[derive(Clone, Copy, Debug)]
pub struct GraphBuilder {
    pub mesh_probability: f64,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            mesh_probability: DEFAULT_MESH_PROBABILITY,
        }
    }
}

impl GraphBuilder {
    pub fn new(mesh_probability: f64) -> Self {
        Self {
            mesh_probability: mesh_probability.clamp(0.0, 1.0),
        }
    }

    /// Build a fresh graph.
    ///
    /// Output order: hub connections (question order), beams, silhouette links, mesh links.
    /// Hub connections inherit `progress` from `previous` by question id so a change of the active
    /// question animates from where the line currently is. Beams always start over.
    #[tracing::instrument(level = "debug", skip(self, layout, previous, rng), fields(nodes = layout.nodes.len()))]
    pub fn build(
        &self,
        layout: &NodeLayout,
        active_id: Option<&str>,
        previous: &[Connection],
        rng: &mut dyn RandomSource,
    ) -> Vec<Connection> {
        let carried: HashMap<&str, f64> = previous
            .iter()
            .filter_map(|c| c.question_id().map(|id| (id, c.progress)))
            .collect();

        let mut out = Vec::with_capacity(
            layout.nodes.len() * 2 + layout.silhouettes.len() + layout.nodes.len().pow(2) / 4,
        );

        for node in &layout.nodes {
            let active = active_id == Some(node.id.as_str());
            let mut c = Connection::hub(node.id.clone(), node.point, layout.hub, active);
            if let Some(&p) = carried.get(node.id.as_str()) {
                c.progress = p;
            }
            out.push(c);
        }

        if let Some(origin_id) = active_id
            && let Some(origin) = layout.position_of(origin_id)
        {
            for node in layout.nodes.iter().filter(|n| n.id != origin_id) {
                out.push(Connection::beam(origin_id, node.id.clone(), origin, node.point));
            }
        }

        for &anchor in &layout.silhouettes {
            out.push(Connection::silhouette(anchor, layout.hub));
        }

        for (i, a) in layout.nodes.iter().enumerate() {
            for b in &layout.nodes[i + 1..] {
                if rng.chance(self.mesh_probability) {
                    out.push(Connection::mesh(a.point, b.point));
                }
            }
        }

        out
    }
}

/// Connection counts by kind, for logs and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphCounts {
    pub hub: usize,
    pub beam: usize,
    pub silhouette: usize,
    pub mesh: usize,
}

impl GraphCounts {
    pub fn of(connections: &[Connection]) -> Self {
        let mut c = Self::default();
        for conn in connections {
            match conn.kind {
                ConnectionKind::Hub { .. } => c.hub += 1,
                ConnectionKind::Beam { .. } => c.beam += 1,
                ConnectionKind::Silhouette => c.silhouette += 1,
                ConnectionKind::Mesh => c.mesh += 1,
            }
        }
        c
    }

    pub fn total(self) -> usize {
        self.hub + self.beam + self.silhouette + self.mesh
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/builder.rs"]
mod tests;
