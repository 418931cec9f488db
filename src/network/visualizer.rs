use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::core::Rect;
use crate::foundation::rng::RandomSource;
use crate::layout::discovery::{ElementRegistry, LayoutDiscovery, NodeLayout};
use crate::network::animate::{StepRates, advance};
use crate::network::builder::{GraphBuilder, GraphCounts};
use crate::network::connection::Connection;
use crate::signal::store::{ActivationStore, Subscription};

/// The network overlay: discovered node positions plus the animated connection graph.
///
/// Owns everything it derives. The active id is read from the store at rebuild time; a store
/// change only marks the graph dirty and the next tick rebuilds against the cached layout.
pub struct NetworkVisualizer {
    store: ActivationStore,
    discovery: LayoutDiscovery,
    layout: Option<NodeLayout>,
    connections: Vec<Connection>,
    builder: GraphBuilder,
    rates: StepRates,
    rng: Box<dyn RandomSource>,
    dirty: Rc<Cell<bool>>,
    rebuilds: u64,
    _subscription: Subscription,
}

impl std::fmt::Debug for NetworkVisualizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkVisualizer")
            .field("nodes", &self.layout.as_ref().map(NodeLayout::len))
            .field("connections", &self.connections.len())
            .field("rebuilds", &self.rebuilds)
            .field("pending_discovery", &self.discovery.is_pending())
            .finish()
    }
}

impl NetworkVisualizer {
    pub fn new(store: ActivationStore, rng: Box<dyn RandomSource>) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move |change| {
            if change.changed() {
                flag.set(true);
            }
        });
        Self {
            store,
            discovery: LayoutDiscovery::default(),
            layout: None,
            connections: Vec::new(),
            builder: GraphBuilder::default(),
            rates: StepRates::default(),
            rng,
            dirty,
            rebuilds: 0,
            _subscription: subscription,
        }
    }

    pub fn with_settle_frames(mut self, frames: u32) -> Self {
        self.discovery = LayoutDiscovery::new(frames);
        self
    }

    pub fn with_builder(mut self, builder: GraphBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn with_rates(mut self, rates: StepRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Last discovered layout, `None` until the first discovery pass.
    pub fn layout(&self) -> Option<&NodeLayout> {
        self.layout.as_ref()
    }

    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn discovery(&self) -> &LayoutDiscovery {
        &self.discovery
    }

    /// Tell discovery about the current question ids and container bounds.
    pub fn observe(&mut self, ids: &[String], container: Rect) {
        self.discovery.observe(ids, container);
    }

    /// Force a discovery pass after the settle delay.
    pub fn invalidate(&mut self) {
        self.discovery.invalidate();
    }

    /// One frame: maybe discover, maybe rebuild, then step the animation.
    ///
    /// Returns `true` while any connection is still animating.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn tick(&mut self, registry: &dyn ElementRegistry) -> bool {
        if let Some(layout) = self.discovery.poll(registry) {
            self.layout = Some(layout);
            self.dirty.set(true);
        }
        if self.layout.is_some() && self.dirty.replace(false) {
            self.rebuild();
        }
        advance(&mut self.connections, self.rates)
    }

    fn rebuild(&mut self) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let active = self.store.current();
        let next = self.builder.build(
            layout,
            active.as_deref(),
            &self.connections,
            self.rng.as_mut(),
        );
        self.connections = next;
        self.rebuilds = self.rebuilds.saturating_add(1);
        let counts = GraphCounts::of(&self.connections);
        tracing::debug!(
            active = ?active,
            hub = counts.hub,
            beam = counts.beam,
            silhouette = counts.silhouette,
            mesh = counts.mesh,
            "network graph rebuilt"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/visualizer.rs"]
mod tests;
