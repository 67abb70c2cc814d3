//! The finalized scene and the finalizer that produces it.

use im::{OrdSet, Vector};
use pingboard_foundation::{Error, Result, SimulationConfig};
use pingboard_language::BoardHeader;

use crate::ball::Ball;
use crate::decode;
use crate::entity::Entity;
use crate::graph::TriggerGraph;
use crate::registry::NameRegistry;

/// An immutable board description ready for simulation.
///
/// Produced once by [`SceneBuilder::finish`](crate::SceneBuilder::finish).
/// Cloning is cheap; the collections share structure. Deserializing checks
/// the same invariants the builder guarantees.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SceneRepr"))]
pub struct Scene {
    name: String,
    gravity: f64,
    mu1: f64,
    mu2: f64,
    registry: NameRegistry,
    graph: TriggerGraph,
    time_step: f64,
    balls: Vector<Ball>,
}

impl Scene {
    /// Applies defaults from `config` to the header and assembles the scene.
    ///
    /// # Errors
    ///
    /// Returns a declaration error if the header has no name or one of its
    /// numbers does not decode.
    pub(crate) fn finalize(
        header: &BoardHeader,
        registry: NameRegistry,
        graph: TriggerGraph,
        balls: Vector<Ball>,
        config: &SimulationConfig,
    ) -> Result<Self> {
        let name = header
            .name
            .as_ref()
            .map(|literal| literal.text.clone())
            .ok_or_else(|| {
                Error::declaration("name", "the board declaration needs a name", header.span.line)
            })?;
        let gravity = decode::float_or(header.gravity.as_ref(), "gravity", config.default_gravity)?;
        let mu1 = decode::float_or(header.friction1.as_ref(), "friction1", config.default_mu1)?;
        let mu2 = decode::float_or(header.friction2.as_ref(), "friction2", config.default_mu2)?;

        let scene = Self {
            name,
            gravity,
            mu1,
            mu2,
            registry,
            graph,
            time_step: config.time_step(),
            balls,
        };
        debug_assert!(scene.check().is_ok());
        log::info!(
            "built board {} with {} gadgets, {} trigger edges, {} balls",
            scene.name,
            scene.registry.len(),
            scene.graph.edge_count(),
            scene.balls.len()
        );
        Ok(scene)
    }

    /// Verifies the invariants every finalized scene holds.
    fn check(&self) -> std::result::Result<(), &'static str> {
        if self.name.is_empty() {
            return Err("scene has an empty name");
        }
        if !(self.gravity.is_finite() && self.mu1.is_finite() && self.mu2.is_finite()) {
            return Err("scene gravity and friction must be finite");
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err("scene time step must be finite and positive");
        }
        if !self.registry.is_well_formed() {
            return Err("scene registry is inconsistent with its entities");
        }
        if !self.graph.is_closed_over(&self.registry) {
            return Err("scene trigger graph names unregistered gadgets");
        }
        if !self
            .balls
            .iter()
            .all(|b| b.position().is_finite() && b.velocity().is_finite())
        {
            return Err("scene ball position and velocity must be finite");
        }
        Ok(())
    }

    /// Board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gravity in board units per second squared.
    #[must_use]
    pub const fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Linear friction coefficient.
    #[must_use]
    pub const fn mu1(&self) -> f64 {
        self.mu1
    }

    /// Quadratic friction coefficient.
    #[must_use]
    pub const fn mu2(&self) -> f64 {
        self.mu2
    }

    /// Seconds simulated per frame.
    #[must_use]
    pub const fn time_step(&self) -> f64 {
        self.time_step
    }

    /// All gadgets by name.
    #[must_use]
    pub const fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    /// The trigger graph.
    #[must_use]
    pub const fn graph(&self) -> &TriggerGraph {
        &self.graph
    }

    /// Looks up a gadget by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.registry.get(name)
    }

    /// Iterates over gadgets in name order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.registry.iter()
    }

    /// The gadgets that act when `name` is struck, or `None` for an unknown name.
    #[must_use]
    pub fn triggered_by(&self, name: &str) -> Option<&OrdSet<String>> {
        self.graph.targets(name)
    }

    /// Balls in declaration order.
    #[must_use]
    pub const fn balls(&self) -> &Vector<Ball> {
        &self.balls
    }
}

/// Wire form of [`Scene`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SceneRepr {
    name: String,
    gravity: f64,
    mu1: f64,
    mu2: f64,
    registry: NameRegistry,
    graph: TriggerGraph,
    time_step: f64,
    balls: Vector<Ball>,
}

#[cfg(feature = "serde")]
impl TryFrom<SceneRepr> for Scene {
    type Error = &'static str;

    fn try_from(repr: SceneRepr) -> std::result::Result<Self, Self::Error> {
        let scene = Self {
            name: repr.name,
            gravity: repr.gravity,
            mu1: repr.mu1,
            mu2: repr.mu2,
            registry: repr.registry,
            graph: repr.graph,
            time_step: repr.time_step,
            balls: repr.balls,
        };
        scene.check()?;
        Ok(scene)
    }
}
