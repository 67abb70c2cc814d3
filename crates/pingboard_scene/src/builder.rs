//! Scene builder: one forward walk over the declarations.
//!
//! Each declaration is applied in source order. Gadget declarations build an
//! [`Entity`], register it, and give it an empty trigger-graph entry; `ball`
//! declarations append a [`Ball`]; `fire` declarations are resolved against
//! the gadgets registered so far. [`SceneBuilder::finish`] consumes the
//! builder, so no declaration can be applied after the scene exists.

use im::Vector;
use pingboard_foundation::{Result, SimulationConfig, Vect};
use pingboard_language::{
    AbsorberDecl, BallDecl, BoardFile, BoardHeader, BumperDecl, Declaration, FireDecl,
    FlipperDecl, Literal, TriangleBumperDecl,
};

use crate::ball::Ball;
use crate::decode;
use crate::entity::{Entity, GadgetKind, GridPoint, Side};
use crate::graph::TriggerGraph;
use crate::registry::NameRegistry;
use crate::scene::Scene;

/// Accumulates gadgets, balls, and wiring for a single board.
#[derive(Debug)]
pub struct SceneBuilder {
    config: SimulationConfig,
    registry: NameRegistry,
    graph: TriggerGraph,
    balls: Vector<Ball>,
}

impl SceneBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            registry: NameRegistry::new(),
            graph: TriggerGraph::new(),
            balls: Vector::new(),
        }
    }

    /// Builds a scene from a parsed board file.
    ///
    /// # Errors
    ///
    /// Returns the first declaration, duplicate name, or unresolved
    /// reference error in source order.
    pub fn build(file: &BoardFile, config: SimulationConfig) -> Result<Scene> {
        let mut builder = Self::new(config);
        for declaration in &file.declarations {
            builder.apply(declaration)?;
        }
        builder.finish(&file.header)
    }

    /// Applies one declaration.
    ///
    /// # Errors
    ///
    /// Returns a declaration error for an invalid field, a duplicate name
    /// error for a reused gadget name, or an unresolved reference error for
    /// a `fire` naming a gadget not yet declared.
    pub fn apply(&mut self, declaration: &Declaration) -> Result<()> {
        match declaration {
            Declaration::SquareBumper(d) => {
                self.add_entity(bumper(d, GadgetKind::SquareBumper)?)
            }
            Declaration::CircleBumper(d) => {
                self.add_entity(bumper(d, GadgetKind::CircularBumper)?)
            }
            Declaration::TriangleBumper(d) => self.add_entity(triangle_bumper(d)?),
            Declaration::Absorber(d) => self.add_entity(absorber(d)?),
            Declaration::LeftFlipper(d) => self.add_entity(flipper(d, Side::Left)?),
            Declaration::RightFlipper(d) => self.add_entity(flipper(d, Side::Right)?),
            Declaration::Ball(d) => {
                let ball = ball(d)?;
                log::debug!("line {}: {ball}", ball.line());
                self.balls.push_back(ball);
                Ok(())
            }
            Declaration::Fire(d) => self.wire(d),
        }
    }

    /// Finalizes the scene, consuming the builder.
    ///
    /// # Errors
    ///
    /// Returns a declaration error if the header lacks a name or carries an
    /// invalid number.
    pub fn finish(self, header: &BoardHeader) -> Result<Scene> {
        Scene::finalize(header, self.registry, self.graph, self.balls, &self.config)
    }

    /// Number of gadgets registered so far.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.registry.len()
    }

    fn add_entity(&mut self, entity: Entity) -> Result<()> {
        log::debug!("line {}: {entity}", entity.line());
        let name = entity.name().to_string();
        self.registry.register(entity)?;
        self.graph.add_node(&name);
        Ok(())
    }

    fn wire(&mut self, decl: &FireDecl) -> Result<()> {
        let line = decl.span.line;
        let added = self
            .graph
            .connect(&self.registry, &decl.trigger.text, &decl.action.text, line)?;
        if added {
            log::debug!(
                "line {line}: {} triggers {}",
                decl.trigger.text,
                decl.action.text
            );
        } else {
            log::debug!(
                "line {line}: {} already triggers {}, ignoring repeat",
                decl.trigger.text,
                decl.action.text
            );
        }
        Ok(())
    }
}

fn origin(x: &Literal, y: &Literal) -> Result<GridPoint> {
    Ok(GridPoint::new(decode::int(x, "x")?, decode::int(y, "y")?))
}

fn bumper(decl: &BumperDecl, kind: GadgetKind) -> Result<Entity> {
    Ok(Entity::new(
        decl.name.text.as_str(),
        origin(&decl.x, &decl.y)?,
        kind,
        decl.span.line,
    ))
}

fn triangle_bumper(decl: &TriangleBumperDecl) -> Result<Entity> {
    let orientation = decode::orientation(decl.orientation.as_ref())?;
    Ok(Entity::new(
        decl.name.text.as_str(),
        origin(&decl.x, &decl.y)?,
        GadgetKind::TriangularBumper { orientation },
        decl.span.line,
    ))
}

fn absorber(decl: &AbsorberDecl) -> Result<Entity> {
    let width = decode::dimension(&decl.width, "width")?;
    let height = decode::dimension(&decl.height, "height")?;
    Ok(Entity::new(
        decl.name.text.as_str(),
        origin(&decl.x, &decl.y)?,
        GadgetKind::Absorber { width, height },
        decl.span.line,
    ))
}

fn flipper(decl: &FlipperDecl, side: Side) -> Result<Entity> {
    let orientation = decode::orientation(decl.orientation.as_ref())?;
    Ok(Entity::new(
        decl.name.text.as_str(),
        origin(&decl.x, &decl.y)?,
        GadgetKind::Flipper { side, orientation },
        decl.span.line,
    ))
}

fn ball(decl: &BallDecl) -> Result<Ball> {
    let position = Vect::new(decode::float(&decl.x, "x")?, decode::float(&decl.y, "y")?);
    let velocity = Vect::new(
        decode::float(&decl.x_velocity, "xVelocity")?,
        decode::float(&decl.y_velocity, "yVelocity")?,
    );
    Ok(Ball::new(
        decl.name.text.as_str(),
        position,
        velocity,
        decl.span.line,
    ))
}
