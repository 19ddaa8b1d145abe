//! The force simulation — owned object with an explicit lifecycle.
//!
//! One simulation per live graph view. Each [`Simulation::step`] is one
//! discrete timestep: alpha decays, forces accumulate into velocities,
//! positions integrate, then the collision pass enforces the hard minimum
//! separation. `pin`/`unpin` handle interactive dragging between ticks;
//! `reheat` restores alpha so a dragged layout re-settles.
//!
//! Single-threaded and synchronous: one tick is expected to run per
//! animation frame of the host renderer, and drag mutations apply
//! atomically between ticks through `&mut self`.

use std::collections::HashMap;

use crate::error::NotegraphError;
use crate::graph::{ConceptGraph, LinkKind, NodeKind};

use super::forces::{
    apply_axes, apply_center, apply_charge, apply_collision, apply_springs, Body, Spring,
};
use super::models::{LayoutConfig, NodePosition};

/// Golden angle for the deterministic phyllotaxis initial placement.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// A running force layout over one materialized graph.
pub struct Simulation {
    bodies: Vec<Body>,
    springs: Vec<Spring>,
    id_to_body: HashMap<u64, usize>,
    config: LayoutConfig,
    width: f64,
    height: f64,
    alpha: f64,
    ticks: u64,
}

impl Simulation {
    /// Build a simulation over a graph's nodes and links.
    ///
    /// Initial positions follow a deterministic phyllotaxis spiral around
    /// the canvas center, so repeated runs from the same graph start
    /// identically. Links whose endpoints are missing are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`NotegraphError::InvalidConfig`] for out-of-range layout
    /// parameters or a non-positive canvas size.
    pub fn new(
        graph: &ConceptGraph,
        config: LayoutConfig,
        width: f64,
        height: f64,
    ) -> Result<Self, NotegraphError> {
        config.validate()?;
        if width <= 0.0 || height <= 0.0 {
            return Err(NotegraphError::InvalidConfig(format!(
                "canvas size must be positive, got {width}x{height}"
            )));
        }

        let cx = width / 2.0;
        let cy = height / 2.0;

        let mut bodies = Vec::with_capacity(graph.node_count());
        let mut id_to_body = HashMap::with_capacity(graph.node_count());
        for (i, node) in graph.nodes().into_iter().enumerate() {
            let radius = 10.0 * (0.5 + i as f64).sqrt();
            let angle = i as f64 * GOLDEN_ANGLE;
            let charge = match node.kind {
                NodeKind::Main => config.charge_main,
                _ => config.charge_other,
            };
            id_to_body.insert(node.id, bodies.len());
            bodies.push(Body {
                id: node.id,
                level: node.level,
                charge,
                x: cx + radius * angle.cos(),
                y: cy + radius * angle.sin(),
                vx: 0.0,
                vy: 0.0,
                fixed: None,
            });
        }

        let mut springs = Vec::with_capacity(graph.link_count());
        for link in graph.links() {
            let (Some(&source), Some(&target)) =
                (id_to_body.get(&link.source), id_to_body.get(&link.target))
            else {
                continue;
            };
            let (distance, strength) = match link.kind {
                LinkKind::Hierarchy => (config.hierarchy_distance, config.hierarchy_strength),
                LinkKind::Relation => (config.relation_distance, config.relation_strength),
            };
            springs.push(Spring {
                source,
                target,
                distance,
                strength,
            });
        }

        Ok(Self {
            bodies,
            springs,
            id_to_body,
            config,
            width,
            height,
            alpha: 1.0,
            ticks: 0,
        })
    }

    /// Current simulation temperature.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Whether alpha has decayed below the stopping threshold.
    pub fn is_settled(&self) -> bool {
        self.alpha < self.config.alpha_min
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the simulation by one timestep.
    ///
    /// Pinned bodies keep their exact pinned coordinates; everything else
    /// integrates accumulated forces. The tick always ends with the
    /// collision pass, so no two node centers remain within the collision
    /// radius.
    pub fn step(&mut self) {
        self.alpha -= self.alpha * self.config.alpha_decay;

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let floor = self.config.min_distance;

        apply_springs(&mut self.bodies, &self.springs, self.alpha, floor);
        apply_charge(&mut self.bodies, self.alpha, floor);
        apply_center(&mut self.bodies, cx, cy, self.config.center_strength, self.alpha);
        apply_axes(&mut self.bodies, cx, &self.config, self.alpha);

        for body in &mut self.bodies {
            if let Some((fx, fy)) = body.fixed {
                body.x = fx;
                body.y = fy;
                body.vx = 0.0;
                body.vy = 0.0;
            } else {
                body.vx *= self.config.velocity_decay;
                body.vy *= self.config.velocity_decay;
                body.x += body.vx;
                body.y += body.vy;
            }
        }

        apply_collision(
            &mut self.bodies,
            self.config.collision_radius,
            self.config.collision_iterations,
            floor,
        );

        self.ticks += 1;
    }

    /// Step until settled or `max_ticks` elapses. Returns ticks run.
    pub fn run_to_rest(&mut self, max_ticks: u64) -> u64 {
        let start = self.ticks;
        while !self.is_settled() && self.ticks - start < max_ticks {
            self.step();
        }
        let ran = self.ticks - start;
        tracing::debug!(
            ticks = ran,
            alpha = self.alpha,
            settled = self.is_settled(),
            "layout run finished"
        );
        ran
    }

    /// Pin a node to a position (drag start / drag move) and reheat.
    ///
    /// The node holds exactly this position through subsequent steps until
    /// unpinned.
    pub fn pin(&mut self, id: u64, x: f64, y: f64) -> Result<(), NotegraphError> {
        let idx = *self
            .id_to_body
            .get(&id)
            .ok_or(NotegraphError::UnknownNode(id))?;
        let body = &mut self.bodies[idx];
        body.fixed = Some((x, y));
        body.x = x;
        body.y = y;
        body.vx = 0.0;
        body.vy = 0.0;
        self.reheat();
        Ok(())
    }

    /// Release a pinned node (drag end), letting the layout cool again.
    pub fn unpin(&mut self, id: u64) -> Result<(), NotegraphError> {
        let idx = *self
            .id_to_body
            .get(&id)
            .ok_or(NotegraphError::UnknownNode(id))?;
        self.bodies[idx].fixed = None;
        Ok(())
    }

    /// Restore alpha so the simulation resumes settling.
    pub fn reheat(&mut self) {
        self.alpha = self.alpha.max(self.config.reheat_alpha);
    }

    /// Immutable snapshot of all node positions, in ascending id order.
    pub fn positions(&self) -> Vec<NodePosition> {
        self.bodies
            .iter()
            .map(|b| NodePosition {
                id: b.id,
                x: b.x,
                y: b.y,
            })
            .collect()
    }

    /// Position of a single node.
    pub fn position(&self, id: u64) -> Option<NodePosition> {
        let idx = *self.id_to_body.get(&id)?;
        let body = &self.bodies[idx];
        Some(NodePosition {
            id,
            x: body.x,
            y: body.y,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
