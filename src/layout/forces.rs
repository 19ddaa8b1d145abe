//! Individual force computations.
//!
//! Each force reads body positions and accumulates into velocities; the
//! simulation combines them additively per tick and integrates afterward.
//! Every inverse-distance force applies the configured minimum-distance
//! floor first, so coincident nodes never divide by zero.

use super::models::LayoutConfig;

/// Simulation body: one graph node's kinetic state.
#[derive(Debug, Clone)]
pub struct Body {
    /// Node id from the materialized graph
    pub id: u64,
    /// Hierarchy level (drives the vertical pull)
    pub level: usize,
    /// Charge strength (negative = repulsion)
    pub charge: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Pinned position while dragging; overrides integration
    pub fixed: Option<(f64, f64)>,
}

/// A link resolved to body indices with its spring parameters.
#[derive(Debug, Clone)]
pub struct Spring {
    pub source: usize,
    pub target: usize,
    /// Rest length
    pub distance: f64,
    /// Spring strength in (0, 1]
    pub strength: f64,
}

/// Separation vector with the minimum-distance floor applied.
///
/// Coincident bodies get a deterministic unit offset derived from their
/// indices instead of a zero vector, so forces always have a direction.
fn separation(bodies: &[Body], i: usize, j: usize, floor: f64) -> (f64, f64, f64) {
    let dx = bodies[j].x - bodies[i].x;
    let dy = bodies[j].y - bodies[i].y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < floor {
        let angle = (i + j) as f64 * 0.618;
        return (angle.cos() * floor, angle.sin() * floor, floor);
    }
    (dx, dy, dist)
}

/// Spring force pulling linked bodies toward their rest distance.
pub fn apply_springs(bodies: &mut [Body], springs: &[Spring], alpha: f64, floor: f64) {
    for spring in springs {
        let (dx, dy, dist) = separation(bodies, spring.source, spring.target, floor);
        let displacement = (dist - spring.distance) / dist * spring.strength * alpha;
        let fx = dx * displacement * 0.5;
        let fy = dy * displacement * 0.5;

        bodies[spring.target].vx -= fx;
        bodies[spring.target].vy -= fy;
        bodies[spring.source].vx += fx;
        bodies[spring.source].vy += fy;
    }
}

/// All-pairs charge repulsion (negative charge pushes bodies apart).
///
/// O(n²); acceptable for the tens-to-low-hundreds of nodes one document
/// produces.
pub fn apply_charge(bodies: &mut [Body], alpha: f64, floor: f64) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (dx, dy, dist) = separation(bodies, i, j, floor);
            let ux = dx / dist;
            let uy = dy / dist;

            // Force on i from j's charge, and vice versa
            let push_on_i = -bodies[j].charge * alpha / dist;
            let push_on_j = -bodies[i].charge * alpha / dist;

            bodies[i].vx -= ux * push_on_i;
            bodies[i].vy -= uy * push_on_i;
            bodies[j].vx += ux * push_on_j;
            bodies[j].vy += uy * push_on_j;
        }
    }
}

/// Weak pull toward the canvas center.
pub fn apply_center(bodies: &mut [Body], cx: f64, cy: f64, strength: f64, alpha: f64) {
    for body in bodies.iter_mut() {
        body.vx += (cx - body.x) * strength * alpha;
        body.vy += (cy - body.y) * strength * alpha;
    }
}

/// Horizontal centering plus level-proportional vertical positioning.
///
/// The vertical pull targets `top_margin + level * level_spacing` with a
/// strength that scales with level, producing a top-to-bottom hierarchy
/// read. Level-0 nodes are left vertically free (the centering force
/// already holds them).
pub fn apply_axes(bodies: &mut [Body], cx: f64, config: &LayoutConfig, alpha: f64) {
    for body in bodies.iter_mut() {
        body.vx += (cx - body.x) * config.x_strength * alpha;

        let target_y = config.top_margin + body.level as f64 * config.level_spacing;
        let strength = (config.y_strength_per_level * body.level as f64).min(1.0);
        body.vy += (target_y - body.y) * strength * alpha;
    }
}

/// Hard minimum-separation collision pass (positional correction).
///
/// Runs after integration so a tick always ends with no two free node
/// centers closer than `radius`. Pinned bodies never move; overlap with a
/// pinned body is resolved entirely by the free one.
pub fn apply_collision(bodies: &mut [Body], radius: f64, iterations: usize, floor: f64) {
    for _ in 0..iterations {
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (dx, dy, dist) = separation(bodies, i, j, floor);
                if dist >= radius {
                    continue;
                }
                let overlap = radius - dist;
                let ux = dx / dist;
                let uy = dy / dist;

                match (bodies[i].fixed.is_some(), bodies[j].fixed.is_some()) {
                    (true, true) => {}
                    (true, false) => {
                        bodies[j].x += ux * overlap;
                        bodies[j].y += uy * overlap;
                    }
                    (false, true) => {
                        bodies[i].x -= ux * overlap;
                        bodies[i].y -= uy * overlap;
                    }
                    (false, false) => {
                        let half = overlap * 0.5;
                        bodies[i].x -= ux * half;
                        bodies[i].y -= uy * half;
                        bodies[j].x += ux * half;
                        bodies[j].y += uy * half;
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: u64, x: f64, y: f64) -> Body {
        Body {
            id,
            level: 0,
            charge: -1000.0,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            fixed: None,
        }
    }

    #[test]
    fn test_springs_pull_distant_bodies_together() {
        let mut bodies = vec![body(0, 0.0, 0.0), body(1, 500.0, 0.0)];
        let springs = vec![Spring {
            source: 0,
            target: 1,
            distance: 120.0,
            strength: 0.8,
        }];
        apply_springs(&mut bodies, &springs, 1.0, 1.0);
        // Far apart (500 > rest 120): source pulled right, target pulled left
        assert!(bodies[0].vx > 0.0);
        assert!(bodies[1].vx < 0.0);
    }

    #[test]
    fn test_springs_push_close_bodies_apart() {
        let mut bodies = vec![body(0, 0.0, 0.0), body(1, 10.0, 0.0)];
        let springs = vec![Spring {
            source: 0,
            target: 1,
            distance: 120.0,
            strength: 0.8,
        }];
        apply_springs(&mut bodies, &springs, 1.0, 1.0);
        assert!(bodies[0].vx < 0.0);
        assert!(bodies[1].vx > 0.0);
    }

    #[test]
    fn test_charge_repels_all_pairs() {
        let mut bodies = vec![body(0, 0.0, 0.0), body(1, 50.0, 0.0)];
        apply_charge(&mut bodies, 1.0, 1.0);
        assert!(bodies[0].vx < 0.0);
        assert!(bodies[1].vx > 0.0);
    }

    #[test]
    fn test_charge_coincident_bodies_no_nan() {
        let mut bodies = vec![body(0, 100.0, 100.0), body(1, 100.0, 100.0)];
        apply_charge(&mut bodies, 1.0, 1.0);
        assert!(bodies[0].vx.is_finite());
        assert!(bodies[0].vy.is_finite());
        // The deterministic nudge gives the pair a direction
        assert!(bodies[0].vx != 0.0 || bodies[0].vy != 0.0);
    }

    #[test]
    fn test_center_pulls_toward_canvas_center() {
        let mut bodies = vec![body(0, 0.0, 0.0)];
        apply_center(&mut bodies, 400.0, 300.0, 0.05, 1.0);
        assert!(bodies[0].vx > 0.0);
        assert!(bodies[0].vy > 0.0);
    }

    #[test]
    fn test_axes_vertical_pull_scales_with_level() {
        let config = LayoutConfig::default();
        let mut bodies = vec![body(0, 400.0, 0.0), body(1, 400.0, 0.0)];
        bodies[0].level = 1;
        bodies[1].level = 3;
        apply_axes(&mut bodies, 400.0, &config, 1.0);
        // Both below their target y, deeper level pulled harder
        assert!(bodies[0].vy > 0.0);
        assert!(bodies[1].vy > bodies[0].vy);
    }

    #[test]
    fn test_axes_level_zero_vertically_free() {
        let config = LayoutConfig::default();
        let mut bodies = vec![body(0, 200.0, 999.0)];
        apply_axes(&mut bodies, 400.0, &config, 1.0);
        assert!((bodies[0].vy - 0.0).abs() < f64::EPSILON);
        assert!(bodies[0].vx > 0.0);
    }

    #[test]
    fn test_collision_separates_overlapping_pair() {
        let mut bodies = vec![body(0, 0.0, 0.0), body(1, 10.0, 0.0)];
        apply_collision(&mut bodies, 70.0, 3, 1.0);
        let dx = bodies[1].x - bodies[0].x;
        let dy = bodies[1].y - bodies[0].y;
        assert!((dx * dx + dy * dy).sqrt() >= 70.0 - 1e-9);
    }

    #[test]
    fn test_collision_pinned_body_does_not_move() {
        let mut bodies = vec![body(0, 0.0, 0.0), body(1, 10.0, 0.0)];
        bodies[0].fixed = Some((0.0, 0.0));
        apply_collision(&mut bodies, 70.0, 3, 1.0);
        assert!((bodies[0].x - 0.0).abs() < f64::EPSILON);
        assert!((bodies[0].y - 0.0).abs() < f64::EPSILON);
        assert!(bodies[1].x >= 70.0 - 1e-9);
    }

    #[test]
    fn test_collision_respects_separated_bodies() {
        let mut bodies = vec![body(0, 0.0, 0.0), body(1, 200.0, 0.0)];
        apply_collision(&mut bodies, 70.0, 3, 1.0);
        assert!((bodies[0].x - 0.0).abs() < f64::EPSILON);
        assert!((bodies[1].x - 200.0).abs() < f64::EPSILON);
    }
}
