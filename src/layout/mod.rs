//! Force-directed layout — node/link graph → 2D positions.
//!
//! - [`models`] — layout configuration and position snapshots
//! - [`forces`] — individual force computations (link, charge, center,
//!   axis, collision)
//! - [`simulation`] — the owned [`Simulation`] object with explicit
//!   `step`/`pin`/`unpin`/`reheat` lifecycle
//! - [`viewport`] — renderer-side zoom/pan affine transform, kept out of
//!   simulation coordinates

pub mod forces;
pub mod models;
pub mod simulation;
pub mod viewport;

pub use models::{LayoutConfig, NodePosition};
pub use simulation::Simulation;
pub use viewport::Viewport;
