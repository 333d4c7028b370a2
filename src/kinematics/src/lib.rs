pub mod constraint;
pub mod edge;
pub mod error;
pub mod integrator;
pub mod particle;
pub mod polygon;
pub mod posbox;
pub mod step;
pub mod vector;
pub mod world;

pub use constraint::{resolve_constraint, resolve_constraint_with, Correction};
pub use edge::Edge2D;
pub use error::{Error, Result};
pub use integrator::resolve_motion;
pub use particle::{Metadata, Particle};
pub use polygon::{Polygon2D, Winding};
pub use posbox::{Boundaries, PosBox};
pub use step::{par_step, par_step_with, step, step_with};
pub use vector::{
	AccelerationVector2D, ForceVector2D, PositionVector2D, Scalar, Vector2D,
	VelocityVector2D,
};
pub use world::World;

// raw storage, always in SI base units
pub type V2 = nalgebra::Vector2<f64>;
