use std::any::Any;
use std::fmt;

use dyn_clone::DynClone;
use uom::si::f64::{Length, Mass};

use crate::vector::{ForceVector2D, PositionVector2D, VelocityVector2D};

/// Opaque per-particle payload. The engine clones and moves it along with
/// its particle and never looks inside. `Send + Sync` lets batches run on
/// the rayon pool.
pub trait Metadata: Any + DynClone + Send + Sync {
	fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Clone + Send + Sync> Metadata for T {
	fn as_any(&self) -> &dyn Any {
		self
	}
}

dyn_clone::clone_trait_object!(Metadata);

#[derive(Clone)]
pub struct Particle {
	pub mass: Mass,
	// label only, no collision shape
	pub radius: Length,
	pub position: PositionVector2D,
	pub velocity: VelocityVector2D,
	pub forces: ForceVector2D,
	pub metadata: Option<Box<dyn Metadata>>,
}

impl fmt::Debug for Particle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Particle")
			.field("mass", &self.mass)
			.field("radius", &self.radius)
			.field("position", &self.position)
			.field("velocity", &self.velocity)
			.field("forces", &self.forces)
			.field("metadata", &self.metadata.is_some())
			.finish()
	}
}

impl Particle {
	pub fn new(mass: Mass, radius: Length, position: PositionVector2D) -> Self {
		Self {
			mass,
			radius,
			position,
			velocity: VelocityVector2D::zero(),
			forces: ForceVector2D::zero(),
			metadata: None,
		}
	}

	pub fn with_velocity(mut self, velocity: VelocityVector2D) -> Self {
		self.velocity = velocity;
		self
	}

	pub fn with_forces(mut self, forces: ForceVector2D) -> Self {
		self.forces = forces;
		self
	}

	pub fn with_metadata<M: Metadata>(mut self, metadata: M) -> Self {
		self.metadata = Some(Box::new(metadata));
		self
	}

	pub fn metadata(&self) -> Option<&dyn Metadata> {
		self.metadata.as_deref()
	}

	/// Functional update of the position; everything else is carried over.
	pub fn with_position(&self, position: PositionVector2D) -> Self {
		Self {
			position,
			..self.clone()
		}
	}
}
