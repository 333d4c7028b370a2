use uom::si::f64::Time;
use uom::si::time::second;

use crate::constraint::Correction;
use crate::error::Result;
use crate::particle::Particle;
use crate::polygon::Polygon2D;
use crate::step::{par_step_with, step_with};

/// Owns a particle collection and advances it frame by frame.
pub struct World {
	pub dt: Time,
	// steps per frame
	pub substeps: usize,
	pub parallel: bool,
	pub correction: Correction,
	time: Time,
	polygon: Polygon2D,
	particles: Vec<Particle>,
}

impl World {
	pub fn new(polygon: Polygon2D, particles: Vec<Particle>) -> Self {
		log::info!(
			"world: {} particles, {} vertices",
			particles.len(),
			polygon.vertices().len()
		);
		Self {
			dt: Time::new::<second>(0.002),
			substeps: 10,
			parallel: false,
			correction: Correction::NearestEdge,
			time: Time::new::<second>(0.),
			polygon,
			particles,
		}
	}

	pub fn with_dt(mut self, dt: Time) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_substeps(mut self, substeps: usize) -> Self {
		self.substeps = substeps;
		self
	}

	pub fn with_parallel(mut self, parallel: bool) -> Self {
		self.parallel = parallel;
		self
	}

	pub fn with_correction(mut self, correction: Correction) -> Self {
		self.correction = correction;
		self
	}

	pub fn time(&self) -> Time {
		self.time
	}

	pub fn polygon(&self) -> &Polygon2D {
		&self.polygon
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// One step. On error the collection and clock are left as they were.
	pub fn update_frame(&mut self) -> Result<()> {
		let next = if self.parallel {
			par_step_with(&self.particles, &self.polygon, self.dt, self.correction)?
		} else {
			step_with(&self.particles, &self.polygon, self.dt, self.correction)?
		};
		self.particles = next;
		self.time += self.dt;
		Ok(())
	}

	pub fn run(&mut self, frames: usize) -> Result<()> {
		for _ in 0..frames {
			for _ in 0..self.substeps {
				self.update_frame()?;
			}
		}
		Ok(())
	}
}
