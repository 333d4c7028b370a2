use rayon::prelude::*;
use uom::si::f64::Time;

use crate::constraint::{resolve_constraint_with, Correction};
use crate::error::{Error, Result};
use crate::integrator::{check_time_step, resolve_motion};
use crate::particle::Particle;
use crate::polygon::Polygon2D;

fn step_one(
	index: usize,
	particle: &Particle,
	polygon: &Polygon2D,
	dt: Time,
	correction: Correction,
) -> Result<Particle> {
	let moved = resolve_motion(particle, dt).map_err(|e| Error::Particle {
		index,
		source: Box::new(e),
	})?;
	Ok(resolve_constraint_with(&moved, polygon, correction))
}

/// Integrates then constrains every particle, returning a new collection in
/// input order. The first failing particle aborts the whole batch.
pub fn step(
	particles: &[Particle],
	polygon: &Polygon2D,
	dt: Time,
) -> Result<Vec<Particle>> {
	step_with(particles, polygon, dt, Correction::NearestEdge)
}

pub fn step_with(
	particles: &[Particle],
	polygon: &Polygon2D,
	dt: Time,
	correction: Correction,
) -> Result<Vec<Particle>> {
	check_time_step(dt)?;
	log::debug!("step: {} particles, dt {:?}", particles.len(), dt);
	particles
		.iter()
		.enumerate()
		.map(|(idx, p)| step_one(idx, p, polygon, dt, correction))
		.collect()
}

/// Same as [`step`], with particles spread over the rayon pool.
pub fn par_step(
	particles: &[Particle],
	polygon: &Polygon2D,
	dt: Time,
) -> Result<Vec<Particle>> {
	par_step_with(particles, polygon, dt, Correction::NearestEdge)
}

pub fn par_step_with(
	particles: &[Particle],
	polygon: &Polygon2D,
	dt: Time,
	correction: Correction,
) -> Result<Vec<Particle>> {
	check_time_step(dt)?;
	log::debug!("par_step: {} particles, dt {:?}", particles.len(), dt);
	// indexed collect keeps input order; report the lowest failing index
	// no matter which worker hit it first
	let results: Vec<Result<Particle>> = particles
		.par_iter()
		.enumerate()
		.map(|(idx, p)| step_one(idx, p, polygon, dt, correction))
		.collect();
	results.into_iter().collect()
}
