//! Semi-implicit (symplectic) Euler integration.

use uom::si::f64::Time;

use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::vector::{AccelerationVector2D, PositionVector2D, VelocityVector2D};

pub(crate) fn check_time_step(dt: Time) -> Result<()> {
	if !(dt.value > 0.0 && dt.value.is_finite()) {
		return Err(Error::InvalidTimeStep);
	}
	Ok(())
}

/// Advances one particle by `dt` under its accumulated forces.
///
/// The velocity is updated first and the new velocity moves the position.
/// Mass, radius and metadata are carried over unchanged.
pub fn resolve_motion(particle: &Particle, dt: Time) -> Result<Particle> {
	check_time_step(dt)?;
	if !(particle.mass.value > 0.0) {
		return Err(Error::NonPositiveMass);
	}
	let accel: AccelerationVector2D =
		particle.forces.checked_div_quantity(particle.mass)?;
	let velocity: VelocityVector2D = particle.velocity + accel * dt;
	let position: PositionVector2D = particle.position + velocity * dt;
	Ok(Particle {
		position,
		velocity,
		..particle.clone()
	})
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::vector::ForceVector2D;
	use uom::si::f64::{Force, Length, Mass, Velocity};
	use uom::si::force::newton;
	use uom::si::length::meter;
	use uom::si::mass::kilogram;
	use uom::si::time::second;
	use uom::si::velocity::meter_per_second;

	fn falling(mass: f64) -> Particle {
		Particle::new(
			Mass::new::<kilogram>(mass),
			Length::new::<meter>(1.),
			PositionVector2D::from_components(
				Length::new::<meter>(0.),
				Length::new::<meter>(10.),
			),
		)
		.with_forces(ForceVector2D::from_components(
			Force::new::<newton>(0.),
			Force::new::<newton>(-9.81),
		))
	}

	#[test]
	fn test_falling() {
		let p = resolve_motion(&falling(1.), Time::new::<second>(1.)).unwrap();
		assert!(p.position.approx_eq(
			&PositionVector2D::from_components(
				Length::new::<meter>(0.),
				Length::new::<meter>(0.19),
			),
			Length::new::<meter>(1e-6),
		));
		assert!(p.velocity.approx_eq(
			&VelocityVector2D::from_components(
				Velocity::new::<meter_per_second>(0.),
				Velocity::new::<meter_per_second>(-9.81),
			),
			Velocity::new::<meter_per_second>(1e-6),
		));
		assert!((p.mass.get::<kilogram>() - 1.).abs() < 1e-6);
	}

	#[test]
	fn test_uses_new_velocity() {
		// explicit Euler would leave the position at y = 10
		let p = resolve_motion(&falling(1.), Time::new::<second>(1.)).unwrap();
		assert!(p.position.y().get::<meter>() < 1.);
		let moving = falling(2.).with_velocity(VelocityVector2D::from_components(
			Velocity::new::<meter_per_second>(1.),
			Velocity::new::<meter_per_second>(0.),
		));
		let p = resolve_motion(&moving, Time::new::<second>(2.)).unwrap();
		// v = (1, -9.81), x = 0 + 2 * 1, y = 10 + 2 * -9.81
		assert!((p.position.x().get::<meter>() - 2.).abs() < 1e-9);
		assert!((p.position.y().get::<meter>() - (10. - 19.62)).abs() < 1e-9);
	}

	#[test]
	fn test_deterministic() {
		let dt = Time::new::<second>(0.013);
		let a = resolve_motion(&falling(3.), dt).unwrap();
		let b = resolve_motion(&falling(3.), dt).unwrap();
		assert_eq!(a.position, b.position);
		assert_eq!(a.velocity, b.velocity);
	}

	#[test]
	fn test_invalid_inputs() {
		let dt = Time::new::<second>(1.);
		assert_eq!(
			resolve_motion(&falling(0.), dt).unwrap_err(),
			Error::NonPositiveMass
		);
		assert_eq!(
			resolve_motion(&falling(-1.), dt).unwrap_err(),
			Error::NonPositiveMass
		);
		assert_eq!(
			resolve_motion(&falling(1.), Time::new::<second>(0.)).unwrap_err(),
			Error::InvalidTimeStep
		);
	}
}
