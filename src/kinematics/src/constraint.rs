use crate::particle::Particle;
use crate::polygon::Polygon2D;
use crate::vector::PositionVector2D;

/// How an escaped particle is put back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Correction {
	/// Project onto the closest point of the boundary.
	#[default]
	NearestEdge,
	/// Move to the polygon center (bounding-box midpoint).
	///
	/// For a concave polygon that midpoint may itself be outside, so this
	/// mode does not guarantee containment.
	Recenter,
}

impl Correction {
	pub fn correct(
		self,
		position: &PositionVector2D,
		polygon: &Polygon2D,
	) -> Option<PositionVector2D> {
		if polygon.contains(position) {
			return None;
		}
		let corrected = match self {
			// projection can land an ulp past the extreme vertices
			Correction::NearestEdge => polygon
				.bounding_box()
				.clamp(&polygon.nearest_boundary_point(position).1),
			Correction::Recenter => polygon.center(),
		};
		log::trace!("constraint: {} -> {}", position, corrected);
		Some(corrected)
	}
}

/// Keeps a particle on or inside `polygon` by projecting it onto the
/// nearest edge. Velocity is left alone.
pub fn resolve_constraint(particle: &Particle, polygon: &Polygon2D) -> Particle {
	resolve_constraint_with(particle, polygon, Correction::NearestEdge)
}

pub fn resolve_constraint_with(
	particle: &Particle,
	polygon: &Polygon2D,
	correction: Correction,
) -> Particle {
	match correction.correct(&particle.position, polygon) {
		Some(position) => particle.with_position(position),
		None => particle.clone(),
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use uom::si::f64::{Length, Mass};
	use uom::si::length::meter;
	use uom::si::mass::kilogram;

	fn pos(x: f64, y: f64) -> PositionVector2D {
		PositionVector2D::from_components(
			Length::new::<meter>(x),
			Length::new::<meter>(y),
		)
	}

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle::new(Mass::new::<kilogram>(1.), Length::new::<meter>(1.), pos(x, y))
	}

	fn triangle() -> Polygon2D {
		Polygon2D::new(vec![pos(0., 0.), pos(4., 0.), pos(0., 3.)]).unwrap()
	}

	#[test]
	fn test_inside_unchanged() {
		let p = particle_at(1., 1.);
		assert_eq!(resolve_constraint(&p, &triangle()).position, p.position);
		let p = particle_at(2., 0.);
		assert_eq!(resolve_constraint(&p, &triangle()).position, p.position);
	}

	#[test]
	fn test_projects_to_nearest_edge() {
		// hypotenuse from (4, 0) to (0, 3), outward of (2, 1.5)
		let p = particle_at(4., 3.);
		let q = resolve_constraint(&p, &triangle());
		assert!(q.position.approx_eq(&pos(2.56, 1.08), Length::new::<meter>(1e-9)));
		let p = particle_at(-2., 1.);
		let q = resolve_constraint(&p, &triangle());
		assert!(q.position.approx_eq(&pos(0., 1.), Length::new::<meter>(1e-9)));
	}

	#[test]
	fn test_idempotent() {
		let poly = triangle();
		for &(x, y) in [(4., 3.), (-2., 1.), (5., -1.), (-0.3, 7.), (1., 1.)].iter() {
			let once = resolve_constraint(&particle_at(x, y), &poly);
			let twice = resolve_constraint(&once, &poly);
			assert_eq!(once.position, twice.position);
			assert!(poly.contains(&once.position));
		}
	}

	#[test]
	fn test_corrected_positions_inside_inexact_vertices() {
		let poly =
			Polygon2D::new(vec![pos(0.1, 0.1), pos(0.3, 0.7), pos(-0.2, 0.7)])
				.unwrap();
		let mut outside = 0;
		for i in 0..200 {
			for j in 0..200 {
				let p = particle_at(-3. + 0.03 * i as f64, -3. + 0.03 * j as f64);
				if poly.contains(&p.position) {
					continue;
				}
				outside += 1;
				let once = resolve_constraint(&p, &poly);
				assert!(poly.contains(&once.position), "{}", p.position);
				let twice = resolve_constraint(&once, &poly);
				assert_eq!(once.position, twice.position);
			}
		}
		assert!(outside > 30_000);
	}

	#[test]
	fn test_recenter_concave_not_contained() {
		// U shape: the bounding-box midpoint (2, 2) sits in the notch
		let u = Polygon2D::new(vec![
			pos(0., 0.),
			pos(4., 0.),
			pos(4., 4.),
			pos(3., 4.),
			pos(3., 1.),
			pos(1., 1.),
			pos(1., 4.),
			pos(0., 4.),
		])
		.unwrap();
		let p = particle_at(10., 10.);
		let q = resolve_constraint_with(&p, &u, Correction::Recenter);
		assert_eq!(q.position, pos(2., 2.));
		assert!(!u.contains(&q.position));
		assert!(u.contains(&resolve_constraint(&p, &u).position));
	}

	#[test]
	fn test_recenter() {
		let p = particle_at(10., 10.);
		let q = resolve_constraint_with(&p, &triangle(), Correction::Recenter);
		assert_eq!(q.position, pos(2., 1.5));
		let inside = particle_at(0.5, 0.5);
		let q = resolve_constraint_with(&inside, &triangle(), Correction::Recenter);
		assert_eq!(q.position, inside.position);
	}
}
