use uom::si::f64::Length;
use uom::si::length::meter;

use crate::edge::Edge2D;
use crate::error::{Error, Result};
use crate::posbox::{Boundaries, PosBox};
use crate::vector::PositionVector2D;

/// Points within this distance of an edge count as on the boundary.
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
	CounterClockwise,
	Clockwise,
}

/// Closed polygon, immutable once built.
///
/// Edge `i` runs from vertex `i - 1` to vertex `i`; edge 0 closes the loop
/// from the last vertex back to the first.
#[derive(Clone, Debug)]
pub struct Polygon2D {
	vertices: Vec<PositionVector2D>,
	edges: Vec<Edge2D>,
	bounds: PosBox,
	winding: Winding,
}

impl Polygon2D {
	pub fn new(vertices: Vec<PositionVector2D>) -> Result<Self> {
		if vertices.len() < 3 {
			return Err(Error::TooFewVertices(vertices.len()));
		}
		let last = vertices[vertices.len() - 1];
		let mut bounds = PosBox::around(&vertices[0]);
		let mut edges = Vec::with_capacity(vertices.len());
		edges.push(Edge2D::new(last, vertices[0]));
		// twice the signed area, shoelace
		let mut area2 = last.cross(&vertices[0]).value;
		for pair in vertices.windows(2) {
			bounds.include(&pair[1]);
			edges.push(Edge2D::new(pair[0], pair[1]));
			area2 += pair[0].cross(&pair[1]).value;
		}
		let winding = if area2 < 0.0 {
			Winding::Clockwise
		} else {
			Winding::CounterClockwise
		};
		Ok(Self {
			vertices,
			edges,
			bounds,
			winding,
		})
	}

	pub fn vertices(&self) -> &[PositionVector2D] {
		&self.vertices
	}

	pub fn edges(&self) -> &[Edge2D] {
		&self.edges
	}

	pub fn x_boundaries(&self) -> Boundaries {
		self.bounds.x
	}

	pub fn y_boundaries(&self) -> Boundaries {
		self.bounds.y
	}

	pub fn bounding_box(&self) -> PosBox {
		self.bounds
	}

	pub fn winding(&self) -> Winding {
		self.winding
	}

	/// Midpoint of the bounding box. This is not the centroid: for an
	/// irregular polygon it may even lie outside.
	pub fn center(&self) -> PositionVector2D {
		self.bounds.center()
	}

	/// Index and position of the closest boundary point. Ties go to the
	/// lowest edge index; NaN distances from zero-length edges never win.
	pub fn nearest_boundary_point(
		&self,
		point: &PositionVector2D,
	) -> (usize, PositionVector2D) {
		let mut best = (0, self.edges[0].nearest_point(point));
		let mut best_dist = best.1.distance(point);
		for (idx, edge) in self.edges.iter().enumerate().skip(1) {
			let candidate = edge.nearest_point(point);
			let dist = candidate.distance(point);
			let replaces_nan = best_dist.value.is_nan() && !dist.value.is_nan();
			if dist < best_dist || replaces_nan {
				best = (idx, candidate);
				best_dist = dist;
			}
		}
		best
	}

	pub fn on_boundary(&self, point: &PositionVector2D) -> bool {
		let tolerance = Length::new::<meter>(BOUNDARY_TOLERANCE);
		self.edges
			.iter()
			.any(|e| e.nearest_point(point).distance(point) <= tolerance)
	}

	/// Non-strict containment: boundary points are inside.
	///
	/// Uses even-odd ray casting, so a self-intersecting polygon reports
	/// its doubly covered regions as outside.
	pub fn contains(&self, point: &PositionVector2D) -> bool {
		let tolerance = Length::new::<meter>(BOUNDARY_TOLERANCE);
		if !self.bounds.contains_within(point, tolerance) {
			return false;
		}
		if self.on_boundary(point) {
			return true;
		}
		let p = point.raw();
		let mut inside = false;
		for edge in self.edges.iter() {
			let a = edge.start.raw();
			let b = edge.end.raw();
			if (a[1] > p[1]) != (b[1] > p[1]) {
				let x = a[0] + (p[1] - a[1]) * (b[0] - a[0]) / (b[1] - a[1]);
				if p[0] < x {
					inside = !inside;
				}
			}
		}
		inside
	}
}
