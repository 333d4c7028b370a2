use crate::polygon::Winding;
use crate::vector::PositionVector2D;
use crate::V2;

/// One polygon side, directed from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge2D {
	pub start: PositionVector2D,
	pub end: PositionVector2D,
}

impl Edge2D {
	pub fn new(start: PositionVector2D, end: PositionVector2D) -> Self {
		Self { start, end }
	}

	pub fn direction(&self) -> PositionVector2D {
		self.end - self.start
	}

	/// Closest point of the segment to `query`.
	///
	/// A zero-length edge yields NaN components.
	pub fn nearest_point(&self, query: &PositionVector2D) -> PositionVector2D {
		let d = self.direction();
		let t = ((*query - self.start).dot(&d) / d.dot(&d)).value;
		// clamped ends return the exact vertex, not start + d * 1.0
		if t <= 0.0 {
			self.start
		} else if t >= 1.0 {
			self.end
		} else {
			self.start + d * t
		}
	}

	/// Perpendicular to the edge pointing out of the polygon, with the
	/// same length as the edge.
	pub fn normal(&self, winding: Winding) -> PositionVector2D {
		let d = self.direction().raw();
		let n = match winding {
			Winding::CounterClockwise => V2::new(d[1], -d[0]),
			Winding::Clockwise => V2::new(-d[1], d[0]),
		};
		PositionVector2D::from_raw(n)
	}
}
