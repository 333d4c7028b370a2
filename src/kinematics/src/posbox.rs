use uom::si::f64::Length;

use crate::vector::PositionVector2D;

/// Closed interval on one axis, `lower <= upper`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundaries {
	pub lower: Length,
	pub upper: Length,
}

impl Boundaries {
	pub fn point(v: Length) -> Self {
		Self { lower: v, upper: v }
	}

	pub fn include(&mut self, v: Length) {
		if v < self.lower {
			self.lower = v;
		}
		if v > self.upper {
			self.upper = v;
		}
	}

	pub fn contains(&self, v: Length) -> bool {
		self.lower <= v && v <= self.upper
	}

	pub fn contains_within(&self, v: Length, margin: Length) -> bool {
		self.lower - margin <= v && v <= self.upper + margin
	}

	pub fn clamp(&self, v: Length) -> Length {
		if v < self.lower {
			self.lower
		} else if v > self.upper {
			self.upper
		} else {
			v
		}
	}

	pub fn midpoint(&self) -> Length {
		self.lower + (self.upper - self.lower) / 2.0
	}
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosBox {
	pub x: Boundaries,
	pub y: Boundaries,
}

impl PosBox {
	pub fn around(pos: &PositionVector2D) -> Self {
		Self {
			x: Boundaries::point(pos.x()),
			y: Boundaries::point(pos.y()),
		}
	}

	pub fn include(&mut self, pos: &PositionVector2D) {
		self.x.include(pos.x());
		self.y.include(pos.y());
	}

	pub fn contains(&self, pos: &PositionVector2D) -> bool {
		self.x.contains(pos.x()) && self.y.contains(pos.y())
	}

	pub fn contains_within(&self, pos: &PositionVector2D, margin: Length) -> bool {
		self.x.contains_within(pos.x(), margin)
			&& self.y.contains_within(pos.y(), margin)
	}

	/// Nearest point of the box to `pos`.
	pub fn clamp(&self, pos: &PositionVector2D) -> PositionVector2D {
		PositionVector2D::from_components(self.x.clamp(pos.x()), self.y.clamp(pos.y()))
	}

	pub fn center(&self) -> PositionVector2D {
		PositionVector2D::from_components(self.x.midpoint(), self.y.midpoint())
	}
}
