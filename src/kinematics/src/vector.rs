//! Dimension-typed 2D vectors.
//!
//! A `Vector2D<D>` carries a `uom` dimension in its type, so a force can never
//! be added to a position. Components live in an `nalgebra` vector normalized
//! to SI base units; callers pick a display unit on the way out through
//! `Quantity::get`.

use std::f64::consts::TAU;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use uom::si::angle::radian;
use uom::si::f64::Angle;
use uom::si::{Dimension, Quantity, SI};

use crate::error::{Error, Result};
use crate::V2;

/// A scalar quantity of dimension `D` in the SI system.
pub type Scalar<D> = Quantity<D, SI<f64>, f64>;

pub type PositionVector2D = Vector2D<uom::si::length::Dimension>;
pub type VelocityVector2D = Vector2D<uom::si::velocity::Dimension>;
pub type AccelerationVector2D = Vector2D<uom::si::acceleration::Dimension>;
pub type ForceVector2D = Vector2D<uom::si::force::Dimension>;

pub(crate) fn scalar<D: Dimension + ?Sized>(value: f64) -> Scalar<D> {
	Quantity {
		dimension: PhantomData,
		units: PhantomData,
		value,
	}
}

pub struct Vector2D<D: Dimension + ?Sized> {
	raw: V2,
	dimension: PhantomData<D>,
}

impl<D: Dimension + ?Sized> Vector2D<D> {
	pub fn from_components(x: Scalar<D>, y: Scalar<D>) -> Self {
		Self::from_raw(V2::new(x.value, y.value))
	}

	/// Builds a vector pointing along `angle` (counter-clockwise from +x).
	///
	/// A negative magnitude is rejected rather than flipped.
	pub fn from_polar(angle: Angle, magnitude: Scalar<D>) -> Result<Self> {
		if magnitude.value < 0.0 {
			return Err(Error::NegativeMagnitude);
		}
		let (sin, cos) = angle.value.sin_cos();
		Ok(Self::from_raw(V2::new(cos, sin) * magnitude.value))
	}

	pub fn zero() -> Self {
		Self::from_raw(V2::zeros())
	}

	pub(crate) fn from_raw(raw: V2) -> Self {
		Self {
			raw,
			dimension: PhantomData,
		}
	}

	pub(crate) fn raw(&self) -> V2 {
		self.raw
	}

	pub fn x(&self) -> Scalar<D> {
		scalar(self.raw[0])
	}

	pub fn y(&self) -> Scalar<D> {
		scalar(self.raw[1])
	}

	pub fn magnitude(&self) -> Scalar<D> {
		scalar(self.raw.norm())
	}

	/// Direction of the vector, normalized to `[0, 2π)`.
	pub fn angle(&self) -> Angle {
		let mut angle = self.raw[1].atan2(self.raw[0]).rem_euclid(TAU);
		// rem_euclid rounds tiny negative angles up to exactly TAU
		if angle >= TAU {
			angle = 0.0;
		}
		Angle::new::<radian>(angle)
	}

	pub fn distance(&self, other: &Self) -> Scalar<D> {
		scalar((self.raw - other.raw).norm())
	}

	pub fn dot<Dr, Do>(&self, other: &Vector2D<Dr>) -> Scalar<Do>
	where
		Dr: Dimension + ?Sized,
		Do: Dimension + ?Sized,
		Scalar<D>: Mul<Scalar<Dr>, Output = Scalar<Do>>,
	{
		scalar(self.raw.dot(&other.raw))
	}

	/// Scalar 2D cross product `x1 * y2 - y1 * x2`.
	pub fn cross<Dr, Do>(&self, other: &Vector2D<Dr>) -> Scalar<Do>
	where
		Dr: Dimension + ?Sized,
		Do: Dimension + ?Sized,
		Scalar<D>: Mul<Scalar<Dr>, Output = Scalar<Do>>,
	{
		scalar(self.raw.perp(&other.raw))
	}

	pub fn checked_div(&self, rhs: f64) -> Result<Self> {
		if rhs == 0.0 {
			return Err(Error::DivideByZero);
		}
		Ok(Self::from_raw(self.raw / rhs))
	}

	pub fn checked_div_quantity<Dr, Do>(
		&self,
		rhs: Scalar<Dr>,
	) -> Result<Vector2D<Do>>
	where
		Dr: Dimension + ?Sized,
		Do: Dimension + ?Sized,
		Scalar<D>: std::ops::Div<Scalar<Dr>, Output = Scalar<Do>>,
	{
		if rhs.value == 0.0 {
			return Err(Error::DivideByZero);
		}
		Ok(Vector2D::from_raw(self.raw / rhs.value))
	}

	/// Per-component absolute comparison.
	pub fn approx_eq(&self, other: &Self, tolerance: Scalar<D>) -> bool {
		(self.raw - other.raw)
			.iter()
			.all(|c| c.abs() <= tolerance.value)
	}
}

impl<D: Dimension + ?Sized> Clone for Vector2D<D> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<D: Dimension + ?Sized> Copy for Vector2D<D> {}

impl<D: Dimension + ?Sized> PartialEq for Vector2D<D> {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl<D: Dimension + ?Sized> fmt::Debug for Vector2D<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Vector2D")
			.field(&self.raw[0])
			.field(&self.raw[1])
			.finish()
	}
}

impl<D: Dimension + ?Sized> fmt::Display for Vector2D<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.raw[0], self.raw[1])
	}
}

impl<D: Dimension + ?Sized> Add for Vector2D<D> {
	type Output = Self;
	fn add(self, rhs: Self) -> Self {
		Self::from_raw(self.raw + rhs.raw)
	}
}

impl<D: Dimension + ?Sized> Sub for Vector2D<D> {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self {
		Self::from_raw(self.raw - rhs.raw)
	}
}

impl<D: Dimension + ?Sized> Neg for Vector2D<D> {
	type Output = Self;
	fn neg(self) -> Self {
		Self::from_raw(-self.raw)
	}
}

impl<D: Dimension + ?Sized> Mul<f64> for Vector2D<D> {
	type Output = Self;
	fn mul(self, rhs: f64) -> Self {
		Self::from_raw(self.raw * rhs)
	}
}

// base-unit values multiply into the base-unit value of the product
impl<D, Dr, Do> Mul<Scalar<Dr>> for Vector2D<D>
where
	D: Dimension + ?Sized,
	Dr: Dimension + ?Sized,
	Do: Dimension + ?Sized,
	Scalar<D>: Mul<Scalar<Dr>, Output = Scalar<Do>>,
{
	type Output = Vector2D<Do>;
	fn mul(self, rhs: Scalar<Dr>) -> Vector2D<Do> {
		Vector2D::from_raw(self.raw * rhs.value)
	}
}
