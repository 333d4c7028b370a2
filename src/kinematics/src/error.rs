pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// A polygon was built from fewer than three vertices.
	#[error("a polygon must have at least 3 vertices ({0} provided)")]
	TooFewVertices(usize),
	/// A polar vector was given a negative magnitude.
	#[error("vector magnitude must not be negative")]
	NegativeMagnitude,
	#[error("division by zero")]
	DivideByZero,
	/// Integration needs a strictly positive mass to derive acceleration.
	#[error("particle mass must be positive")]
	NonPositiveMass,
	#[error("time step must be positive and finite")]
	InvalidTimeStep,
	/// A particle in a batch failed; the whole batch is discarded.
	#[error("particle {index}: {source}")]
	Particle {
		index: usize,
		#[source]
		source: Box<Error>,
	},
}
