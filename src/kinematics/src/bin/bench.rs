use std::time::SystemTime;

use rand::Rng;
use uom::si::f64::{Force, Length, Mass};
use uom::si::force::newton;
use uom::si::length::meter;
use uom::si::mass::kilogram;
use uom::si::time::second;

use kinematics::{ForceVector2D, Particle, Polygon2D, PositionVector2D, World};

fn pos(x: f64, y: f64) -> PositionVector2D {
	PositionVector2D::from_components(
		Length::new::<meter>(x),
		Length::new::<meter>(y),
	)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	use simplelog::LevelFilter::{Info, Off};
	simplelog::TermLogger::init(
		Info,
		simplelog::ConfigBuilder::new()
			.set_target_level(Off)
			.set_location_level(Off)
			.build(),
		simplelog::TerminalMode::Stderr,
		simplelog::ColorChoice::Auto,
	)?;

	// hexagon
	let vertices = (0..6)
		.map(|i| {
			let a = std::f64::consts::TAU * i as f64 / 6.0;
			pos(10.0 * a.cos(), 10.0 * a.sin())
		})
		.collect();
	let polygon = Polygon2D::new(vertices)?;

	let mut rng = rand::thread_rng();
	let particles = (0..10_000)
		.map(|id| {
			let mass = rng.gen_range(0.5..2.0);
			Particle::new(
				Mass::new::<kilogram>(mass),
				Length::new::<meter>(0.05),
				pos(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0)),
			)
			.with_forces(ForceVector2D::from_components(
				Force::new::<newton>(0.),
				Force::new::<newton>(-9.8 * mass),
			))
			.with_metadata(id)
		})
		.collect();

	let mut world = World::new(polygon, particles).with_parallel(true);
	let start = SystemTime::now();
	let rframes = 100;
	world.run(rframes)?;
	let time = world.time().get::<second>();
	let duration = SystemTime::now().duration_since(start)?.as_micros();
	log::info!(
		"{:.3}% of simulated time ({} frames)",
		duration as f64 / time / 1e4,
		rframes
	);
	Ok(())
}
