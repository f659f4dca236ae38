//! Larger translucent discs bouncing off the viewport edges.

use rand::Rng;

use super::config::{BallConfig, Range};
use super::style::Color;
use super::surface::{Glow, Surface};
use super::types::Viewport;

/// A disc that reflects off the viewport boundary without losing speed.
#[derive(Clone, Debug, PartialEq)]
pub struct BouncingBall {
	/// Horizontal center in px.
	pub x: f64,
	/// Vertical center in px.
	pub y: f64,
	/// Horizontal velocity in px per tick.
	pub vx: f64,
	/// Vertical velocity in px per tick.
	pub vy: f64,
	/// Radius in px.
	pub r: f64,
	/// Fill color, fixed for the ball's lifetime.
	pub color: Color,
}

impl BouncingBall {
	/// Ball placed fully inside the viewport with a random heading.
	pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &BallConfig) -> Self {
		// Never larger than the viewport, so containment stays satisfiable.
		let r = config
			.radius
			.sample(rng)
			.min(viewport.width / 2.0)
			.min(viewport.height / 2.0)
			.max(0.0);

		Self {
			x: Range::new(r, viewport.width - r).sample(rng),
			y: Range::new(r, viewport.height - r).sample(rng),
			vx: config.speed.sample(rng),
			vy: config.speed.sample(rng),
			r,
			color: config.color.with_alpha(config.alpha.sample(rng)),
		}
	}

	/// Advance one tick, clamping to the edge and flipping velocity on contact.
	pub fn update(&mut self, viewport: Viewport) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < self.r {
			self.x = self.r;
			self.vx = -self.vx;
		} else if self.x > viewport.width - self.r {
			self.x = viewport.width - self.r;
			self.vx = -self.vx;
		}
		if self.y < self.r {
			self.y = self.r;
			self.vy = -self.vy;
		} else if self.y > viewport.height - self.r {
			self.y = viewport.height - self.r;
			self.vy = -self.vy;
		}
	}

	/// Paint the ball with its glow.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, config: &BallConfig) {
		let glow = Glow {
			color: config.glow_color,
			blur: config.glow_blur,
		};
		surface.fill_circle(self.x, self.y, self.r, self.color, Some(glow));
	}
}

/// Build the fixed-size ball population for the viewport.
pub fn seed_balls<R: Rng + ?Sized>(
	rng: &mut R,
	viewport: Viewport,
	config: &BallConfig,
) -> Vec<BouncingBall> {
	(0..config.count)
		.map(|_| BouncingBall::new(rng, viewport, config))
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	const VIEW: Viewport = Viewport::new(800.0, 600.0);

	fn contained(ball: &BouncingBall, viewport: Viewport) -> bool {
		ball.x >= ball.r
			&& ball.x <= viewport.width - ball.r
			&& ball.y >= ball.r
			&& ball.y <= viewport.height - ball.r
	}

	#[test]
	fn balls_stay_inside_the_viewport() {
		let config = BallConfig::default();
		let mut rng = SmallRng::seed_from_u64(9);
		let mut balls = seed_balls(&mut rng, VIEW, &config);
		assert_eq!(balls.len(), 18);
		for _ in 0..10_000 {
			for ball in &mut balls {
				ball.update(VIEW);
				assert!(contained(ball, VIEW), "escaped: {ball:?}");
			}
		}
	}

	#[test]
	fn bounce_flips_sign_and_keeps_speed() {
		let mut ball = BouncingBall {
			x: 795.0,
			y: 590.0,
			vx: 1.1,
			vy: 0.7,
			r: 10.0,
			color: Color::SLATE,
		};
		ball.update(VIEW);
		assert_eq!(ball.x, VIEW.width - 10.0);
		assert_eq!(ball.y, VIEW.height - 10.0);
		assert_eq!(ball.vx, -1.1);
		assert_eq!(ball.vy, -0.7);
	}

	#[test]
	fn speed_magnitudes_survive_many_bounces() {
		let config = BallConfig::default();
		let mut rng = SmallRng::seed_from_u64(21);
		let mut ball = BouncingBall::new(&mut rng, Viewport::new(120.0, 90.0), &config);
		let (sx, sy) = (ball.vx.abs(), ball.vy.abs());
		for _ in 0..2_000 {
			ball.update(Viewport::new(120.0, 90.0));
			assert_eq!(ball.vx.abs(), sx);
			assert_eq!(ball.vy.abs(), sy);
		}
	}

	#[test]
	fn color_is_translucent_slate() {
		let config = BallConfig::default();
		let mut rng = SmallRng::seed_from_u64(4);
		for ball in seed_balls(&mut rng, VIEW, &config) {
			assert_eq!((ball.color.r, ball.color.g, ball.color.b), (151, 162, 180));
			assert!(config.alpha.contains(ball.color.a));
			assert!(config.radius.contains(ball.r));
			assert!(contained(&ball, VIEW));
		}
	}

	#[test]
	fn radius_shrinks_to_fit_tiny_viewports() {
		let config = BallConfig::default();
		let mut rng = SmallRng::seed_from_u64(8);
		let tiny = Viewport::new(12.0, 30.0);
		let mut ball = BouncingBall::new(&mut rng, tiny, &config);
		assert!(ball.r <= 6.0);
		ball.update(tiny);
		assert!(contained(&ball, tiny));
	}
}
