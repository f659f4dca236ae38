//! Drawing primitives the backdrop needs from a 2D raster surface.
//!
//! The animation only ever fills discs, strokes circles, draws straight lines
//! and paints one vertical gradient. [`Surface`] captures exactly that, which
//! keeps the per-frame logic independent of the browser canvas.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::style::Color;

/// Blurred shadow drawn around a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// Shadow color.
	pub color: Color,
	/// Shadow blur radius in px.
	pub blur: f64,
}

/// Outline style for stroked circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
	/// Line color.
	pub color: Color,
	/// Line width in px.
	pub width: f64,
	/// `(dash, gap)` lengths; `None` draws a solid line.
	pub dash: Option<(f64, f64)>,
	/// Optional shadow around the outline.
	pub glow: Option<Glow>,
}

/// A 2D raster surface the frame driver paints onto.
pub trait Surface {
	/// Erase the whole surface.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill the surface with a gradient running from `top` to `bottom`.
	fn fill_vertical_gradient(&mut self, width: f64, height: f64, top: Color, bottom: Color);

	/// Fill a disc, optionally with a blurred shadow.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>);

	/// Stroke the outline of a circle.
	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, stroke: &Stroke);

	/// Draw a straight segment.
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_vertical_gradient(&mut self, width: f64, height: f64, top: Color, bottom: Color) {
		let gradient = self.create_linear_gradient(0.0, 0.0, 0.0, height);
		let _ = gradient.add_color_stop(0.0, &top.to_css());
		let _ = gradient.add_color_stop(1.0, &bottom.to_css());

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_fill_style_str(&color.to_css());
		if let Some(glow) = glow {
			self.set_shadow_color(&glow.color.to_css());
			self.set_shadow_blur(glow.blur);
		}
		self.fill();
		self.set_shadow_blur(0.0);
	}

	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, stroke: &Stroke) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_stroke_style_str(&stroke.color.to_css());
		self.set_line_width(stroke.width);
		if let Some((dash, gap)) = stroke.dash {
			let _ = self.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
		}
		if let Some(glow) = stroke.glow {
			self.set_shadow_color(&glow.color.to_css());
			self.set_shadow_blur(glow.blur);
		}
		self.stroke();

		if stroke.dash.is_some() {
			let _ = self.set_line_dash(&js_sys::Array::new());
		}
		self.set_shadow_blur(0.0);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}
}

/// Surface that records draw calls instead of painting them.
#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Clear,
		Gradient { top: Color, bottom: Color },
		FillCircle { x: f64, y: f64, radius: f64, color: Color, glow: bool },
		StrokeCircle { x: f64, y: f64, radius: f64, dashed: bool },
		Line { from: (f64, f64), to: (f64, f64), alpha: f64 },
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub calls: Vec<DrawCall>,
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, _width: f64, _height: f64) {
			self.calls.push(DrawCall::Clear);
		}

		fn fill_vertical_gradient(&mut self, _width: f64, _height: f64, top: Color, bottom: Color) {
			self.calls.push(DrawCall::Gradient { top, bottom });
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>) {
			self.calls.push(DrawCall::FillCircle {
				x,
				y,
				radius,
				color,
				glow: glow.is_some(),
			});
		}

		fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, stroke: &Stroke) {
			self.calls.push(DrawCall::StrokeCircle {
				x,
				y,
				radius,
				dashed: stroke.dash.is_some(),
			});
		}

		fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, _width: f64) {
			self.calls.push(DrawCall::Line {
				from,
				to,
				alpha: color.a,
			});
		}
	}
}
