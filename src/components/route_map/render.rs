use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{DRIVER_RADIUS, NODE_RADIUS, Scene, Segment};

const BACKGROUND: &str = "#f3f4f6";
const EDGE_COLOR: &str = "#cbd5e1";
const EDGE_LABEL_COLOR: &str = "#4b5563";
const ROUTE_COLOR: &str = "#2563eb";
const HEADING_COLOR: &str = "rgba(30, 58, 138, 0.45)";
const NODE_LABEL_COLOR: &str = "#111827";
const DRIVER_COLOR: &str = "#1e3a8a";

pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	let vp = scene.viewport;
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, vp.width, vp.height);
	ctx.set_text_align("center");
	draw_edges(scene, ctx);
	draw_route(scene, ctx);
	draw_headings(scene, ctx);
	draw_nodes(scene, ctx);
	draw_drivers(scene, ctx);
}

pub fn render_loading(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
	ctx.set_text_align("center");
	ctx.set_fill_style_str("#6b7280");
	ctx.set_font("14px sans-serif");
	let _ = ctx.fill_text("Loading map...", width / 2.0, height / 2.0);
}

fn stroke_segment(ctx: &CanvasRenderingContext2d, segment: &Segment) {
	ctx.begin_path();
	ctx.move_to(segment.from.0, segment.from.1);
	ctx.line_to(segment.to.0, segment.to.1);
	ctx.stroke();
}

fn draw_edges(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(2.0);
	for edge in &scene.edges {
		stroke_segment(ctx, &edge.segment);
	}

	ctx.set_fill_style_str(EDGE_LABEL_COLOR);
	ctx.set_font("10px sans-serif");
	for edge in &scene.edges {
		let (x, y) = edge.label_anchor();
		let _ = ctx.fill_text(&edge.label, x, y);
	}
}

// Above the base edges, below the markers.
fn draw_route(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(ROUTE_COLOR);
	ctx.set_line_width(4.0);
	ctx.set_line_cap("round");
	for segment in &scene.route {
		stroke_segment(ctx, segment);
	}
	ctx.set_line_cap("butt");
}

fn draw_headings(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	if scene.headings.is_empty() {
		return;
	}
	ctx.set_stroke_style_str(HEADING_COLOR);
	ctx.set_line_width(1.5);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	for segment in &scene.headings {
		stroke_segment(ctx, segment);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("11px sans-serif");
	for node in &scene.nodes {
		let (x, y) = node.at;
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.fill);
		ctx.fill();
		ctx.set_stroke_style_str("white");
		ctx.set_line_width(1.0);
		ctx.stroke();

		ctx.set_fill_style_str(NODE_LABEL_COLOR);
		let _ = ctx.fill_text(&node.id, x, y - NODE_RADIUS - 4.0);
	}
}

fn draw_drivers(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("10px sans-serif");
	for driver in &scene.drivers {
		let (x, y) = driver.at;
		ctx.begin_path();
		let _ = ctx.arc(x, y, DRIVER_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(DRIVER_COLOR);
		ctx.fill();
		ctx.set_stroke_style_str("white");
		ctx.set_line_width(1.0);
		ctx.stroke();

		let _ = ctx.fill_text(&driver.label, x, y + 12.0);
	}
}
