use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::scene::Scene;
use crate::config::Viewport;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Canvas view of the road network. Stateless apart from hover feedback:
/// it repaints whenever `scene` changes and reports node clicks upward.
#[component]
pub fn RouteMapCanvas(
	#[prop(into)] scene: Signal<Option<Scene>>,
	#[prop(into)] on_node_click: Callback<String>,
	#[prop(default = Viewport::DEFAULT)] viewport: Viewport,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hovering = RwSignal::new(false);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("2d canvas context unavailable");
			return;
		};
		scene.with(|scene| match scene {
			Some(scene) => render::render(scene, &ctx),
			None => render::render_loading(&ctx, viewport.width, viewport.height),
		});
	});

	// Pointer position in logical canvas units, whatever CSS size the
	// element ends up with.
	let canvas_position = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		let (sx, sy) = (
			viewport.width / rect.width().max(1.0),
			viewport.height / rect.height().max(1.0),
		);
		Some((
			(ev.client_x() as f64 - rect.left()) * sx,
			(ev.client_y() as f64 - rect.top()) * sy,
		))
	};

	let node_under = move |ev: &MouseEvent| -> Option<String> {
		let (x, y) = canvas_position(ev)?;
		scene.with_untracked(|scene| {
			scene
				.as_ref()
				.and_then(|s| s.node_at_position(x, y))
				.map(str::to_owned)
		})
	};

	let on_click = move |ev: MouseEvent| {
		if let Some(id) = node_under(&ev) {
			debug!("node clicked: {id}");
			on_node_click.run(id);
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		let over_node = node_under(&ev).is_some();
		if hovering.get_untracked() != over_node {
			hovering.set(over_node);
		}
	};

	let on_mouseleave = move |_: MouseEvent| hovering.set(false);

	view! {
		<canvas
			node_ref=canvas_ref
			class="route-map-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style:display="block"
			style:max-width="100%"
			style:cursor=move || if hovering.get() { "pointer" } else { "default" }
		/>
	}
}
