use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::panels::{DriverList, MessageBanner, PendingRequests, RequestForm, RideHistory};
use crate::components::route_map::{RouteMapCanvas, Scene};
use crate::config::Viewport;
use crate::model::NodeId;
use crate::session::Session;

/// Dispatch dashboard: request form and lists on the left, map on the right.
#[component]
pub fn Home() -> impl IntoView {
	let session = Session::new(ApiClient::default());
	provide_context(session);
	session.refresh();

	let viewport = Viewport::DEFAULT;
	let scene = Memo::new(move |_| {
		session
			.state
			.with(|s| Scene::build(&s.snapshot, &s.selection, s.route.as_ref(), viewport))
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<header class="app-header">
				<h1>"Smart Carpool System"</h1>
			</header>
			<MessageBanner />

			<main class="dashboard">
				<aside class="side-panel">
					<RequestForm />
					<PendingRequests />
					<RideHistory />
					<DriverList />
				</aside>
				<div class="map-panel">
					<RouteMapCanvas
						scene=scene
						on_node_click=move |id: NodeId| session.select_node(id)
						viewport=viewport
					/>
				</div>
			</main>
		</ErrorBoundary>
	}
}
