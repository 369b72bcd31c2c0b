//! Side panels: message banner, request form and the snapshot lists.

use leptos::prelude::*;

use crate::model::{Driver, NodeId, NodeLookup, PendingRequest, RideRecord};
use crate::session::{Message, Session};

#[derive(Clone, Debug, PartialEq)]
struct RequestRow {
	key: String,
	user_id: String,
	trip: String,
}

impl RequestRow {
	fn new(lookup: &NodeLookup, r: &PendingRequest) -> Self {
		Self {
			key: r.id.clone(),
			user_id: r.user_id.clone(),
			trip: format!(
				"{} → {}",
				lookup.display_name(&r.source),
				lookup.display_name(&r.destination)
			),
		}
	}
}

fn ride_line(r: &RideRecord) -> String {
	format!(
		"{}: {} via {} ({:.2} km)",
		r.kind,
		r.riders.join(", "),
		r.driver,
		r.distance
	)
}

#[derive(Clone, Debug, PartialEq)]
struct DriverRow {
	id: String,
	status: &'static str,
	location: String,
	destination: Option<String>,
	riders: Option<String>,
	can_complete: bool,
}

impl DriverRow {
	fn new(lookup: &NodeLookup, d: &Driver) -> Self {
		Self {
			id: d.id.clone(),
			status: d.status.as_str(),
			location: lookup.display_name(&d.location).to_string(),
			destination: d
				.final_destination
				.as_deref()
				.map(|id| lookup.display_name(id).to_string()),
			riders: (!d.passengers.is_empty()).then(|| {
				d.passengers
					.iter()
					.map(|p| p.user_id.as_str())
					.collect::<Vec<_>>()
					.join(", ")
			}),
			can_complete: d.is_en_route(),
		}
	}
}

#[component]
pub fn MessageBanner() -> impl IntoView {
	let session = expect_context::<Session>();
	let message = Memo::new(move |_| session.state.with(|s| s.message.clone()));

	move || {
		message.get().map(|Message { success, text }| {
			view! {
				<div class="message-banner" class:success=success class:failure={!success}>
					<span>{text}</span>
					<button class="dismiss" on:click=move |_| session.dismiss_message()>
						"×"
					</button>
				</div>
			}
		})
	}
}

/// Dropdown over every node by name. The empty option clears the choice.
#[component]
fn NodePicker(
	placeholder: &'static str,
	#[prop(into)] selected: Signal<Option<NodeId>>,
	#[prop(into)] on_pick: Callback<Option<NodeId>>,
) -> impl IntoView {
	let session = expect_context::<Session>();
	let options = Memo::new(move |_| {
		session.state.with(|s| {
			s.snapshot
				.nodes
				.iter()
				.map(|n| (n.id.clone(), n.name.clone()))
				.collect::<Vec<_>>()
		})
	});

	view! {
		<select
			prop:value=move || selected.get().unwrap_or_default()
			on:change=move |ev| {
				let value = event_target_value(&ev);
				on_pick.run((!value.is_empty()).then_some(value));
			}
		>
			<option value="" prop:selected=move || selected.with(Option::is_none)>
				{placeholder}
			</option>
			{move || {
				options
					.get()
					.into_iter()
					.map(|(id, name)| {
						let is_selected = {
							let id = id.clone();
							move || selected.with(|s| s.as_deref() == Some(id.as_str()))
						};
						view! {
							<option value=id prop:selected=is_selected>
								{name}
							</option>
						}
					})
					.collect_view()
			}}
		</select>
	}
}

#[component]
pub fn RequestForm() -> impl IntoView {
	let session = expect_context::<Session>();
	let state = session.state;
	let prompt = move || state.with(|s| s.selection_mode().prompt());
	let source = Signal::derive(move || state.with(|s| s.selection.source.clone()));
	let destination = Signal::derive(move || state.with(|s| s.selection.destination.clone()));

	view! {
		<section class="panel request-form">
			<h2>"Request Ride"</h2>
			<p class="selection-hint">{prompt}</p>
			<input
				placeholder="User ID"
				prop:value=move || state.with(|s| s.user_id.clone())
				on:input=move |ev| session.set_user_id(event_target_value(&ev))
			/>
			<NodePicker
				placeholder="Select source"
				selected=source
				on_pick={move |id: Option<NodeId>| session.pick_source(id)}
			/>
			<NodePicker
				placeholder="Select destination"
				selected=destination
				on_pick={move |id: Option<NodeId>| session.pick_destination(id)}
			/>
			<button class="submit" on:click=move |_| session.submit_request()>
				"Submit Request"
			</button>
		</section>
	}
}

#[component]
pub fn PendingRequests() -> impl IntoView {
	let session = expect_context::<Session>();
	let rows = Memo::new(move |_| {
		session.state.with(|s| {
			let lookup = NodeLookup::new(&s.snapshot.nodes);
			s.snapshot
				.requests
				.iter()
				.map(|r| RequestRow::new(&lookup, r))
				.collect::<Vec<_>>()
		})
	});

	view! {
		<section class="panel">
			<h3>"Pending Requests (" {move || rows.with(Vec::len)} ")"</h3>
			<div class="list">
				{move || {
					let rows = rows.get();
					if rows.is_empty() {
						return view! { <p class="empty">"No pending requests."</p> }.into_any();
					}
					rows.into_iter()
						.map(|row| {
							view! {
								<p data-request=row.key>
									<b>{row.user_id}</b>
									": "
									{row.trip}
								</p>
							}
						})
						.collect_view()
						.into_any()
				}}
			</div>
		</section>
	}
}

#[component]
pub fn RideHistory() -> impl IntoView {
	let session = expect_context::<Session>();
	let lines = Memo::new(move |_| {
		session
			.state
			.with(|s| s.snapshot.ride_history.iter().map(ride_line).collect::<Vec<_>>())
	});

	view! {
		<section class="panel">
			<h3>"Ride History (" {move || lines.with(Vec::len)} ")"</h3>
			<div class="list">
				{move || {
					let lines = lines.get();
					if lines.is_empty() {
						return view! { <p class="empty">"No rides yet."</p> }.into_any();
					}
					lines.into_iter()
						.map(|line| view! { <div class="ride">{line}</div> })
						.collect_view()
						.into_any()
				}}
			</div>
		</section>
	}
}

#[component]
pub fn DriverList() -> impl IntoView {
	let session = expect_context::<Session>();
	let rows = Memo::new(move |_| {
		session.state.with(|s| {
			let lookup = NodeLookup::new(&s.snapshot.nodes);
			s.snapshot
				.drivers
				.iter()
				.map(|d| DriverRow::new(&lookup, d))
				.collect::<Vec<_>>()
		})
	});

	view! {
		<section class="panel">
			<h3>"Drivers (" {move || rows.with(Vec::len)} ")"</h3>
			<div class="list">
				{move || {
					rows.get()
						.into_iter()
						.map(|row| {
							let DriverRow { id, status, location, destination, riders, can_complete } = row;
							let complete_id = id.clone();
							view! {
								<div class="driver">
									<span>
										<b>{id}</b>
										" (" {status} ")"
									</span>
									<span>"Location: " {location}</span>
									{destination.map(|d| view! { <span>"Destination: " {d}</span> })}
									{riders.map(|r| view! { <span>"Riders: " {r}</span> })}
									{can_complete.then(|| {
										view! {
											<button
												class="complete"
												on:click=move |_| session.complete_ride(complete_id.clone())
											>
												"Complete Ride"
											</button>
										}
									})}
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{DriverStatus, Node, Passenger};

	fn nodes() -> Vec<Node> {
		vec![Node {
			id: "A".into(),
			name: "Library".into(),
			lat: 0.0,
			lng: 0.0,
		}]
	}

	#[test]
	fn request_row_uses_names_and_falls_back_to_ids() {
		let nodes = nodes();
		let lookup = NodeLookup::new(&nodes);
		let row = RequestRow::new(
			&lookup,
			&PendingRequest {
				id: "R-1".into(),
				user_id: "u1".into(),
				source: "A".into(),
				destination: "Q".into(),
			},
		);
		assert_eq!(row.trip, "Library → Q");
	}

	#[test]
	fn ride_line_shows_two_decimals() {
		let line = ride_line(&RideRecord {
			id: "H-1".into(),
			kind: "pool".into(),
			riders: vec!["u1".into(), "u2".into()],
			driver: "Driver-1".into(),
			distance: 7.0,
		});
		assert_eq!(line, "pool: u1, u2 via Driver-1 (7.00 km)");
	}

	#[test]
	fn only_en_route_drivers_can_complete() {
		let nodes = nodes();
		let lookup = NodeLookup::new(&nodes);
		let mut driver = Driver {
			id: "Driver-1".into(),
			location: "A".into(),
			status: DriverStatus::Idle,
			passengers: vec![],
			final_destination: None,
		};
		let idle = DriverRow::new(&lookup, &driver);
		assert!(!idle.can_complete);
		assert_eq!(idle.riders, None);
		assert_eq!(idle.location, "Library");

		driver.status = DriverStatus::EnRoute;
		driver.passengers = vec![Passenger { user_id: "u1".into() }, Passenger { user_id: "u2".into() }];
		driver.final_destination = Some("A".into());
		let busy = DriverRow::new(&lookup, &driver);
		assert!(busy.can_complete);
		assert_eq!(busy.status, "en-route");
		assert_eq!(busy.riders.as_deref(), Some("u1, u2"));
		assert_eq!(busy.destination.as_deref(), Some("Library"));
	}
}
