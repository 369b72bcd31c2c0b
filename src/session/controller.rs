use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{ClientState, FollowUp};
use crate::api::ApiClient;
use crate::model::{CompleteRideBody, NodeId};

/// Owner of the client state. Network round trips run on the UI thread's
/// executor; their results are funnelled back through [`ClientState`].
///
/// No two calls are serialized against each other. Overlapping refreshes
/// are ordered by ticket, so a late response cannot roll back a newer one.
#[derive(Clone, Copy)]
pub struct Session {
	pub state: RwSignal<ClientState>,
	api: StoredValue<ApiClient>,
}

impl Session {
	pub fn new(api: ApiClient) -> Self {
		Self {
			state: RwSignal::new(ClientState::default()),
			api: StoredValue::new(api),
		}
	}

	pub fn refresh(self) {
		let Some(ticket) = self.state.try_update(ClientState::begin_refresh) else {
			return;
		};
		let api = self.api.get_value();
		spawn_local(async move {
			let result = api.fetch_status().await;
			self.settle(|s| s.settle_refresh(ticket, result));
		});
	}

	/// Applies a finished round trip and runs whatever it asks for next.
	fn settle(self, apply: impl FnOnce(&mut ClientState) -> FollowUp) {
		match self.state.try_update(apply) {
			Some(FollowUp::Refresh) => self.refresh(),
			Some(FollowUp::Done) | None => {}
		}
	}

	pub fn select_node(self, id: NodeId) {
		self.state.update(|s| s.select_node(id));
	}

	pub fn pick_source(self, id: Option<NodeId>) {
		self.state.update(|s| s.pick_source(id));
	}

	pub fn pick_destination(self, id: Option<NodeId>) {
		self.state.update(|s| s.pick_destination(id));
	}

	pub fn set_user_id(self, user_id: String) {
		self.state.update(|s| s.set_user_id(user_id));
	}

	pub fn submit_request(self) {
		let Some(Ok(body)) = self.state.try_update(ClientState::prepare_submission) else {
			return;
		};
		let api = self.api.get_value();
		spawn_local(async move {
			let result = api.submit_request(&body).await;
			self.settle(|s| s.settle_submit(result));
		});
	}

	pub fn complete_ride(self, driver_id: String) {
		let api = self.api.get_value();
		spawn_local(async move {
			let result = api.complete_ride(&CompleteRideBody { driver_id }).await;
			self.settle(|s| s.settle_complete(result));
		});
	}

	pub fn dismiss_message(self) {
		self.state.update(ClientState::dismiss_message);
	}
}
