use log::{debug, info};

use super::selection::{Selection, SelectionMode};
use crate::error::{Error, MissingField, Result};
use crate::model::{
	CompleteResponse, NodeId, Route, StatusSnapshot, SubmitRequestBody, SubmitResponse,
};

/// Single-slot, dismissable banner text.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
	pub success: bool,
	pub text: String,
}

impl Message {
	pub fn failure(text: impl Into<String>) -> Self {
		Self {
			success: false,
			text: text.into(),
		}
	}

	pub fn from_error(e: &Error) -> Self {
		Self::failure(e.to_string())
	}
}

/// What the controller does after a round trip has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum FollowUp {
	Refresh,
	Done,
}

/// Sequence number handed out by [`ClientState::begin_refresh`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Client-side mirror of the backend plus the ephemeral UI state.
///
/// The snapshot is owned by the backend and replaced wholesale. Selection,
/// route overlay, user id and message are local; a snapshot never touches
/// them. All mutation goes through the methods below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientState {
	pub snapshot: StatusSnapshot,
	pub selection: Selection,
	pub route: Option<Route>,
	pub user_id: String,
	pub message: Option<Message>,
	issued: u64,
	applied: Option<RefreshTicket>,
}

impl ClientState {
	pub fn begin_refresh(&mut self) -> RefreshTicket {
		self.issued += 1;
		RefreshTicket(self.issued)
	}

	/// Replaces the snapshot unless a newer refresh has already landed.
	/// Returns whether the snapshot was applied.
	pub fn apply_snapshot(&mut self, ticket: RefreshTicket, snapshot: StatusSnapshot) -> bool {
		if self.applied.is_some_and(|applied| applied > ticket) {
			debug!("dropping stale snapshot {ticket:?}, {:?} already applied", self.applied);
			return false;
		}
		self.applied = Some(ticket);
		self.snapshot = snapshot;
		true
	}

	/// Prior snapshot stays on screen; only the banner changes. A failure
	/// older than the snapshot on screen says nothing about it and is dropped.
	pub fn apply_refresh_failure(&mut self, ticket: RefreshTicket, e: &Error) {
		if self.applied.is_some_and(|applied| applied > ticket) {
			debug!("ignoring failure of stale refresh {ticket:?}: {e}");
			return;
		}
		self.message = Some(Message::from_error(e));
	}

	/// Lands the outcome of `GET /status`.
	pub fn settle_refresh(
		&mut self,
		ticket: RefreshTicket,
		result: Result<StatusSnapshot>,
	) -> FollowUp {
		match result {
			Ok(snapshot) => {
				if self.apply_snapshot(ticket, snapshot) {
					debug!(
						"snapshot {ticket:?}: {} nodes, {} drivers, {} pending",
						self.snapshot.nodes.len(),
						self.snapshot.drivers.len(),
						self.snapshot.requests.len()
					);
				}
			}
			Err(e) => self.apply_refresh_failure(ticket, &e),
		}
		FollowUp::Done
	}

	/// Map click on a node.
	pub fn select_node(&mut self, id: NodeId) {
		self.selection.click(id);
		self.route = None;
	}

	pub fn pick_source(&mut self, id: Option<NodeId>) {
		self.selection.set_source(id);
		self.route = None;
	}

	pub fn pick_destination(&mut self, id: Option<NodeId>) {
		self.selection.set_destination(id);
		self.route = None;
	}

	pub fn set_user_id(&mut self, user_id: String) {
		self.user_id = user_id;
	}

	pub fn selection_mode(&self) -> SelectionMode {
		self.selection.mode
	}

	/// Validates the form and builds the request body. On failure the
	/// validation message is shown and nothing should be sent.
	pub fn prepare_submission(&mut self) -> Result<SubmitRequestBody> {
		let user_id = self.user_id.trim();
		let missing = if user_id.is_empty() {
			Some(MissingField::UserId)
		} else if self.selection.source.is_none() {
			Some(MissingField::Source)
		} else if self.selection.destination.is_none() {
			Some(MissingField::Destination)
		} else {
			None
		};
		if let Some(field) = missing {
			let e = Error::Validation(field);
			self.message = Some(Message::from_error(&e));
			return Err(e);
		}
		Ok(SubmitRequestBody {
			user_id: user_id.to_string(),
			source: self.selection.source.clone().unwrap_or_default(),
			destination: self.selection.destination.clone().unwrap_or_default(),
		})
	}

	/// Adopts the verdict of `POST /submit-request`. The route overlay set
	/// here survives the refresh that follows since snapshots never carry one.
	pub fn apply_submit_response(&mut self, resp: SubmitResponse) {
		if !resp.success {
			info!("request rejected: {}", resp.message);
		}
		self.message = Some(Message {
			success: resp.success,
			text: resp.message,
		});
		if let Some(route) = resp.assigned_route {
			self.route = Some(route);
		}
		self.user_id.clear();
		self.selection.clear();
	}

	/// Transport failure on submit: the form is kept so the user can retry.
	pub fn apply_submit_failure(&mut self, e: &Error) {
		self.message = Some(Message::from_error(e));
	}

	pub fn apply_complete_response(&mut self, resp: CompleteResponse) {
		self.message = Some(Message {
			success: resp.success,
			text: resp.message,
		});
	}

	pub fn apply_complete_failure(&mut self, e: &Error) {
		self.message = Some(Message::from_error(e));
	}

	/// Lands the outcome of `POST /submit-request`. Success, rejection and
	/// transport failure all end in one snapshot refresh.
	pub fn settle_submit(&mut self, result: Result<SubmitResponse>) -> FollowUp {
		match result {
			Ok(resp) => self.apply_submit_response(resp),
			Err(e) => self.apply_submit_failure(&e),
		}
		FollowUp::Refresh
	}

	/// Lands the outcome of `POST /complete-ride`, then asks for a refresh.
	pub fn settle_complete(&mut self, result: Result<CompleteResponse>) -> FollowUp {
		match result {
			Ok(resp) => self.apply_complete_response(resp),
			Err(e) => self.apply_complete_failure(&e),
		}
		FollowUp::Refresh
	}

	pub fn dismiss_message(&mut self) {
		self.message = None;
	}
}
