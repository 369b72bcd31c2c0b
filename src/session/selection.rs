use crate::model::NodeId;

/// Which half of the selection pair the next node click fills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
	#[default]
	AwaitingSource,
	AwaitingDestination,
}

impl SelectionMode {
	pub fn next(self) -> Self {
		match self {
			SelectionMode::AwaitingSource => SelectionMode::AwaitingDestination,
			SelectionMode::AwaitingDestination => SelectionMode::AwaitingSource,
		}
	}

	pub fn prompt(self) -> &'static str {
		match self {
			SelectionMode::AwaitingSource => "Select Source",
			SelectionMode::AwaitingDestination => "Select Destination",
		}
	}
}

/// The user's in-progress (source, destination) choice.
///
/// `source == destination` is allowed; the backend decides whether a
/// self-loop ride is acceptable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
	pub mode: SelectionMode,
	pub source: Option<NodeId>,
	pub destination: Option<NodeId>,
}

impl Selection {
	/// Map click: fills the half named by `mode`, then flips `mode`.
	pub fn click(&mut self, id: NodeId) {
		match self.mode {
			SelectionMode::AwaitingSource => self.source = Some(id),
			SelectionMode::AwaitingDestination => self.destination = Some(id),
		}
		self.mode = self.mode.next();
	}

	/// Picker choice. Leaves `mode` alone.
	pub fn set_source(&mut self, id: Option<NodeId>) {
		self.source = id;
	}

	/// Picker choice. Leaves `mode` alone.
	pub fn set_destination(&mut self, id: Option<NodeId>) {
		self.destination = id;
	}

	pub fn is_source(&self, id: &str) -> bool {
		self.source.as_deref() == Some(id)
	}

	pub fn is_destination(&self, id: &str) -> bool {
		self.destination.as_deref() == Some(id)
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clicks_alternate_between_source_and_destination() {
		let mut sel = Selection::default();
		sel.click("A".into());
		assert_eq!(sel.mode, SelectionMode::AwaitingDestination);
		assert!(sel.is_source("A"));
		sel.click("B".into());
		assert_eq!(sel.mode, SelectionMode::AwaitingSource);
		assert!(sel.is_destination("B"));
		sel.click("C".into());
		assert!(sel.is_source("C"));
		assert!(sel.is_destination("B"));
	}

	#[test]
	fn same_node_may_be_both_ends() {
		let mut sel = Selection::default();
		sel.click("A".into());
		sel.click("A".into());
		assert!(sel.is_source("A") && sel.is_destination("A"));
	}

	#[test]
	fn pickers_do_not_move_the_mode() {
		let mut sel = Selection::default();
		sel.set_destination(Some("B".into()));
		assert_eq!(sel.mode, SelectionMode::AwaitingSource);
		sel.set_destination(None);
		assert!(sel.destination.is_none());
	}

	#[test]
	fn clear_resets_to_awaiting_source() {
		let mut sel = Selection::default();
		sel.click("A".into());
		sel.clear();
		assert_eq!(sel, Selection::default());
		assert_eq!(sel.mode.prompt(), "Select Source");
	}
}
