//! Wire data model shared with the dispatch backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type NodeId = String;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Node {
	pub id: NodeId,
	pub name: String,
	pub lat: f64,
	pub lng: f64,
}

/// Undirected road segment. Duplicates are kept as sent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Edge {
	pub u: NodeId,
	pub v: NodeId,
	pub weight: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum DriverStatus {
	#[default]
	#[serde(rename = "idle")]
	Idle,
	#[serde(rename = "en-route")]
	EnRoute,
	/// Any status this client does not know; shown, never completable.
	#[serde(other)]
	Unknown,
}

impl DriverStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			DriverStatus::Idle => "idle",
			DriverStatus::EnRoute => "en-route",
			DriverStatus::Unknown => "unknown",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
	pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
	pub id: String,
	pub location: NodeId,
	#[serde(default)]
	pub status: DriverStatus,
	#[serde(default)]
	pub passengers: Vec<Passenger>,
	#[serde(default)]
	pub final_destination: Option<NodeId>,
}

impl Driver {
	pub fn is_en_route(&self) -> bool {
		self.status == DriverStatus::EnRoute
	}

	/// Display label used on the map, e.g. `Driver-3` becomes `D3`.
	pub fn short_label(&self) -> String {
		self.id.replace("Driver-", "D")
	}
}

/// A pending, unmatched ride ask.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
	pub id: String,
	pub user_id: String,
	pub source: NodeId,
	pub destination: NodeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RideRecord {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub riders: Vec<String>,
	pub driver: String,
	pub distance: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Route {
	pub path: Vec<NodeId>,
	pub distance: f64,
}

/// Full response of `GET /status`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
	#[serde(default)]
	pub nodes: Vec<Node>,
	#[serde(default)]
	pub edges: Vec<Edge>,
	#[serde(default)]
	pub drivers: Vec<Driver>,
	#[serde(default)]
	pub requests: Vec<PendingRequest>,
	#[serde(default)]
	pub ride_history: Vec<RideRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestBody {
	pub user_id: String,
	pub source: NodeId,
	pub destination: NodeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubmitResponse {
	pub success: bool,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub assigned_route: Option<Route>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRideBody {
	pub driver_id: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CompleteResponse {
	pub success: bool,
	#[serde(default)]
	pub message: String,
}

/// Id index over a node list.
///
/// This is the one place a node reference is resolved. Every consumer
/// (edges, route overlay, driver markers, list labels) treats `None` as
/// "skip this element": a dangling id is a partial snapshot, not an error.
pub struct NodeLookup<'a> {
	by_id: HashMap<&'a str, &'a Node>,
}

impl<'a> NodeLookup<'a> {
	pub fn new(nodes: &'a [Node]) -> Self {
		Self {
			by_id: nodes.iter().map(|n| (n.id.as_str(), n)).collect(),
		}
	}

	pub fn resolve(&self, id: &str) -> Option<&'a Node> {
		self.by_id.get(id).copied()
	}

	/// Node name for list display, falling back to the raw id.
	pub fn display_name<'b>(&self, id: &'b str) -> &'b str
	where
		'a: 'b,
	{
		self.resolve(id).map(|n| n.name.as_str()).unwrap_or(id)
	}
}
