//! Draw list for the route map.
//!
//! Everything the canvas shows is computed here from plain inputs, so the
//! painter in `render.rs` only walks the lists in order: base edges, route
//! overlay, driver headings, nodes, drivers.

use super::projection::Projection;
use crate::config::Viewport;
use crate::model::{Driver, NodeLookup, Route, StatusSnapshot};
use crate::session::Selection;

pub const NODE_RADIUS: f64 = 8.0;
pub const HIT_RADIUS: f64 = 12.0;
pub const DRIVER_RADIUS: f64 = 5.0;
pub const DRIVER_OFFSET: f64 = 10.0;

pub const SOURCE_COLOR: &str = "#16a34a";
pub const DESTINATION_COLOR: &str = "#dc2626";
pub const NEUTRAL_COLOR: &str = "#6b7280";

pub type Point = (f64, f64);

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	pub from: Point,
	pub to: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	pub segment: Segment,
	/// Weight formatted to one decimal, drawn above the midpoint.
	pub label: String,
}

impl EdgeShape {
	pub fn label_anchor(&self) -> Point {
		let ((x1, y1), (x2, y2)) = (self.segment.from, self.segment.to);
		((x1 + x2) / 2.0, (y1 + y2) / 2.0 - 4.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeMarker {
	pub id: String,
	pub at: Point,
	pub fill: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DriverMarker {
	pub label: String,
	pub at: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub viewport: Viewport,
	pub edges: Vec<EdgeShape>,
	pub route: Vec<Segment>,
	/// Dashed line from an en-route driver to its final destination.
	pub headings: Vec<Segment>,
	pub nodes: Vec<NodeMarker>,
	pub drivers: Vec<DriverMarker>,
}

/// Marker fill as a function of the selection. Source wins when a node is
/// both ends of the pair.
pub fn node_fill(selection: &Selection, id: &str) -> &'static str {
	if selection.is_source(id) {
		SOURCE_COLOR
	} else if selection.is_destination(id) {
		DESTINATION_COLOR
	} else {
		NEUTRAL_COLOR
	}
}

impl Scene {
	/// Builds the draw list. `None` while there are no nodes yet, which
	/// the map shows as a loading state.
	pub fn build(
		snapshot: &StatusSnapshot,
		selection: &Selection,
		route: Option<&Route>,
		viewport: Viewport,
	) -> Option<Self> {
		let projection = Projection::fit(&snapshot.nodes, viewport)?;
		let lookup = NodeLookup::new(&snapshot.nodes);
		let at = |id: &str| lookup.resolve(id).map(|n| projection.project_node(n));

		let edges: Vec<EdgeShape> = snapshot
			.edges
			.iter()
			.filter_map(|e| {
				Some(EdgeShape {
					segment: Segment {
						from: at(&e.u)?,
						to: at(&e.v)?,
					},
					label: format!("{:.1}", e.weight),
				})
			})
			.collect();

		let route: Vec<Segment> = route
			.map(|r| {
				r.path
					.windows(2)
					.filter_map(|pair| {
						Some(Segment {
							from: at(&pair[0])?,
							to: at(&pair[1])?,
						})
					})
					.collect()
			})
			.unwrap_or_default();

		let nodes: Vec<NodeMarker> = snapshot
			.nodes
			.iter()
			.map(|n| NodeMarker {
				id: n.id.clone(),
				at: projection.project_node(n),
				fill: node_fill(selection, &n.id),
			})
			.collect();

		let driver_at = |d: &Driver| at(&d.location).map(|(x, y)| (x, y + DRIVER_OFFSET));

		let headings: Vec<Segment> = snapshot
			.drivers
			.iter()
			.filter(|d| d.is_en_route())
			.filter_map(|d| {
				Some(Segment {
					from: driver_at(d)?,
					to: at(d.final_destination.as_deref()?)?,
				})
			})
			.collect();

		let drivers: Vec<DriverMarker> = snapshot
			.drivers
			.iter()
			.filter_map(|d| {
				Some(DriverMarker {
					label: d.short_label(),
					at: driver_at(d)?,
				})
			})
			.collect();

		Some(Self {
			viewport,
			edges,
			route,
			headings,
			nodes,
			drivers,
		})
	}

	/// Node under a canvas position. Later markers are drawn on top, so the
	/// last hit wins.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<&str> {
		self.nodes
			.iter()
			.rev()
			.find(|n| {
				let (dx, dy) = (n.at.0 - x, n.at.1 - y);
				(dx * dx + dy * dy).sqrt() < HIT_RADIUS
			})
			.map(|n| n.id.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{DriverStatus, Edge, Node};

	fn node(id: &str, lat: f64, lng: f64) -> Node {
		Node {
			id: id.into(),
			name: id.into(),
			lat,
			lng,
		}
	}

	fn edge(u: &str, v: &str, weight: f64) -> Edge {
		Edge {
			u: u.into(),
			v: v.into(),
			weight,
		}
	}

	fn driver(id: &str, location: &str, status: DriverStatus, dest: Option<&str>) -> Driver {
		Driver {
			id: id.into(),
			location: location.into(),
			status,
			passengers: vec![],
			final_destination: dest.map(Into::into),
		}
	}

	fn snapshot() -> StatusSnapshot {
		StatusSnapshot {
			nodes: vec![node("A", 0.0, 0.0), node("B", 1.0, 1.0), node("C", 0.0, 1.0)],
			edges: vec![edge("A", "B", 3.0), edge("B", "C", 2.04), edge("C", "Z", 1.0)],
			drivers: vec![
				driver("Driver-1", "A", DriverStatus::Idle, None),
				driver("Driver-2", "Z", DriverStatus::Idle, None),
				driver("Driver-3", "B", DriverStatus::EnRoute, Some("C")),
			],
			..Default::default()
		}
	}

	fn build(snapshot: &StatusSnapshot, selection: &Selection, route: Option<&Route>) -> Scene {
		Scene::build(snapshot, selection, route, Viewport::DEFAULT).unwrap()
	}

	#[test]
	fn no_nodes_means_loading() {
		let empty = StatusSnapshot::default();
		assert!(Scene::build(&empty, &Selection::default(), None, Viewport::DEFAULT).is_none());
	}

	#[test]
	fn dangling_edge_is_skipped_and_others_drawn() {
		let scene = build(&snapshot(), &Selection::default(), None);
		assert_eq!(scene.edges.len(), 2);
		assert_eq!(scene.edges[0].label, "3.0");
		assert_eq!(scene.edges[1].label, "2.0");
		assert_eq!(scene.edges[0].segment.from, (60.0, 575.0));
	}

	#[test]
	fn route_draws_consecutive_pairs_and_skips_missing_segment() {
		let snap = snapshot();
		let route = Route {
			path: vec!["A".into(), "B".into(), "Z".into(), "C".into(), "A".into()],
			distance: 9.0,
		};
		let scene = build(&snap, &Selection::default(), Some(&route));
		// A-B and C-A survive, B-Z and Z-C are dropped
		assert_eq!(scene.route.len(), 2);
		assert_eq!(scene.route[0], scene.edges[0].segment);
	}

	#[test]
	fn short_route_draws_nothing() {
		let route = Route {
			path: vec!["A".into()],
			distance: 0.0,
		};
		let scene = build(&snapshot(), &Selection::default(), Some(&route));
		assert!(scene.route.is_empty());
	}

	#[test]
	fn node_colors_follow_selection() {
		let mut selection = Selection::default();
		selection.click("A".into());
		selection.click("B".into());
		let scene = build(&snapshot(), &selection, None);
		let fills: Vec<_> = scene.nodes.iter().map(|n| n.fill).collect();
		assert_eq!(fills, vec![SOURCE_COLOR, DESTINATION_COLOR, NEUTRAL_COLOR]);
	}

	#[test]
	fn self_loop_selection_shows_source_color() {
		let mut selection = Selection::default();
		selection.click("A".into());
		selection.click("A".into());
		assert_eq!(node_fill(&selection, "A"), SOURCE_COLOR);
	}

	#[test]
	fn drivers_are_offset_and_unresolved_ones_skipped() {
		let scene = build(&snapshot(), &Selection::default(), None);
		assert_eq!(scene.drivers.len(), 2);
		assert_eq!(scene.drivers[0].label, "D1");
		assert_eq!(scene.drivers[0].at, (60.0, 575.0 + DRIVER_OFFSET));
		assert_eq!(scene.headings.len(), 1);
		assert_eq!(scene.headings[0].from, scene.drivers[1].at);
	}

	#[test]
	fn hit_test_finds_nearest_marker_within_radius() {
		let scene = build(&snapshot(), &Selection::default(), None);
		assert_eq!(scene.node_at_position(65.0, 570.0), Some("A"));
		assert_eq!(scene.node_at_position(300.0, 300.0), None);
	}

	#[test]
	fn rebuilding_from_same_inputs_is_identical() {
		let snap = snapshot();
		let selection = Selection::default();
		assert_eq!(build(&snap, &selection, None), build(&snap, &selection, None));
	}
}
