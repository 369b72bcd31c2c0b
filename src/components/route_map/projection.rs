use crate::config::Viewport;
use crate::model::Node;

/// Linear lat/lng to canvas mapping with one scale shared by both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
	viewport: Viewport,
	min_lat: f64,
	min_lng: f64,
	/// Geographic span mapped onto the drawable area. Zero when every node
	/// sits on the same point.
	range: f64,
}

impl Projection {
	/// Fits the projection to `nodes`. `None` when there is nothing to fit.
	pub fn fit(nodes: &[Node], viewport: Viewport) -> Option<Self> {
		if nodes.is_empty() {
			return None;
		}
		let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
		let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
		for n in nodes {
			min_lat = min_lat.min(n.lat);
			max_lat = max_lat.max(n.lat);
			min_lng = min_lng.min(n.lng);
			max_lng = max_lng.max(n.lng);
		}
		let (lat_range, lng_range) = (max_lat - min_lat, max_lng - min_lng);

		// Shared scale from the larger normalized span; the bare lng span
		// keeps wide networks inside the horizontal padding.
		let range = lat_range
			.max(lng_range / viewport.aspect())
			.max(lng_range);

		Some(Self {
			viewport,
			min_lat,
			min_lng,
			range: if range.is_finite() { range } else { 0.0 },
		})
	}

	/// Canvas position of a geographic point. Y grows downward, so higher
	/// latitudes land nearer the top.
	pub fn project(&self, lat: f64, lng: f64) -> (f64, f64) {
		let Viewport {
			width,
			height,
			padding,
		} = self.viewport;
		if self.range <= 0.0 {
			return self.viewport.center();
		}
		let x = padding + ((lng - self.min_lng) / self.range) * (width - 2.0 * padding);
		let y = height - padding - ((lat - self.min_lat) / self.range) * (height - 2.0 * padding);
		(x, y)
	}

	pub fn project_node(&self, node: &Node) -> (f64, f64) {
		self.project(node.lat, node.lng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, lat: f64, lng: f64) -> Node {
		Node {
			id: id.into(),
			name: id.into(),
			lat,
			lng,
		}
	}

	fn within_padding(vp: Viewport, (x, y): (f64, f64)) -> bool {
		let eps = 1e-9;
		x >= vp.padding - eps
			&& x <= vp.width - vp.padding + eps
			&& y >= vp.padding - eps
			&& y <= vp.height - vp.padding + eps
	}

	#[test]
	fn empty_node_set_has_no_projection() {
		assert!(Projection::fit(&[], Viewport::DEFAULT).is_none());
	}

	#[test]
	fn unit_square_spans_the_vertical_padding() {
		let vp = Viewport::DEFAULT;
		let nodes = [node("A", 0.0, 0.0), node("B", 1.0, 1.0)];
		let p = Projection::fit(&nodes, vp).unwrap();
		assert_eq!(p.project_node(&nodes[0]), (60.0, 575.0));
		assert_eq!(p.project_node(&nodes[1]), (901.0, 60.0));
	}

	#[test]
	fn axes_are_order_preserving_and_y_is_inverted() {
		let vp = Viewport::DEFAULT;
		let nodes = [
			node("A", 52.10, 4.30),
			node("B", 52.12, 4.28),
			node("C", 52.05, 4.41),
			node("D", 52.20, 4.35),
		];
		let p = Projection::fit(&nodes, vp).unwrap();
		for a in &nodes {
			for b in &nodes {
				let (pa, pb) = (p.project_node(a), p.project_node(b));
				if a.lat < b.lat {
					assert!(pa.1 > pb.1);
				}
				if a.lng < b.lng {
					assert!(pa.0 < pb.0);
				}
			}
		}
	}

	#[test]
	fn tall_and_wide_networks_stay_inside_padding() {
		let vp = Viewport::DEFAULT;
		let tall = [node("A", 0.0, 0.0), node("B", 10.0, 0.5), node("C", 4.0, 0.2)];
		let wide = [node("A", 0.0, 0.0), node("B", 0.5, 10.0), node("C", 0.1, 7.0)];
		let flat = [node("A", 3.0, -2.0), node("B", 3.0, 5.0)];
		for nodes in [&tall[..], &wide[..], &flat[..]] {
			let p = Projection::fit(nodes, vp).unwrap();
			for n in nodes {
				assert!(within_padding(vp, p.project_node(n)), "{n:?} escaped");
			}
		}
	}

	#[test]
	fn both_axes_share_one_scale() {
		let vp = Viewport {
			width: 500.0,
			height: 500.0,
			padding: 0.0,
		};
		let nodes = [node("A", 0.0, 0.0), node("B", 2.0, 1.0)];
		let p = Projection::fit(&nodes, vp).unwrap();
		let (x, y) = p.project(1.0, 1.0);
		assert_eq!(x, 250.0);
		assert_eq!(y, 250.0);
	}

	#[test]
	fn coincident_nodes_land_on_center() {
		let vp = Viewport::DEFAULT;
		for nodes in [
			vec![node("A", 5.0, 5.0)],
			vec![node("A", 5.0, 5.0), node("B", 5.0, 5.0)],
		] {
			let p = Projection::fit(&nodes, vp).unwrap();
			for n in &nodes {
				let (x, y) = p.project_node(n);
				assert!(x.is_finite() && y.is_finite());
				assert_eq!((x, y), vp.center());
			}
		}
	}
}
