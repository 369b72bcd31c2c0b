//! Build-time client configuration.

/// Backend base URL, overridable at build time via `CARPOOL_API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("CARPOOL_API_BASE_URL") {
	Some(url) => url,
	None => "http://127.0.0.1:5000",
};

/// Joins an endpoint path onto a base URL without doubling slashes.
pub fn endpoint(base: &str, path: &str) -> String {
	format!(
		"{}/{}",
		base.trim_end_matches('/'),
		path.trim_start_matches('/')
	)
}

/// Fixed logical canvas geometry the map is projected onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub padding: f64,
}

impl Viewport {
	pub const DEFAULT: Viewport = Viewport {
		width: 961.0,
		height: 635.0,
		padding: 60.0,
	};

	pub fn aspect(&self) -> f64 {
		self.width / self.height
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}

impl Default for Viewport {
	fn default() -> Self {
		Self::DEFAULT
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_joins_without_double_slash() {
		assert_eq!(
			endpoint("http://127.0.0.1:5000/", "/status"),
			"http://127.0.0.1:5000/status"
		);
		assert_eq!(
			endpoint("http://host", "submit-request"),
			"http://host/submit-request"
		);
	}
}
