use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Submit form field that was left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
	UserId,
	Source,
	Destination,
}

impl std::fmt::Display for MissingField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			MissingField::UserId => "user id",
			MissingField::Source => "source",
			MissingField::Destination => "destination",
		})
	}
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
	#[error("Cannot connect to backend.")]
	Connectivity(String),

	#[error("Cannot connect to backend (HTTP {0}).")]
	Status(u16),

	#[error("Unexpected response from backend: {0}")]
	Decode(String),

	#[error("Please fill all fields (missing {0}).")]
	Validation(MissingField),
}

impl From<gloo_net::Error> for Error {
	fn from(e: gloo_net::Error) -> Self {
		match e {
			gloo_net::Error::SerdeError(e) => Error::Decode(e.to_string()),
			other => Error::Connectivity(other.to_string()),
		}
	}
}
