mod controller;
mod selection;
mod state;

pub use controller::Session;
pub use selection::Selection;
pub use state::Message;
