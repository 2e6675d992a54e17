mod entry;
mod location;
mod status;

pub use entry::Entry;
pub use location::Location;
pub use status::Status;
