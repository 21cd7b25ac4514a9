pub mod leaflet;
pub mod session;

pub use session::MapSession;
