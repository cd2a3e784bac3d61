pub mod houses;
pub mod mapper;
pub mod types;

pub use houses::{build_houses, House, HOUSE_COUNT};
pub use mapper::{map_longitude, normalize_longitude, Placement, SIGN_SPAN};
pub use types::{Body, Element, Sign};
