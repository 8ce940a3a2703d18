mod geojson;
mod region;
mod set;
mod source;

pub use region::{Region, RegionId};
pub use set::RegionSet;
pub use source::RegionSource;
