mod filter;
mod filter_map;
mod partition;
mod unique_by;

pub use filter::*;
pub use filter_map::*;
pub use partition::*;
pub use unique_by::*;
