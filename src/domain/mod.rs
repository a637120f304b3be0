pub mod filter;
pub mod property;

pub use filter::{filter_properties, Category, CoordinateSearch, FilterCriteria};
pub use property::{Coordinates, PropertyRecord, PropertyStatus};
