mod region_code;
mod region_resolver;

pub use region_code::RegionCode;
pub use region_resolver::RegionResolver;
