//! Per-site template overrides.

pub mod default;
pub mod harbor;
pub mod summit;

pub use default::DefaultSite;
pub use harbor::HarborSite;
pub use summit::SummitSite;
