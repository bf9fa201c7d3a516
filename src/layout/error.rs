//! Layout error types.

use thiserror::Error;

use super::region::RegionId;
use super::size::Size;

/// Conditions a caller may choose to reject after a resize pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Fixed dimensions exceeded the container and a region got a negative size.
    #[error("region {region} was allotted {size:?}: fixed sizes exceed the container")]
    Overflow {
        /// The first region that received a negative dimension.
        region: RegionId,
        /// The size it received.
        size: Size,
    },
}
