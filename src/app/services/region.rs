//! Baltic Sea classification
//!
//! Classifies a cast position against the fixed set of bounding boxes that
//! together approximate the Baltic Sea. Used to select the Baltic-specific
//! salinity treatment in derived computations.

use crate::app::models::Position;
use crate::constants::BALTIC_REGIONS;

/// Whether the position falls inside the Baltic Sea.
///
/// Box membership uses exclusive bounds on both axes; a point exactly on a
/// boundary is outside. An unknown position is never Baltic.
pub fn is_baltic(position: &Position) -> bool {
    let Position::Known {
        latitude,
        longitude,
    } = position
    else {
        return false;
    };

    BALTIC_REGIONS.iter().any(|(lon_bounds, lat_bounds)| {
        *longitude > lon_bounds[0]
            && *longitude < lon_bounds[1]
            && *latitude > lat_bounds[0]
            && *latitude < lat_bounds[1]
    })
}
