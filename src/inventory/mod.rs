//! Grid inventory system

pub mod grid;
pub mod placement;
pub mod container;

pub use grid::{occupied_cells, rotated_footprint, within_bounds, GridCell, Rotation};
pub use placement::{can_place, check_placement, PlacedRegion, PlacementCheck};
pub use container::{fits_in_container, has_weight_capacity, Container, ContainerType};
