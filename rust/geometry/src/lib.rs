//! Brownstone Geometry
//!
//! Placement frames, closed 2D profiles and swept-solid definitions for the
//! parametric brownstone generator. Everything here is pure data and pure
//! functions; tessellating solids into meshes is the viewer collaborator's
//! job and deliberately absent.

pub mod error;
pub mod placement;
pub mod profile;
pub mod solid;
pub mod units;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use placement::{Placement, SegmentFrame};
pub use profile::Profile;
pub use solid::Solid;
pub use units::{feet, inches, Length, LengthUnit};
