//! Geometry types for matching and morphing linear features.
//!
//! The crate defines two geometry models and the conversions between them:
//! * [`geometry`] is the native model: points, line strings, rings, polygons, multi geometries, aggregates and
//!   solids, each with an optional coordinate reference system.
//! * [`sf`] is the simple feature model used to exchange geometries with the `geo` ecosystem. It wraps
//!   [`geo_types`] values.
//! * [`adapter`] converts between the two models and reduces geometries to 2d.
//!
//! Position lists of the native model also provide the curvilinear operations (length, point at a curvilinear
//! abscissa) used by the morphing engine of the `geomatch` crate.

pub mod adapter;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod geometry_type;
pub mod sf;

pub use envelope::Envelope;
pub use error::{GeometryError, RingDefect};
pub use geometry::{DirectPosition, Geometry, PositionList};
pub use geometry_type::{GeometryType, SfGeometryType};
