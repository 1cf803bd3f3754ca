//! Correspondences between linear features of two versions of a dataset, and morphing between them.
//!
//! A correspondence relates an initial line (e.g. a road in a detailed dataset) to its final counterpart (the same
//! road after generalisation). Either side may be split into several consecutive sub-lines:
//!
//! * [`OneToOneCorrespondence`]: one initial line, one final line;
//! * [`OneToManyCorrespondence`]: one initial line, several final sub-lines;
//! * [`ManyToOneCorrespondence`]: several initial sub-lines, one final line;
//! * [`ManyToManyCorrespondence`]: several initial sub-lines, several final sub-lines.
//!
//! All of them implement [`SubLineCorrespondence`], which can compute an intermediate line at any stage of the
//! transformation ([`SubLineCorrespondence::morph`]) and pair the vertices of the two lines
//! ([`SubLineCorrespondence::match_vertices`]).
//!
//! ```
//! use geomatch::geomatch_types::geometry::LineString;
//! use geomatch::geomatch_types::DirectPosition;
//! use geomatch::{OneToOneCorrespondence, SubLineCorrespondence};
//!
//! let initial = LineString::new(vec![DirectPosition::new(0.0, 0.0), DirectPosition::new(2.0, 0.0)]);
//! let final_line = LineString::new(vec![DirectPosition::new(0.0, 2.0), DirectPosition::new(2.0, 2.0)]);
//! let correspondence = OneToOneCorrespondence::new(initial, final_line).unwrap();
//!
//! let half_way = correspondence.morph(0.5).unwrap();
//! assert_eq!(half_way[1], DirectPosition::new(2.0, 1.0));
//! ```
//!
//! Geometry types and the conversions between geometry models live in the [`geomatch_types`] crate, which is
//! re-exported here.

pub mod compile;
pub mod config;
pub mod correspondence;
pub mod error;

pub use compile::compile_lines;
pub use config::CorrespondenceConfig;
pub use correspondence::{
    CorrespondenceType, ManyToManyCorrespondence, ManyToOneCorrespondence, MatchedFeature,
    OneToManyCorrespondence, OneToOneCorrespondence, SubLineCorrespondence, VertexMatching,
};
pub use error::MatchingError;
pub use geomatch_types;
