//! Format helpers used by pipeline plugins
//!
//! - [`coordinates`]: GeoJSON envelope and WGS84 bounding-box transforms
//! - [`dates`]: date string normalisation to ISO 8601
//! - [`uri`]: remote URI detection

pub mod coordinates;
pub mod dates;
pub mod error;
pub mod uri;

pub use coordinates::Coordinates;
pub use dates::isoformat_date;
pub use error::{Error, Result};
pub use uri::is_remote_uri;
