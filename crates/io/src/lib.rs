//! # naiad-io
//!
//! Read daily river series and response curves from CSV files and write
//! scored index output back to CSV. Bridges external file formats into the
//! scoring pipeline's internal `&[f64]` slice-based APIs.

mod csv_read;
mod error;
mod reader;
mod series;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{SeriesReaderConfig, StorageFit, load_curve, read_series};
pub use series::RiverSeries;
pub use writer::write_indices;
