//! # Converter
//!
//! End-to-end mesh-to-blueprint conversion:
//!
//! ```text
//! validate ─→ load template ─→ load mesh ─→ rotate ─→ voxelize ─→ assemble ─→ save
//! ```
//!
//! [`convert`] runs on the calling thread; [`spawn_conversion`] runs the same
//! work on a worker thread and streams progress over a channel.

pub mod convert;
pub mod error;
pub mod worker;

pub use convert::{convert, output_file_name, ConversionOutcome, ConversionRequest, MeshSource};
pub use error::{ConvertError, ConvertResult};
pub use worker::{spawn_conversion, ConversionHandle};
