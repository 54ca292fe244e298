#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod attribute;
pub mod convert;
mod directive;
mod emit;
pub mod error;
mod mesh;
mod read;
mod vertex;
pub mod weld;

pub use attribute::AttributeTable;
pub use convert::{convert, convert_reader, convert_str, convert_to_string, Conversion, Stats};
pub use directive::*;
pub use error::{Error, Result};
pub use mesh::*;
pub use vertex::*;
pub use weld::Welder;

pub use objweld_common::ArrayIndex;

/// Scalar type of attribute components.
///
/// Attributes are parsed and welded at double precision; [GpuVertex] narrows to `f32`.
pub type Real = f64;
