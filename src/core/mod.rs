//! Core data types: byte patterns, file type descriptions and the ordered
//! signature catalog.

pub mod catalog;
pub mod file_type;
pub mod pattern;
