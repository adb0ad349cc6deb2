//! Integration tests for detection, type checks and definition loading.

mod detection;
mod disambiguation;
mod text;
