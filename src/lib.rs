pub mod color;
pub mod config;
pub mod error;
pub mod highlight;
pub mod led;
pub mod wave;
