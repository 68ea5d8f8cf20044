pub mod dot;

pub use dot::DotFormatter;
