pub mod attributes;

pub use attributes::{attribute_names, forwarded_props};
