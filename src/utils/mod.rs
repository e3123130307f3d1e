//! String transforms for credit normalization

pub mod joins;
pub mod split;
pub mod suffix;
pub mod whitelist;
