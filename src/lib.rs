//! jot library exports for testing

pub mod core;
pub mod logging;

#[cfg(test)]
pub mod test_support;
