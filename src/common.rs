pub mod error;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
