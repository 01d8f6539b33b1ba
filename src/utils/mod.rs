pub mod consts;
pub mod count_utils;

#[cfg(test)]
pub mod mock_upstream;
