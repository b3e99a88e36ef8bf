pub mod db;
pub mod error;
pub mod security;
pub mod sqlx_utils;
#[cfg(test)]
pub mod test_utils;
pub mod utils;
