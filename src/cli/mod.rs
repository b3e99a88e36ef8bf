pub mod celebrity;
pub mod db;
