pub mod celebrity;
pub mod profile;
