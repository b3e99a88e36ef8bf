pub mod celebrity;
pub mod common;
pub mod profile;
pub mod zodiac;
