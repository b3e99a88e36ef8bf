pub mod celebrity;
pub mod profile;
pub mod zodiac_sign;
