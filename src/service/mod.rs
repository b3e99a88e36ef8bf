pub mod profile;
pub mod zodiac;
