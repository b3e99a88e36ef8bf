pub mod celebrity;
pub mod profile;
pub mod zodiac;
#[cfg(test)]
mod zodiac_test;
