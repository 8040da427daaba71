pub mod user;
pub mod word;
