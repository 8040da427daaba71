pub mod add;
pub mod config;
pub mod del;
pub mod exists;
pub mod init;
pub mod list;
pub mod load;
pub mod log;
pub mod quiz;
pub mod update;
pub mod user;
