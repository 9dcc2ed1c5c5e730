pub mod add;
pub mod config;
pub mod init;
pub mod provision;
pub mod serve;
pub mod types;
