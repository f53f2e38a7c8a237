pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod menu;
pub mod report;
