pub mod book;
pub mod cancel;
pub mod init;
pub mod root;
pub mod trips;
