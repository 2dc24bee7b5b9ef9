pub mod context;
pub mod init;
pub mod languages;
pub mod text;
pub mod translate;
