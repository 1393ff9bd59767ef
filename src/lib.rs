pub mod config;
pub mod error;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod processing;
