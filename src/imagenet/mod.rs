pub mod config;
pub mod preprocess;
pub mod util;
