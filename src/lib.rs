pub mod app;
pub mod core;
pub mod logic;
pub mod model;
pub mod storage;
