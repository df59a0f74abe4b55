pub mod app;
pub mod host;
pub mod sections;
pub mod theme;
