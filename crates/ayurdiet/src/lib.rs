pub mod config;
pub mod constitution;
pub mod diet_chart;
pub mod error;
pub mod nutrition;
pub mod recipes;
pub mod recommendations;
pub mod repository;
pub mod telemetry;
