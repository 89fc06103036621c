pub mod config;
pub mod delivery;
pub mod directory;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod telemetry;
