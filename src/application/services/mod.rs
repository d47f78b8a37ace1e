//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FisClient)
//! but are themselves concrete structs, not traits.

mod experiment;

pub use experiment::ExperimentService;
