//! spot-interrupter: trigger AWS FIS experiments that interrupt EC2 Spot Instances.
//!
//! Layers, innermost first: `domain` (request model), `application`
//! (experiment service), `infrastructure` (FIS client and wiring), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
