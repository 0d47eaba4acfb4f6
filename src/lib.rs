//! Filterable headline reader for the Mediastack news API.
//!
//! One invocation is one fetch cycle: resolve the filter state into a query
//! descriptor, issue a single GET, normalize the response into article
//! records, and write the outcome to the output surfaces.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod output;
pub mod services;
pub mod sources;
