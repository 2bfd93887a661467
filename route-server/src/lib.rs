//! Flight route finder server.
//!
//! Answers "how can I fly from here to there?" with every direct flight
//! and every one-stop connection in the catalog, fastest first.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod suggest;
pub mod web;
