//! AHP Engine - Multi-criteria decision support
//!
//! This crate implements Saaty's Analytic Hierarchy Process: pairwise
//! judgments between criteria become weights, the judgments are tested for
//! consistency, and alternatives are scored against the weighted criteria.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
