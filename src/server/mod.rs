//! Server application core modules.
//!
//! HTTP routing, sessions, services over the relational store, and the data
//! repositories beneath them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
