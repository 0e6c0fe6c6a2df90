//! Core functionality

pub mod models;
