//! Core library for the catalog pipeline.
//!
//! This crate exposes the domain model, Diesel-backed repository, catalog
//! API client and pipeline services used by the `catalog-pipeline` binary.

pub mod api;
pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
