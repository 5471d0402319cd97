//! PoA Forge - Power of Attorney Document Generation Service
//!
//! This crate generates legal Power of Attorney documents as DOCX files
//! from structured form data, with a searchable history of every
//! generated document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
