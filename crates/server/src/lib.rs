//! Addressbook server library.
//!
//! This crate provides the HTTP service functionality as a library,
//! allowing it to be tested in-process and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod object_store;
pub mod routes;
pub mod state;
pub mod storage;
