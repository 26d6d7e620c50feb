// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise Tracker: register users and keep a log of their exercises
//!
//! This crate provides the backend API for creating users, recording
//! exercises (description, duration, date) against them, and retrieving
//! date-bounded exercise logs.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
