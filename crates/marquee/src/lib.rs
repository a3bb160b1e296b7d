//! Marquee - cinema ticketing front service template.
//!
//! Serves a mock film catalog and account surface behind a route access
//! guard. The guard is the load-bearing piece: every protected surface is
//! wrapped in the same check sequence (local session, token validation
//! against the issuing authority, optional elevated role) and fails closed
//! into a redirect.

pub mod account;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod guard;
