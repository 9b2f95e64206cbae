//! Transit catalogue and route planner.
//!
//! Answers two kinds of read-only questions about a static bus network:
//! statistics about a named bus or stop, and the fastest itinerary between
//! two stops as a sequence of waits and bus rides.

pub mod cache;
pub mod catalogue;
pub mod domain;
pub mod ingest;
pub mod requests;
pub mod router;
