//! VitalVoice - voice health journaling
//!
//! Turns spoken health notes into structured, doctor-ready records. A
//! capture session collects dictated speech, an extraction service sends
//! the transcript through an AI gateway, and defensive reply parsing
//! guarantees a usable record even when the model misbehaves.
//!
//! The crate follows a hexagonal layout:
//! - `domain`: capture session state machine, health record types,
//!   reply resolution, configuration
//! - `application`: capture and extraction orchestration over ports
//! - `infrastructure`: gateway client, stdin dictation, config store
//! - `server`: HTTP surface for browser clients
//! - `cli`: argument parsing and terminal presentation

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;
