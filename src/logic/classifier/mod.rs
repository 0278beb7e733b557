//! Classifier Module
//!
//! Talks to the remote classification service and decodes its verdicts.
//!
//! ## Structure
//! - `types`: VerdictLabel, Verdict, wire request/response shapes
//! - `client`: reqwest client for the two predict endpoints

pub mod client;
pub mod types;

pub use client::{ClassifierClient, ClassifyError};
pub use types::{Verdict, VerdictLabel};
