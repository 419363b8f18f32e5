//! Networking: fragment retrieval.

pub mod fragments;
