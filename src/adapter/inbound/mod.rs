//! Inbound adapters: how the outside world drives the scheduler.

pub mod cli;
