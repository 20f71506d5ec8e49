/// Application configuration module
pub mod config;
/// Service traits
pub mod interfaces;
/// Job entry points used by the binaries
pub mod jobs;
/// Services orchestrating sources, stores and notifiers
pub mod services;
