//! Helpers for asserting on log output in unit tests.
//!
//! Only compiled for tests. Logs are captured with `testing_logger`, so every test using these
//! helpers has to call `testing_logger::setup()` first.
