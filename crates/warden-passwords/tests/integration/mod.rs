//! Integration tests for the authorized password service.

mod concurrency;
