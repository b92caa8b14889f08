//! Unit tests for session management.
