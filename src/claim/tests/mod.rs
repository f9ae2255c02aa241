//! Unit tests for the claim workflows.

mod support;
