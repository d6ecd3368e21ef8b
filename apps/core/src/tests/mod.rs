//! Test Module
//!
//! Cross-module test suite for the TutorLens core.
//!
//! ## Test Categories
//! - `brain_tests`: Classification rules, suggestion table, insight aggregation
//! - `integration_tests`: Full submit / aggregate / report workflows
