//! Binary-side test suite for the calculator pipeline.

mod calculator_tests;
