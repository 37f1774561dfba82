//! Payroll Engine
//!
//! This crate computes monthly salary breakdowns from annual compensation
//! and daily attendance, applying flat-rate statutory deductions (PF, ESI,
//! professional tax, LWF and TDS), and renders the result as a PDF payslip
//! or an HTML preview.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
