//! Loan Eligibility API Library
//!
//! This library provides the core functionality for the loan eligibility
//! service: the amortization calculator, the upstream client for the salary
//! and credit verification services, the decision engine, and the HTTP
//! orchestration layer.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `correlation`: Request correlation-ID handling.
//! - `decision`: Eligibility rule evaluation.
//! - `errors`: Error handling types.
//! - `finance`: Amortized payment calculation.
//! - `handlers`: HTTP request handlers and routing.
//! - `models`: Core data models.
//! - `upstream`: External service clients (salary, credit).

pub mod config;
pub mod correlation;
pub mod decision;
pub mod errors;
pub mod finance;
pub mod handlers;
pub mod models;
pub mod upstream;
