// ABOUTME: Shared helper modules for integration tests
// ABOUTME: HTTP request helpers for driving routers in-process

pub mod axum_test;
