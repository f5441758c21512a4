//! Infrastructure layer - Storage, repositories and services

pub mod hero;
pub mod logging;
pub mod squadron;
pub mod storage;
