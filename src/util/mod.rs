//! Small helpers with browser dependencies.

pub mod storage;
