//! Process-wide client state.
//!
//! DESIGN
//! ======
//! Each store is a `thread_local` `RwSignal` behind explicit get/set/clear
//! helpers rather than an ambient global: components subscribe through the
//! signal, while non-component code (the HTTP interceptors) reaches the
//! same value without needing a context tree. WASM is single-threaded, so
//! `thread_local` gives exactly one instance per process.

pub mod session;
pub mod toasts;
