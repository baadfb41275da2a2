//! # tienda-debounce
//!
//! Debounced actions: rapid repeated triggers collapse into a single
//! execution once a quiet period passes with no new trigger.
//!
//! ## Core Concepts
//!
//! - [`Action`] = the side effect (usually an HTTP call), run fire-and-forget
//! - [`Debouncer`] = owns at most one pending invocation of that action
//!
//! The key principle: **a new trigger replaces the pending one, never queues
//! behind it**.
//!
//! ## Lifecycle
//!
//! ```text
//!            invoke(args)                 invoke(args')
//!   idle ─────────────────► pending ─────────────────► pending
//!    ▲                        │      (old timer aborted,  │
//!    │                        │       clock restarts)     │
//!    │    quiet period        │                           │
//!    └──── elapses ◄──────────┴───────────────────────────┘
//!          action(last args) runs on its own task
//! ```
//!
//! ## Key Invariants
//!
//! 1. **Zero or one pending invocation** per debouncer
//! 2. **Last arguments win** - a burst fires once with the final call's args
//! 3. **Never inline** - `invoke` only schedules, even for a zero quiet period
//! 4. **Instances are independent** - no global registry, no shared timers
//!
//! ## What This Does Not Do
//!
//! - No explicit cancel: only a newer `invoke` prevents a pending run
//! - No mutual exclusion between running actions: if an action takes longer
//!   than the quiet period, a later firing can start while it is in flight
//! - No error propagation or retry: actions handle their own failures
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use tienda_debounce::Debouncer;
//!
//! let search = Debouncer::new(Duration::from_millis(300), |query: String| async move {
//!     if let Err(e) = run_search(&query).await {
//!         tracing::error!(error = %e, "Search error");
//!     }
//! });
//!
//! // Keystrokes arriving faster than 300ms produce a single search for "shoes".
//! for query in ["s", "sh", "sho", "shoe", "shoes"] {
//!     search.invoke(query.to_string());
//! }
//! ```

mod action;
mod debouncer;


pub use action::{Action, FnAction};
pub use debouncer::Debouncer;

// Re-export commonly used external types
pub use async_trait::async_trait;
