//! # Core Navigation Logic
//!
//! This module contains backstack's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │           CORE              │
//!                    │      (this module)          │
//!                    │                             │
//!                    │  • Screen (trait + keys)    │
//!                    │  • ScreenStack (history)    │
//!                    │  • TransitionGate (debounce)│
//!                    │  • Navigator (operations)   │
//!                    │                             │
//!                    │  No I/O. No terminal. Pure. │
//!                    └──────────────┬──────────────┘
//!                                   │
//!                                   ▼
//!                            ┌────────────┐
//!                            │    TUI     │
//!                            │  Adapter   │
//!                            │ (ratatui)  │
//!                            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`screen`]: the `Screen` trait, keys, lifecycle states, payloads
//! - [`stack`]: mounted screens, named back-stack entries, transactions
//! - [`gate`]: the transition debounce state machine
//! - [`backpress`]: back double-press detection
//! - [`nav`]: the `Navigator` — the operations callers actually use
//! - [`config`]: TOML config loading and resolution

pub mod backpress;
pub mod config;
pub mod gate;
pub mod nav;
pub mod screen;
pub mod stack;
