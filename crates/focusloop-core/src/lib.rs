//! # Focusloop Core Library
//!
//! Core logic for the focusloop work/break interval clock. The clock
//! follows the Pomodoro cadence: a fixed number of work sets separated by
//! short breaks, closed out by a long break, then the cycle repeats.
//!
//! ## Architecture
//!
//! - **Interval Clock**: a minute-granularity state machine that requires
//!   the caller to deliver `tick()` once per minute; it never touches the
//!   wall clock itself
//! - **Events**: every command and phase transition yields an [`Event`];
//!   a separate dispatcher turns the relevant ones into desktop
//!   notifications, keeping transition logic testable without a
//!   notification daemon
//! - **Configuration**: TOML-based settings for the four interval
//!   parameters and notification preferences
//!
//! ## Key Components
//!
//! - [`IntervalClock`]: the state machine
//! - [`Config`]: configuration management
//! - [`dispatch`]: event-to-notification routing

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod notify;

pub use clock::{IntervalClock, Intervals, Phase};
pub use config::Config;
pub use error::{ClockError, ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use notify::{dispatch, DesktopNotifier, Notifier, NullNotifier};
