//! TUI pane rendering modules
//!
//! Each pane is a stateless render function taking exactly the data it shows.
//!
//! # Pane Modules
//!
//! - [`expression`]: Infix and postfix text with the current token highlighted
//! - [`stack`]: Stack contents at the current step, top first
//! - [`trace`]: Every recorded step, current one marked
//! - [`output`]: Current step description and the final result or error
//! - [`status`]: Status bar with keybindings and step position

pub mod expression;
pub mod output;
pub mod stack;
pub mod status;
pub mod trace;

pub use expression::render_expression_pane;
pub use output::render_output_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
pub use trace::{render_trace_pane, TraceScrollState};
