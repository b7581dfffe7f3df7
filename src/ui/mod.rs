//! Terminal UI layer for the chat screen.
//!
//! - [`chat_loop`]: the interaction loop that turns terminal events into
//!   [`crate::core::app::AppAction`]s and spawns queries.
//! - [`renderer`]: frame composition from the session snapshot.
//! - [`theme`]: colors and styles.
//!
//! This layer presents and captures interaction state; [`crate::core`] owns
//! the request lifecycle.

pub mod chat_loop;
pub mod renderer;
pub mod theme;
