//! UI module root: exposes drawing functions for individual cards.

pub mod actions;
pub mod clock;
pub mod cpu;
pub mod header;
pub mod mem;
pub mod net;
pub mod processes;
pub mod theme;
