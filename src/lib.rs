//! Seed Snake - a terminal rendition of the classic canvas Snake
//!
//! This library provides:
//! - Core game logic, free of any I/O (game module)
//! - Key-event mapping (input module)
//! - Random color schemes and TUI rendering (colors, render modules)
//! - Session statistics (metrics module)
//! - The interactive mode wiring it all together (modes module)

pub mod colors;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
