//! Pointer-draggable bubble physics for UI.
//!
//! `bubbly` simulates a single on-screen object that can be grabbed, thrown,
//! falls under gravity, loses energy to friction, bounces off the viewport
//! edges with damping, and squashes/stretches with its velocity. Designed for
//! UI juice: floating action bubbles, draggable chat heads, playful widgets.
//!
//! # Features
//!
//! - **Drag capture**: pointer sessions with velocity estimation from samples
//! - **Deterministic physics**: per-tick gravity, friction, speed clamp
//! - **Boundary bounce**: clamp-and-damp collision against the viewport
//! - **Squash & stretch**: direction-aware deformation, pure in velocity
//! - **Self-stopping loop**: frames scheduled only while motion is live
//! - **Observable**: boundary contacts and mode changes via `BubbleObserver`
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

pub mod float;
pub mod vec;
pub mod config;
pub mod error;
pub mod bounds;
pub mod deform;
pub mod motion;
pub mod collide;
pub mod drag;
pub mod bubble;
pub mod observer;
pub mod driver;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use config::BubbleConfig;
pub use error::BubbleError;
pub use bounds::Bounds;
pub use deform::Deformation;
pub use collide::{Contact, Edge};
pub use drag::{DragSample, DragSession};
pub use bubble::{Bubble, Mode, PointerEvent, Snapshot, Tick};
pub use observer::{BubbleObserver, NoOpBubbleObserver};
pub use driver::{BubbleDriver, FrameScheduler};
