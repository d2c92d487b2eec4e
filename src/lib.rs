// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene: f64 → f32 narrowing at the render boundary is the point
// of this crate, so precision-loss casts are allowed, but trivial casts
// are not.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math compares against exact constants in tests
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
// Pedantic/nursery overrides — too noisy for this codebase
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]

//! Camera & frame synchronization bridge between a geocentric globe
//! renderer and a local-space 3D scene renderer.
//!
//! Two independently running renderers draw the same viewport: the Globe
//! Engine owns planet-scale geodesy, the Scene Engine owns arbitrary local
//! 3D content in a small y-up Euclidean space. This crate keeps them
//! visually aligned by fixing one local tangent frame at a geographic
//! anchor and, every frame, converting the Globe Engine's camera state
//! into an equivalent Scene Engine camera state.
//!
//! # Key entry points
//!
//! - [`options::BridgeOptions`] - startup configuration (anchor geography,
//!   target projection convention)
//! - [`frame::TangentFrame`] - the one-time local reference frame
//! - [`camera::extract`] - the per-frame camera state conversion
//! - [`driver::FrameDriver`] - the render-loop orchestrator around the
//!   host's [`driver::GlobeEngine`] and [`driver::SceneEngine`] adapters
//!
//! # Architecture
//!
//! Data flows one way per tick: Globe Engine camera state → extraction →
//! Scene Engine camera state, strictly ordered and single-threaded within
//! the host's display-refresh callback. The [`frame::TangentFrame`] is the
//! only cross-tick state and is read-only after construction.

pub mod camera;
pub mod driver;
pub mod error;
pub mod frame;
pub mod geodesy;
pub mod options;
pub mod util;

pub use camera::{CameraExtrinsics, CameraState};
pub use driver::{DriverState, FrameDriver, GlobeEngine, SceneEngine};
pub use error::BridgeError;
pub use frame::TangentFrame;
pub use geodesy::GeocentricPoint;
pub use options::BridgeOptions;
