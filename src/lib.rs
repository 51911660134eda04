//! # cardgen - Business Card and Logo Design Engine
//!
//! cardgen turns loosely shaped design suggestions (from an AI provider or
//! the built-in catalog) into concrete, drawable output. It provides:
//!
//! - **Procedural icons**: seeded, reproducible vector logo marks
//! - **Layout normalization**: a single trust boundary for untrusted JSON
//! - **Contrast resolution**: WCAG-based text color selection
//! - **Card layout**: grid mapping, font hierarchy, collision resolution
//! - **HTTP API**: design generation, render plans, icon batches
//!
//! ## Quick Start
//!
//! ```
//! use cardgen::{
//!     icons::{self, BrandParams},
//!     layout::{self, Canvas, LayoutOptions},
//!     suggestion::DesignSuggestion,
//! };
//!
//! // A seeded icon for a brand
//! let icon = icons::render("orbits", 3, &BrandParams::new("Nova", "nv"));
//! let svg = icon.to_svg();
//! assert!(svg.contains("Nova"));
//!
//! // A render plan for an arbitrary suggestion
//! let suggestion: DesignSuggestion = serde_json::from_str(
//!     r##"{"palette": {"background": "#0f172a"}, "layout": {"elements": {"name": {"size": "xlarge"}}}}"##,
//! )?;
//! let plan = layout::apply_design(&suggestion, Canvas::default(), &LayoutOptions::default());
//! assert!(plan.sizes.name >= plan.sizes.title + 2);
//!
//! # Ok::<(), cardgen::CardgenError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`seed`] | String hashing and the seeded generator |
//! | [`icons`] | Procedural icon synthesis and SVG output |
//! | [`suggestion`] | Suggestion schema and normalization |
//! | [`color`] | Hex colors, luminance and contrast |
//! | [`layout`] | Card layout engine, house layouts, drag reducer |
//! | [`catalog`] | Card template library and industry data |
//! | [`provider`] | Design providers (built-in and external) |
//! | [`store`] | Blob and logo caches |
//! | [`jobs`] | Background job queue |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod catalog;
pub mod color;
pub mod error;
pub mod icons;
pub mod jobs;
pub mod layout;
pub mod provider;
pub mod seed;
pub mod server;
pub mod store;
pub mod suggestion;

// Re-exports for convenience
pub use error::CardgenError;
pub use layout::{apply_design, Canvas, RenderPlan};
pub use suggestion::{normalize, DesignSuggestion};
