//! `profile-lens` - reading-order reconstruction and section detection for
//! multi-column profile PDF exports
//!
//! # Features
//!
//! - **Layout**: column detection from x gaps, line grouping by y buckets,
//!   explicit column-break markers
//! - **Sections**: name, headline, summary and top skills from the ordered
//!   lines, with configurable heading vocabulary
//! - **Classification**: signal-strength labels from a local (Ollama) or
//!   hosted (OpenRouter) model, with lenient parsing and bounded retry
//! - **PDF**: word geometry via pdfium (feature `pdf`)
//!
//! # Example
//!
//! ```rust
//! use profile_lens::{reconstruct, segment, LayoutConfig, SegmentConfig, WordFragment};
//!
//! let page = vec![
//!     WordFragment::new("Top", 20.0, 40.0),
//!     WordFragment::new("Skills", 42.0, 40.0),
//!     WordFragment::new("Rust", 20.0, 60.0),
//!     WordFragment::new("Jane", 220.0, 40.0),
//!     WordFragment::new("Doe", 250.0, 40.0),
//! ];
//! let lines = reconstruct(&[page], &LayoutConfig::default())?;
//! let sections = segment(&lines, &SegmentConfig::default());
//! assert_eq!(sections.name.as_deref(), Some("Jane Doe"));
//! assert_eq!(sections.top_skills, vec!["Rust"]);
//! # Ok::<(), profile_lens::LayoutError>(())
//! ```

pub mod classify;
pub mod config;
pub mod extract;
pub mod layout;
pub mod sections;

pub use classify::{Classification, Classifier, ClassifyError, ModelBackend, ModelConfig};
pub use config::AppConfig;
pub use layout::{reconstruct, LayoutConfig, LayoutError, ReconstructedLine, WordFragment, COLUMN_BREAK_TOKEN};
pub use sections::{segment, Heading, HeadingSet, SectionRecord, SegmentConfig};

/// Version of profile-lens
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
