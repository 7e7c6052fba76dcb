/*!
 * # timescribe - Timeline Definition Builder
 *
 * A Rust library that maps user-authored timeline content (events, eras,
 * display settings) to the declarative definition format consumed by the
 * TimelineJS rendering widget.
 *
 * ## Features
 *
 * - Date-string parsing with calendar-scale heuristics (BCE years,
 *   partial dates, expanded-year ISO 8601 validation)
 * - Event-to-slide and era mapping with non-fatal date-order diagnostics
 * - Tagged media, background, and layout descriptors mapped exhaustively
 * - Automatic cosmological-scale forcing for years the human scale
 *   cannot represent
 * - Index-mode styling classname signalling
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `params`: Authored input model (deserialized content parameters)
 * - `date_utils`: Date parsing and order validation
 * - `definition`: TimelineJS output value objects
 * - `markup`: HTML fragment serialization for slide bodies
 * - `slide_mapper`: Event and era mapping
 * - `timeline_builder`: Top-level definition assembly
 * - `context`: Injected externalities (id generation, diagnostics)
 * - `locale`: Host locale resolution and language-code normalization
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod context;
pub mod date_utils;
pub mod definition;
pub mod errors;
pub mod locale;
pub mod markup;
pub mod params;
pub mod slide_mapper;
pub mod timeline_builder;

// Re-export main types for easier usage
pub use context::{BuildContext, DiagnosticSink, IdGenerator};
pub use date_utils::{TimelineDate, is_date_order_ok, parse_date};
pub use definition::{TimelineDefinition, TimelineEra, TimelineScale, TimelineSlide};
pub use errors::{ParamsError, TimelineError};
pub use params::{Era, EventItem, Params, ScalingMode};
pub use timeline_builder::{INDEX_MODE_CLASSNAME, create_timeline_definition};
