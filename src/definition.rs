/*!
 * TimelineJS output value objects.
 *
 * The rendering widget consumes a declarative definition with
 * snake_case keys; absent optional fields must be omitted entirely, not
 * serialized as null. All values here are constructed fresh by the
 * builder and never mutated afterwards.
 */

use serde::{Deserialize, Serialize};

use crate::date_utils::TimelineDate;

/// The complete timeline definition handed to the rendering widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDefinition {
    /// Mapped event slides, in authoring order
    pub events: Vec<TimelineSlide>,

    /// Mapped era markers; eras with unparsable dates are dropped
    pub eras: Vec<TimelineEra>,

    /// Optional title slide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TimelineSlide>,

    /// Display scale; omitted entirely in index mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<TimelineScale>,
}

/// One displayable event card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSlide {
    /// Unique slide id with a `layout-*` styling suffix
    pub unique_id: String,

    /// Start date; absent means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<TimelineDate>,

    /// End date; absent means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<TimelineDate>,

    /// Headline and body markup
    pub text: SlideText,

    /// Representative media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<SlideMedia>,

    /// Slide background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<SlideBackground>,
}

/// Slide text content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideText {
    /// Headline shown on the slide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    /// Body markup (HTML fragment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Media attached to a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideMedia {
    /// Media URL
    pub url: String,

    /// Alternative text, only set for image media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Slide background, by color or image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideBackground {
    /// Background image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Solid background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A labeled background band on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEra {
    /// Era start, always present
    pub start_date: TimelineDate,

    /// Era end, always present
    pub end_date: TimelineDate,

    /// Era label
    pub text: SlideText,
}

/// Display scale understood natively by the rendering widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineScale {
    /// Calendar-based scale
    Human,
    /// Magnitude-only scale for extreme year values
    Cosmological,
}
