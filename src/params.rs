/*!
 * Authored input model.
 *
 * These types mirror the JSON parameter structure produced by the
 * content editor: a list of timeline items, optional eras, a title
 * slide, behaviour settings, and localization strings. Keys are
 * camelCase on the wire; the media, background, and layout descriptors
 * are discriminated unions tagged by their respective `*Type` field.
 */

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::errors::ParamsError;

/// Localization strings forwarded to the rendering widget
pub type Translations = HashMap<String, String>;

/// Top-level authoring parameter structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    /// Authored events, in authoring order
    #[serde(default)]
    pub timeline_items: Vec<EventItem>,

    /// Authored eras
    #[serde(default)]
    pub eras: Vec<Era>,

    /// Whether the definition should include a title slide
    #[serde(default)]
    pub show_title_slide: bool,

    /// Title slide content, mapped like any other event
    pub title_slide: Option<EventItem>,

    /// Behaviour configuration
    pub behaviour: Option<Behaviour>,

    /// Localization strings
    pub l10n: Option<Translations>,

    /// Authored language code
    pub language: Option<String>,
}

impl Params {
    /// Parse a parameter structure from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Authored scaling mode, defaulting to human scale
    pub fn scaling_mode(&self) -> ScalingMode {
        self.behaviour
            .as_ref()
            .map(|behaviour| behaviour.scaling_mode)
            .unwrap_or_default()
    }
}

/// Behaviour configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Behaviour {
    /// Authored display scale
    #[serde(default)]
    pub scaling_mode: ScalingMode,

    /// Initial zoom level, interpreted by the widget host
    pub initial_zoom: Option<String>,
}

/// Display scale selected by the author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingMode {
    /// Calendar-based scale, valid within a bounded year range
    #[default]
    Human,
    /// Magnitude-only scale for years beyond the human range
    Cosmological,
    /// Events spaced by authoring order instead of date distance
    Index,
}

impl ScalingMode {
    /// Lowercase identifier as it appears in authored JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Cosmological => "cosmological",
            Self::Index => "index",
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One authored content unit, mapped to a slide
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    /// Event headline; the title slide may leave it absent and inherit
    /// the overall content title
    #[serde(default)]
    pub title: Option<String>,

    /// Authored start date string
    #[serde(default)]
    pub start_date: Option<String>,

    /// Authored end date string
    #[serde(default)]
    pub end_date: Option<String>,

    /// Authored rich-text description (HTML)
    #[serde(default)]
    pub description: Option<String>,

    /// Tags shown above the description
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Slide layout mode
    #[serde(default)]
    pub layout: SlideLayout,

    /// Representative media descriptor, tagged by `mediaType`
    #[serde(flatten)]
    pub media: EventMedia,

    /// Description media descriptor, tagged by `descriptionMediaType`
    #[serde(flatten)]
    pub description_media: DescriptionMedia,

    /// Background appearance descriptor
    #[serde(default)]
    pub appearance: Appearance,
}

/// A labeled time span drawn as a background band on the timeline
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Era {
    /// Era label
    pub name: String,

    /// Authored start date string, mandatory
    pub start_date: String,

    /// Authored end date string, mandatory
    pub end_date: String,
}

/// A single authored tag
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag label
    pub name: String,

    /// Tag background color
    pub color: Option<String>,
}

/// Slide layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    /// Grid-based custom layout
    Custom,
    /// Standard layout: tag list followed by the description block
    #[default]
    Default,
}

impl SlideLayout {
    /// Lowercase identifier, used in the slide id styling suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Default => "default",
        }
    }
}

/// A media file reference as stored by the content editor
#[derive(Debug, Clone, Deserialize)]
pub struct MediaFile {
    /// Path or URL of the file
    pub path: String,

    /// MIME type when known
    pub mime: Option<String>,
}

/// Representative media descriptor, discriminated by the authored
/// `mediaType` field. An absent discriminant means no media.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawEventMedia")]
pub enum EventMedia {
    /// A single image with optional alternative text
    Image {
        image: Option<MediaFile>,
        image_alt: Option<String>,
    },
    /// A list of video sources; the first one represents the event
    Video { video: Option<Vec<MediaFile>> },
    /// A list of audio sources; the first one represents the event
    Audio { audio: Option<Vec<MediaFile>> },
    /// A free-form media reference (URL or embed)
    Custom { custom_media: Option<String> },
    /// No media
    #[default]
    None,
}

/// Media shown alongside the description in custom layouts,
/// discriminated by the authored `descriptionMediaType` field
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawDescriptionMedia")]
pub enum DescriptionMedia {
    Image {
        image: Option<MediaFile>,
        image_alt: Option<String>,
    },
    Video { video: Option<Vec<MediaFile>> },
    Audio { audio: Option<Vec<MediaFile>> },
    Custom { custom_media: Option<String> },
    #[default]
    None,
}

/// Background appearance descriptor, discriminated by the authored
/// `backgroundType` field
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawAppearance")]
pub enum Appearance {
    /// Solid background color
    Color { background_color: Option<String> },
    /// Background image
    Image { background_image: Option<MediaFile> },
    /// No background
    #[default]
    None,
}

/// Media kind discriminant as authored
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MediaKind {
    Image,
    Video,
    Audio,
    Custom,
    #[default]
    None,
}

/// Background kind discriminant as authored
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BackgroundKind {
    Color,
    Image,
    #[default]
    None,
}

// The raw forms accept the authored field soup and pick the fields the
// discriminant names, so an absent discriminant degrades to "none"
// instead of failing the whole parameter parse.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEventMedia {
    #[serde(default)]
    media_type: MediaKind,
    image: Option<MediaFile>,
    image_alt: Option<String>,
    video: Option<Vec<MediaFile>>,
    audio: Option<Vec<MediaFile>>,
    custom_media: Option<String>,
}

impl From<RawEventMedia> for EventMedia {
    fn from(raw: RawEventMedia) -> Self {
        match raw.media_type {
            MediaKind::Image => EventMedia::Image {
                image: raw.image,
                image_alt: raw.image_alt,
            },
            MediaKind::Video => EventMedia::Video { video: raw.video },
            MediaKind::Audio => EventMedia::Audio { audio: raw.audio },
            MediaKind::Custom => EventMedia::Custom {
                custom_media: raw.custom_media,
            },
            MediaKind::None => EventMedia::None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptionMedia {
    #[serde(default)]
    description_media_type: MediaKind,
    image: Option<MediaFile>,
    image_alt: Option<String>,
    video: Option<Vec<MediaFile>>,
    audio: Option<Vec<MediaFile>>,
    custom_media: Option<String>,
}

impl From<RawDescriptionMedia> for DescriptionMedia {
    fn from(raw: RawDescriptionMedia) -> Self {
        match raw.description_media_type {
            MediaKind::Image => DescriptionMedia::Image {
                image: raw.image,
                image_alt: raw.image_alt,
            },
            MediaKind::Video => DescriptionMedia::Video { video: raw.video },
            MediaKind::Audio => DescriptionMedia::Audio { audio: raw.audio },
            MediaKind::Custom => DescriptionMedia::Custom {
                custom_media: raw.custom_media,
            },
            MediaKind::None => DescriptionMedia::None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAppearance {
    #[serde(default)]
    background_type: BackgroundKind,
    background_color: Option<String>,
    background_image: Option<MediaFile>,
}

impl From<RawAppearance> for Appearance {
    fn from(raw: RawAppearance) -> Self {
        match raw.background_type {
            BackgroundKind::Color => Appearance::Color {
                background_color: raw.background_color,
            },
            BackgroundKind::Image => Appearance::Image {
                background_image: raw.background_image,
            },
            BackgroundKind::None => Appearance::None,
        }
    }
}
