/*!
 * Event and era mapping.
 *
 * Turns authored content units into the slide and era structures the
 * rendering widget expects. Mapping is deliberately tolerant: events
 * with unparsable dates are kept with the date left open-ended, while
 * eras with unparsable dates are dropped. Date-order violations are
 * reported through the diagnostic sink but never block output.
 */

use crate::context::BuildContext;
use crate::date_utils::{is_date_order_ok, parse_date};
use crate::definition::{SlideBackground, SlideMedia, SlideText, TimelineEra, TimelineSlide};
use crate::markup;
use crate::params::{Appearance, Era, EventItem, EventMedia, SlideLayout};

/// Select the single representative media reference for an event.
///
/// Image media carries the authored alternative text; list media
/// (video, audio) contribute their first element; custom media is a
/// free-form reference. Empty lists and absent files yield no media.
pub fn select_media(media: &EventMedia) -> Option<SlideMedia> {
    match media {
        EventMedia::Image { image, image_alt } => image.as_ref().map(|file| SlideMedia {
            url: file.path.clone(),
            alt: image_alt.clone(),
        }),
        EventMedia::Video { video } => {
            video
                .as_ref()
                .and_then(|files| files.first())
                .map(|file| SlideMedia {
                    url: file.path.clone(),
                    alt: None,
                })
        }
        EventMedia::Audio { audio } => {
            audio
                .as_ref()
                .and_then(|files| files.first())
                .map(|file| SlideMedia {
                    url: file.path.clone(),
                    alt: None,
                })
        }
        EventMedia::Custom { custom_media } => {
            custom_media.as_ref().map(|reference| SlideMedia {
                url: reference.clone(),
                alt: None,
            })
        }
        EventMedia::None => None,
    }
}

/// Map one authored event to a renderable slide.
///
/// Always produces a slide: unparsable or absent dates are left off the
/// slide, meaning "unbounded", and a date-order violation only emits a
/// diagnostic while the authored dates stay in the output.
pub fn map_event_to_slide(event: &EventItem, ctx: &BuildContext<'_>) -> TimelineSlide {
    let start_date = event.start_date.as_deref().and_then(parse_date);
    let end_date = event.end_date.as_deref().and_then(parse_date);

    let text = match event.layout {
        SlideLayout::Custom => markup::render_grid(event),
        SlideLayout::Default => {
            let mut body = markup::render_tag_list(&event.tags);
            if let Some(description) = &event.description {
                body.push_str(&markup::render_description(description));
            }
            body
        }
    };

    // The `layout-x` part of this id is used for styling and must not
    // be removed before we find another way to change slide layouts
    let unique_id = format!("{}_layout-{}", ctx.ids.create_id(), event.layout.as_str());

    if !is_date_order_ok(start_date.as_ref(), end_date.as_ref()) {
        ctx.diagnostics.warn(&format!(
            "End date ({}) should be LATER than start date ({}) in Slide \"{}\"",
            event.end_date.as_deref().unwrap_or(""),
            event.start_date.as_deref().unwrap_or(""),
            event.title.as_deref().unwrap_or("")
        ));
    }

    let background = match &event.appearance {
        Appearance::Color {
            background_color: Some(color),
        } => Some(SlideBackground {
            url: None,
            color: Some(color.clone()),
        }),
        Appearance::Image {
            background_image: Some(file),
        } => Some(SlideBackground {
            url: Some(file.path.clone()),
            color: None,
        }),
        _ => None,
    };

    TimelineSlide {
        unique_id,
        start_date,
        end_date,
        text: SlideText {
            headline: event.title.clone(),
            text: Some(text),
        },
        media: select_media(&event.media),
        background,
    }
}

/// Map one authored era to a renderable era marker.
///
/// Unlike events, an era is dropped entirely when either date fails to
/// parse; a date-order violation only emits a diagnostic and the era is
/// still included.
pub fn map_era_to_timeline_era(era: &Era, ctx: &BuildContext<'_>) -> Option<TimelineEra> {
    let start_date = parse_date(&era.start_date)?;
    let end_date = parse_date(&era.end_date)?;

    if !is_date_order_ok(Some(&start_date), Some(&end_date)) {
        ctx.diagnostics.warn(&format!(
            "End date ({}) should be LATER than start date ({}) in Era \"{}\"",
            era.end_date, era.start_date, era.name
        ));
    }

    Some(TimelineEra {
        start_date,
        end_date,
        text: SlideText {
            headline: Some(era.name.clone()),
            text: None,
        },
    })
}
