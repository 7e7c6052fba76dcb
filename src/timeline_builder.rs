/*!
 * Top-level timeline definition assembly.
 *
 * Combines the mapped events, eras, and optional title slide into the
 * definition the rendering widget consumes, and decides the display
 * scale. The builder always returns a best-effort definition; nothing
 * here fails hard.
 */

use log::debug;

use crate::context::BuildContext;
use crate::date_utils::{MAX_HUMAN_SCALE_YEAR, MIN_HUMAN_SCALE_YEAR};
use crate::definition::{TimelineDefinition, TimelineEra, TimelineScale, TimelineSlide};
use crate::params::{Params, ScalingMode};
use crate::slide_mapper::{map_era_to_timeline_era, map_event_to_slide};

/// Styling class name signalled to the caller in index mode.
///
/// Index mode is implemented via styling rather than the widget's
/// native scale concept, so the definition carries no `scale` field and
/// the host applies this class instead.
pub const INDEX_MODE_CLASSNAME: &str = "h5p-timeline--indexed";

/// Build the timeline definition for the given authored parameters.
///
/// `title` is the overall content title, used as the fallback headline
/// of the title slide. Returns the definition plus an optional styling
/// class name (set only in index mode).
pub fn create_timeline_definition(
    title: &str,
    params: &Params,
    ctx: &BuildContext<'_>,
) -> (TimelineDefinition, Option<String>) {
    let events: Vec<TimelineSlide> = params
        .timeline_items
        .iter()
        .map(|event| map_event_to_slide(event, ctx))
        .collect();

    let eras: Vec<TimelineEra> = params
        .eras
        .iter()
        .filter_map(|era| map_era_to_timeline_era(era, ctx))
        .collect();

    debug!(
        "Built {} slides and {} eras from {} authored items and {} authored eras",
        events.len(),
        eras.len(),
        params.timeline_items.len(),
        params.eras.len()
    );

    let title_slide = if params.show_title_slide {
        params.title_slide.as_ref().map(|slide| {
            let mut slide = slide.clone();
            if slide.title.is_none() {
                slide.title = Some(title.to_string());
            }
            map_event_to_slide(&slide, ctx)
        })
    } else {
        None
    };

    // Years the human scale cannot represent force cosmological scale
    // regardless of the authored preference
    let needs_cosmic_scale = events.iter().any(|event| {
        let year = event.start_date.as_ref().map_or(0, |date| date.year);
        year < MIN_HUMAN_SCALE_YEAR || year > MAX_HUMAN_SCALE_YEAR
    });

    let scaling_mode = if needs_cosmic_scale {
        ScalingMode::Cosmological
    } else {
        params.scaling_mode()
    };

    let mut timeline = TimelineDefinition {
        events,
        eras,
        title: title_slide,
        scale: None,
    };

    let class_names = match scaling_mode {
        ScalingMode::Index => Some(INDEX_MODE_CLASSNAME.to_string()),
        ScalingMode::Human => {
            timeline.scale = Some(TimelineScale::Human);
            None
        }
        ScalingMode::Cosmological => {
            timeline.scale = Some(TimelineScale::Cosmological);
            None
        }
    };

    (timeline, class_names)
}
