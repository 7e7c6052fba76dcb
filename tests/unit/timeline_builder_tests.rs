/*!
 * Tests for timeline definition assembly
 */

#![allow(non_snake_case)]

use timescribe::context::BuildContext;
use timescribe::definition::TimelineScale;
use timescribe::params::{Behaviour, Era, Params, ScalingMode};
use timescribe::timeline_builder::{INDEX_MODE_CLASSNAME, create_timeline_definition};

use crate::common;
use crate::common::mock_context::{CollectingDiagnosticSink, SequentialIdGenerator};

fn params_with_scaling(mode: ScalingMode) -> Params {
    Params {
        behaviour: Some(Behaviour {
            scaling_mode: mode,
            initial_zoom: None,
        }),
        ..Default::default()
    }
}

/// Test assembly of events and eras, dropping unparsable eras
#[test]
fn test_create_definition_withEventsAndEras_shouldMapAndFilter() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let mut params = Params::default();
    params.timeline_items = vec![
        common::basic_event("First", Some("1957"), None),
        common::basic_event("Second", Some("bad date"), None),
    ];
    params.eras = vec![
        Era {
            name: "Valid".to_string(),
            start_date: "1957".to_string(),
            end_date: "1975".to_string(),
        },
        Era {
            name: "Broken".to_string(),
            start_date: "once upon a time".to_string(),
            end_date: "1999".to_string(),
        },
    ];

    let (timeline, class_names) = create_timeline_definition("Space", &params, &ctx);

    // Events are always included, even with unparsable dates
    assert_eq!(timeline.events.len(), 2);
    assert!(timeline.events[1].start_date.is_none());

    // Eras with unparsable dates are dropped
    assert_eq!(timeline.eras.len(), 1);
    assert_eq!(timeline.eras[0].text.headline.as_deref(), Some("Valid"));

    assert_eq!(timeline.scale, Some(TimelineScale::Human));
    assert_eq!(class_names, None);
}

/// Test the authored scale passes through when years are representable
#[test]
fn test_create_definition_withCosmologicalPreference_shouldKeepAuthoredScale() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let mut params = params_with_scaling(ScalingMode::Cosmological);
    params.timeline_items = vec![common::basic_event("Event", Some("1957"), None)];

    let (timeline, class_names) = create_timeline_definition("Title", &params, &ctx);
    assert_eq!(timeline.scale, Some(TimelineScale::Cosmological));
    assert_eq!(class_names, None);
}

/// Test cosmological forcing for years beyond the human scale
#[test]
fn test_create_definition_withExtremeYear_shouldForceCosmologicalScale() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let mut params = params_with_scaling(ScalingMode::Human);
    params.timeline_items = vec![
        common::basic_event("Recent", Some("1957"), None),
        common::basic_event("Deep time", Some("-13800000000"), None),
    ];

    let (timeline, class_names) = create_timeline_definition("Title", &params, &ctx);
    assert_eq!(timeline.scale, Some(TimelineScale::Cosmological));
    assert_eq!(class_names, None);
}

/// Test index mode: no scale field, classname signalled instead
#[test]
fn test_create_definition_withIndexMode_shouldOmitScaleAndReturnClassname() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let mut params = params_with_scaling(ScalingMode::Index);
    params.timeline_items = vec![common::basic_event("Event", Some("1957"), None)];

    let (timeline, class_names) = create_timeline_definition("Title", &params, &ctx);
    assert_eq!(timeline.scale, None);
    assert_eq!(class_names.as_deref(), Some(INDEX_MODE_CLASSNAME));

    // The scale field must be omitted from the serialized definition
    let json = serde_json::to_value(&timeline).unwrap();
    assert!(json.get("scale").is_none());
}

/// Test that extreme years still override index mode
#[test]
fn test_create_definition_withIndexModeAndExtremeYear_shouldForceCosmological() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let mut params = params_with_scaling(ScalingMode::Index);
    params.timeline_items = vec![common::basic_event("Deep time", Some("300000"), None)];

    let (timeline, class_names) = create_timeline_definition("Title", &params, &ctx);
    assert_eq!(timeline.scale, Some(TimelineScale::Cosmological));
    assert_eq!(class_names, None);
}

/// Test title slide mapping and title defaulting
#[test]
fn test_create_definition_withTitleSlide_shouldDefaultMissingTitle() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let mut params = Params::default();
    params.show_title_slide = true;
    params.title_slide = Some(common::basic_event("Authored title", Some("1957"), None));

    let (timeline, _) = create_timeline_definition("Overall title", &params, &ctx);
    let title = timeline.title.unwrap();
    assert_eq!(title.text.headline.as_deref(), Some("Authored title"));

    // Absent authored title inherits the overall content title
    let mut untitled = common::basic_event("", None, None);
    untitled.title = None;
    params.title_slide = Some(untitled);

    let (timeline, _) = create_timeline_definition("Overall title", &params, &ctx);
    let title = timeline.title.unwrap();
    assert_eq!(title.text.headline.as_deref(), Some("Overall title"));
}

/// Test that the title slide is ignored without the flag
#[test]
fn test_create_definition_withoutShowTitleSlide_shouldSkipTitle() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let mut params = Params::default();
    params.title_slide = Some(common::basic_event("Hidden", None, None));

    let (timeline, _) = create_timeline_definition("Title", &params, &ctx);
    assert!(timeline.title.is_none());
}

/// Test an empty parameter structure still yields a usable definition
#[test]
fn test_create_definition_withEmptyParams_shouldReturnEmptyDefinition() {
    let ids = SequentialIdGenerator::new();
    let sink = CollectingDiagnosticSink::new();
    let ctx = BuildContext::new(&ids, &sink);

    let (timeline, class_names) = create_timeline_definition("Title", &Params::default(), &ctx);
    assert!(timeline.events.is_empty());
    assert!(timeline.eras.is_empty());
    assert!(timeline.title.is_none());
    assert_eq!(timeline.scale, Some(TimelineScale::Human));
    assert_eq!(class_names, None);
}
