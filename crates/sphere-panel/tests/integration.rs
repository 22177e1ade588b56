//! Integration tests for sphere-panel.
//!
//! These drive the panel the way a front end does: settings in, pointer
//! events through `dispatch`, host URLs out.

use sphere_knob::{CursorHint, PointerEvent, WindowTracker};
use sphere_panel::{
    CompParam, CompressorPanel, CompressorSettings, HostUrl, PanelError, RecordingHost,
    transfer,
};
use std::cell::Cell;
use std::rc::Rc;
use tempfile::TempDir;

struct Rig {
    panel: CompressorPanel,
    host: Rc<RecordingHost>,
    window: Rc<WindowTracker>,
}

fn rig(settings: CompressorSettings) -> Rig {
    let host = Rc::new(RecordingHost::new());
    let window = WindowTracker::shared();
    let panel = CompressorPanel::new(settings, host.clone(), window.clone())
        .expect("default parameter table should build");
    Rig {
        panel,
        host,
        window,
    }
}

/// Drag the threshold knob up by a quarter of the sensitivity window.
#[test]
fn test_threshold_drag_reaches_host() {
    let mut rig = rig(CompressorSettings::default());

    rig.panel.dispatch(
        Some(CompParam::Threshold),
        PointerEvent::Down { x: 45.0, y: 80.0 },
    );
    assert_eq!(rig.window.cursor(), Some(CursorHint::VerticalResize));

    rig.panel
        .dispatch(None, PointerEvent::Move { x: 45.0, y: 30.0 });
    rig.panel.dispatch(None, PointerEvent::Up);

    assert_eq!(
        rig.host.urls(),
        vec![HostUrl::param(CompParam::Threshold, -5.0)]
    );
    assert_eq!(rig.panel.settings().threshold, -5.0);
    assert_eq!(
        rig.panel.knob(CompParam::Threshold).unwrap().readout(),
        "-5.0 dB"
    );
    assert_eq!(rig.window.cursor(), None);
}

/// Dragging past the top stops at max and goes quiet.
#[test]
fn test_clamped_drag_notifies_once() {
    let mut rig = rig(CompressorSettings::default());

    rig.panel.dispatch(
        Some(CompParam::Threshold),
        PointerEvent::Down { x: 45.0, y: 90.0 },
    );
    rig.panel
        .dispatch(None, PointerEvent::Move { x: 45.0, y: -400.0 });
    rig.panel
        .dispatch(None, PointerEvent::Move { x: 45.0, y: -600.0 });
    rig.panel.dispatch(None, PointerEvent::Up);

    assert_eq!(rig.host.url_strings(), vec!["sphere://comp/threshold/0"]);
}

/// Values pushed in from elsewhere update the display but not the host.
#[test]
fn test_programmatic_updates_are_silent() {
    let mut rig = rig(CompressorSettings::default());
    let curve_updates = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&curve_updates);
    rig.panel
        .on_curve_change(move |_| counter.set(counter.get() + 1));

    assert!(rig.panel.update_knob("threshold", -32.4));
    assert!(rig.panel.update_knob("release", 9000.0));
    assert!(!rig.panel.update_knob("lookahead", 5.0));

    assert!(rig.host.is_empty());
    let settings = rig.panel.settings();
    assert!((settings.threshold - -32.4).abs() < 1e-4);
    assert_eq!(settings.release, 3000.0);
    assert_eq!(
        rig.panel.knob(CompParam::Release).unwrap().readout(),
        "3000 ms"
    );
    // Release does not reshape the static curve.
    assert_eq!(curve_updates.get(), 1);
}

/// Settings loaded from disk seed every knob.
#[test]
fn test_settings_file_seeds_knobs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("comp.toml");
    std::fs::write(&path, "threshold = -12.0\nratio = 2.5\nmakeup = 3.0\n").unwrap();

    let settings = CompressorSettings::load(&path).unwrap();
    let rig = rig(settings);

    assert_eq!(rig.panel.knob(CompParam::Threshold).unwrap().value(), -12.0);
    assert_eq!(
        rig.panel.knob(CompParam::Ratio).unwrap().readout(),
        "2.5 :1"
    );
    assert_eq!(rig.panel.knob(CompParam::Makeup).unwrap().readout(), "3.0 dB");
    assert_eq!(rig.panel.knob(CompParam::Attack).unwrap().value(), 10.0);
}

/// Saved settings reflect user changes.
#[test]
fn test_settings_round_trip_after_drag() {
    let mut rig = rig(CompressorSettings::default());
    rig.panel
        .dispatch(Some(CompParam::Knee), PointerEvent::Down { x: 25.0, y: 40.0 });
    rig.panel
        .dispatch(None, PointerEvent::Move { x: 25.0, y: 0.0 });
    rig.panel.dispatch(None, PointerEvent::Up);

    let saved = rig.panel.settings().to_toml().unwrap();
    let reloaded = CompressorSettings::from_toml(&saved).unwrap();
    assert_eq!(reloaded, rig.panel.settings());
    assert!(reloaded.knee > 6.0);
}

/// Disposing mid-drag drops window tracking and ignores later events.
#[test]
fn test_dispose_mid_drag() {
    let mut rig = rig(CompressorSettings::default());
    rig.panel
        .dispatch(Some(CompParam::Ratio), PointerEvent::Down { x: 30.0, y: 30.0 });
    assert_eq!(rig.window.active_count(), 1);

    rig.panel.dispose();
    rig.panel.dispose();
    assert_eq!(rig.window.active_count(), 0);
    assert!(
        !rig.panel
            .dispatch(None, PointerEvent::Move { x: 30.0, y: -30.0 })
    );
    assert!(rig.host.is_empty());
}

/// Dropping the panel also releases tracking.
#[test]
fn test_drop_mid_drag() {
    let Rig {
        mut panel, window, ..
    } = rig(CompressorSettings::default());
    panel.dispatch(Some(CompParam::Attack), PointerEvent::Down { x: 1.0, y: 1.0 });
    assert_eq!(window.active_count(), 1);
    drop(panel);
    assert_eq!(window.active_count(), 0);
}

/// Cancel ends a drag the same way as release.
#[test]
fn test_cancel_ends_drag() {
    let mut rig = rig(CompressorSettings::default());
    rig.panel
        .dispatch(Some(CompParam::Makeup), PointerEvent::Down { x: 25.0, y: 25.0 });
    rig.panel.dispatch(None, PointerEvent::Cancel);
    assert_eq!(rig.window.active_count(), 0);
    assert!(
        !rig.panel
            .dispatch(None, PointerEvent::Move { x: 25.0, y: 0.0 })
    );
}

/// Every emitted URL parses back to what was sent.
#[test]
fn test_emitted_urls_parse() {
    let mut rig = rig(CompressorSettings::default());
    for param in CompParam::ALL {
        rig.panel
            .dispatch(Some(param), PointerEvent::Down { x: 10.0, y: 40.0 });
        rig.panel
            .dispatch(None, PointerEvent::Move { x: 10.0, y: 37.0 });
        rig.panel.dispatch(None, PointerEvent::Up);
    }
    rig.panel.toggle_delta();

    let urls = rig.host.urls();
    assert_eq!(urls.len(), CompParam::ALL.len() + 1);
    for url in urls {
        assert_eq!(HostUrl::parse(&url.to_string()).unwrap(), url);
    }
}

/// The curve drawn for the panel follows its settings.
#[test]
fn test_curve_tracks_panel() {
    let mut rig = rig(CompressorSettings::default());
    rig.panel.set_param(CompParam::Ratio, 1.0);
    let settings = rig.panel.settings();
    assert_eq!(transfer::output_db(-6.0, &settings), -6.0);

    rig.panel.set_param(CompParam::Ratio, 20.0);
    let settings = rig.panel.settings();
    assert!(transfer::output_db(0.0, &settings) < -15.0);
}

/// A broken parameter override surfaces which knob failed.
#[test]
fn test_unknown_param_error_message() {
    let err = "gate".parse::<CompParam>().unwrap_err();
    assert!(matches!(err, PanelError::UnknownParam(_)));
    assert_eq!(err.to_string(), "unknown parameter: gate");
}
