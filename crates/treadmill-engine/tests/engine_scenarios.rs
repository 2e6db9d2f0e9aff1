//! End-to-end scenarios through the engine facade.

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use treadmill_engine::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn first_sample_matches_reference_values() -> TestResult {
    let engine = TreadmillEngine::new(TreadmillConfig::default())?;
    let snapshot = engine.ingest_at(90.0, 255, 127, 1_000);

    assert_abs_diff_eq!(snapshot.raw_x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(snapshot.raw_y, 0.0, epsilon = 1e-6);

    let state = engine.read_smoothed_state();
    assert_abs_diff_eq!(state.x, 0.3, epsilon = 1e-6);
    assert_abs_diff_eq!(state.y, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(state.yaw, 27.0, epsilon = 1e-4);
    assert!(state.active);
    assert_eq!(state.timestamp_ms, 1_000);
    Ok(())
}

#[test]
fn steady_walk_converges_and_injects() -> TestResult {
    let engine = TreadmillEngine::new(TreadmillConfig::default())?;
    for t in 0..60 {
        engine.ingest_at(45.0, 127, 0, t);
    }
    let state = engine.read_smoothed_state();
    assert_abs_diff_eq!(state.y, 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(state.yaw, 45.0, epsilon = 1e-3);

    let host = ChannelState::new(Vec2::new(0.5, 0.5), true);
    let merged = engine.apply_policy(host, None);
    assert!(merged.active);
    assert_abs_diff_eq!(merged.value.y, state.y, epsilon = 1e-6);
    Ok(())
}

#[test]
fn smart_mode_hands_back_control_when_idle() -> TestResult {
    let engine = TreadmillEngine::new(TreadmillConfig::default().with_smoothing_factor(1.0))?;
    engine.ingest_at(0.0, 127, 127, 0);

    let host = ChannelState::new(Vec2::new(-0.6, 0.2), true);
    assert_eq!(engine.apply_policy(host, None), host);
    Ok(())
}

#[test]
fn additive_mode_sums_with_host() -> TestResult {
    let config = TreadmillConfig::default()
        .with_smoothing_factor(1.0)
        .with_input_mode(InputMode::Additive);
    let engine = TreadmillEngine::new(config)?;
    engine.ingest_at(0.0, 127, 0, 0);

    let host = ChannelState::new(Vec2::new(0.25, -0.5), false);
    let merged = engine.apply_policy(host, None);
    assert_abs_diff_eq!(merged.value.x, 0.25, epsilon = 1e-6);
    assert_abs_diff_eq!(merged.value.y, 0.5, epsilon = 1e-6);
    assert!(merged.active);
    Ok(())
}

#[test]
fn disconnect_pauses_and_next_sample_resumes() -> TestResult {
    let engine = TreadmillEngine::new(TreadmillConfig::default().with_smoothing_factor(1.0))?;
    engine.ingest_at(0.0, 127, 0, 0);
    engine.mark_disconnected();

    let host = ChannelState::new(Vec2::ZERO, false);
    assert_eq!(engine.apply_policy(host, None), host);
    assert!(!engine.read_smoothed_state().active);

    engine.ingest_at(0.0, 127, 0, 1);
    assert!(engine.apply_policy(host, None).active);
    Ok(())
}

#[test]
fn path_selector_limits_action_reads() -> TestResult {
    let config = TreadmillConfig::default()
        .with_smoothing_factor(1.0)
        .with_target_selector(TargetSelector::Paths(vec![
            "/user/hand/left/input/thumbstick".to_string(),
        ]));
    let engine = Arc::new(TreadmillEngine::new(config)?);
    engine.ingest_at(0.0, 127, 0, 0);

    let interceptor = ActionInterceptor::<&'static str>::new(Arc::clone(&engine));
    interceptor.on_action_created("move", "/actions/locomotion/in/Move");

    let host = ChannelState::new(Vec2::ZERO, false);
    let left = interceptor.on_vector_read(
        &"move",
        host,
        Some(InjectionTarget::Path("/user/hand/left/input/thumbstick")),
    );
    let right = interceptor.on_vector_read(
        &"move",
        host,
        Some(InjectionTarget::Path("/user/hand/right/input/thumbstick")),
    );
    assert_eq!(left.value, Vec2::new(0.0, 1.0));
    assert_eq!(right, host);
    Ok(())
}

#[test]
fn direction_check_east_walk() -> TestResult {
    let engine = TreadmillEngine::new(TreadmillConfig::default().with_smoothing_factor(1.0))?;
    // Facing east, pad fully forward
    engine.ingest_at(90.0, 127, 0, 0);

    let previous = HeadsetSample::new(0.0, 0.0);
    let east = HeadsetSample::new(-1.0, 0.0);
    let report = engine
        .validate_direction(east, previous)
        .ok_or("expected a direction report")?;
    assert_abs_diff_eq!(report.deviation_deg, 0.0, epsilon = 1e-2);
    assert_eq!(report.verdict, DirectionVerdict::Ok);

    let north = HeadsetSample::new(0.0, 1.0);
    let report = engine
        .validate_direction(north, previous)
        .ok_or("expected a direction report")?;
    assert_abs_diff_eq!(report.deviation_deg, 90.0, epsilon = 1e-2);
    assert_eq!(report.verdict, DirectionVerdict::Mismatch);
    Ok(())
}

#[test]
fn validator_ticks_alongside_engine() -> TestResult {
    let engine = TreadmillEngine::new(TreadmillConfig::default().with_smoothing_factor(1.0))?;
    engine.ingest_at(0.0, 127, 0, 0);
    let mut validator = DirectionValidator::new();

    let mut verdicts = Vec::new();
    for step in 0..5 {
        let headset = HeadsetSample::new(0.0, f64::from(step) * 0.1);
        if let Some(report) = validator.observe(Some(headset), &engine.snapshot()) {
            verdicts.push(report.verdict);
        }
    }
    assert_eq!(verdicts, vec![DirectionVerdict::Ok; 4]);
    Ok(())
}

#[test]
fn smoothed_state_serializes_camel_case() -> TestResult {
    let engine = TreadmillEngine::new(TreadmillConfig::default().with_smoothing_factor(1.0))?;
    engine.ingest_at(180.0, 127, 127, 42);
    let json = serde_json::to_string(&engine.read_smoothed_state())?;
    insta::assert_snapshot!(json, @r#"{"x":0.0,"y":0.0,"yaw":180.0,"active":true,"timestampMs":42}"#);
    Ok(())
}
