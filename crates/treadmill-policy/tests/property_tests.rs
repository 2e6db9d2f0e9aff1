//! Property-based tests for the injection policy.

use treadmill_config::InputMode;
use treadmill_policy::{ChannelState, ChannelValue, InjectionPolicy, Vec2, apply};

fn vec2_strategy() -> impl proptest::strategy::Strategy<Value = Vec2> {
    use proptest::prelude::*;
    (-1.0f32..=1.0f32, -1.0f32..=1.0f32).prop_map(|(x, y)| Vec2::new(x, y))
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn idle_smart_and_override_return_current(
            host in vec2_strategy(),
            host_active in any::<bool>(),
            treadmill in vec2_strategy()
        ) {
            let current = ChannelState::new(host, host_active);
            for mode in [InputMode::Smart, InputMode::Override] {
                prop_assert_eq!(apply(mode, current, treadmill, false), current);
            }
        }

        #[test]
        fn additive_is_clamped_sum(
            host in vec2_strategy(),
            host_active in any::<bool>(),
            treadmill in vec2_strategy(),
            treadmill_active in any::<bool>()
        ) {
            let current = ChannelState::new(host, host_active);
            let out = apply(InputMode::Additive, current, treadmill, treadmill_active);
            let expected_x = (host.x + treadmill.x).clamp(-1.0, 1.0);
            let expected_y = (host.y + treadmill.y).clamp(-1.0, 1.0);
            prop_assert!((out.value.x - expected_x).abs() < 1e-6);
            prop_assert!((out.value.y - expected_y).abs() < 1e-6);
            prop_assert_eq!(out.active, host_active || treadmill_active);
        }

        #[test]
        fn evaluate_output_stays_in_unit_range(
            host in vec2_strategy(),
            treadmill in vec2_strategy(),
            mode_index in 0usize..3
        ) {
            let mode = InputMode::ALL.get(mode_index).copied().unwrap_or_default();
            let policy = InjectionPolicy::new(mode, 0.05);
            let out = policy.evaluate(ChannelState::new(host, true), treadmill, None);
            prop_assert!(out.value.magnitude() <= 1.0);
        }
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn scalar_additive_never_leaves_unit_range(host: f32, treadmill: f32) -> bool {
        if !host.is_finite() || !treadmill.is_finite() {
            return true;
        }
        let out = apply(
            InputMode::Additive,
            ChannelState::new(host.clamp(-1.0, 1.0), false),
            treadmill.clamp(-1.0, 1.0),
            false,
        );
        (-1.0..=1.0).contains(&out.value)
    }
}
