//! Values an intercepted read can carry.

use serde::{Deserialize, Serialize};

/// A value the policy can merge: a scalar action or a 2D axis.
pub trait ChannelValue: Copy + PartialEq {
    /// Largest absolute component.
    fn magnitude(&self) -> f32;

    /// Component-wise sum clamped to `[-1, 1]`.
    fn clamped_add(self, other: Self) -> Self;
}

impl ChannelValue for f32 {
    #[inline]
    fn magnitude(&self) -> f32 {
        self.abs()
    }

    #[inline]
    fn clamped_add(self, other: Self) -> Self {
        (self + other).clamp(-1.0, 1.0)
    }
}

/// A 2D axis value, `x` lateral and `y` forward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Lateral component.
    pub x: f32,
    /// Forward component.
    pub y: f32,
}

impl Vec2 {
    /// Both components zero.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a vector.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl ChannelValue for Vec2 {
    #[inline]
    fn magnitude(&self) -> f32 {
        self.x.abs().max(self.y.abs())
    }

    #[inline]
    fn clamped_add(self, other: Self) -> Self {
        Vec2::new(self.x.clamped_add(other.x), self.y.clamped_add(other.y))
    }
}

/// A value together with the host's "is active" flag for it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelState<V> {
    /// The value.
    pub value: V,
    /// Whether the source considers the value live.
    pub active: bool,
}

impl<V> ChannelState<V> {
    /// Create a channel state.
    pub const fn new(value: V, active: bool) -> Self {
        Self { value, active }
    }
}
