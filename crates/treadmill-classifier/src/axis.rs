//! Scalar axis selection for one-dimensional actions.

/// Which treadmill axis a one-dimensional action reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarAxis {
    /// Lateral (strafe) axis.
    #[default]
    X,
    /// Forward axis.
    Y,
}

impl ScalarAxis {
    /// Lowercase axis name.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarAxis::X => "x",
            ScalarAxis::Y => "y",
        }
    }

    /// Choose the axis from an action name.
    ///
    /// The name is split into alphanumeric tokens. If a token contains
    /// `forward` or `vertical`, or a token is exactly `y`, the action reads
    /// [`ScalarAxis::Y`]; everything else reads [`ScalarAxis::X`].
    ///
    /// ```
    /// use treadmill_classifier::ScalarAxis;
    ///
    /// assert_eq!(ScalarAxis::for_action_name("/actions/walk/MoveForward"), ScalarAxis::Y);
    /// assert_eq!(ScalarAxis::for_action_name("move_y"), ScalarAxis::Y);
    /// assert_eq!(ScalarAxis::for_action_name("Strafe"), ScalarAxis::X);
    /// ```
    pub fn for_action_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let reads_y = lowered
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| token == "y" || token.contains("forward") || token.contains("vertical"));
        if reads_y { ScalarAxis::Y } else { ScalarAxis::X }
    }
}
