//! User input forwarded from the web page to the active page controller

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// One discrete interaction. Navigation is handled separately since it
/// replaces the controller rather than steering it.
#[derive(Message, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageInput {
    RotateLeft,
    RotateRight,
    ZoomIn,
    ZoomOut,
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    Wheel { delta_y: f32 },
    TriggerAnimation,
    TriggerReverseAnimation,
    ToggleView,
}

impl PageInput {
    /// Rejects pointer and wheel payloads carrying NaN or infinities.
    pub fn validate(self) -> Result<Self, ViewerError> {
        fn finite(field: &'static str, value: f32) -> Result<(), ViewerError> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(ViewerError::NonFinite { field, value })
            }
        }

        match self {
            PageInput::PointerDown { x, y } | PageInput::PointerMove { x, y } => {
                finite("x", x)?;
                finite("y", y)?;
            }
            PageInput::Wheel { delta_y } => finite("delta_y", delta_y)?,
            _ => {}
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_payloads_pass() {
        let input = PageInput::PointerMove { x: 12.5, y: -3.0 };
        assert_eq!(input.validate().unwrap(), input);
        assert!(PageInput::ToggleView.validate().is_ok());
    }

    #[test]
    fn non_finite_payloads_are_rejected() {
        let err = PageInput::Wheel {
            delta_y: f32::INFINITY,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ViewerError::NonFinite { field: "delta_y", .. }));

        let err = PageInput::PointerDown { x: 0.0, y: f32::NAN }
            .validate()
            .unwrap_err();
        assert!(matches!(err, ViewerError::NonFinite { field: "y", .. }));
    }

    #[test]
    fn deserializes_tagged_json() {
        let input: PageInput =
            serde_json::from_str(r#"{"kind":"wheel","delta_y":-100.0}"#).unwrap();
        assert_eq!(input, PageInput::Wheel { delta_y: -100.0 });
    }
}
