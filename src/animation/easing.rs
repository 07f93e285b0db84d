use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Easing curves used by the page.
///
/// `powerN` follows the usual naming: power1 is quadratic, power2 cubic,
/// power3 quartic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Ease {
    #[serde(rename = "none")]
    Linear,
    #[default]
    #[serde(rename = "power1.out")]
    Power1Out,
    #[serde(rename = "power1.inOut")]
    Power1InOut,
    #[serde(rename = "power2.out")]
    Power2Out,
    #[serde(rename = "power3.out")]
    Power3Out,
    /// CSS-style `ease-out`, approximated by a quadratic out curve.
    #[serde(rename = "easeOut")]
    EaseOut,
}

impl Ease {
    /// Map linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out | Ease::EaseOut => out(t, 2),
            Ease::Power2Out => out(t, 3),
            Ease::Power3Out => out(t, 4),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power1Out => "power1.out",
            Ease::Power1InOut => "power1.inOut",
            Ease::Power2Out => "power2.out",
            Ease::Power3Out => "power3.out",
            Ease::EaseOut => "easeOut",
        }
    }
}

fn out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

impl FromStr for Ease {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "linear" => Ok(Ease::Linear),
            "power1.out" | "power1" => Ok(Ease::Power1Out),
            "power1.inOut" => Ok(Ease::Power1InOut),
            "power2.out" | "power2" => Ok(Ease::Power2Out),
            "power3.out" | "power3" => Ok(Ease::Power3Out),
            "easeOut" => Ok(Ease::EaseOut),
            other => Err(Error::UnknownEase(other.to_string())),
        }
    }
}
