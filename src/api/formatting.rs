//! Guidance output formatting
//!
//! Renders guidance for the navigation panel as one-line or multi-line text,
//! or as JSON for bridging to a UI layer.

use crate::route::Guidance;

/// Human-readable guidance formatter
pub struct TextFormatter {
    /// Single line instead of the panel layout
    pub compact: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { compact: false }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    /// Format guidance as the navigation panel shows it
    pub fn format(&self, guidance: &Guidance) -> String {
        if self.compact {
            format!(
                "{} | {:.2} km | ETA {} min",
                guidance.instruction, guidance.distance_remaining_km, guidance.eta_minutes
            )
        } else {
            format!(
                "{}\nNext turn in {:.2} km | ETA: {} min",
                guidance.instruction, guidance.distance_remaining_km, guidance.eta_minutes
            )
        }
    }
}

/// JSON guidance formatter
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format(&self, guidance: &Guidance) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(guidance)
        } else {
            serde_json::to_string(guidance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guidance() -> Guidance {
        Guidance {
            instruction: "Turn left".to_string(),
            distance_remaining_km: 2.5,
            eta_minutes: 3,
        }
    }

    #[test]
    fn test_panel_text() {
        let text = TextFormatter::new().format(&guidance());
        assert_eq!(text, "Turn left\nNext turn in 2.50 km | ETA: 3 min");
    }

    #[test]
    fn test_compact_text() {
        let text = TextFormatter::compact().format(&guidance());
        assert_eq!(text, "Turn left | 2.50 km | ETA 3 min");
    }

    #[test]
    fn test_json_round_trip() {
        let json = JsonFormatter::new().format(&guidance()).unwrap();
        let parsed: Guidance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, guidance());
    }

    #[test]
    fn test_pretty_json_contains_fields() {
        let json = JsonFormatter::pretty().format(&guidance()).unwrap();
        assert!(json.contains("\"instruction\""));
        assert!(json.contains("\"distance_remaining_km\""));
        assert!(json.contains("\"eta_minutes\""));
    }
}
