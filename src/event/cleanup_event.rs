use serde::Deserialize;
use serde_json::Value;

/// Recognized values of the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Static,
    Spherical,
}

impl EventType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "static" => Some(Self::Static),
            "360" => Some(Self::Spherical),
            _ => None,
        }
    }
}

/// One decoded cleanup message. Every field is optional at the wire level so
/// that a missing key is distinguishable from an undecodable payload.
#[derive(Debug, Deserialize)]
pub struct CleanupEvent {
    image_uri: Option<String>,
    #[serde(rename = "type")]
    event_type: Option<String>,
    frames: Option<Value>,
    dl_link: Option<String>,
}

impl CleanupEvent {
    /// The primary image URI, with an empty string treated as absent.
    pub fn get_image_uri(&self) -> Option<&str> {
        self.image_uri.as_deref().filter(|s| !s.is_empty())
    }

    /// The raw `type` value, with an empty string treated as absent.
    pub fn get_raw_type(&self) -> Option<&str> {
        self.event_type.as_deref().filter(|s| !s.is_empty())
    }

    pub fn get_dl_link(&self) -> Option<&str> {
        self.dl_link.as_deref().filter(|s| !s.is_empty())
    }

    /// Number of frames a "360" event covers. `frames` counts only when it is
    /// a positive integer (numeric strings included); anything else, zero and
    /// negative values included, falls back to exactly one frame.
    pub fn effective_frame_count(&self) -> u64 {
        let parsed = match &self.frames {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n > 0 => n as u64,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: &str) -> CleanupEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_frame_count_from_positive_integer() {
        assert_eq!(event(r#"{"frames": 3}"#).effective_frame_count(), 3);
        assert_eq!(event(r#"{"frames": "2"}"#).effective_frame_count(), 2);
    }

    #[test]
    fn test_frame_count_falls_back_to_one() {
        for json in [
            r#"{}"#,
            r#"{"frames": 0}"#,
            r#"{"frames": -4}"#,
            r#"{"frames": "abc"}"#,
            r#"{"frames": 2.5}"#,
            r#"{"frames": null}"#,
            r#"{"frames": [1]}"#,
        ] {
            assert_eq!(event(json).effective_frame_count(), 1, "payload: {json}");
        }
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let e = event(r#"{"image_uri": "", "type": "", "dl_link": ""}"#);
        assert!(e.get_image_uri().is_none());
        assert!(e.get_raw_type().is_none());
        assert!(e.get_dl_link().is_none());
    }

    #[test]
    fn test_null_dl_link_counts_as_absent() {
        assert!(event(r#"{"dl_link": null}"#).get_dl_link().is_none());
    }
}
