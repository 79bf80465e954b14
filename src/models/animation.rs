use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Description of a Lottie vector animation
///
/// Only the header fields are typed; layers and every other key are kept
/// as-is and handed to the player untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip")]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w")]
    pub width: f64,
    #[serde(rename = "h")]
    pub height: f64,
    #[serde(default)]
    pub layers: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Errors that can occur while loading an animation description
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimationError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("Malformed animation: {0}")]
    Parse(String),
    #[error("Invalid animation: {0}")]
    Invalid(&'static str),
    #[error("Timed out after {0}ms")]
    TimedOut(u32),
    #[error("Animation loading is only available in the browser")]
    Unavailable,
}

impl AnimationData {
    /// Built-in animation: a blue disc turning once every three seconds
    pub fn placeholder() -> Self {
        let mut extra = Map::new();
        extra.insert("v".into(), json!("5.5.2"));
        extra.insert("nm".into(), json!("ML Animation"));
        extra.insert("ddd".into(), json!(0));
        extra.insert("assets".into(), json!([]));

        let circle = json!({
            "ddd": 0,
            "ind": 1,
            "ty": 4,
            "nm": "Circle",
            "sr": 1,
            "ks": {
                "o": { "a": 0, "k": 100 },
                "r": {
                    "a": 1,
                    "k": [
                        {
                            "i": { "x": [0.833], "y": [0.833] },
                            "o": { "x": [0.167], "y": [0.167] },
                            "t": 0,
                            "s": [0]
                        },
                        { "t": 74, "s": [360] }
                    ]
                },
                "p": { "a": 0, "k": [200, 200, 0] },
                "a": { "a": 0, "k": [0, 0, 0] },
                "s": { "a": 0, "k": [100, 100, 100] }
            },
            "ao": 0,
            "shapes": [
                {
                    "ty": "gr",
                    "it": [
                        { "d": 1, "ty": "el", "s": { "a": 0, "k": [100, 100] }, "p": { "a": 0, "k": [0, 0] } },
                        { "ty": "fl", "c": { "a": 0, "k": [0.2, 0.4, 0.8, 1] } }
                    ]
                }
            ],
            "ip": 0,
            "op": 75,
            "st": 0
        });

        Self {
            frame_rate: 25.0,
            in_point: 0.0,
            out_point: 75.0,
            width: 400.0,
            height: 400.0,
            layers: vec![circle],
            extra,
        }
    }

    /// Parse and validate a fetched description
    pub fn from_json(body: &str) -> Result<Self, AnimationError> {
        let data: Self =
            serde_json::from_str(body).map_err(|e| AnimationError::Parse(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(AnimationError::Invalid("frame rate must be positive"));
        }
        if self.out_point <= self.in_point {
            return Err(AnimationError::Invalid("out point must follow in point"));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(AnimationError::Invalid("canvas must not be empty"));
        }
        Ok(())
    }

    pub fn frame_count(&self) -> f64 {
        self.out_point - self.in_point
    }

    /// Length of one loop in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() / self.frame_rate
    }

    pub fn name(&self) -> Option<&str> {
        self.extra.get("nm").and_then(Value::as_str)
    }
}

impl Default for AnimationData {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Pick the animation to show: the fetched one when it loaded, the
/// placeholder while pending or after any failure.
pub fn resolve_animation(fetched: Option<Result<AnimationData, AnimationError>>) -> AnimationData {
    match fetched {
        Some(Ok(data)) => data,
        _ => AnimationData::placeholder(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn placeholder_is_renderable() {
        let placeholder = AnimationData::placeholder();
        assert_eq!(placeholder.validate(), Ok(()));
        assert_eq!(placeholder.duration_secs(), 3.0);
        assert_eq!(placeholder.name(), Some("ML Animation"));
        assert_eq!(placeholder.layers.len(), 1);
    }

    #[test]
    fn placeholder_survives_serialization() {
        let placeholder = AnimationData::placeholder();
        let text = serde_json::to_string(&placeholder).unwrap();
        assert!(text.contains(r#""fr":25.0"#));
        assert_eq!(AnimationData::from_json(&text), Ok(placeholder));
    }

    #[test]
    fn fetched_description_keeps_unknown_keys() {
        let body = r#"{"v":"5.7.4","fr":30,"ip":0,"op":90,"w":512,"h":512,"nm":"Neurons","markers":[],"layers":[{"ty":4}]}"#;
        let data = AnimationData::from_json(body).unwrap();
        assert_eq!(data.frame_rate, 30.0);
        assert_eq!(data.name(), Some("Neurons"));
        assert!(data.extra.contains_key("markers"));
        assert_eq!(data.layers.len(), 1);
    }

    #[test]
    fn fractional_canvas_size_is_accepted() {
        let body = r#"{"fr":29.97,"ip":0,"op":60,"w":512.0,"h":288.5,"layers":[]}"#;
        let data = AnimationData::from_json(body).unwrap();
        assert_eq!(data.width, 512.0);
        assert_eq!(data.height, 288.5);
    }

    #[test]
    fn empty_canvas_is_rejected() {
        for body in [
            r#"{"fr":24,"ip":0,"op":10,"w":0,"h":10}"#,
            r#"{"fr":24,"ip":0,"op":10,"w":10,"h":-1.5}"#,
        ] {
            assert_eq!(
                AnimationData::from_json(body),
                Err(AnimationError::Invalid("canvas must not be empty"))
            );
        }
    }

    #[test]
    fn unparseable_body_is_a_parse_error() {
        assert!(matches!(
            AnimationData::from_json("<html>404</html>"),
            Err(AnimationError::Parse(_))
        ));
        assert!(matches!(
            AnimationData::from_json(r#"{"layers":[]}"#),
            Err(AnimationError::Parse(_))
        ));
    }

    #[test]
    fn degenerate_timing_is_rejected() {
        let zero_rate = r#"{"fr":0,"ip":0,"op":10,"w":10,"h":10}"#;
        assert_eq!(
            AnimationData::from_json(zero_rate),
            Err(AnimationError::Invalid("frame rate must be positive"))
        );
        let reversed = r#"{"fr":24,"ip":10,"op":10,"w":10,"h":10}"#;
        assert_eq!(
            AnimationData::from_json(reversed),
            Err(AnimationError::Invalid("out point must follow in point"))
        );
    }

    #[test]
    fn failures_resolve_to_placeholder() {
        let placeholder = AnimationData::placeholder();
        assert_eq!(resolve_animation(None), placeholder);
        assert_eq!(
            resolve_animation(Some(Err(AnimationError::Status(404)))),
            placeholder
        );
        assert_eq!(
            resolve_animation(Some(Err(AnimationError::Network("offline".into())))),
            placeholder
        );
    }

    #[test]
    fn success_replaces_placeholder() {
        let mut fetched = AnimationData::placeholder();
        fetched.frame_rate = 60.0;
        assert_eq!(resolve_animation(Some(Ok(fetched.clone()))), fetched);
    }
}
