//! Emote descriptor table and construction-time validation.

use std::collections::HashMap;

/// Static record backing one emote token.
///
/// `image_data` is a self-contained inline payload (typically a
/// `data:image/...;base64,` URI) that can be dropped directly into a CSS
/// `url('...')` declaration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmoteDescriptor {
    /// Inline image payload
    #[cfg_attr(feature = "serde", serde(rename = "base64"))]
    pub image_data: String,
    /// Width-to-height ratio of the image; treated as 1 when absent
    #[cfg_attr(
        feature = "serde",
        serde(rename = "ratio", skip_serializing_if = "Option::is_none", default)
    )]
    pub aspect_ratio: Option<f64>,
}

impl EmoteDescriptor {
    /// Create a descriptor for a square emote image.
    pub fn new(image_data: String) -> Self {
        Self {
            image_data,
            aspect_ratio: None,
        }
    }

    /// Create a descriptor with an explicit aspect ratio.
    pub fn with_ratio(image_data: String, ratio: f64) -> Self {
        Self {
            image_data,
            aspect_ratio: Some(ratio),
        }
    }

    /// Effective aspect ratio (1.0 when unspecified).
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.aspect_ratio.unwrap_or(1.0)
    }
}

/// Error type for emote table construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Aspect ratio is zero, negative, or not finite
    InvalidAspectRatio { name: String, ratio: f64 },
    /// Descriptor carries no image payload
    EmptyImageData { name: String },
    /// JSON table could not be parsed
    #[cfg(feature = "json")]
    Json(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::InvalidAspectRatio { name, ratio } => {
                write!(f, "Emote '{}' has invalid aspect ratio {}", name, ratio)
            }
            TableError::EmptyImageData { name } => {
                write!(f, "Emote '{}' has empty image data", name)
            }
            #[cfg(feature = "json")]
            TableError::Json(msg) => write!(f, "Invalid emote table JSON: {}", msg),
        }
    }
}

impl std::error::Error for TableError {}

/// Typed mapping from token name to emote descriptor.
///
/// The table is validated once at construction: every aspect ratio, when
/// present, must be finite and positive, and every image payload must be
/// non-empty. Lookups afterwards never re-check the descriptors.
#[derive(Clone, Debug, Default)]
pub struct EmoteTable {
    entries: HashMap<String, EmoteDescriptor>,
}

impl EmoteTable {
    /// Build a validated table from `(name, descriptor)` entries.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use emote_console::{EmoteDescriptor, EmoteTable};
    ///
    /// let table = EmoteTable::from_entries([(
    ///     "Smile".to_string(),
    ///     EmoteDescriptor::new("data:image/png;base64,c21pbGU=".to_string()),
    /// )])
    /// .unwrap();
    ///
    /// assert!(table.contains("Smile"));
    /// assert_eq!(table.get("Smile").unwrap().ratio(), 1.0);
    /// ```
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (String, EmoteDescriptor)>,
    {
        let mut table = HashMap::new();
        for (name, descriptor) in entries {
            if let Some(ratio) = descriptor.aspect_ratio {
                if !ratio.is_finite() || ratio <= 0.0 {
                    return Err(TableError::InvalidAspectRatio { name, ratio });
                }
            }
            if descriptor.image_data.is_empty() {
                return Err(TableError::EmptyImageData { name });
            }
            table.insert(name, descriptor);
        }
        Ok(Self { entries: table })
    }

    /// Parse a JSON emote table, e.g. loaded from bundled descriptor files.
    ///
    /// Expects an object mapping token names to `{ "base64": ..., "ratio": ... }`
    /// records, with `ratio` optional.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, TableError> {
        let entries: HashMap<String, EmoteDescriptor> =
            serde_json::from_str(s).map_err(|e| TableError::Json(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Check whether a token name is in the table.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the descriptor for a token name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&EmoteDescriptor> {
        self.entries.get(name)
    }

    /// Number of emotes in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the token names in the table.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(data: &str) -> String {
        format!("data:image/png;base64,{}", data)
    }

    #[test]
    fn test_ratio_defaults_to_one() {
        let descriptor = EmoteDescriptor::new(png("c21pbGU="));
        assert_eq!(descriptor.aspect_ratio, None);
        assert_eq!(descriptor.ratio(), 1.0);

        let wide = EmoteDescriptor::with_ratio(png("d2lkZQ=="), 2.5);
        assert_eq!(wide.ratio(), 2.5);
    }

    #[test]
    fn test_from_entries() {
        let table = EmoteTable::from_entries([
            ("Smile".to_string(), EmoteDescriptor::new(png("c21pbGU="))),
            (
                "Wide".to_string(),
                EmoteDescriptor::with_ratio(png("d2lkZQ=="), 2.0),
            ),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains("Smile"));
        assert!(table.contains("Wide"));
        assert!(!table.contains("Frown"));
        assert_eq!(table.get("Wide").unwrap().ratio(), 2.0);
    }

    #[test]
    fn test_rejects_non_positive_ratio() {
        for bad in [0.0, -1.5] {
            let result = EmoteTable::from_entries([(
                "Smile".to_string(),
                EmoteDescriptor::with_ratio(png("c21pbGU="), bad),
            )]);
            assert!(matches!(
                result,
                Err(TableError::InvalidAspectRatio { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_ratio() {
        let result = EmoteTable::from_entries([(
            "Smile".to_string(),
            EmoteDescriptor::with_ratio(png("c21pbGU="), f64::NAN),
        )]);
        assert!(matches!(result, Err(TableError::InvalidAspectRatio { .. })));

        let result = EmoteTable::from_entries([(
            "Smile".to_string(),
            EmoteDescriptor::with_ratio(png("c21pbGU="), f64::INFINITY),
        )]);
        assert!(matches!(result, Err(TableError::InvalidAspectRatio { .. })));
    }

    #[test]
    fn test_rejects_empty_image_data() {
        let result = EmoteTable::from_entries([(
            "Smile".to_string(),
            EmoteDescriptor::new(String::new()),
        )]);
        assert!(matches!(result, Err(TableError::EmptyImageData { .. })));
    }

    #[test]
    fn test_names() {
        let table = EmoteTable::from_entries([
            ("Smile".to_string(), EmoteDescriptor::new(png("c21pbGU="))),
            ("xdd".to_string(), EmoteDescriptor::new(png("eGRk"))),
        ])
        .unwrap();

        let mut names: Vec<&str> = table.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Smile", "xdd"]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "Smile": { "base64": "data:image/png;base64,c21pbGU=", "ratio": 1.4 },
            "xdd": { "base64": "data:image/png;base64,eGRk" }
        }"#;

        let table = EmoteTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Smile").unwrap().ratio(), 1.4);
        assert_eq!(table.get("xdd").unwrap().ratio(), 1.0);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_str_invalid() {
        assert!(matches!(
            EmoteTable::from_json_str("not json"),
            Err(TableError::Json(_))
        ));

        let json = r#"{ "Smile": { "base64": "data:image/png;base64,c21pbGU=", "ratio": -2.0 } }"#;
        assert!(matches!(
            EmoteTable::from_json_str(json),
            Err(TableError::InvalidAspectRatio { .. })
        ));
    }
}
