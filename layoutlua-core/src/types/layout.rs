//! Layout document types
//!
//! A layout is a flat, ordered list of rectangular items plus optional canvas
//! metadata. Documents are produced by an editor and may be malformed in any
//! field, so decoding goes through a total conversion from `serde_json::Value`
//! rather than a strict derive.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce;

/// Class used when an item declares no `type`
pub const DEFAULT_CLASS: &str = "Frame";

/// A complete layout document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Layout {
    /// Size of the design surface. Accepted and kept, never emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_size: Option<CanvasSize>,

    /// Items in declaration order
    pub items: Vec<Item>,
}

/// Width and height of the design surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// One UI element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Item {
    /// Roblox class name (`Frame`, `TextLabel`, `ImageLabel`, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,

    /// Background color as a hex string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Text color as a hex string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Image asset reference, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// Errors that can occur when loading a layout document
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Failed to read layout file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse layout JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse layout YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl Layout {
    /// Build a layout from any JSON value
    ///
    /// Never fails: a missing or non-array `items` yields no items, and a
    /// non-object root yields an empty layout.
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };

        let items = match root.get("items") {
            Some(Value::Array(items)) => items.iter().map(Item::from_value).collect(),
            _ => Vec::new(),
        };

        Self {
            canvas_size: root.get("canvasSize").and_then(CanvasSize::from_value),
            items,
        }
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, LayoutError> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, LayoutError> {
        let value: Value = serde_yaml::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Load a layout file
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }
}

impl From<Value> for Layout {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl CanvasSize {
    /// Read `{width, height}` (or `{w, h}`); non-objects are ignored
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let width = obj.get("width").or_else(|| obj.get("w"));
        let height = obj.get("height").or_else(|| obj.get("h"));
        Some(Self {
            width: coerce::number_or_zero(width),
            height: coerce::number_or_zero(height),
        })
    }
}

impl From<Value> for CanvasSize {
    fn from(value: Value) -> Self {
        Self::from_value(&value).unwrap_or_default()
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl Item {
    /// Build an item from any JSON value; non-objects become a default item
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(obj) => Self::from_map(obj),
            None => Self::default(),
        }
    }

    fn from_map(obj: &Map<String, Value>) -> Self {
        let text = |key: &str| obj.get(key).and_then(coerce::text);
        let number = |key: &str| coerce::number_or_zero(obj.get(key));

        Self {
            class_name: text("type"),
            name: text("name"),
            x: number("x"),
            y: number("y"),
            w: number("w"),
            h: number("h"),
            fill: text("fill"),
            text: text("text"),
            text_color: text("textColor"),
            font_size: coerce::optional_number(obj.get("fontSize")),
            image_id: text("imageId"),
        }
    }

    /// Create an item of the given class with a name
    pub fn new(class_name: &str, name: &str) -> Self {
        Self {
            class_name: Some(class_name.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Set position and size
    pub fn with_bounds(mut self, x: f64, y: f64, w: f64, h: f64) -> Self {
        self.x = x;
        self.y = y;
        self.w = w;
        self.h = h;
        self
    }

    /// Effective class: the declared `type` unless absent or empty
    pub fn class_or_default(&self) -> &str {
        match self.class_name.as_deref() {
            Some(class) if !class.is_empty() => class,
            _ => DEFAULT_CLASS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple_layout() {
        let json = r##"{
            "canvasSize": { "width": 800, "height": 600 },
            "items": [
                { "type": "Frame", "name": "Panel", "x": 10, "y": 20, "w": 300, "h": 200, "fill": "#202020" },
                { "type": "TextLabel", "name": "Title", "text": "Hello", "fontSize": 18 }
            ]
        }"##;

        let layout = Layout::from_json_str(json).unwrap();
        assert_eq!(layout.canvas_size, Some(CanvasSize { width: 800.0, height: 600.0 }));
        assert_eq!(layout.items.len(), 2);
        assert_eq!(layout.items[0].name.as_deref(), Some("Panel"));
        assert_eq!(layout.items[0].w, 300.0);
        assert_eq!(layout.items[0].fill.as_deref(), Some("#202020"));
        assert_eq!(layout.items[1].class_or_default(), "TextLabel");
        assert_eq!(layout.items[1].font_size, Some(18.0));
    }

    #[test]
    fn test_items_not_an_array() {
        let layout = Layout::from_value(&json!({ "items": "not-an-array" }));
        assert!(layout.items.is_empty());

        let layout = Layout::from_value(&json!({}));
        assert!(layout.items.is_empty());

        let layout = Layout::from_value(&json!([1, 2, 3]));
        assert_eq!(layout, Layout::default());
    }

    #[test]
    fn test_malformed_fields_degrade() {
        let layout = Layout::from_value(&json!({
            "items": [
                42,
                { "x": "abc", "y": "12", "w": null, "h": [1], "name": 7, "fill": {}, "fontSize": "big" }
            ]
        }));

        assert_eq!(layout.items[0], Item::default());

        let item = &layout.items[1];
        assert_eq!(item.x, 0.0);
        assert_eq!(item.y, 12.0);
        assert_eq!(item.w, 0.0);
        assert_eq!(item.h, 0.0);
        assert_eq!(item.name.as_deref(), Some("7"));
        assert_eq!(item.fill, None);
        assert_eq!(item.font_size, Some(0.0));
        assert_eq!(item.class_or_default(), DEFAULT_CLASS);
    }

    #[test]
    fn test_canvas_size_aliases() {
        let layout = Layout::from_value(&json!({ "canvasSize": { "w": 100, "h": "50" } }));
        assert_eq!(layout.canvas_size, Some(CanvasSize { width: 100.0, height: 50.0 }));

        let layout = Layout::from_value(&json!({ "canvasSize": "large" }));
        assert_eq!(layout.canvas_size, None);
    }

    #[test]
    fn test_deserialize_never_fails_on_shape() {
        let layout: Layout = serde_json::from_str(r#"{ "items": { "a": 1 } }"#).unwrap();
        assert!(layout.items.is_empty());

        let layout: Layout = serde_json::from_str(r#""just a string""#).unwrap();
        assert!(layout.items.is_empty());
    }

    #[test]
    fn test_item_deserialize_coerces_fields() {
        let item: Item = serde_json::from_str(r#"{ "x": "abc", "y": "8", "fontSize": [] }"#).unwrap();
        assert_eq!(item.x, 0.0);
        assert_eq!(item.y, 8.0);
        assert_eq!(item.font_size, Some(0.0));

        let item: Item = serde_json::from_str("17").unwrap();
        assert_eq!(item, Item::default());

        let canvas: CanvasSize = serde_json::from_str(r#"{ "width": "wide", "h": 90 }"#).unwrap();
        assert_eq!(canvas, CanvasSize { width: 0.0, height: 90.0 });

        let items: Vec<Item> = serde_yaml::from_str("- name: A\n  w: tall\n- 3\n").unwrap();
        assert_eq!(items[0].name.as_deref(), Some("A"));
        assert_eq!(items[0].w, 0.0);
        assert_eq!(items[1], Item::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Layout::from_json_str("{ items: "),
            Err(LayoutError::JsonError(_))
        ));
    }

    #[test]
    fn test_from_file_json_and_yaml() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("layout.json");
        fs::write(&json_path, r#"{ "items": [ { "name": "A" } ] }"#).unwrap();
        let layout = Layout::from_file(&json_path).unwrap();
        assert_eq!(layout.items[0].name.as_deref(), Some("A"));

        let yaml_path = temp_dir.path().join("layout.yaml");
        fs::write(&yaml_path, "items:\n  - name: B\n    x: 5\n  - type: TextLabel\n").unwrap();
        let layout = Layout::from_file(&yaml_path).unwrap();
        assert_eq!(layout.items.len(), 2);
        assert_eq!(layout.items[0].x, 5.0);
        assert_eq!(layout.items[1].class_name.as_deref(), Some("TextLabel"));
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = Layout::from_file(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(LayoutError::IoError(_))));
    }

    #[test]
    fn test_serialize_uses_editor_field_names() {
        let mut item = Item::new("TextLabel", "Title").with_bounds(1.0, 2.0, 3.0, 4.0);
        item.text_color = Some("#ffffff".to_string());
        let layout = Layout { canvas_size: None, items: vec![item] };

        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["items"][0]["type"], "TextLabel");
        assert_eq!(json["items"][0]["textColor"], "#ffffff");
        assert!(json.get("canvasSize").is_none());

        let back = Layout::from_value(&json);
        assert_eq!(back, layout);
    }
}
