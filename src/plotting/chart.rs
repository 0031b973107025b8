use serde::Serialize;
use serde_json::{json, Value};

use super::styles::{ChartTheme, Marker};
use crate::utils::merge_json;

/// A bar trace in plotly's figure format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// A plotly-compatible figure description styled by a [`ChartTheme`].
///
/// The figure copies what it needs out of the theme when created, so later
/// layout changes only affect this figure.
#[derive(Debug, Clone)]
pub struct Figure {
    data: Vec<BarTrace>,
    layout: Value,
    palette: Vec<Marker>,
}

impl Figure {
    pub fn new(theme: &ChartTheme) -> Self {
        // A theme is plain strings, numbers and bools, so this cannot fail
        let layout = serde_json::to_value(&theme.layout).unwrap_or_else(|_| json!({}));
        Self {
            data: Vec::new(),
            layout,
            palette: theme.data.bar.iter().map(|b| b.marker.clone()).collect(),
        }
    }

    /// Add a bar trace. Its marker comes from the theme palette by trace index.
    pub fn add_bar(&mut self, name: impl Into<String>, x: Vec<String>, y: Vec<f64>) -> &mut Self {
        let marker = if self.palette.is_empty() {
            None
        } else {
            Some(self.palette[self.data.len() % self.palette.len()].clone())
        };
        self.data.push(BarTrace {
            kind: "bar",
            name: name.into(),
            x,
            y,
            marker,
        });
        self
    }

    pub fn set_title(&mut self, text: &str) -> &mut Self {
        self.update_layout(json!({ "title": { "text": text } }))
    }

    /// Merge local layout overrides over the themed layout
    pub fn update_layout(&mut self, overrides: Value) -> &mut Self {
        merge_json(&mut self.layout, overrides);
        self
    }

    pub fn traces(&self) -> &[BarTrace] {
        &self.data
    }

    pub fn layout(&self) -> &Value {
        &self.layout
    }

    /// The figure as plotly JSON: `{"data": [...], "layout": {...}}`
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        Ok(json!({
            "data": serde_json::to_value(&self.data)?,
            "layout": self.layout.clone(),
        }))
    }
}
