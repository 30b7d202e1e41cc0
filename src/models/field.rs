//! Field and option value types
//!
//! A field is one question in a form template. Select and radio fields
//! carry the selectable options (with optional point weights) that drive
//! risk scoring; number and slider fields carry their numeric bounds.
//! Modelling the per-type payload as a tagged enum means a text field can
//! never carry stray options and a select field can never lose them.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// One selectable answer on a select/radio field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    /// Identifier, unique within the owning field's option list
    pub value: String,

    /// Display text
    pub label: String,

    /// Point weight contributed when this option is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            points: None,
        }
    }

    /// Option with a point weight (scored forms)
    pub fn weighted(value: impl Into<String>, label: impl Into<String>, points: u32) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            points: Some(points),
        }
    }
}

/// Per-type payload of a field, tagged by the wire `type` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FieldControl {
    Text,
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        points_per_value: Option<f64>,
    },
    Select {
        options: Vec<FieldOption>,
    },
    Radio {
        options: Vec<FieldOption>,
    },
    Checkbox,
    Textarea,
    Slider {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        points_per_value: Option<f64>,
    },
    Date,
    Email,
}

impl FieldControl {
    /// Wire name of the field type
    pub fn name(&self) -> &'static str {
        match self {
            FieldControl::Text => "text",
            FieldControl::Number { .. } => "number",
            FieldControl::Select { .. } => "select",
            FieldControl::Radio { .. } => "radio",
            FieldControl::Checkbox => "checkbox",
            FieldControl::Textarea => "textarea",
            FieldControl::Slider { .. } => "slider",
            FieldControl::Date => "date",
            FieldControl::Email => "email",
        }
    }

    /// Selectable options, if this field type carries any
    pub fn options(&self) -> Option<&[FieldOption]> {
        match self {
            FieldControl::Select { options } | FieldControl::Radio { options } => Some(options),
            _ => None,
        }
    }

    pub fn options_mut(&mut self) -> Option<&mut Vec<FieldOption>> {
        match self {
            FieldControl::Select { options } | FieldControl::Radio { options } => Some(options),
            _ => None,
        }
    }

    /// Whether this field type must carry at least one option to be saved
    pub fn requires_options(&self) -> bool {
        matches!(self, FieldControl::Select { .. } | FieldControl::Radio { .. })
    }
}

/// One question in a form template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Identifier, unique within the owning template
    pub id: String,

    /// Question text shown to the user
    pub label: String,

    #[serde(flatten)]
    pub control: FieldControl,

    pub required: bool,

    /// Free-text grouping tag (e.g. "Environmental", "Fatigue")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Position within the template, dense 1..N
    pub order: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl FormField {
    /// Highest point weight among this field's options (0 when the field
    /// has no options or none of them carry points)
    pub fn max_points(&self) -> u32 {
        self.control
            .options()
            .map(|opts| opts.iter().map(|o| o.points.unwrap_or(0)).max().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Structural validation applied before a field enters a template
    pub fn validate(&self) -> FormResult<()> {
        if self.label.trim().is_empty() {
            return Err(FormError::MissingLabel);
        }
        if let Some(options) = self.control.options() {
            if options.is_empty() {
                return Err(FormError::MissingOptions {
                    field: self.label.clone(),
                });
            }
            for (i, option) in options.iter().enumerate() {
                if options[..i].iter().any(|o| o.value == option.value) {
                    return Err(FormError::DuplicateOptionValue {
                        field: self.label.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        } else if self.control.requires_options() {
            return Err(FormError::MissingOptions {
                field: self.label.clone(),
            });
        }
        Ok(())
    }
}

/// Authoring input for a field; the store assigns `id` and `order`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    pub label: String,
    pub control: FieldControl,
    pub required: bool,
    pub category: Option<String>,
    pub help_text: Option<String>,
}

impl FieldDraft {
    pub fn new(label: impl Into<String>, control: FieldControl) -> Self {
        Self {
            label: label.into(),
            control,
            required: true,
            category: None,
            help_text: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Materialize the draft into a field at the given position
    pub fn into_field(self, id: impl Into<String>, order: u32) -> FormField {
        FormField {
            id: id.into(),
            label: self.label,
            control: self.control,
            required: self.required,
            category: self.category,
            order,
            help_text: self.help_text,
        }
    }
}
