//! Dashboard form schemas
//!
//! Each dashboard form is described by an ordered list of [`FieldSpec`]s.
//! The schema drives both the rendered inputs and the [`FormRecord`]
//! that holds their values.
//!
//! [`FormRecord`]: crate::form::FormRecord

use serde::Serialize;

/// One `<select>` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Input widget for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Number { step: Option<&'static str> },
    TextArea { rows: u8 },
    Select { options: &'static [SelectOption] },
}

impl FieldKind {
    /// `type` attribute for `<input>` widgets
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Number { .. } => "number",
            _ => "text",
        }
    }

    pub fn is_textarea(&self) -> bool {
        matches!(self, FieldKind::TextArea { .. })
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::Select { .. })
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            FieldKind::Select { options } => options,
            _ => &[],
        }
    }

    pub fn rows(&self) -> u8 {
        match self {
            FieldKind::TextArea { rows } => *rows,
            _ => 0,
        }
    }

    pub fn step(&self) -> Option<&'static str> {
        match self {
            FieldKind::Number { step } => *step,
            _ => None,
        }
    }
}

/// A single declared form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number { step: None })
    }

    pub fn textarea(name: &'static str, label: &'static str, rows: u8) -> Self {
        Self::new(name, label, FieldKind::TextArea { rows })
    }

    pub fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Placeholder text; for selects this is the empty option's label
    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Only meaningful for number fields
    pub fn step(mut self, step: &'static str) -> Self {
        if let FieldKind::Number { step: ref mut s } = self.kind {
            *s = Some(step);
        }
        self
    }
}
