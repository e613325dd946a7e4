// Page layout domain model
use crate::domain::figure::ChartKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

/// Single-select control. `value` is always one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub param: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub multi: bool,
    pub clearable: bool,
}

impl Dropdown {
    pub fn single_select(id: &str, param: &str, options: Vec<DropdownOption>, value: String) -> Self {
        Self {
            id: id.to_string(),
            param: param.to_string(),
            options,
            value,
            multi: false,
            clearable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlot {
    pub id: String,
    pub kind: ChartKind,
}

impl ChartSlot {
    pub fn new(id: &str, kind: ChartKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub heading: String,
    pub dropdowns: Vec<Dropdown>,
    pub charts: Vec<ChartSlot>,
}

impl Layout {
    pub fn new(heading: String, dropdowns: Vec<Dropdown>, charts: Vec<ChartSlot>) -> Self {
        Self {
            heading,
            dropdowns,
            charts,
        }
    }
}
