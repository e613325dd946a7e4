// Figure domain models consumed by the chart rendering surface
use crate::domain::sales::{SalesRow, Selection};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FigurePoint {
    pub date: NaiveDate,
    pub sales: i64,
}

impl FigurePoint {
    pub fn new(date: NaiveDate, sales: i64) -> Self {
        Self { date, sales }
    }
}

impl From<&SalesRow> for FigurePoint {
    fn from(row: &SalesRow) -> Self {
        Self::new(row.date, row.sales)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Figure {
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<FigurePoint>,
}

impl Figure {
    pub fn new(id: String, kind: ChartKind, title: String, points: Vec<FigurePoint>) -> Self {
        Self {
            id,
            kind,
            title,
            x_label: "Date".to_string(),
            y_label: "Sales".to_string(),
            points,
        }
    }
}

/// Both figures rendered from one selection snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FigureSet {
    pub selection: Selection,
    pub line: Figure,
    pub bar: Figure,
}

impl FigureSet {
    pub fn new(selection: Selection, line: Figure, bar: Figure) -> Self {
        Self {
            selection,
            line,
            bar,
        }
    }
}
