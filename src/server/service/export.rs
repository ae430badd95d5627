//! Downloadable exports of a user's collection.
//!
//! JSON exports are the dashboard tree as served by `/api/dashboard`. CSV exports flatten the
//! tree into one row per mini.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{dashboard::DashboardTree, stage::Stage},
    server::{error::Error, service::dashboard::DashboardService, util::time::format_timestamp},
    tracker::progress::{mini_progress, percent},
};

const MINI_COLUMNS: [&str; 8] = [
    "armyId",
    "armyName",
    "squadId",
    "squadName",
    "miniId",
    "miniName",
    "description",
    "tags",
];

/// Header row of the CSV export: mini columns, stage flags, progress, stage timestamps, then the
/// mini's own timestamps
pub fn csv_header() -> Vec<&'static str> {
    let mut header = MINI_COLUMNS.to_vec();
    header.extend(Stage::ALL.map(Stage::key));
    header.push("miniProgressPercent");
    header.extend(Stage::ALL.map(Stage::timestamp_key));
    header.extend(["miniCreatedAt", "miniUpdatedAt"]);
    header
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

impl ExportFormat {
    /// Format requested by the `format` query parameter, JSON when absent or unknown
    pub fn from_query(format: Option<&str>) -> Self {
        format
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Json => "painttracker-export.json",
            ExportFormat::Csv => "painttracker-export.csv",
        }
    }
}

/// A rendered export ready to be sent as an attachment
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub format: ExportFormat,
    pub body: String,
}

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    /// Creates a new instance of [`ExportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn export(&self, user_id: i32, format: ExportFormat) -> Result<ExportFile, Error> {
        let tree = DashboardService::new(self.db).get_tree(user_id).await?;

        let body = match format {
            ExportFormat::Json => serde_json::to_string(&tree)?,
            ExportFormat::Csv => tree_to_csv(&tree),
        };

        Ok(ExportFile { format, body })
    }
}

/// Renders the header row followed by one row per mini, joined with `\n`
pub fn tree_to_csv(tree: &DashboardTree) -> String {
    let mut rows = vec![csv_header().join(",")];

    for army in &tree.armies {
        for squad in &army.squads {
            for mini in &squad.minis {
                let mut cells = vec![
                    csv_escape(&army.id.to_string()),
                    csv_escape(&army.name),
                    csv_escape(&squad.id.to_string()),
                    csv_escape(&squad.name),
                    csv_escape(&mini.id.to_string()),
                    csv_escape(&mini.name),
                    csv_escape(mini.description.as_deref().unwrap_or("")),
                    csv_escape(&mini.tags.as_deref().unwrap_or_default().join("|")),
                ];
                cells.extend(Stage::ALL.map(|stage| mini.stage(stage).to_string()));
                cells.push(percent(mini_progress(mini)).to_string());
                cells.extend(Stage::ALL.map(|stage| timestamp_cell(mini.stage_at(stage))));
                cells.push(timestamp_cell(Some(mini.created_at)));
                cells.push(timestamp_cell(Some(mini.updated_at)));

                rows.push(cells.join(","));
            }
        }
    }

    rows.join("\n")
}

/// Quotes a text cell, doubling any quotes inside it
pub fn csv_escape(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn timestamp_cell(timestamp: Option<DateTime<Utc>>) -> String {
    csv_escape(&timestamp.map(format_timestamp).unwrap_or_default())
}
