// src/process/mod.rs
pub mod amount;
pub mod email;
pub mod name;
pub mod score;

use crate::error::{FormatError, PipelineError, StructureError};
use std::fmt;
use tracing::info;

/// Input columns expected in the export.
pub const OWNER_NAME: &str = "Owner Name";
pub const AMOUNT: &str = "Amount";
/// Columns added by the pipeline.
pub const CLAIM_SCORE: &str = "Claim Score";
pub const EMAIL: &str = "Email";

/// One cell of the in-memory table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Float(f64),
    Int(i64),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Float(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
        }
    }
}

/// Ordered columns plus rows of cell values, mutated in place one column per
/// stage. Every row has every column; extraction enforces that and stages
/// preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, column: &str) -> Result<usize, StructureError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| StructureError::MissingColumn(column.to_string()))
    }

    /// Rewrite `column` in place. The first cell `f` rejects aborts the whole
    /// column; the error carries the stage name, row index, and cell value.
    pub fn map_column<F>(
        &mut self,
        column: &str,
        stage: &'static str,
        f: F,
    ) -> Result<(), PipelineError>
    where
        F: Fn(&Value) -> Result<Value, FormatError>,
    {
        let idx = self.column_index(column)?;
        for (row, cells) in self.rows.iter_mut().enumerate() {
            let cell = &mut cells[idx];
            *cell = f(cell).map_err(|source| PipelineError::Stage {
                stage,
                row,
                value: cell.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Append a new column derived from an existing one. The whole derived
    /// column is computed before anything is attached, so a failure leaves
    /// the table untouched.
    pub fn append_column<F>(
        &mut self,
        from: &str,
        column: &str,
        stage: &'static str,
        f: F,
    ) -> Result<(), PipelineError>
    where
        F: Fn(&Value) -> Result<Value, FormatError>,
    {
        let idx = self.column_index(from)?;
        let mut derived = Vec::with_capacity(self.rows.len());
        for (row, cells) in self.rows.iter().enumerate() {
            let cell = &cells[idx];
            derived.push(f(cell).map_err(|source| PipelineError::Stage {
                stage,
                row,
                value: cell.to_string(),
                source,
            })?);
        }
        self.columns.push(column.to_string());
        for (cells, value) in self.rows.iter_mut().zip(derived) {
            cells.push(value);
        }
        Ok(())
    }
}

/// Stage 2: rewrite `Owner Name` from `"Last, First"` to `"First M. Last"`.
pub fn normalize_names(table: &mut Table) -> Result<(), PipelineError> {
    info!(rows = table.len(), "normalizing owner names");
    table.map_column(OWNER_NAME, "name normalization", |v| {
        Ok(Value::Text(name::normalize_name(&v.to_string())?))
    })
}

/// Stage 3: overwrite `Amount` with its parsed numeric value.
pub fn parse_amounts(table: &mut Table) -> Result<(), PipelineError> {
    info!(rows = table.len(), "parsing amounts");
    table.map_column(AMOUNT, "amount parsing", |v| {
        Ok(Value::Float(amount::parse_amount(&v.to_string())?))
    })
}

/// Stage 4: derive `Claim Score` from the parsed amount.
pub fn classify_scores(table: &mut Table) -> Result<(), PipelineError> {
    info!(rows = table.len(), "assigning claim scores");
    table.append_column(AMOUNT, CLAIM_SCORE, "score classification", |v| {
        let amount = v
            .as_f64()
            .ok_or_else(|| FormatError::BadAmount(v.to_string()))?;
        Ok(Value::Int(score::claim_score(amount)))
    })
}

/// Stage 5: derive `Email` from the normalized owner name.
pub fn synthesize_emails(table: &mut Table) -> Result<(), PipelineError> {
    info!(rows = table.len(), "synthesizing emails");
    table.append_column(OWNER_NAME, EMAIL, "email synthesis", |v| {
        Ok(Value::Text(email::synthesize_email(&v.to_string())?))
    })
}

/// Run stages 2-5 in order, calling `observe` with the stage label and the
/// table after each one so the caller can display intermediate results. The
/// first error aborts the remaining stages.
pub fn run_pipeline<F>(table: &mut Table, mut observe: F) -> Result<(), PipelineError>
where
    F: FnMut(&str, &Table),
{
    normalize_names(table)?;
    observe("Normalized owner names", table);

    parse_amounts(table)?;
    observe("Amounts as numbers", table);

    classify_scores(table)?;
    observe("Claim scores assigned", table);

    synthesize_emails(table)?;
    observe("Emails synthesized", table);

    info!(rows = table.len(), columns = table.columns().len(), "pipeline complete");
    Ok(())
}
