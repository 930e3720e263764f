//! Column declarations and table configuration.

use std::collections::HashSet;

use crate::error::ConfigError;

/// Global default minimum column width, in pixels.
pub const DEFAULT_MIN_COL_WIDTH: u32 = 100;

/// Horizontal space held back for a vertical scrollbar.
pub const SCROLLBAR_RESERVE: u32 = 17;

/// Declared width for a single sizing category (width, min or max).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WidthSpec {
    /// Absolute pixel value.
    Px(u32),
    /// Percentage of the container width (0.0..=100.0).
    Percent(f32),
    /// Share leftover container space with the other auto columns.
    Auto,
    /// No declaration. Treated like `Auto` for the width category; the bound
    /// categories fall back to their built-in defaults.
    #[default]
    Unset,
}

/// How a column participates in interaction.
///
/// Resolved once at configuration time; the engine never inspects anything
/// else to decide what a column is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Static column: not resizable, never hidden.
    #[default]
    Fixed,
    /// The border this column shares with a neighbor can be dragged.
    Adjustable,
    /// Adjustable, and may additionally be hidden when space runs out.
    Configurable,
}

impl ColumnKind {
    /// Whether interactive resize is permitted.
    pub fn resizable(self) -> bool {
        matches!(self, ColumnKind::Adjustable | ColumnKind::Configurable)
    }

    /// Whether the column may be hidden by the visibility negotiation.
    pub fn hideable(self) -> bool {
        matches!(self, ColumnKind::Configurable)
    }
}

/// A table column declaration.
///
/// Columns are declared once per table configuration and are immutable
/// afterwards; the key joins declaration, width state and visibility state.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name").field("display_name").adjustable().sortable(),
///     Column::new("status").width(WidthSpec::Px(80)),
///     Column::new("modified").configurable().min_width(WidthSpec::Percent(20.0)),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Stable identifier, unique within one table.
    pub key: String,
    /// Optional data accessor for the cell renderer.
    pub field: Option<String>,
    /// Interaction capabilities.
    pub kind: ColumnKind,
    /// Declared width.
    pub width: WidthSpec,
    /// Declared minimum width.
    pub min_width: WidthSpec,
    /// Declared maximum width.
    pub max_width: WidthSpec,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
}

impl Column {
    /// Create a new column with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field: None,
            kind: ColumnKind::Fixed,
            width: WidthSpec::Unset,
            min_width: WidthSpec::Unset,
            max_width: WidthSpec::Unset,
            sortable: false,
        }
    }

    /// Set the data field this column reads.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the declared width.
    pub fn width(mut self, spec: WidthSpec) -> Self {
        self.width = spec;
        self
    }

    /// Set the declared minimum width.
    pub fn min_width(mut self, spec: WidthSpec) -> Self {
        self.min_width = spec;
        self
    }

    /// Set the declared maximum width.
    pub fn max_width(mut self, spec: WidthSpec) -> Self {
        self.max_width = spec;
        self
    }

    /// Permit dragging the border shared with a neighbor.
    pub fn adjustable(mut self) -> Self {
        self.kind = ColumnKind::Adjustable;
        self
    }

    /// Permit resize and overflow-driven hiding.
    pub fn configurable(mut self) -> Self {
        self.kind = ColumnKind::Configurable;
        self
    }

    /// Mark the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Configuration for one table instance.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Column declarations, in display order.
    pub columns: Vec<Column>,
    /// Fallback minimum width for columns without a min declaration.
    pub min_col_width: u32,
    /// Space held back from the container for a vertical scrollbar.
    pub scrollbar_reserve: u32,
    /// Key under which the enabled-column set is persisted.
    pub storage_key: Option<String>,
}

impl TableConfig {
    /// Create a configuration with the default sizing constants.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            min_col_width: DEFAULT_MIN_COL_WIDTH,
            scrollbar_reserve: SCROLLBAR_RESERVE,
            storage_key: None,
        }
    }

    /// Override the global default minimum column width.
    pub fn min_col_width(mut self, px: u32) -> Self {
        self.min_col_width = px;
        self
    }

    /// Override the scrollbar allowance.
    pub fn scrollbar_reserve(mut self, px: u32) -> Self {
        self.scrollbar_reserve = px;
        self
    }

    /// Persist the enabled-column set under this key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Look up a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Check the caller contract: column keys must be unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(col.key.as_str()) {
                return Err(ConfigError::DuplicateKey(col.key.clone()));
            }
        }
        Ok(())
    }
}
