use crate::error::{Result, TableError};
use crate::table::Table;

/// Fixed-width rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Padding added beyond the longest value of each column (default: 4)
    pub gap: usize,
    /// Columns padded on the right instead of the left
    pub left_aligned: Vec<String>,
    /// Whether to emit a line of column names before the rows
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            gap: 4,
            left_aligned: Vec::new(),
            header: false,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap
    #[must_use]
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Set the left-aligned columns
    #[must_use]
    pub fn with_left_aligned<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.left_aligned = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether a header line is emitted
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl Table {
    /// Render with default options (gap 4, everything right-aligned)
    pub fn render(&self) -> Result<String> {
        self.render_with_options(&RenderOptions::default())
    }

    /// Render the table as fixed-width text.
    ///
    /// Each column is as wide as its longest rendered value plus the gap.
    /// Cells are right-aligned unless their column is listed as
    /// left-aligned. Columns follow schema order with no separator beyond
    /// the padding, and every line, the last one included, ends with `\n`.
    ///
    /// # Errors
    ///
    /// `EmptyTable` when there are no rows, `ColumnNotFound` when a
    /// left-aligned name is not in the schema.
    pub fn render_with_options(&self, options: &RenderOptions) -> Result<String> {
        let first = self.rows().next().ok_or(TableError::EmptyTable)?;
        let columns: Vec<&str> = first.columns().collect();

        if let Some(name) = options
            .left_aligned
            .iter()
            .find(|name| !columns.contains(&name.as_str()))
        {
            return Err(TableError::column_not_found(name.as_str()));
        }

        let layout = columns
            .iter()
            .map(|&name| {
                let column = self.column(name)?;
                let mut width = column.max_width();
                if options.header {
                    width = width.max(name.chars().count());
                }
                let left = options.left_aligned.iter().any(|c| c == name);
                Ok((name, width + options.gap, left))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut result = String::new();
        if options.header {
            for &(name, width, left) in &layout {
                push_padded(&mut result, name, width, left);
            }
            result.push('\n');
        }

        for row in self.rows() {
            for &(name, width, left) in &layout {
                let text = row.get_value(name)?.to_string();
                push_padded(&mut result, &text, width, left);
            }
            result.push('\n');
        }

        Ok(result)
    }
}

fn push_padded(out: &mut String, text: &str, width: usize, left: bool) {
    if left {
        out.push_str(&format!("{text:<width$}"));
    } else {
        out.push_str(&format!("{text:>width$}"));
    }
}
