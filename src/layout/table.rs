//! Table layout: column widths, wrapped cells, and row heights.
//!
//! Column widths start from each column's natural (unwrapped) width. When the
//! natural widths do not fit the available width they are scaled down
//! proportionally, truncated to whole points, and the rounding remainder is
//! given to the last column so the table spans the available width exactly.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::wrap::wrap;
use crate::layout::FontWeight;
use crate::sanitize::sanitize;
use crate::writer::font_manager::FontPair;

/// Table metrics taken from the layout configuration.
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Cell text size
    pub font_size: f32,
    /// Horizontal cell padding, each side
    pub padding_x: f32,
    /// Vertical cell padding, each side
    pub padding_y: f32,
    /// Baseline step between wrapped lines
    pub line_spacing: f32,
    /// Minimum row height
    pub min_row_height: f32,
    /// Text for missing cells
    pub placeholder: String,
}

impl TableStyle {
    /// Extract the table metrics from a layout configuration.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            font_size: config.table_size,
            padding_x: config.padding_x,
            padding_y: config.padding_y,
            line_spacing: config.table_line_spacing,
            min_row_height: config.min_row_height,
            placeholder: config.placeholder.clone(),
        }
    }

    /// Weight used for a row: the header is bold, data rows are regular.
    pub fn row_weight(row: usize) -> FontWeight {
        if row == 0 {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

/// Position and size of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPosition {
    /// X position (left edge, relative to table left)
    pub x: f32,
    /// Y position (top edge, measured down from table top)
    pub y: f32,
    /// Cell width
    pub width: f32,
    /// Cell height
    pub height: f32,
}

/// Computed geometry of one table.
///
/// Row 0 is the header row; `row_heights` and `wrapped_cells` have one entry per
/// row and every row has exactly `column_count()` cells.
#[derive(Debug, Clone)]
pub struct TableLayout {
    /// Final column widths in points
    pub column_widths: Vec<f32>,
    /// Row heights in points, header first
    pub row_heights: Vec<f32>,
    /// Wrapped lines per cell, indexed `[row][col]`
    pub wrapped_cells: Vec<Vec<Vec<String>>>,
    /// Total table width
    pub total_width: f32,
    /// Total table height
    pub total_height: f32,
    /// Cell positions, indexed `[row][col]`
    pub cell_positions: Vec<Vec<CellPosition>>,
}

/// Number of columns: the longest of the header and all data rows.
pub fn column_count(header: &[String], rows: &[Vec<String>]) -> usize {
    rows.iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

/// Sanitize and trim every cell and right-pad short rows with the placeholder.
///
/// The header becomes row 0 of the result.
pub fn normalize_rows(
    header: &[String],
    rows: &[Vec<String>],
    placeholder: &str,
) -> Vec<Vec<String>> {
    let cols = column_count(header, rows);
    let filler = sanitize(placeholder).trim().to_string();

    std::iter::once(header)
        .chain(rows.iter().map(Vec::as_slice))
        .map(|row| {
            (0..cols)
                .map(|c| match row.get(c) {
                    Some(cell) => sanitize(cell).trim().to_string(),
                    None => filler.clone(),
                })
                .collect()
        })
        .collect()
}

/// Fit natural column widths into `available` points.
///
/// Widths that already fit are returned unchanged. Otherwise each width is
/// scaled by `available / sum`, truncated, and the last column absorbs the
/// difference so the sum equals `available`.
pub fn fit_column_widths(natural: &[f32], available: f32) -> Vec<f32> {
    let total: f32 = natural.iter().sum();
    if total <= available || natural.is_empty() {
        return natural.to_vec();
    }

    let scale = available / total;
    let mut widths: Vec<f32> = natural.iter().map(|w| (w * scale).floor()).collect();
    let used: f32 = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += available - used;
    }
    widths
}

impl TableLayout {
    /// Lay out a table within `available_width`.
    ///
    /// Header cells are measured and wrapped with the bold metrics, data cells
    /// with the regular metrics. A table without columns yields an empty layout.
    pub fn calculate(
        header: &[String],
        rows: &[Vec<String>],
        available_width: f32,
        fonts: FontPair<'_>,
        style: &TableStyle,
    ) -> Result<TableLayout> {
        let cells = normalize_rows(header, rows, &style.placeholder);
        let num_cols = column_count(header, rows);
        if num_cols == 0 {
            return Ok(Self::from_parts(Vec::new(), Vec::new(), Vec::new()));
        }

        let natural = Self::natural_widths(&cells, num_cols, fonts, style)?;
        let column_widths = fit_column_widths(&natural, available_width);

        let mut wrapped_cells = Vec::with_capacity(cells.len());
        let mut row_heights = Vec::with_capacity(cells.len());
        for (r, row) in cells.iter().enumerate() {
            let metrics = fonts.get(TableStyle::row_weight(r));
            let wrapped = row
                .iter()
                .zip(&column_widths)
                .map(|(cell, width)| wrap(cell, metrics, style.font_size, *width, style.padding_x))
                .collect::<Result<Vec<_>>>()?;
            let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);
            row_heights.push(Self::row_height(max_lines, style));
            wrapped_cells.push(wrapped);
        }

        let layout = Self::from_parts(column_widths, row_heights, wrapped_cells);
        log::debug!(
            "table layout: {} cols, {} rows, natural width {:.1}, final {:.1}x{:.1}",
            num_cols,
            layout.row_count(),
            natural.iter().sum::<f32>(),
            layout.total_width,
            layout.total_height
        );
        Ok(layout)
    }

    fn natural_widths(
        cells: &[Vec<String>],
        num_cols: usize,
        fonts: FontPair<'_>,
        style: &TableStyle,
    ) -> Result<Vec<f32>> {
        let mut widths = vec![0.0f32; num_cols];
        for (r, row) in cells.iter().enumerate() {
            let metrics = fonts.get(TableStyle::row_weight(r));
            for (c, cell) in row.iter().enumerate() {
                let width = metrics.text_width(cell, style.font_size)? + 2.0 * style.padding_x;
                widths[c] = widths[c].max(width);
            }
        }
        Ok(widths)
    }

    /// Height of a row whose tallest cell wraps to `max_lines` lines.
    pub fn row_height(max_lines: usize, style: &TableStyle) -> f32 {
        let content = 2.0 * style.padding_y + max_lines as f32 * style.line_spacing;
        content.max(style.min_row_height)
    }

    fn from_parts(
        column_widths: Vec<f32>,
        row_heights: Vec<f32>,
        wrapped_cells: Vec<Vec<Vec<String>>>,
    ) -> TableLayout {
        let mut cell_positions = Vec::with_capacity(row_heights.len());
        let mut y = 0.0;
        for height in &row_heights {
            let mut x = 0.0;
            let row = column_widths
                .iter()
                .map(|width| {
                    let pos = CellPosition {
                        x,
                        y,
                        width: *width,
                        height: *height,
                    };
                    x += width;
                    pos
                })
                .collect();
            cell_positions.push(row);
            y += height;
        }

        TableLayout {
            total_width: column_widths.iter().sum(),
            total_height: row_heights.iter().sum(),
            column_widths,
            row_heights,
            wrapped_cells,
            cell_positions,
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.column_widths.is_empty() || self.row_heights.is_empty()
    }

    /// Split into chunks no taller than `max_height`, repeating the header.
    ///
    /// Each chunk keeps the column widths of the whole table. A data row that
    /// does not fit even directly below the header still gets a chunk of its own,
    /// so every chunk has at least one data row when the table has any.
    pub fn split_rows(&self, max_height: f32) -> Vec<TableLayout> {
        if self.row_count() <= 1 || self.total_height <= max_height {
            return vec![self.clone()];
        }

        let header_height = self.row_heights[0];
        let mut chunks = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        let mut height = header_height;

        for row in 1..self.row_count() {
            let row_height = self.row_heights[row];
            if !current.is_empty() && height + row_height > max_height {
                chunks.push(self.subset(&current));
                current.clear();
                height = header_height;
            }
            current.push(row);
            height += row_height;
        }
        if !current.is_empty() {
            chunks.push(self.subset(&current));
        }
        chunks
    }

    fn subset(&self, data_rows: &[usize]) -> TableLayout {
        let rows = std::iter::once(0).chain(data_rows.iter().copied());
        let (row_heights, wrapped_cells) = rows
            .map(|r| (self.row_heights[r], self.wrapped_cells[r].clone()))
            .unzip();
        Self::from_parts(self.column_widths.clone(), row_heights, wrapped_cells)
    }
}
