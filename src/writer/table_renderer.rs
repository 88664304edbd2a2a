//! Table drawing.
//!
//! Turns a computed [`TableLayout`] into page primitives: a shaded header row,
//! the outer border, column and row separators, and the wrapped cell text.

use crate::config::LayoutConfig;
use crate::document::Page;
use crate::elements::{PathContent, TextContent};
use crate::geometry::Rect;
use crate::layout::table::{TableLayout, TableStyle};
use crate::layout::Color;

/// Gap between the top cell padding and the first line's text box.
const FIRST_LINE_NUDGE: f32 = 2.0;

/// Draws tables with the report's grid style.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    /// Cell metrics
    pub style: TableStyle,
    /// Border and separator color
    pub grid_color: Color,
    /// Border and separator width
    pub grid_width: f32,
    /// Header row background
    pub header_background: Color,
    /// Cell text color
    pub text_color: Color,
}

impl TableRenderer {
    /// Create a renderer from the layout configuration.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            style: TableStyle::from_config(config),
            grid_color: config.grid_color,
            grid_width: config.grid_line_width,
            header_background: config.header_background,
            text_color: config.text_color,
        }
    }

    /// Draw `layout` with its top-left corner at (`x`, `top`).
    pub fn render(&self, page: &mut Page, layout: &TableLayout, x: f32, top: f32) {
        if layout.is_empty() {
            return;
        }
        let width = layout.total_width;
        let height = layout.total_height;
        let bottom = top - height;

        // Header background goes first so borders and text sit on top of it
        let header_height = layout.row_heights[0];
        page.push(PathContent::filled_rect(
            Rect::from_top(x, top, width, header_height),
            self.header_background,
        ));

        page.push(self.grid(PathContent::rect(Rect::new(x, bottom, width, height))));

        let mut col_x = x;
        for col_width in &layout.column_widths[..layout.column_count() - 1] {
            col_x += col_width;
            page.push(self.grid(PathContent::line(col_x, top, col_x, bottom)));
        }

        page.push(self.grid(PathContent::line(x, top, x + width, top)));
        let mut row_bottom = top;
        for row_height in &layout.row_heights {
            row_bottom -= row_height;
            page.push(self.grid(PathContent::line(x, row_bottom, x + width, row_bottom)));
        }

        self.render_text(page, layout, x, top);
    }

    fn render_text(&self, page: &mut Page, layout: &TableLayout, x: f32, top: f32) {
        for (r, row) in layout.wrapped_cells.iter().enumerate() {
            let weight = TableStyle::row_weight(r);
            for (c, lines) in row.iter().enumerate() {
                let pos = layout.cell_positions[r][c];
                let text_x = x + pos.x + self.style.padding_x;
                let mut baseline =
                    top - pos.y - self.style.padding_y - FIRST_LINE_NUDGE - self.style.font_size;
                for line in lines {
                    page.push(
                        TextContent::new(line.clone(), text_x, baseline, self.style.font_size)
                            .with_weight(weight)
                            .with_color(self.text_color),
                    );
                    baseline -= self.style.line_spacing;
                }
            }
        }
    }

    fn grid(&self, path: PathContent) -> PathContent {
        path.with_stroke(self.grid_color)
            .with_stroke_width(self.grid_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ContentElement;
    use crate::layout::FontWeight;
    use crate::writer::font_manager::{FontPair, SimpleFontMetrics};

    fn layout() -> TableLayout {
        let metrics = SimpleFontMetrics::default();
        let header = vec!["Tag".to_string(), "Plan".to_string()];
        let rows = vec![vec!["Mo".to_string(), "Laufen".to_string()]];
        TableLayout::calculate(
            &header,
            &rows,
            495.0,
            FontPair::new(&metrics, &metrics),
            &TableStyle::default(),
        )
        .unwrap()
    }

    fn render() -> Page {
        let mut page = Page::new();
        TableRenderer::from_config(&LayoutConfig::default()).render(&mut page, &layout(), 50.0, 700.0);
        page
    }

    #[test]
    fn test_header_background_first() {
        let page = render();
        let first = page.elements()[0].as_path().unwrap();
        assert_eq!(first.fill_color, Some(Color::gray(0.92)));
        assert_eq!(first.bbox, Rect::new(50.0, 678.0, 69.0, 22.0));
    }

    #[test]
    fn test_outer_border() {
        let page = render();
        let border = page.elements()[1].as_path().unwrap();
        assert_eq!(border.bbox, Rect::new(50.0, 656.0, 69.0, 44.0));
        assert_eq!(border.stroke_color, Some(Color::gray(0.65)));
        assert!(!border.has_fill());
    }

    #[test]
    fn test_separator_count() {
        let page = render();
        let lines = page
            .elements()
            .iter()
            .filter_map(ContentElement::as_path)
            .filter(|p| p.operations.len() == 2)
            .count();
        // 1 vertical + top + 2 row bottoms
        assert_eq!(lines, 4);
    }

    #[test]
    fn test_text_positions_and_weight() {
        let page = render();
        let texts: Vec<_> = page.texts().collect();
        assert_eq!(texts.len(), 4);

        let tag = texts.iter().find(|t| t.text == "Tag").unwrap();
        assert_eq!(tag.weight, FontWeight::Bold);
        assert_eq!(tag.origin.x, 56.0);
        assert_eq!(tag.origin.y, 683.0);

        let laufen = texts.iter().find(|t| t.text == "Laufen").unwrap();
        assert_eq!(laufen.weight, FontWeight::Normal);
        assert_eq!(laufen.origin.x, 83.0);
        assert_eq!(laufen.origin.y, 661.0);
    }

    #[test]
    fn test_empty_layout_draws_nothing() {
        let metrics = SimpleFontMetrics::default();
        let empty = TableLayout::calculate(
            &[],
            &[],
            495.0,
            FontPair::new(&metrics, &metrics),
            &TableStyle::default(),
        )
        .unwrap();
        let mut page = Page::new();
        TableRenderer::from_config(&LayoutConfig::default()).render(&mut page, &empty, 50.0, 700.0);
        assert!(page.elements().is_empty());
    }
}
