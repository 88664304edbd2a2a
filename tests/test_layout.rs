//! Integration tests for wrapping, table layout and pagination.

use chrono::NaiveDate;
use planpdf::blocks::parse_blocks;
use planpdf::document::Document;
use planpdf::layout::{wrap, LayoutEngine, TableLayout, TableStyle};
use planpdf::writer::{FontInfo, FontManager, FontMetrics};
use planpdf::LayoutConfig;
use proptest::prelude::*;

fn config() -> LayoutConfig {
    LayoutConfig::new().with_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

fn layout(text: &str) -> Document {
    let config = config();
    let fonts = FontManager::new();
    LayoutEngine::new(&config, fonts.metrics())
        .layout(&parse_blocks(text))
        .unwrap()
}

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn calculate(header: &[&str], rows: &[&[&str]], available: f32) -> TableLayout {
    let fonts = FontManager::new();
    let rows: Vec<Vec<String>> = rows.iter().map(|r| strings(r)).collect();
    TableLayout::calculate(
        &strings(header),
        &rows,
        available,
        fonts.metrics(),
        &TableStyle::default(),
    )
    .unwrap()
}

mod table_tests {
    use super::*;

    #[test]
    fn test_column_count_is_widest_row() {
        let layout = calculate(&["A", "B"], &[&["1"], &["1", "2", "3", "4"]], 495.0);
        assert_eq!(layout.column_count(), 4);
        assert_eq!(layout.row_count(), 3);
        // Missing cells are filled with the sanitized placeholder
        assert_eq!(layout.wrapped_cells[1][3], vec!["-".to_string()]);
    }

    #[test]
    fn test_header_only_table() {
        let layout = calculate(&["Tag", "Plan"], &[], 495.0);
        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.total_height, 22.0);
    }

    #[test]
    fn test_narrow_table_keeps_natural_width() {
        let layout = calculate(&["Tag", "Plan"], &[&["Mo", "Laufen"]], 495.0);
        assert!(layout.total_width < 495.0);
        let natural: f32 = layout.column_widths.iter().sum();
        assert_eq!(layout.total_width, natural);
    }

    #[test]
    fn test_wide_table_fills_usable_width_exactly() {
        let long = "Lockeres Einlaufen mit anschliessender Mobilisation der Hueften und Schultern";
        let layout = calculate(&["Tag", "Beschreibung", "Hinweis"], &[&["Mo", long, long]], 495.0);
        assert!((layout.total_width - 495.0).abs() < 1e-3);
        assert!(layout.row_heights[1] > 22.0);
    }

    #[test]
    fn test_row_height_from_line_count() {
        let style = TableStyle::default();
        assert_eq!(TableLayout::row_height(0, &style), 20.0);
        assert_eq!(TableLayout::row_height(1, &style), 22.0);
        assert_eq!(TableLayout::row_height(3, &style), 46.0);
    }
}

mod pagination_tests {
    use super::*;

    #[test]
    fn test_heading_advances_twenty() {
        let doc = layout("## Wochenplan\nMontag");
        let page = &doc.pages()[0];
        let heading = page.texts().find(|t| t.text == "Wochenplan").unwrap();
        assert_eq!(heading.size, 16.0);
        assert!(heading.is_bold());
        assert_eq!(heading.origin.y, 762.0);
        let body = page.texts().find(|t| t.text == "Montag").unwrap();
        assert_eq!(body.origin.y, 742.0);
    }

    #[test]
    fn test_chrome_on_every_page() {
        let text = (0..120).map(|i| format!("Zeile {}", i)).collect::<Vec<_>>().join("\n");
        let doc = layout(&text);
        assert!(doc.page_count() >= 3);
        for page in doc.pages() {
            assert!(page.contains_text("trainingsplan.at"));
            assert!(page.contains_text("Erstellt am: 19.10.2026"));
        }
    }

    #[test]
    fn test_body_lines_stay_above_floor() {
        let text = (0..120).map(|i| format!("Zeile {}", i)).collect::<Vec<_>>().join("\n");
        let doc = layout(&text);
        for page in doc.pages() {
            for t in page.texts().filter(|t| t.text.starts_with("Zeile")) {
                assert!(t.origin.y - 14.0 >= 70.0 - 1e-3, "{} at {}", t.text, t.origin.y);
            }
        }
    }

    #[test]
    fn test_tables_are_atomic() {
        let mut text = String::new();
        for n in 0..12 {
            text.push_str(&format!("## Woche {}\n| Tag{} | Plan |\n|---|---|\n", n, n));
            for d in 0..6 {
                text.push_str(&format!("| D{} | Einheit {} |\n", d, n));
            }
            text.push_str(&format!("| Ende{} | - |\n\n", n));
        }
        let doc = layout(&text);
        assert!(doc.page_count() > 1);
        for n in 0..12 {
            let start = doc.find_text(&format!("Tag{}", n)).unwrap();
            let end = doc.find_text(&format!("Ende{}", n)).unwrap();
            assert_eq!(start, end, "table {} split across pages", n);
        }
    }

    #[test]
    fn test_legend_once_after_first_table() {
        let doc = layout("Intro\n| A | B |\n|---|---|\n| 1 | 2 |\n\n| C | D |\n|---|---|\n| 3 | 4 |");
        let page = &doc.pages()[0];
        let legends: Vec<_> = page.texts().filter(|t| t.text == "Legende:").collect();
        assert_eq!(legends.len(), 1);

        let legend_y = legends[0].origin.y;
        let first_table_cell = page.texts().find(|t| t.text == "2").unwrap();
        let second_table_cell = page.texts().find(|t| t.text == "C").unwrap();
        assert!(first_table_cell.origin.y > legend_y);
        assert!(second_table_cell.origin.y < legend_y);
    }

    #[test]
    fn test_no_legend_without_table() {
        let doc = layout("# Plan\nNur Text");
        assert_eq!(doc.find_text("Legende:"), None);
    }

    #[test]
    fn test_oversized_table_split_with_repeated_header() {
        let mut text = String::from("| Tag | Einheit |\n|---|---|\n");
        for i in 0..60 {
            text.push_str(&format!("| {} | Intervall {} |\n", i, i));
        }
        let doc = layout(&text);
        assert!(doc.page_count() >= 2);

        let table_pages = doc
            .pages()
            .iter()
            .filter(|p| p.texts().any(|t| t.text.starts_with("Intervall")));
        for page in table_pages {
            assert!(page.contains_text("Tag"));
        }
        for page in doc.pages() {
            for element in page.elements() {
                if let Some(path) = element.as_path() {
                    assert!(path.bbox.y >= 70.0 - 1e-3);
                }
            }
        }
        for i in 0..60 {
            assert!(doc.find_text(&format!("Intervall {}", i)).is_some());
        }
        let legend_pages = doc
            .pages()
            .iter()
            .filter(|p| p.contains_text("Legende:"))
            .count();
        assert_eq!(legend_pages, 1);
    }
}

proptest! {
    #[test]
    fn prop_wrap_bound(words in proptest::collection::vec("[a-zA-Z\u{e4}\u{f6}\u{fc}]{1,12}", 0..40),
                       max_width in 60.0f32..500.0) {
        let text = words.join(" ");
        let font = FontInfo::helvetica();
        let lines = wrap(&text, &font, 12.0, max_width, 6.0).unwrap();

        for line in &lines {
            prop_assert!(!line.is_empty());
            if line.contains(' ') {
                let width = font.text_width(line, 12.0).unwrap() + 12.0;
                prop_assert!(width <= max_width + 1e-3);
            }
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        let expected: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(rejoined, expected);
    }

    #[test]
    fn prop_column_count(header in 0usize..5, widths in proptest::collection::vec(0usize..7, 0..6)) {
        let header: Vec<String> = (0..header).map(|i| format!("H{}", i)).collect();
        let rows: Vec<Vec<String>> = widths
            .iter()
            .map(|w| (0..*w).map(|i| format!("c{}", i)).collect())
            .collect();
        let expected = rows.iter().map(Vec::len).chain(std::iter::once(header.len())).max().unwrap_or(0);
        let fonts = FontManager::new();
        let layout = TableLayout::calculate(&header, &rows, 495.0, fonts.metrics(), &TableStyle::default()).unwrap();
        prop_assert_eq!(layout.column_count(), expected);
        if expected > 0 {
            prop_assert!(layout.total_width <= 495.0 + 1e-3);
        }
    }
}
