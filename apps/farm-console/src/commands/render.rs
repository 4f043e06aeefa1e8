use admin_console::ui::{TableView, error_messages};
use admin_console::PageView;
use colored::Colorize;
use validator::ValidationErrors;

pub fn print_view(view: &PageView) {
    match view {
        PageView::Loading(text) => println!("{text}"),
        PageView::Error(message) => print_error(message),
        PageView::Table(table) => print!("{}", format_table(table)),
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", "Error:".red().bold());
}

pub fn print_validation_errors(form_title: &str, errors: &ValidationErrors) {
    eprintln!("{}", format!("{form_title}: invalid input").red().bold());
    for (field, message) in error_messages(errors) {
        eprintln!("  {field}: {message}");
    }
}

/// Plain-text table with padded columns and a page footer.
#[must_use]
pub fn format_table(table: &TableView) -> String {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut out = vec![table.title.bold().to_string(), line(&table.columns)];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    if table.rows.is_empty() {
        out.push("(no records)".to_owned());
    }
    out.extend(table.rows.iter().map(|row| line(&row.cells)));
    out.push(format!(
        "Page {} of {} ({} total)",
        table.page, table.page_count, table.total
    ));

    let mut text = out.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_console::ui::RowView;

    #[test]
    fn columns_are_padded_to_widest_cell() {
        colored::control::set_override(false);
        let table = TableView {
            title: "Tenants".to_owned(),
            columns: vec!["ID".to_owned(), "Name".to_owned()],
            rows: vec![
                RowView {
                    id: 1,
                    ordinal: 1,
                    cells: vec!["1".to_owned(), "Green Valley".to_owned()],
                },
                RowView {
                    id: 12,
                    ordinal: 2,
                    cells: vec!["12".to_owned(), "Acme".to_owned()],
                },
            ],
            page: 1,
            page_count: 1,
            total: 2,
        };

        let text = format_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Tenants");
        assert_eq!(lines[1], "ID  Name");
        assert_eq!(lines[2], "--  ------------");
        assert_eq!(lines[3], "1   Green Valley");
        assert_eq!(lines[4], "12  Acme");
        assert_eq!(lines[5], "Page 1 of 1 (2 total)");
    }

    #[test]
    fn empty_table_says_so() {
        colored::control::set_override(false);
        let table = TableView {
            title: "Subscription Plans".to_owned(),
            columns: vec!["No".to_owned()],
            rows: Vec::new(),
            page: 1,
            page_count: 1,
            total: 0,
        };
        assert!(format_table(&table).contains("(no records)"));
    }
}
