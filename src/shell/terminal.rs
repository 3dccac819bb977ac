use std::io::{self, BufRead, Write};

use crate::{
    app::{FieldRequest, Presenter, View},
    db::session::Refresh,
};

/// Typed alone on a form line to abandon the form.
pub const CANCEL: &str = ".";

/// Line-oriented [`Presenter`] over any reader/writer pair.
///
/// Tables are printed with a 1-based row gutter. Forms ask for one column per
/// line; while editing, an empty line keeps the current value. The selected
/// row is cleared on every redraw, since row positions may have moved.
#[derive(Debug)]
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    selected: Option<usize>,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            selected: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn select(&mut self, row: usize) {
        self.selected = Some(row);
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Self::read_line`], treating I/O failure as end of input.
    fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.read_line(prompt).ok().flatten()
    }

    pub fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
    }

    fn write_table(&mut self, columns: &[String], rows: &[Vec<&str>]) {
        let gutter = rows.len().to_string().len().max(1);

        let mut widths: Vec<usize> = columns.iter().map(|col| col.chars().count()).collect();
        for row in rows {
            for (width, value) in widths.iter_mut().zip(row) {
                *width = (*width).max(value.chars().count());
            }
        }

        let mut header = format!("{: <gutter$}", "#");
        for (col, width) in columns.iter().zip(widths.iter().copied()) {
            header.push_str(&format!(" | {col: <width$}"));
        }
        self.write_line(header.trim_end());

        let rule_len = gutter + widths.iter().map(|width| width + 3).sum::<usize>();
        self.write_line(&"-".repeat(rule_len));

        for (idx, row) in rows.iter().enumerate() {
            let mut line = format!("{: <gutter$}", idx + 1);
            for (value, width) in row.iter().zip(widths.iter().copied()) {
                line.push_str(&format!(" | {value: <width$}"));
            }
            self.write_line(line.trim_end());
        }

        if rows.is_empty() {
            self.write_line("(no records)");
        }
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn choose_profile(&mut self, names: &[&str], current: &str) -> Option<String> {
        self.write_line("Select the database system:");
        for (idx, name) in names.iter().enumerate() {
            let marker = if *name == current { "*" } else { " " };
            self.write_line(&format!("{marker} {}. {name}", idx + 1));
        }

        let answer = self.prompt("choice> ")?;
        let answer = answer.trim();
        if answer.is_empty() || answer == CANCEL {
            return None;
        }

        if let Ok(number) = answer.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| names.get(idx))
                .map(|name| (*name).to_string())
                .or_else(|| Some(answer.to_string()));
        }

        Some(
            names
                .iter()
                .find(|name| name.eq_ignore_ascii_case(answer))
                .map_or(answer, |name| *name)
                .to_string(),
        )
    }

    fn render(&mut self, view: &View<'_>, refresh: Refresh) {
        self.selected = None;

        if refresh == Refresh::Schema {
            self.write_line("");
            self.write_line(&format!("== {} ==", view.name));
            self.write_line(&format!("Use case: {}", view.use_case));
        }

        let rows: Vec<Vec<&str>> = view
            .records
            .iter()
            .map(|record| record.fields().iter().map(String::as_str).collect())
            .collect();
        self.write_table(view.columns, &rows);
    }

    fn collect_fields(&mut self, request: &FieldRequest<'_>) -> Option<Vec<String>> {
        self.write_line(&format!(
            "{} (type `{CANCEL}` alone to cancel)",
            request.title
        ));

        let mut values = Vec::with_capacity(request.columns.len());
        for (idx, column) in request.columns.iter().enumerate() {
            let current = request.initial.and_then(|initial| initial.get(idx));
            let prompt = match current {
                Some(value) => format!("{column} [{value}]: "),
                None => format!("{column}: "),
            };

            let answer = self.prompt(&prompt)?;
            if answer.trim() == CANCEL {
                return None;
            }

            match current {
                Some(value) if answer.is_empty() => values.push(value.clone()),
                _ => values.push(answer),
            }
        }

        Some(values)
    }

    fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    fn show_text(&mut self, title: &str, body: &str) {
        self.write_line("");
        self.write_line(title);
        self.write_line(&"=".repeat(title.chars().count()));
        self.write_line(body);
        self.write_line("");
    }

    fn notify(&mut self, message: &str) {
        self.write_line(&format!("! {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Record, RecordId};

    fn presenter(input: &str) -> TerminalPresenter<&[u8], Vec<u8>> {
        TerminalPresenter::new(input.as_bytes(), Vec::new())
    }

    fn output(presenter: TerminalPresenter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(presenter.into_output()).unwrap()
    }

    fn columns() -> Vec<String> {
        vec!["ID".into(), "Produto".into(), "Preço".into()]
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new(RecordId(1), vec!["1".into(), "Arroz 5kg".into(), "R$ 25.00".into()]),
            Record::new(RecordId(2), vec!["2".into(), "Feijão".into(), "R$ 8.50".into()]),
        ]
    }

    #[test]
    fn test_render_schema_prints_heading_and_table() {
        let columns = columns();
        let records = records();
        let view = View {
            name: "MongoDB",
            use_case: "Gestão de Produtos (Mercado)",
            columns: &columns,
            records: &records,
        };
        let mut term = presenter("");
        term.select(1);

        term.render(&view, Refresh::Schema);

        assert_eq!(term.selected_row(), None);
        let out = output(term);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "== MongoDB ==");
        assert_eq!(lines[2], "Use case: Gestão de Produtos (Mercado)");
        assert_eq!(lines[3], "# | ID | Produto   | Preço");
        assert_eq!(lines[5], "1 | 1  | Arroz 5kg | R$ 25.00");
        assert_eq!(lines[6], "2 | 2  | Feijão    | R$ 8.50");
    }

    #[test]
    fn test_render_records_only_prints_table() {
        let columns = columns();
        let view = View {
            name: "MongoDB",
            use_case: "Gestão de Produtos (Mercado)",
            columns: &columns,
            records: &[],
        };
        let mut term = presenter("");

        term.render(&view, Refresh::Records);

        let out = output(term);
        assert!(!out.contains("== MongoDB =="));
        assert!(out.starts_with("# | ID | Produto | Preço"));
        assert!(out.contains("(no records)"));
    }

    #[test]
    fn test_collect_fields_reads_one_line_per_column() {
        let columns = columns();
        let mut term = presenter("3\nAçúcar\nR$ 6.00\n");
        let request = FieldRequest {
            title: "New record",
            columns: &columns,
            initial: None,
        };

        let values = term.collect_fields(&request);

        assert_eq!(
            values,
            Some(vec!["3".to_string(), "Açúcar".to_string(), "R$ 6.00".to_string()])
        );
        assert!(output(term).contains("Produto: "));
    }

    #[test]
    fn test_collect_fields_keeps_initial_on_empty_line() {
        let columns = columns();
        let initial = vec!["1".to_string(), "Arroz 5kg".to_string(), "R$ 25.00".to_string()];
        let mut term = presenter("\n\nR$ 27.00\n");
        let request = FieldRequest {
            title: "Edit record",
            columns: &columns,
            initial: Some(&initial),
        };

        let values = term.collect_fields(&request).unwrap();

        assert_eq!(values, ["1", "Arroz 5kg", "R$ 27.00"]);
        assert!(output(term).contains("Preço [R$ 25.00]: "));
    }

    #[test]
    fn test_collect_fields_cancel() {
        let columns = columns();
        let request = FieldRequest {
            title: "New record",
            columns: &columns,
            initial: None,
        };

        assert_eq!(presenter("3\n.\n").collect_fields(&request), None);
        // End of input mid-form also cancels.
        assert_eq!(presenter("3\n").collect_fields(&request), None);
    }

    #[test]
    fn test_collect_fields_allows_empty_values() {
        let columns = columns();
        let request = FieldRequest {
            title: "New record",
            columns: &columns,
            initial: None,
        };

        assert_eq!(
            presenter("\n\n\n").collect_fields(&request),
            Some(vec![String::new(), String::new(), String::new()])
        );
    }

    #[test]
    fn test_choose_profile_by_number_or_name() {
        let names = ["PostgreSQL", "MongoDB", "Firebase"];

        assert_eq!(
            presenter("2\n").choose_profile(&names, "PostgreSQL"),
            Some("MongoDB".to_string())
        );
        assert_eq!(
            presenter("firebase\n").choose_profile(&names, "PostgreSQL"),
            Some("Firebase".to_string())
        );
        assert_eq!(
            presenter("Redis\n").choose_profile(&names, "PostgreSQL"),
            Some("Redis".to_string())
        );
        assert_eq!(presenter("\n").choose_profile(&names, "PostgreSQL"), None);
        assert_eq!(presenter("").choose_profile(&names, "PostgreSQL"), None);
    }

    #[test]
    fn test_choose_profile_marks_current() {
        let mut term = presenter("\n");

        term.choose_profile(&["PostgreSQL", "MongoDB"], "MongoDB");

        let out = output(term);
        assert!(out.contains("  1. PostgreSQL"));
        assert!(out.contains("* 2. MongoDB"));
    }

    #[test]
    fn test_notify_and_show_text() {
        let mut term = presenter("");

        term.notify("Select a row to edit.");
        term.show_text("About MongoDB", "Por que MongoDB?");

        let out = output(term);
        assert!(out.contains("! Select a row to edit.\n"));
        assert!(out.contains("About MongoDB\n=============\nPor que MongoDB?\n"));
    }
}
