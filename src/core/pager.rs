//! Raw data pager: reveals the table a chunk at a time on request.

use std::io::{self, BufRead, Write};

use crate::cli::prompt::Prompter;
use crate::display::{render_rows, DisplayConfig};
use crate::state::TripTable;

/// Pager state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Next chunk starts at `cursor`.
    Showing { cursor: usize },
    /// Nothing more will be shown.
    Done,
}

/// Chunked viewer over one table.
pub struct RawDataPager<'a> {
    table: &'a TripTable,
    chunk_size: usize,
    display: DisplayConfig,
    state: PagerState,
}

impl<'a> RawDataPager<'a> {
    /// A `chunk_size` of zero is treated as one.
    #[must_use]
    pub fn new(table: &'a TripTable, chunk_size: usize, display: DisplayConfig) -> Self {
        Self {
            table,
            chunk_size: chunk_size.max(1),
            display,
            state: PagerState::Showing { cursor: 0 },
        }
    }

    #[must_use]
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Asks whether to start, then shows chunks until declined or exhausted.
    ///
    /// Returns the number of chunks shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> io::Result<usize> {
        if self.table.is_empty()
            || !prompter.yes_no(&format!(
                "Would you like to see first {} raw data entries?",
                self.chunk_size
            ))?
        {
            self.state = PagerState::Done;
            return Ok(0);
        }

        let mut shown = 0;
        while let PagerState::Showing { cursor } = self.state {
            self.show_chunk(cursor, prompter.output())?;
            shown += 1;

            let next = cursor + self.chunk_size;
            self.state = if next >= self.table.len() {
                PagerState::Done
            } else if prompter.yes_no(&format!(
                "Would you like to see {} more raw data entries?",
                self.chunk_size
            ))? {
                PagerState::Showing { cursor: next }
            } else {
                PagerState::Done
            };
        }
        Ok(shown)
    }

    fn show_chunk<W: Write>(&self, cursor: usize, out: &mut W) -> io::Result<()> {
        let rows = self.table.slice(cursor, self.chunk_size);
        write!(out, "{}", render_rows(self.table, rows, cursor, &self.display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{basic_schema, trip};
    use std::io::Cursor;

    fn table(n: u32) -> TripTable {
        let rows = (0..n)
            .map(|i| trip((2017, 1, 1 + i % 28), 8, ("A", "B"), 1.0))
            .collect();
        TripTable::new(basic_schema(), rows)
    }

    fn run(table: &TripTable, chunk: usize, answers: &str) -> (usize, String) {
        let mut prompter = Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());
        let mut pager = RawDataPager::new(table, chunk, DisplayConfig::default());
        let shown = pager.run(&mut prompter).unwrap();
        assert_eq!(pager.state(), PagerState::Done);
        let text = String::from_utf8(prompter.output().clone()).unwrap();
        (shown, text)
    }

    fn data_lines(text: &str) -> usize {
        // header lines start with whitespace-padded blank index; data lines with a digit
        text.lines()
            .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
            .count()
    }

    #[test]
    fn test_twelve_rows_chunk_five() {
        let t = table(12);
        let (shown, text) = run(&t, 5, "yes\nyes\nyes\nyes\n");
        assert_eq!(shown, 3);
        assert_eq!(data_lines(&text), 12);
        assert_eq!(text.matches("more raw data entries?").count(), 2);
    }

    #[test]
    fn test_exact_division_does_not_prompt_again() {
        let t = table(10);
        let (shown, text) = run(&t, 5, "yes\nyes\nyes\n");
        assert_eq!(shown, 2);
        assert_eq!(data_lines(&text), 10);
        assert_eq!(text.matches("more raw data entries?").count(), 1);
    }

    #[test]
    fn test_decline_first_prompt() {
        let t = table(12);
        let (shown, text) = run(&t, 5, "no\n");
        assert_eq!(shown, 0);
        assert_eq!(data_lines(&text), 0);
    }

    #[test]
    fn test_decline_after_first_chunk() {
        let t = table(12);
        let (shown, text) = run(&t, 5, "yes\nnope\n");
        assert_eq!(shown, 1);
        assert_eq!(data_lines(&text), 5);
    }

    #[test]
    fn test_empty_table_never_prompts() {
        let t = TripTable::default();
        let (shown, text) = run(&t, 5, "yes\n");
        assert_eq!(shown, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_indices_continue_across_chunks() {
        let t = table(7);
        let (_, text) = run(&t, 5, "yes\nyes\n");
        let indices: Vec<&str> = text
            .lines()
            .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(indices, vec!["0", "1", "2", "3", "4", "5", "6"]);
    }
}
