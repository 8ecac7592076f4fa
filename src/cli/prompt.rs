//! Line-based prompts for the interactive session.

use std::io::{self, BufRead, Write};

use crate::constants;
use crate::state::{City, DayFilter, FilterSelection, Month, MonthFilter, Weekday};

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink, for callers that print between questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line; `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks until the trimmed, lower-cased answer matches one of the
    /// option labels, then returns that option's value.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if input ends before a valid answer.
    pub fn choose<T: Copy>(
        &mut self,
        options: &[(String, T)],
        question: &str,
        error: &str,
    ) -> io::Result<T> {
        loop {
            writeln!(self.output, "{question}")?;
            let Some(line) = self.read_line()? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before a valid answer was given",
                ));
            };

            let answer = line.trim().to_lowercase();
            if let Some(&(_, value)) = options.iter().find(|(label, _)| *label == answer) {
                return Ok(value);
            }
            tracing::debug!(answer = %answer, "Rejected prompt answer");
            writeln!(self.output, "{error}")?;
        }
    }

    /// True only for a literal `yes` (any case, surrounding spaces ignored).
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn yes_no(&mut self, question: &str) -> io::Result<bool> {
        writeln!(
            self.output,
            "\n{question}{}",
            constants::PROMPT_YES_NO_SUFFIX
        )?;
        Ok(self
            .read_line()?
            .is_some_and(|line| line.trim().eq_ignore_ascii_case("yes")))
    }

    /// Asks for city, month and day.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the console fails.
    pub fn get_filters(&mut self) -> io::Result<FilterSelection> {
        writeln!(self.output, "{}", constants::MSG_GREETING)?;

        let cities: Vec<(String, City)> =
            City::ALL.iter().map(|&c| (c.name().to_string(), c)).collect();
        let city = self.choose(
            &cities,
            &format!("Enter city name from {}:", option_list(&cities)),
            constants::ERR_UNKNOWN_CITY,
        )?;

        let months: Vec<(String, MonthFilter)> = Month::ALL
            .iter()
            .map(|&m| (m.name().to_lowercase(), MonthFilter::Only(m)))
            .collect();
        let month = self.choose(
            &with_all(&months, MonthFilter::All),
            &format!("Enter 'all' or month from {}:", option_list(&months)),
            constants::ERR_UNKNOWN_MONTH,
        )?;

        let days: Vec<(String, DayFilter)> = Weekday::ALL
            .iter()
            .map(|&d| (d.name().to_lowercase(), DayFilter::Only(d)))
            .collect();
        let day = self.choose(
            &with_all(&days, DayFilter::All),
            &format!("Enter 'all' or week day from {}:", option_list(&days)),
            constants::ERR_UNKNOWN_DAY,
        )?;

        writeln!(self.output)?;
        crate::report::print_hline(&mut self.output)?;

        Ok(FilterSelection { city, month, day })
    }
}

fn with_all<T: Copy>(options: &[(String, T)], all: T) -> Vec<(String, T)> {
    std::iter::once((constants::FILTER_ALL.to_string(), all))
        .chain(options.iter().cloned())
        .collect()
}

fn option_list<T>(options: &[(String, T)]) -> String {
    let quoted: Vec<String> = options.iter().map(|(o, _)| format!("'{o}'")).collect();
    format!("[{}]", quoted.join(", "))
}
