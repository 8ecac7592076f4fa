//! Interactive session loop: prompt, load, report, page, restart.

use std::io::{BufRead, Write};

use tracing::info;

use crate::cli::prompt::Prompter;
use crate::config::AppConfig;
use crate::constants;
use crate::core::loader;
use crate::core::pager::RawDataPager;
use crate::report;

/// Runs iterations until the user declines to restart.
///
/// Returns the number of completed iterations.
///
/// # Errors
///
/// Returns an error if a trip file cannot be loaded or the console fails.
pub fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    prompter: &mut Prompter<R, W>,
) -> color_eyre::Result<usize> {
    let mut iterations = 0;
    loop {
        let selection = prompter.get_filters()?;
        info!(
            city = %selection.city,
            month = %selection.month,
            day = %selection.day,
            "Filters selected"
        );

        let table = loader::load_data(&config.data_dir, &selection, prompter.output())?;
        if table.is_empty() {
            writeln!(prompter.output(), "{}", constants::MSG_NO_DATA)?;
        } else {
            report::print_all(&table, prompter.output())?;
            RawDataPager::new(&table, config.chunk_size, config.display).run(prompter)?;
        }
        iterations += 1;

        if !prompter.yes_no(constants::PROMPT_RESTART)? {
            return Ok(iterations);
        }
    }
}
