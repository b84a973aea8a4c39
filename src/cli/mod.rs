use anyhow::Result;
use colored::Colorize;

use crate::logging;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use run::RunOutcome;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    logging::init(args.log_level);

    if !args.init_config && !args.actions().any() {
        Arguments::no_action_error().print()?;
        return Ok(ExitStatus::Failure);
    }

    match run::run(args)? {
        RunOutcome::ConfigCreated => {
            println!(
                "{} Created {}",
                report::SUCCESS_MARK.green(),
                crate::config::CONFIG_FILE_NAME.bold()
            );
            Ok(ExitStatus::Success)
        }
        RunOutcome::Completed(summary) => {
            report::print(&summary);
            Ok(ExitStatus::Success)
        }
        RunOutcome::Failed => Ok(ExitStatus::Failure),
    }
}
