mod commands;
mod terminal;

use commands::{CommandLine, Commands, candidates, discover, parse, run_to_completion};
use routem_common::config::Config;
use routem_common::diagnostics::Diagnostics;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let diagnostics: Diagnostics = logging::init(commands.verbose)?;
    let cfg: Config = commands.config();

    print::banner(cfg.quiet);

    run_to_completion(async move {
        match commands.command {
            Commands::Discover => {
                print::header("dns route discovery", cfg.quiet);
                discover::discover(&cfg, diagnostics).await
            }
            Commands::Candidates => {
                print::header("candidate domains", cfg.quiet);
                candidates::candidates(&cfg, diagnostics).await
            }
            Commands::Parse { record } => {
                print::header("routing record", cfg.quiet);
                parse::parse(&record, diagnostics)
            }
        }
    })
}
