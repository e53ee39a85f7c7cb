mod commands;
mod terminal;

use commands::CommandLine;
use ipcast_common::addr::{parse, report};
use ipcast_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        plain: commands.plain,
        quiet: commands.quiet,
    };

    if cfg.plain {
        colored::control::set_override(false);
    }

    print::banner(cfg.no_banner, cfg.quiet);
    print::header("address conversion", cfg.quiet);

    let value = parse::parse(&commands.address)
        .map_err(|e| anyhow::anyhow!("failed to parse '{}': {}", commands.address, e))?;

    let report = report::build(value, &commands.address);
    print::report(&report);
    print::end_of_program(cfg.quiet);

    Ok(())
}
