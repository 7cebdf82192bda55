mod cli;

use clap::Parser;

use cli::{init_config, init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if cli.init {
        return init_config(&cli.config);
    }

    let Some(records) = cli.records.as_deref() else {
        anyhow::bail!("No records file given");
    };
    run(&cli, records)
}
