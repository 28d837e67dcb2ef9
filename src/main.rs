use std::io::{self, Write};

use anyhow::Result;

use randoms::{
    cli::{Cli, Parser},
    Randoms,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Generating {} value(s) for {:?}", cli.count, cli.command);

    let randoms = Randoms::new();
    let mut stdout = io::stdout().lock();
    for _ in 0..cli.count {
        writeln!(stdout, "{}", cli.command.generate(&randoms)?)?;
    }

    Ok(())
}
