mod args;
mod bond;
mod cuts_view;
mod global_settings;
mod plot_view;

use crate::args::build_cli;
use crate::bond::bond_view;
use crate::cuts_view::{cuts_view, summary_view};
use crate::global_settings::GlobalSettings;
use crate::plot_view::plot_view;
use anyhow::{Context, Result, bail};
use fuzzy_lib::Fuzzy;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args = build_cli().get_matches();
    let global = GlobalSettings::new(&args);

    match args.subcommand() {
        Some(("bond", sub)) => {
            let settings = crate::bond::Settings::new(sub)?;
            println!("{}", bond_view(&settings, &global)?);
        }
        Some(("show", sub)) => {
            let value = sub
                .get_one::<Fuzzy>("shape")
                .context("missing fuzzy number")?;
            println!("{}", cuts_view(value, &global));
            println!("{}", summary_view(value, &global));
        }
        Some(("plot", sub)) => {
            let value = sub
                .get_one::<Fuzzy>("shape")
                .context("missing fuzzy number")?;
            let settings = crate::plot_view::Settings::new(sub);
            println!("{}", plot_view(value, &settings, &global)?);
        }
        Some(("completions", sub)) => {
            if let Some(shell) = sub
                .get_one::<clap_complete_command::Shell>("shell")
                .cloned()
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some((cmd, _)) => bail!("Unknown command {cmd}"),
        None => bail!("No command given"),
    }

    Ok(())
}
