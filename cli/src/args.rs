use crate::global_settings::GlobalSettings;
use clap::{Arg, Command};
use fuzzy_lib::Fuzzy;
use std::str::FromStr;

fn shape_arg() -> Arg {
    Arg::new("shape")
        .value_name("SHAPE")
        .help("A point (A), triangle (A,B,C) or trapezoid (A,B,C,D)")
        .required(true)
        .allow_hyphen_values(true)
        .value_parser(Fuzzy::from_str)
}

pub(crate) fn build_cli() -> Command {
    Command::new("fuzzy")
        .version("0.1")
        .about("Arithmetic on fuzzy numbers")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("bond")
                .about("Present value of a bond with uncertain rates")
                .args(crate::bond::Settings::cli()),
        )
        .subcommand(
            Command::new("show")
                .about("Show the alpha-cuts of a fuzzy number")
                .arg(shape_arg()),
        )
        .subcommand(
            Command::new("plot")
                .about("Points outlining the membership function")
                .arg(shape_arg())
                .args(crate::plot_view::Settings::cli()),
        )
        .subcommand(
            // Use    eval "$(fuzzy completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
