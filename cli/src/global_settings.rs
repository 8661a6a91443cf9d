use clap::{Arg, ArgMatches, arg};
use fuzzy_lib::Interval;
use rust_decimal::{Decimal, RoundingStrategy};

pub struct GlobalSettings {
    // How many decimals to display.  Computations always use full precision.
    pub precision: u32,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--precision [DIGITS] "Number of decimals to display")
                .value_parser(clap::value_parser!(u32))
                .default_value("4")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            precision: args.get_one::<u32>("precision").copied().unwrap_or(4),
        }
    }

    pub fn display(&self, value: Decimal) -> String {
        value
            .round_dp_with_strategy(
                self.precision,
                RoundingStrategy::MidpointNearestEven,
            )
            .normalize()
            .to_string()
    }

    pub fn display_interval(&self, value: &Interval) -> String {
        format!(
            "[{}, {}]",
            self.display(value.low()),
            self.display(value.high())
        )
    }
}
