use crate::global_settings::GlobalSettings;
use anyhow::Result;
use clap::{Arg, ArgMatches, arg};
use fuzzy_lib::{Fuzzy, plots::plot};
use tabled::{Table, Tabled, settings::Style};

pub struct Settings {
    // Output the points as JSON, for use by an external charting tool
    pub json: bool,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [arg!(--json "Output the points as JSON")]
    }

    pub fn new(args: &ArgMatches) -> Self {
        Settings {
            json: args.get_flag("json"),
        }
    }
}

#[derive(Tabled)]
struct PointRow {
    value: String,
    membership: String,
}

/// The outline of the membership function
pub fn plot_view(
    value: &Fuzzy,
    settings: &Settings,
    global: &GlobalSettings,
) -> Result<String> {
    let points = plot(value);
    if settings.json {
        return Ok(serde_json::to_string_pretty(&points)?);
    }
    let rows = points.iter().map(|p| PointRow {
        value: global.display(p.value),
        membership: global.display(p.membership),
    });
    Ok(Table::new(rows).with(Style::psql()).to_string())
}
