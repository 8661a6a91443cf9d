use crate::global_settings::GlobalSettings;
use fuzzy_lib::{
    Fuzzy,
    defuzzification::{center, risk, width},
};
use rust_decimal::Decimal;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct CutRow {
    alpha: String,
    low: String,
    high: String,
}

/// Display one row per alpha-cut, with the most likely values first.
pub fn cuts_view(value: &Fuzzy, global: &GlobalSettings) -> String {
    let rows = value.iter().rev().map(|(alpha, cut)| CutRow {
        alpha: global.display(alpha),
        low: global.display(cut.low()),
        high: global.display(cut.high()),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

fn display_or_undefined(
    value: fuzzy_lib::Result<Decimal>,
    global: &GlobalSettings,
) -> String {
    match value {
        Ok(v) => global.display(v),
        Err(e) => {
            log::info!("{e}");
            "undefined".to_string()
        }
    }
}

/// The defuzzified values.  These are not always defined (risk of a value
/// centered on zero, or overflows), in which case they are reported as such
/// rather than aborting.
pub fn summary_view(value: &Fuzzy, global: &GlobalSettings) -> String {
    format!(
        "\
Center: {}
Width:  {}
Risk:   {}
",
        display_or_undefined(center(value), global),
        display_or_undefined(width(value), global),
        display_or_undefined(risk(value), global),
    )
}
