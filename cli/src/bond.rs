use crate::cuts_view::{cuts_view, summary_view};
use crate::global_settings::GlobalSettings;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg};
use fuzzy_lib::Fuzzy;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A two-year bond, paying a coupon at the end of each year and its face
/// value at the end of the second year.  The discount rates for each year
/// are only known approximately.
pub struct Settings {
    pub face: Decimal,
    pub coupon_rate: Decimal,

    // Discount rates for the first and second years
    pub rate1: Fuzzy,
    pub rate2: Fuzzy,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--face [AMOUNT] "Face value of the bond")
                .value_parser(Decimal::from_str)
                .default_value("1000"),
            arg!(--"coupon-rate" [RATE] "Yearly coupon, relative to face value")
                .value_parser(Decimal::from_str)
                .default_value("0.1"),
            arg!(--rate1 [SHAPE] "Discount rate for the first year (A,B,C)")
                .value_parser(Fuzzy::from_str)
                .default_value("0.0011,0.0012,0.0014"),
            arg!(--rate2 [SHAPE] "Discount rate for the second year (A,B,C)")
                .value_parser(Fuzzy::from_str)
                .default_value("0.0008,0.0011,0.0016"),
        ]
    }

    pub fn new(args: &ArgMatches) -> Result<Self> {
        let decimal = |name: &str| {
            args.get_one::<Decimal>(name)
                .copied()
                .with_context(|| format!("missing --{name}"))
        };
        let fuzzy = |name: &str| {
            args.get_one::<Fuzzy>(name)
                .copied()
                .with_context(|| format!("missing --{name}"))
        };
        Ok(Settings {
            face: decimal("face")?,
            coupon_rate: decimal("coupon-rate")?,
            rate1: fuzzy("rate1")?,
            rate2: fuzzy("rate2")?,
        })
    }
}

/// coupon / (1 + rate1) + (coupon + face) / (1 + rate2)^2
pub fn present_value(settings: &Settings) -> fuzzy_lib::Result<Fuzzy> {
    let overflow = || {
        fuzzy_lib::Error::Undefined(format!(
            "coupon for a face value of {}",
            settings.face
        ))
    };
    let coupon = settings
        .face
        .checked_mul(settings.coupon_rate)
        .ok_or_else(overflow)?;
    let last_payment = coupon.checked_add(settings.face).ok_or_else(overflow)?;
    let first_year = (coupon / (Decimal::ONE + &settings.rate1)?)?;
    let second_year =
        (last_payment / (Decimal::ONE + &settings.rate2)?.pow(Decimal::TWO)?)?;
    first_year + second_year
}

pub fn bond_view(settings: &Settings, global: &GlobalSettings) -> Result<String> {
    let value = present_value(settings)
        .context("cannot compute the present value of the bond")?;
    log::debug!("present value {value}");
    Ok(format!(
        "Present value\n{}\n{}",
        cuts_view(&value, global),
        summary_view(&value, global),
    ))
}
