use crate::fuzzy::Fuzzy;
use rust_decimal::Decimal;
use serde::Serialize;

/// One vertex of the membership function
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlotPoint {
    pub value: Decimal,
    pub membership: Decimal,
}

/// The closed polygon outlining the membership function, to be drawn by a
/// charting tool.  Goes up the left side (lower bounds, bottom to top) then
/// down the right side (upper bounds, top to bottom).
#[must_use]
pub fn plot(value: &Fuzzy) -> Vec<PlotPoint> {
    let left = value.iter().map(|(membership, cut)| PlotPoint {
        value: cut.low(),
        membership,
    });
    let right = value.iter().rev().map(|(membership, cut)| PlotPoint {
        value: cut.high(),
        membership,
    });
    left.chain(right).collect()
}
