use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;
use price_optimiser::{
    core::{PriceList, Solution, Vat},
    ops::Interval,
    quantity::rate::UnitRate,
};

const TIME_FORMAT: &str = "%a %H:%M";

/// Price list table, optionally marking how much of every slot the run takes.
#[must_use]
pub fn build_price_table(price_list: &PriceList, vat: Vat, run: Option<Interval>) -> Table {
    let rates = price_list.iter().map(|slot| slot.rate(vat)).sorted().collect_vec();
    let median_rate = rates.get(rates.len() / 2).copied().unwrap_or(UnitRate::ZERO);

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Start", "End", "Rate", "Run"]);
    for slot in price_list {
        let rate = slot.rate(vat);
        let share = run.and_then(|run| slot.interval.intersect(run)).map(|overlap| {
            overlap.len().as_seconds_f64() / slot.interval.len().as_seconds_f64()
        });
        table.add_row(vec![
            Cell::new(slot.interval.start.format(TIME_FORMAT)),
            Cell::new(slot.interval.end.format(TIME_FORMAT)).add_attribute(Attribute::Dim),
            Cell::new(rate)
                .set_alignment(CellAlignment::Right)
                .fg(if rate >= median_rate { Color::Red } else { Color::Green }),
            match share {
                Some(share) => Cell::new(format!("{:.0}%", share * 100.0))
                    .set_alignment(CellAlignment::Right)
                    .fg(Color::Cyan),
                None => Cell::new(""),
            },
        ]);
    }
    table
}

#[must_use]
pub fn build_solution_table(solution: &Solution) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.add_row(vec![
        Cell::new("Start").add_attribute(Attribute::Bold),
        Cell::new(solution.start_time.format(TIME_FORMAT)).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("End").add_attribute(Attribute::Bold),
        Cell::new(solution.end_time().format(TIME_FORMAT)),
    ]);
    table.add_row(vec![Cell::new("Candidate"), Cell::new(solution.kind)]);
    table.add_row(vec![
        Cell::new("Window"),
        Cell::new(format!(
            "{} – {}",
            solution.earliest_start.format(TIME_FORMAT),
            solution.latest_finish.format(TIME_FORMAT),
        ))
        .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Total cost"),
        Cell::new(solution.total_cost).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Average rate"),
        Cell::new(solution.average_rate).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Computed at"),
        Cell::new(solution.computed_at.format("%Y-%m-%d %H:%M:%S")).add_attribute(Attribute::Dim),
    ]);
    table
}
