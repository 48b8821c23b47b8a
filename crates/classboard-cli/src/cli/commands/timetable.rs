//! Plain-text timetable output.

use anyhow::Result;
use classboard_core::config::Config;
use classboard_core::{PERIODS_PER_DAY, Timetable, Weekday};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

const FREE_PERIOD: &str = "-";

pub fn run(config: &Config) -> Result<()> {
    let timetable = config.timetable()?;
    println!("{}", config.title);
    println!("{}", render(&timetable, Weekday::today()));
    Ok(())
}

fn render(timetable: &Timetable, today: Option<Weekday>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Day")];
    header.extend((1..=PERIODS_PER_DAY).map(|period| Cell::new(format!("Period {period}"))));
    table.set_header(header);

    for day in Weekday::ALL {
        let name = if today == Some(day) {
            format!("{day} *")
        } else {
            day.to_string()
        };
        let mut row = vec![Cell::new(name)];
        row.extend(timetable.periods(day).iter().map(|label| {
            Cell::new(if label.is_empty() {
                FREE_PERIOD
            } else {
                label.as_str()
            })
        }));
        table.add_row(row);
    }
    table
}
