//! Calendar probe entry point.
//!
//! # Responsibility
//! - Mount one calendar view and print its month grid and selected day.
//! - Verify `homeboard_core` wiring without a UI shell.

mod cli;

use homeboard_core::{
    init_from_config, CalendarView, CoreConfig, DateKey, DayCell, GridCell, WEEKDAY_LABELS,
};
use log::warn;
use std::process;

fn main() {
    let args = cli::parse(std::env::args().skip(1).collect());

    let mut config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Err(err) = init_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    let seed = config.seed.events();
    let today = args
        .date
        .or_else(|| seed.keys().next().copied())
        .unwrap_or_else(DateKey::today);
    let mut view = match CalendarView::mount(today, seed) {
        Ok(view) => view,
        Err(err) => {
            warn!("event=cli_mount module=cli status=error");
            eprintln!("failed to mount calendar: {err}");
            process::exit(1);
        }
    };
    if let Some(month) = args.month {
        view.show_month(month);
    }
    view.set_filter(args.filter);

    println!("homeboard_core ping={}", homeboard_core::ping());
    println!("homeboard_core version={}", homeboard_core::core_version());
    println!();
    print_month(&view);
    println!();
    print_selected_day(&view);
}

fn print_month(view: &CalendarView) {
    println!("{} [{}]", view.month_label(), view.filter());
    println!(
        "{}",
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{label:>5}"))
            .collect::<String>()
    );

    let cells = view.day_cells();
    for week in view.grid().weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                GridCell::Blank => format!("{:>5}", ""),
                GridCell::Day(date) => cells
                    .iter()
                    .find(|candidate| candidate.date == *date)
                    .map(format_cell)
                    .unwrap_or_default(),
            })
            .collect();
        println!("{row}");
    }
}

fn format_cell(cell: &DayCell) -> String {
    let marker = if cell.is_selected { '*' } else { ' ' };
    let count = cell.dots.len() + cell.overflow;
    if count == 0 {
        format!("{marker}{:>2}  ", cell.day)
    } else {
        format!("{marker}{:>2}+{count}", cell.day)
    }
}

fn print_selected_day(view: &CalendarView) {
    let date = view.selected_date();
    println!("{} ({})", date, date.date().format("%a %b %d %Y"));
    let events = view.selected_events();
    if events.is_empty() {
        println!("  No events for this day.");
        return;
    }
    for event in events {
        println!("  #{} {} • {} • {}", event.id, event.title, event.time, event.kind);
    }
}
