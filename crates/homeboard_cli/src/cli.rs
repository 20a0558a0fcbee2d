//! Command-line flags for the calendar probe.

use getopts::Options;
use homeboard_core::{DateKey, MonthCursor, SeedSet, TypeFilter};
use std::env;
use std::process;

pub struct Args {
    /// Visible month; defaults to the month of `date`.
    pub month: Option<MonthCursor>,
    /// Selected day; defaults to the first seeded date, or today.
    pub date: Option<DateKey>,
    pub filter: TypeFilter,
    /// Overrides `HOMEBOARD_SEED` when present.
    pub seed: Option<SeedSet>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "m",
        "month",
        "Month to render [Default: month of the selected date]",
        "YYYY-MM",
    );
    opts.optopt(
        "d",
        "date",
        "Selected date [Default: first seeded date]",
        "YYYY-MM-DD",
    );
    opts.optopt(
        "f",
        "filter",
        "Event type filter [Default: All]",
        "All|Meeting|Task|Reminder",
    );
    opts.optopt(
        "s",
        "seed",
        "Events to mount with [Default: sample]",
        "sample|empty",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let month = matches.opt_str("month").map(|raw| match parse_month(&raw) {
        Ok(month) => month,
        Err(err) => {
            eprintln!("Provided value for option 'month' is invalid: {err}");
            process::exit(1);
        }
    });

    let date = matches.opt_str("date").map(|raw| match DateKey::parse(&raw) {
        Ok(date) => date,
        Err(err) => {
            eprintln!("Provided value for option 'date' is invalid: {err}");
            process::exit(1);
        }
    });

    let filter = match matches.opt_get_default("filter", TypeFilter::All) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("Provided value for option 'filter' is invalid: {err}");
            process::exit(1);
        }
    };

    let seed = match matches.opt_get::<SeedSet>("seed") {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("Provided value for option 'seed' is invalid: {err}");
            process::exit(1);
        }
    };

    Args {
        month,
        date,
        filter,
        seed,
    }
}

fn parse_month(raw: &str) -> Result<MonthCursor, String> {
    let first_day = DateKey::parse(&format!("{}-01", raw.trim()))
        .map_err(|_| format!("expected YYYY-MM, got `{}`", raw.trim()))?;
    Ok(MonthCursor::containing(first_day))
}
