#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use serde::Serialize;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use bidboard_core::autobid::AutoBidding;
use bidboard_core::model::Bid;
use bidboard_core::provider::{BidSource, JsonFileSource, SeedSource};
use bidboard_core::tui::App;
use bidboard_core::util::{parse_amount_bound, parse_date};
use bidboard_core::view::bid_table::build_bids_view;
use bidboard_core::view::bids::{
    Action, BidListViewModel, SortDirection, SortKey, SortState, StatusFilter,
};
use bidboard_core::view::common::TableViewModel;

#[derive(Parser)]
#[command(name = "bidboard", about = "Terminal dashboard for freelance bids", version)]
struct Args {
    /// JSON file with an array of bids. Defaults to the built-in seed set.
    #[arg(long, value_name = "PATH")]
    bids: Option<PathBuf>,

    /// UI tick in milliseconds.
    #[arg(long, default_value = "250")]
    tick: u64,

    /// Latency of the simulated auto-bidding request, in milliseconds.
    #[arg(long, default_value = "1000")]
    autobid_delay: u64,

    /// Print one page of the bid list and exit instead of starting the TUI.
    #[arg(long)]
    dump: bool,

    /// Status filter (all, active, completed). Dump mode only.
    #[arg(long, requires = "dump", default_value = "all", value_parser = parse_status)]
    status: StatusFilter,

    /// Case-insensitive project name substring. Dump mode only.
    #[arg(long, requires = "dump")]
    project: Option<String>,

    /// Minimum amount, inclusive (e.g. "600", "$1,250"). Dump mode only.
    #[arg(long, requires = "dump", allow_hyphen_values = true)]
    min: Option<String>,

    /// Maximum amount, inclusive. Dump mode only.
    #[arg(long, requires = "dump", allow_hyphen_values = true)]
    max: Option<String>,

    /// Start date, inclusive (2025-01-05, today, -7d). Dump mode only.
    #[arg(long, requires = "dump", allow_hyphen_values = true)]
    from: Option<String>,

    /// End date, inclusive. Dump mode only.
    #[arg(long, requires = "dump", allow_hyphen_values = true)]
    to: Option<String>,

    /// Sort column (none, project, date, amount, status). Dump mode only.
    #[arg(long, requires = "dump", default_value = "none", value_parser = parse_sort_key)]
    sort: SortKey,

    /// Sort descending. Dump mode only.
    #[arg(long, requires = "dump")]
    desc: bool,

    /// Page number, 1-based; clamped to the available pages. Dump mode only.
    #[arg(long, requires = "dump", default_value = "1")]
    page: usize,

    /// Output the page as JSON. Dump mode only.
    #[arg(long, requires = "dump")]
    json: bool,

    /// Toggle auto-bidding once and report the result. Dump mode only.
    #[arg(long, requires = "dump")]
    toggle_autobid: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write logs to this file. Without it the TUI logs nothing.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_status(s: &str) -> Result<StatusFilter, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(StatusFilter::All),
        "active" => Ok(StatusFilter::Active),
        "completed" => Ok(StatusFilter::Completed),
        other => Err(format!(
            "invalid status '{}': expected all, active or completed",
            other
        )),
    }
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "none" => Ok(SortKey::None),
        "project" => Ok(SortKey::Project),
        "date" => Ok(SortKey::Date),
        "amount" => Ok(SortKey::Amount),
        "status" => Ok(SortKey::Status),
        other => Err(format!(
            "invalid sort key '{}': expected none, project, date, amount or status",
            other
        )),
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
/// Logs go to `log_file` when given, otherwise to stderr.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["bidboard", "bidboard_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn open_source(path: Option<&Path>) -> Box<dyn BidSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SeedSource),
    }
}

/// One page of the bid list, as printed by `--dump --json`.
#[derive(Serialize)]
struct DumpPage<'a> {
    page: usize,
    total_pages: usize,
    filtered: usize,
    total: usize,
    bids: Vec<&'a Bid>,
}

/// Applies the command-line filters, sort, and page to a fresh view model.
fn apply_args(vm: &mut BidListViewModel, args: &Args) -> Result<(), String> {
    let today = Local::now().date_naive();

    vm.dispatch(Action::SetStatus(args.status));
    if let Some(query) = &args.project {
        vm.dispatch(Action::SetProjectQuery(query.clone()));
    }
    if let Some(min) = &args.min {
        vm.dispatch(Action::SetAmountMin(parse_amount_bound(min)));
    }
    if let Some(max) = &args.max {
        vm.dispatch(Action::SetAmountMax(parse_amount_bound(max)));
    }
    if let Some(from) = &args.from {
        let date = parse_date(from, today).map_err(|e| e.to_string())?;
        vm.dispatch(Action::SetDateStart(Some(date)));
    }
    if let Some(to) = &args.to {
        let date = parse_date(to, today).map_err(|e| e.to_string())?;
        vm.dispatch(Action::SetDateEnd(Some(date)));
    }
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    vm.dispatch(Action::SetSort(SortState {
        key: args.sort,
        direction,
    }));
    // Page last: it is clamped against the filtered count.
    vm.dispatch(Action::SetPage(args.page));
    Ok(())
}

/// Formats a table as plain text with fixed-width columns.
fn format_table<Id>(vm: &TableViewModel<Id>) -> String {
    let pad = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, text)| match vm.widths.get(i) {
                Some(&w) if i + 1 < cells.len() => format!("{:<w$}", text, w = w as usize),
                _ => text.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![vm.title.clone()];
    let headers = vm.decorated_headers();
    out.push(pad(headers.iter().map(String::as_str).collect()));
    for row in &vm.rows {
        out.push(pad(row.cells.iter().map(|c| c.text.as_str()).collect()));
    }
    if !vm.footer.is_empty() {
        out.push(vm.footer.clone());
    }
    out.join("\n")
}

fn run_dump(args: &Args, bids: Vec<Bid>) -> Result<(), String> {
    let mut vm = BidListViewModel::new(bids);
    apply_args(&mut vm, args)?;

    let view = vm.view();
    info!(
        filtered = view.filtered_count,
        page = view.page,
        pages = view.total_pages,
        "dumping bid page"
    );

    if args.json {
        let page = DumpPage {
            page: view.page,
            total_pages: view.total_pages,
            filtered: view.filtered_count,
            total: view.total_count,
            bids: view.rows.clone(),
        };
        let json = serde_json::to_string_pretty(&page).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        println!("{}", format_table(&build_bids_view(&view, vm.state())));
    }

    if args.toggle_autobid {
        let delay = Duration::from_millis(args.autobid_delay);
        let mut autobid = AutoBidding::new(delay);
        autobid.request_toggle();
        match autobid.wait(delay + Duration::from_secs(5)) {
            Some(notice) => println!("{}", notice.message()),
            None => warn!("auto-bidding toggle did not finish"),
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // The TUI owns the terminal: log to a file or not at all.
    if args.dump || args.log_file.is_some() {
        if let Err(e) = init_logging(args.verbose, args.quiet, args.log_file.as_deref()) {
            eprintln!("Error: cannot open log file: {}", e);
            process::exit(1);
        }
    }

    let source = open_source(args.bids.as_deref());

    if args.dump {
        let result = source
            .load()
            .map_err(|e| e.to_string())
            .and_then(|bids| run_dump(&args, bids));
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        return;
    }

    info!("bidboard {} starting", env!("CARGO_PKG_VERSION"));
    let app = match App::new(source.as_ref(), Duration::from_millis(args.autobid_delay)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = app.run(Duration::from_millis(args.tick.max(10))) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidboard_core::model::seed_bids;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["bidboard", "--dump"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn value_parsers_accept_names() {
        assert_eq!(parse_status("Active").unwrap(), StatusFilter::Active);
        assert!(parse_status("open").is_err());
        assert_eq!(parse_sort_key("amount").unwrap(), SortKey::Amount);
        assert!(parse_sort_key("price").is_err());
    }

    #[test]
    fn dump_args_drive_the_pipeline() {
        let args = args(&[
            "--status", "completed", "--sort", "amount", "--desc", "--page", "9",
        ]);
        let mut vm = BidListViewModel::new(seed_bids());
        apply_args(&mut vm, &args).unwrap();

        let view = vm.view();
        assert_eq!(view.filtered_count, 5);
        // Page 9 is clamped to the only page.
        assert_eq!(view.page, 1);
        let amounts: Vec<&str> = view.rows.iter().map(|b| b.amount.as_str()).collect();
        assert_eq!(amounts, vec!["$950", "$900", "$800", "$750", "$650"]);
    }

    #[test]
    fn dump_amount_range_is_inclusive() {
        let args = args(&["--min", "600", "--max", "$800"]);
        let mut vm = BidListViewModel::new(seed_bids());
        apply_args(&mut vm, &args).unwrap();
        assert_eq!(vm.view().filtered_count, 5);
    }

    #[test]
    fn dump_rejects_bad_dates() {
        let args = args(&["--from", "someday"]);
        let mut vm = BidListViewModel::new(seed_bids());
        let err = apply_args(&mut vm, &args).unwrap_err();
        assert!(err.contains("someday"));
    }

    #[test]
    fn dump_flags_need_dump_mode() {
        for flags in [
            &["--status", "active"][..],
            &["--project", "alpha"],
            &["--min", "600"],
            &["--to", "today"],
            &["--sort", "amount"],
            &["--desc"],
            &["--page", "2"],
            &["--json"],
            &["--toggle-autobid"],
        ] {
            let mut argv = vec!["bidboard"];
            argv.extend_from_slice(flags);
            assert!(Args::try_parse_from(argv.clone()).is_err(), "{:?} accepted", flags);
        }

        let plain = Args::try_parse_from(["bidboard", "--tick", "100"]).unwrap();
        assert!(!plain.dump);
        assert_eq!(plain.status, StatusFilter::All);
        assert!(Args::try_parse_from(["bidboard", "--dump", "--json", "--min", "-5"]).is_ok());
    }

    #[test]
    fn dump_reports_relative_dates_out_of_range() {
        let args = args(&["--from", "-200000000000000d"]);
        let mut vm = BidListViewModel::new(seed_bids());
        let err = apply_args(&mut vm, &args).unwrap_err();
        assert!(err.contains("Relative date out of range"));
    }

    #[test]
    fn text_table_pads_columns() {
        let vm = BidListViewModel::new(seed_bids());
        let text = format_table(&build_bids_view(&vm.view(), vm.state()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Bids (10 of 10)");
        assert!(lines[1].starts_with("PROJECT"));
        assert!(lines[2].starts_with("Project Alpha"));
        assert!(lines[2].ends_with("$500"));
        assert_eq!(lines.last().copied(), Some("page 1/2  ←/→ to change"));
    }
}
