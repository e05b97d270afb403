use std::cell::Cell;
use std::io;

use clap::{Arg, Command};
use log::{debug, info};

use springer::board::{Board, TourPolicy, TourStatus};

fn main() -> io::Result<()> {
    let matches = Command::new("springer")
        .version("0.1")
        .about("Searches for a knight's tour of a rectangular board")
        .arg(
            Arg::new("rows")
                .short('r')
                .long("rows")
                .env("ROWS")
                .help("Number of board rows")
                .num_args(1)
                .default_value("8")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .env("COLUMNS")
                .help("Number of board columns")
                .num_args(1)
                .default_value("8")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("startRow")
                .long("start-row")
                .env("START_ROW")
                .help("Row of the starting square")
                .num_args(1)
                .default_value("0")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("startColumn")
                .long("start-column")
                .env("START_COLUMN")
                .help("Column of the starting square")
                .num_args(1)
                .default_value("0")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .env("POLICY")
                .help("Move ordering: heuristic (Warnsdorff) or fixed")
                .num_args(1)
                .default_value("heuristic")
                .value_parser(["heuristic", "fixed"]),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("LOGFILE")
                .value_name("springer.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .get_matches();

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Warn)
                    .chain(io::stderr()),
            )
            .apply()
            .unwrap()
    } else {
        log_dispatcher
            .level(log::LevelFilter::Warn)
            .chain(io::stderr())
            .apply()
            .unwrap()
    }

    let rows = *matches.get_one::<u16>("rows").unwrap();
    let columns = *matches.get_one::<u16>("columns").unwrap();
    let start_row = *matches.get_one::<u16>("startRow").unwrap();
    let start_column = *matches.get_one::<u16>("startColumn").unwrap();
    let policy = match matches.get_one::<String>("policy").unwrap().as_str() {
        "fixed" => TourPolicy::Fixed,
        "heuristic" => TourPolicy::Heuristic,
        _ => unreachable!(),
    };

    let backtracks = Cell::new(0_u64);
    let mut board = Board::with_callback(rows, columns, |progress| {
        if progress.status == TourStatus::Backtracking {
            backtracks.set(backtracks.get() + 1);
        }
        if progress.status == TourStatus::Placing && progress.total_moves % 10_000_000 == 0 {
            debug!(
                "{} attempts so far, {} undone, currently on {}",
                progress.total_moves,
                backtracks.get(),
                progress.square
            );
        }
        true
    });

    info!(
        "searching the {}x{} board from ({}, {}) with {:?} ordering",
        rows, columns, start_row, start_column, policy
    );
    match board.tour(start_row, start_column, policy) {
        Ok(true) => {
            print_tour(&board);
            println!(
                "Tour found in {} attempts ({} backtracked).",
                board.total_moves(),
                backtracks.get()
            );
            Ok(())
        }
        Ok(false) => {
            println!(
                "No tour from ({}, {}) on the {}x{} board; search exhausted after {} attempts.",
                start_row,
                start_column,
                rows,
                columns,
                board.total_moves()
            );
            std::process::exit(1)
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2)
        }
    }
}

/// Prints the visit order as a move-number grid, one row per board row.
fn print_tour(board: &Board<'_>) {
    let width = board.size().to_string().len() + 1;
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let mark = board.occupancy()[board.flat_index(row, column)];
            print!("{:width$}", mark, width = width);
        }
        println!();
    }
}
