mod logging;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use nongli_core::table::{render_rust_table, table_to_bytes};
use nongli_core::{
    Engine, EngineConfig, FIRST_YEAR, LAST_YEAR, LunarDate, Zodiac, compile_table, day_ganzhi,
    year_ganzhi,
};
use nongli_search::ALL_SOLAR_TERMS;
use nongli_time::SolarDate;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nongli", about = "Chinese lunisolar calendar CLI (1900-2100)")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Gregorian date to the Chinese calendar
    ToLunar {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Convert a Chinese calendar date to Gregorian
    ToSolar {
        /// Lunar year
        #[arg(long)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u32,
        /// Day of month (1-30)
        #[arg(long)]
        day: u32,
        /// The month is the leap repetition
        #[arg(long)]
        leap: bool,
    },
    /// List the 24 solar terms of a Gregorian year
    Terms {
        /// Gregorian year
        #[arg(long)]
        year: i32,
    },
    /// Show the layout of a lunar year
    Year {
        /// Lunar year
        #[arg(long)]
        year: i32,
    },
    /// Compile the year table and write it out
    Generate {
        /// First year
        #[arg(long, default_value_t = FIRST_YEAR)]
        from: i32,
        /// Last year
        #[arg(long, default_value_t = LAST_YEAR)]
        to: i32,
        /// Output path
        #[arg(long)]
        out: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = TableFormat::Bin)]
        format: TableFormat,
    },
    /// Validate a table and compare it with the compiler
    Verify {
        /// Binary table artifact (defaults to the built-in table)
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TableFormat {
    /// 201 little-endian u32 words
    Bin,
    /// Rust const array
    Rust,
}

fn parse_date(s: &str) -> Result<SolarDate, String> {
    s.parse::<SolarDate>().map_err(|e| e.to_string())
}

fn load_engine(table: Option<PathBuf>, strict: bool) -> Engine {
    let config = EngineConfig {
        table_path: table,
        strict_validation: strict,
    };
    Engine::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to load engine: {e}");
        std::process::exit(1);
    })
}

fn require_range(year: i32) {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        eprintln!("Year {year} outside supported range {FIRST_YEAR}-{LAST_YEAR}");
        std::process::exit(1);
    }
}

fn format_lunar(date: &LunarDate) -> String {
    let leap = if date.is_leap_month() { "leap " } else { "" };
    format!(
        "{date} ({leap}month {} day {}, {} year, {})",
        date.month(),
        date.day(),
        year_ganzhi(date.year()),
        Zodiac::for_lunar_year(date.year()).name()
    )
}

fn write_table(path: &Path, first: i32, words: &[u32], format: TableFormat) -> Result<(), String> {
    let bytes = match format {
        TableFormat::Bin => {
            if first != FIRST_YEAR || words.len() != (LAST_YEAR - FIRST_YEAR + 1) as usize {
                return Err(format!(
                    "binary artifact must cover {FIRST_YEAR}-{LAST_YEAR}; \
                     use --format rust for partial ranges"
                ));
            }
            table_to_bytes(words)
        }
        TableFormat::Rust => render_rust_table(first, words).into_bytes(),
    };
    std::fs::write(path, bytes).map_err(|e| format!("{}: {e}", path.display()))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::ToLunar { date } => {
            let date = parse_date(&date).unwrap_or_else(|e| {
                eprintln!("Invalid date: {e}");
                std::process::exit(1);
            });
            let engine = load_engine(None, false);
            match engine.solar_to_lunar(&date) {
                Some(lunar) => {
                    println!("{}", format_lunar(&lunar));
                    if let Some(month) = engine.month_ganzhi(&date) {
                        println!("Month: {month}");
                    }
                    println!("Day: {}", day_ganzhi(&date));
                    if let Some(term) = engine.solar_term_on(&date) {
                        println!("Solar term: {term} ({})", term.chinese_name());
                    }
                }
                None => {
                    eprintln!("{date} is outside the supported lunar range");
                    std::process::exit(1);
                }
            }
        }

        Commands::ToSolar {
            year,
            month,
            day,
            leap,
        } => {
            let lunar = LunarDate::new(year, month, day, leap).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let engine = load_engine(None, false);
            match engine.lunar_to_solar(&lunar) {
                Some(solar) => println!("{solar}"),
                None => {
                    eprintln!("{lunar} does not exist");
                    std::process::exit(1);
                }
            }
        }

        Commands::Terms { year } => {
            require_range(year);
            let engine = load_engine(None, false);
            let Some(dates) = engine.solar_terms(year) else {
                eprintln!("Solar term solve failed for {year}");
                std::process::exit(1);
            };
            for (term, date) in ALL_SOLAR_TERMS.iter().zip(dates) {
                let kind = if term.is_zhongqi() { "zhongqi" } else { "jieqi" };
                println!(
                    "{date}  {:>3} deg  {:<12} {}  {kind}",
                    term.longitude_deg(),
                    term.name(),
                    term.chinese_name()
                );
            }
        }

        Commands::Year { year } => {
            require_range(year);
            let engine = load_engine(None, false);
            let Some(info) = engine.year_info(year) else {
                eprintln!("No table entry for {year}");
                std::process::exit(1);
            };
            let zodiac = Zodiac::for_lunar_year(year);
            println!(
                "Lunar year {year}: {} ({} {})",
                year_ganzhi(year),
                zodiac.name(),
                zodiac.chinese_name()
            );
            println!("New Year: {}", info.chinese_new_year());
            match engine.leap_month(year) {
                Some(m) => println!("Leap month: after month {m}"),
                None => println!("Leap month: none"),
            }
            println!("Days: {}", info.total_days());
            for (month, is_leap, days) in info.months() {
                let label = if is_leap {
                    format!("leap {month:>2}")
                } else {
                    format!("     {month:>2}")
                };
                println!("  {label}  {days} days");
            }
        }

        Commands::Generate {
            from,
            to,
            out,
            format,
        } => {
            let words = compile_table(from, to).unwrap_or_else(|e| {
                eprintln!("Compilation failed: {e}");
                std::process::exit(1);
            });
            if let Err(e) = write_table(&out, from, &words, format) {
                eprintln!("Write failed: {e}");
                std::process::exit(1);
            }
            info!(path = %out.display(), years = words.len(), "table written");
            println!("Wrote {} years ({from}-{to}) to {}", words.len(), out.display());
        }

        Commands::Verify { table } => {
            let engine = load_engine(table, true);
            let compiled = compile_table(FIRST_YEAR, LAST_YEAR).unwrap_or_else(|e| {
                eprintln!("Compilation failed: {e}");
                std::process::exit(1);
            });
            let mut mismatches = 0usize;
            for (i, (&have, &want)) in engine.table().iter().zip(&compiled).enumerate() {
                if have != want {
                    let year = FIRST_YEAR + i as i32;
                    warn!(year, have, want, "table word differs from compiler");
                    println!("{year}: table {have:#010x}, compiled {want:#010x}");
                    mismatches += 1;
                }
            }
            if mismatches > 0 {
                eprintln!("{mismatches} year(s) differ");
                std::process::exit(1);
            }
            println!("OK: {} years match the compiler", compiled.len());
        }
    }
}
