use std::fmt::Display;
use std::path::PathBuf;

use chrono::{Datelike, Local, Timelike};
use clap::{Parser, Subcommand};
use liuren_rs::{
    Divination, DivinationRequest, EarthlyBranch, ElementAttribute, FiveElement,
    GregorianApproximation, GregorianDateTime, LabelSource, divine, divine_at, interaction,
    shichen_from_hour,
};
use tracing_subscriber::EnvFilter;

mod config;

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "liuren", about = "Small Six-Ren (小六壬) divination CLI")]
struct Cli {
    /// Path to a TOML config file (default: ./liuren.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Divine from a lunar month, lunar day and hour
    Cast {
        /// Lunar month (1-12)
        #[arg(long)]
        month: u32,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u32,
        /// Clock hour (0-23)
        #[arg(long, required_unless_present = "shichen", conflicts_with = "shichen")]
        hour: Option<u32>,
        /// Time slot as a branch (子..亥) or index (0-11)
        #[arg(long)]
        shichen: Option<String>,
        /// Sexagenary label of the lunar month, e.g. 乙亥
        #[arg(long)]
        month_gz: Option<String>,
        /// Sexagenary label of the day, e.g. 甲子
        #[arg(long)]
        day_gz: Option<String>,
        /// Print every visited position
        #[arg(long)]
        replay: bool,
    },
    /// Divine from a Gregorian date and time
    Date {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (hh:mm)
        #[arg(long)]
        time: String,
        /// Print every visited position
        #[arg(long)]
        replay: bool,
    },
    /// Divine for the current local date and time
    Now {
        /// Print every visited position
        #[arg(long)]
        replay: bool,
    },
    /// Time-slot branch for a clock hour
    Shichen {
        /// Clock hour (0-23)
        #[arg(long)]
        hour: u32,
    },
    /// Five-element interaction of SOURCE acting on TARGET
    Interaction {
        /// Source element (木 火 土 金 水)
        source: String,
        /// Target element (木 火 土 金 水)
        target: String,
    },
}

fn fail(msg: impl Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_from_env("LIUREN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Accept either a branch character or a 0-based slot index.
fn parse_shichen(s: &str) -> Result<EarthlyBranch, String> {
    let s = s.trim();
    if let Ok(index) = s.parse::<u8>() {
        return EarthlyBranch::from_index(index).map_err(|e| e.to_string());
    }
    EarthlyBranch::from_label(s.trim_end_matches('時')).map_err(|e| e.to_string())
}

fn source_tag(source: LabelSource) -> &'static str {
    match source {
        LabelSource::Calendar => "",
        LabelSource::Approximated => " (approx.)",
    }
}

fn attr_line(aspect: &str, symbol: impl Display, attr: &ElementAttribute, tag: &str) {
    println!(
        "  {aspect}  {symbol}{tag}  {}  {}  {} ({})",
        attr.element, attr.direction, attr.color, attr.color_hex
    );
}

fn print_text(d: &Divination, replay: bool) {
    if let Some(lunar) = &d.lunar {
        let leap = if lunar.leap_month { "閏" } else { "" };
        println!(
            "Lunar: {}年 {leap}{}月 {}日  year {}  month {}  day {}  zodiac {}",
            lunar.year,
            lunar.month,
            lunar.day,
            lunar.year_label.as_deref().unwrap_or("-"),
            lunar.month_label.as_deref().unwrap_or("-"),
            lunar.day_label.as_deref().unwrap_or("-"),
            lunar.zodiac.as_deref().unwrap_or("-"),
        );
    }
    let hour = EarthlyBranch::wrapping(u32::from(d.request.hour_slot));
    println!(
        "Input: month {}  day {}  {}時 ({})",
        d.request.month,
        d.request.day,
        hour,
        d.request.hour_slot + 1
    );

    if replay {
        for frame in d.replay() {
            println!(
                "  {:?} #{:<2} {}",
                frame.stage,
                frame.offset + 1,
                frame.position
            );
        }
    }

    for s in &d.steps {
        let path: Vec<&str> = s
            .path
            .iter()
            .map(|&i| liuren_rs::PalmPosition::from_ring_index(i).name())
            .collect();
        println!(
            "{}  count {:>2}  {} → {}",
            s.title,
            s.count,
            s.start_position(),
            s.end_position()
        );
        println!("  {}", path.join(" "));
    }

    println!();
    println!("Result: {} ({})  「{}」", d.position, d.position.romanized(), d.position.meaning());

    let a = &d.analysis;
    attr_line("環境", a.month_branch, &a.environment, source_tag(a.month_source));
    attr_line("主氣", a.day_stem, &a.day, source_tag(a.day_source));
    attr_line("行動", a.hour_branch, &a.action, "");
    println!("  Dominant: {}", a.dominant_level);
    println!("  Direction: {}  Color: {}", a.leading_direction, a.leading_color);
    println!("  Advice: {}", a.supplementary_advice);
    println!("  {}", a.suggestion);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn emit(d: &Divination, format: OutputFormat, replay: bool) {
    match format {
        OutputFormat::Json => print_json(d),
        OutputFormat::Text => print_text(d, replay),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).unwrap_or_else(|e| fail(e));
    init_logging(&config);
    tracing::debug!(?config, "config loaded");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match cli.command {
        Commands::Cast {
            month,
            day,
            hour,
            shichen,
            month_gz,
            day_gz,
            replay,
        } => {
            let slot = match (hour, shichen) {
                (Some(h), _) => shichen_from_hour(h).unwrap_or_else(|e| fail(e)),
                (None, Some(s)) => parse_shichen(&s).unwrap_or_else(|e| fail(e)),
                (None, None) => fail("either --hour or --shichen is required"),
            };
            let mut request = DivinationRequest::new(month, day, slot.index());
            if let Some(label) = month_gz {
                request = request.with_month_label(&label).unwrap_or_else(|e| fail(e));
            }
            if let Some(label) = day_gz {
                request = request.with_day_label(&label).unwrap_or_else(|e| fail(e));
            }
            let d = divine(&request).unwrap_or_else(|e| fail(e));
            emit(&d, format, replay || config.output.replay);
        }

        Commands::Date { date, time, replay } => {
            let at = GregorianDateTime::parse(&date, &time).unwrap_or_else(|e| fail(e));
            let d = divine_at(&GregorianApproximation, &at).unwrap_or_else(|e| fail(e));
            emit(&d, format, replay || config.output.replay);
        }

        Commands::Now { replay } => {
            let now = Local::now();
            let at = GregorianDateTime::new(
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute(),
            )
            .unwrap_or_else(|e| fail(e));
            tracing::info!(%at, "using local clock");
            let d = divine_at(&GregorianApproximation, &at).unwrap_or_else(|e| fail(e));
            emit(&d, format, replay || config.output.replay);
        }

        Commands::Shichen { hour } => {
            let branch = shichen_from_hour(hour).unwrap_or_else(|e| fail(e));
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "hour": hour,
                    "index": branch.index(),
                    "branch": branch,
                    "element": branch.element(),
                })),
                OutputFormat::Text => println!(
                    "{hour:02}:00 → {}時 (index {}, {})",
                    branch,
                    branch.index(),
                    branch.element()
                ),
            }
        }

        Commands::Interaction { source, target } => {
            let s = FiveElement::from_label(&source).unwrap_or_else(|e| fail(e));
            let t = FiveElement::from_label(&target).unwrap_or_else(|e| fail(e));
            let i = interaction(s, t);
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "source": s,
                    "target": t,
                    "interaction": i,
                    "advisory": i.is_advisory(),
                })),
                OutputFormat::Text => println!("{s} → {t}: {}", i.name()),
            }
        }
    }
}
