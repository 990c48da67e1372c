use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::Parser;

/// Render today's joke image. With no arguments the built-in configuration is used.
#[derive(Parser, Debug)]
#[command(name = "dailyjoke", version)]
struct Cli {
    /// JSON config overriding any subset of the built-in settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render for this date (YYYY-MM-DD) instead of today in the configured zone.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Select and fit the joke, print the result, and skip drawing.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => dailyjoke::DailyJokeConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => dailyjoke::DailyJokeConfig::default(),
    };
    if let Some(out) = cli.out {
        config.output_path = out;
    }

    if cli.dry_run {
        return cmd_dry_run(&config, cli.date);
    }

    let outcome = dailyjoke::render_daily_joke(&config, cli.date).context("render daily joke")?;
    eprintln!("wrote {}", outcome.output_path.display());
    Ok(())
}

fn cmd_dry_run(config: &dailyjoke::DailyJokeConfig, date: Option<NaiveDate>) -> anyhow::Result<()> {
    config.validate()?;
    let today = match date {
        Some(d) => d,
        None => dailyjoke::today_in(config.timezone()?),
    };

    let catalog = dailyjoke::JokeCatalog::load(&config.jokes_path)?;
    let font = dailyjoke::load_font(&config.font_path)?;
    let mut engine = dailyjoke::TextLayoutEngine::from_font_bytes(font)
        .with_context(|| format!("register font '{}'", config.font_path.display()))?;

    let daily = dailyjoke::prepare_daily_joke(config, &catalog, today, &mut engine)?;

    println!("date:        {}", daily.date);
    println!("days_passed: {}", daily.cursor.days_passed);
    println!("index:       {}/{}", daily.cursor.index, catalog.len());
    println!("question:    {}", daily.joke.question);
    println!("answer:      {}", daily.joke.answer);
    println!(
        "sizes:       {} / {}",
        daily.fit.question_font_size(),
        daily.fit.answer_font_size()
    );
    println!(
        "height:      {} (box {})",
        daily.fit.total_height, config.text_box_height
    );
    for line in &daily.lines {
        println!("  @({}, {}) {}px  {}", line.x, line.y, line.size, line.text);
    }
    Ok(())
}
