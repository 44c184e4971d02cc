use bazi_core::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bazi")]
#[command(about = "Four Pillars (BaZi) chart calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a chart from a Gregorian birth date and time
    Chart {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Birth time, HH:MM (24-hour)
        #[arg(long)]
        time: String,

        /// Gender (male, female)
        #[arg(long)]
        gender: String,

        /// Name to print on the chart
        #[arg(long)]
        name: Option<String>,

        /// Birth place (carried through, not used in computation)
        #[arg(long, default_value = "")]
        place: String,

        /// Emit the computed chart as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive the decade cycles from hand-entered year and month pillars
    #[command(name = "dayun")]
    DaYun {
        /// Year pillar, two glyphs (e.g. 庚午)
        #[arg(long)]
        year_pillar: String,

        /// Month pillar, two glyphs (e.g. 辛巳)
        #[arg(long)]
        month_pillar: String,

        /// Gender (male, female)
        #[arg(long)]
        gender: String,

        /// Number of decade steps to print
        #[arg(long)]
        steps: Option<u32>,

        /// Age at which the first decade begins
        #[arg(long)]
        start_age: Option<u32>,
    },

    /// Print the sixty-pair sexagenary cycle table
    Cycle,
}

fn main() -> Result<()> {
    // Initialize logging
    bazi_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Effective config: {:?}", config);

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            name,
            place,
            json,
        } => cmd_chart(&config, date, time, gender, name, place, json),
        Commands::DaYun {
            year_pillar,
            month_pillar,
            gender,
            steps,
            start_age,
        } => cmd_dayun(&config, year_pillar, month_pillar, gender, steps, start_age),
        Commands::Cycle => cmd_cycle(),
    }
}

fn cmd_chart(
    config: &Config,
    date: String,
    time: String,
    gender: String,
    name: Option<String>,
    place: String,
    json: bool,
) -> Result<()> {
    let gender: Gender = gender.parse()?;
    let input = BirthInput {
        birth_date: date,
        birth_time: time,
        birth_place: place,
        gender,
        name,
    };

    let service = BaziService::from_config(config);
    let result = service.calculate(&input)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("chart serializes to JSON")
        );
        return Ok(());
    }

    display_chart(&input, &result);

    let direction = bazi_core::dayun::direction(gender, result.year_pillar.stem);
    display_da_yun_steps(
        bazi_core::dayun::sequence(result.month_pillar, direction, config.da_yun.steps)?,
        direction,
        result.start_age,
    );
    Ok(())
}

fn cmd_dayun(
    config: &Config,
    year_pillar: String,
    month_pillar: String,
    gender: String,
    steps: Option<u32>,
    start_age: Option<u32>,
) -> Result<()> {
    let gender: Gender = gender.parse()?;
    let year: Pillar = year_pillar.parse()?;
    let month: Pillar = month_pillar.parse()?;

    let direction = bazi_core::dayun::direction(gender, year.stem);
    let steps = steps.unwrap_or(config.da_yun.steps);
    let start_age = start_age.unwrap_or(config.da_yun.start_age).max(1);

    println!("Year pillar {} ({}), month pillar {}", year, gender, month);
    display_da_yun_steps(
        bazi_core::dayun::sequence(month, direction, steps)?,
        direction,
        start_age,
    );
    Ok(())
}

fn cmd_cycle() -> Result<()> {
    for (i, pillar) in bazi_core::cycle::all_pillars().iter().enumerate() {
        print!("{:>2} {}   ", i, pillar);
        if (i + 1) % 6 == 0 {
            println!();
        }
    }
    Ok(())
}

fn display_chart(input: &BirthInput, result: &BaziResult) {
    match &input.name {
        Some(name) => println!(
            "Chart for {}, {} {} ({})",
            name, input.birth_date, input.birth_time, input.gender
        ),
        None => println!(
            "Chart for {} {} ({})",
            input.birth_date, input.birth_time, input.gender
        ),
    }
    println!("  Year pillar:   {}", result.year_pillar);
    println!("  Month pillar:  {}", result.month_pillar);
    println!("  Day pillar:    {}", result.day_pillar);
    println!("  Hour pillar:   {}", result.hour_pillar);
    println!();
}

fn display_da_yun_steps(steps: Vec<Pillar>, direction: DaYunDirection, start_age: u32) {
    println!("Da Yun runs {} from age {}", direction, start_age);
    for (i, pillar) in steps.iter().enumerate() {
        let from_age = start_age + 10 * i as u32;
        println!("  {:>2}. {}   age {}-{}", i + 1, pillar, from_age, from_age + 9);
    }
}
