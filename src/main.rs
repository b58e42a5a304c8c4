use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};

use sched_sim::config::SimulationConfig;
use sched_sim::input::{format_processes, read_processes};
use sched_sim::models::Process;
use sched_sim::report::{render_comparison_chart, render_result};
use sched_sim::scheduler::{compare, simulate, Algorithm, SjfMode};
use sched_sim::workload::WorkloadGenerator;

#[derive(Debug, Parser)]
#[command(name = "sched-sim", version, about = "CPU scheduling simulator (FCFS, SJF, Round-Robin)")]
struct Cli {
    /// Process list file (`id arrival burst` per line)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Job-First (non-preemptive)
    Sjf {
        /// Only pick among processes that have already arrived
        #[arg(long)]
        arrival_gated: bool,
    },
    /// Round-Robin
    Rr {
        /// Time quantum
        #[arg(short, long, allow_negative_numbers = true)]
        quantum: Option<i64>,
    },
    /// Run FCFS, RR and SJF and chart their averages
    Compare {
        /// Round-Robin time quantum
        #[arg(short, long, allow_negative_numbers = true)]
        quantum: Option<i64>,
        /// Print the comparison as JSON instead of charts
        #[arg(long)]
        json: bool,
    },
    /// Print a random process list in input format
    Generate {
        /// Number of processes
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Largest arrival time
        #[arg(long, default_value_t = 10)]
        max_arrival: i64,
        /// Largest burst time
        #[arg(long, default_value_t = 10)]
        max_burst: i64,
    },
    /// Interactive menu (default)
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(input) = cli.input {
        config.input = input;
    }
    debug!("configuration: {config:?}");

    match cli.command.unwrap_or(Command::Menu) {
        Command::Generate {
            count,
            seed,
            max_arrival,
            max_burst,
        } => {
            let processes = WorkloadGenerator::new(count)
                .with_arrival(0..=max_arrival)
                .with_burst(1..=max_burst)
                .generate(seed)?;
            print!("{}", format_processes(&processes));
            Ok(())
        }
        Command::Fcfs => run_one(Algorithm::Fcfs, &load(&config)?, &mut io::stdout()),
        Command::Sjf { arrival_gated } => {
            let mode = if arrival_gated {
                SjfMode::ArrivalGated
            } else {
                config.sjf_mode
            };
            run_one(Algorithm::Sjf { mode }, &load(&config)?, &mut io::stdout())
        }
        Command::Rr { quantum } => {
            let quantum = quantum
                .or(config.time_quantum)
                .context("round robin needs --quantum (or time_quantum in the config)")?;
            run_one(Algorithm::RoundRobin { quantum }, &load(&config)?, &mut io::stdout())
        }
        Command::Compare { quantum, json } => {
            if quantum.is_some() {
                config.time_quantum = quantum;
            }
            run_compare(&config, &load(&config)?, json, &mut io::stdout())
        }
        Command::Menu => {
            let processes = load(&config)?;
            let stdin = io::stdin();
            menu(&config, &processes, &mut stdin.lock(), &mut io::stdout())
        }
    }
}

fn load(config: &SimulationConfig) -> Result<Vec<Process>> {
    read_processes(&config.input)
        .with_context(|| format!("reading processes from {}", config.input.display()))
}

fn run_one<W: Write>(algorithm: Algorithm, processes: &[Process], output: &mut W) -> Result<()> {
    let scheduler = algorithm.build()?;
    let result = simulate(scheduler.as_ref(), processes)?;
    writeln!(output, "{}", render_result(&result))?;
    Ok(())
}

fn run_compare<W: Write>(
    config: &SimulationConfig,
    processes: &[Process],
    json: bool,
    output: &mut W,
) -> Result<()> {
    let comparison = compare(&config.comparison_algorithms()?, processes)?;
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&comparison)?)?;
    } else {
        for result in &comparison.results {
            writeln!(output, "{}", render_result(result))?;
        }
        writeln!(output, "{}", render_comparison_chart(&comparison, config.chart_width))?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_quantum<R: BufRead, W: Write>(
    config: &SimulationConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Option<i64>> {
    if let Some(q) = config.time_quantum.filter(|&q| q > 0) {
        return Ok(Some(q));
    }
    loop {
        let Some(answer) = prompt(
            input,
            output,
            "Enter the Time Quantum for Round Robin Scheduling: ",
        )?
        else {
            return Ok(None);
        };
        match answer.parse::<i64>() {
            Ok(q) if q > 0 => return Ok(Some(q)),
            _ => writeln!(output, "Time quantum must be a positive integer.")?,
        }
    }
}

fn menu<R: BufRead, W: Write>(
    config: &SimulationConfig,
    processes: &[Process],
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    if processes.is_empty() {
        bail!("{} contains no processes", config.input.display());
    }

    loop {
        writeln!(output, "\nSelect a CPU Scheduling Algorithm:")?;
        writeln!(output, "1. First-Come-First-Serve (FCFS)")?;
        writeln!(output, "2. Shortest Job First (SJF)")?;
        writeln!(output, "3. Round Robin (RR)")?;
        writeln!(output, "4. Comparative Analysis")?;
        writeln!(output, "5. Exit")?;

        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => run_one(Algorithm::Fcfs, processes, output)?,
            "2" => run_one(
                Algorithm::Sjf {
                    mode: config.sjf_mode,
                },
                processes,
                output,
            )?,
            "3" => {
                let Some(quantum) = ask_quantum(config, input, output)? else {
                    return Ok(());
                };
                run_one(Algorithm::RoundRobin { quantum }, processes, output)?;
            }
            "4" => {
                let Some(quantum) = ask_quantum(config, input, output)? else {
                    return Ok(());
                };
                let mut run_config = config.clone();
                run_config.time_quantum = Some(quantum);
                run_compare(&run_config, processes, false, output)?;
            }
            "5" => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}
