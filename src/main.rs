use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use week_zero::{
    calculate_change, conditional_sum, repeat_numbers, talking_calendar,
    talking_calendar_strict, RepeatPair,
};

/// Week Zero - repeat numbers, conditional sums, talking calendar, change
#[derive(Parser, Debug)]
#[command(name = "week-zero")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Repeat numbers, e.g. '[[1, 10], [56, 7]]'
    Repeat {
        data: String,
    },
    /// Sum the even or odd integers of a JSON array
    Sum {
        values: String,
        #[arg(long, default_value = "even")]
        condition: String,
    },
    /// Spell out a YYYY/MM/DD date
    Calendar {
        date: String,
        /// Reject dates that are not real calendar dates
        #[arg(long)]
        strict: bool,
    },
    /// Break change into denominations (amounts in cents)
    Change {
        #[arg(long)]
        total: i64,
        #[arg(long)]
        cash: i64,
    },
    /// Run every task with the sample inputs
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (RUST_LOG wins when set)
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = week_zero::VERSION, "starting");

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Repeat { data } => run_repeat(&data, cli.json)?,
        Commands::Sum { values, condition } => run_sum(&values, &condition, cli.json)?,
        Commands::Calendar { date, strict } => run_calendar(&date, strict, cli.json)?,
        Commands::Change { total, cash } => run_change(total, cash, cli.json)?,
        Commands::Demo => run_demo(cli.json)?,
    }

    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

fn run_repeat(data: &str, as_json: bool) -> Result<()> {
    let pairs: Vec<RepeatPair> = serde_json::from_str(data)
        .with_context(|| format!("Failed to parse repeat data: {}", data))?;

    let output = repeat_numbers(&pairs);
    emit(as_json, json!({ "task": "repeat", "output": output }), &output);
    Ok(())
}

fn run_sum(values: &str, condition: &str, as_json: bool) -> Result<()> {
    let values: Vec<Value> = serde_json::from_str(values)
        .with_context(|| format!("Failed to parse values: {}", values))?;

    let sum = conditional_sum(&values, condition);
    emit(
        as_json,
        json!({ "task": "sum", "condition": condition, "output": sum }),
        &sum.to_string(),
    );
    Ok(())
}

fn run_calendar(date: &str, strict: bool, as_json: bool) -> Result<()> {
    let output = if strict {
        talking_calendar_strict(date)?
    } else {
        talking_calendar(date)
    };

    emit(as_json, json!({ "task": "calendar", "output": output }), &output);
    Ok(())
}

fn run_change(total: i64, cash: i64, as_json: bool) -> Result<()> {
    let change = calculate_change(total, cash);

    let value = json!({ "task": "change", "output": serde_json::to_value(&change)? });
    emit(as_json, value, &change.to_string());
    Ok(())
}

fn emit(as_json: bool, value: Value, text: &str) {
    if as_json {
        println!("{}", value);
    } else {
        println!("{}", text);
    }
}

// ============================================================================
// Demo
// ============================================================================

fn run_demo(as_json: bool) -> Result<()> {
    let first: Vec<RepeatPair> = vec![RepeatPair::new(1, 10), RepeatPair::new(56, 7)];
    let second: Vec<RepeatPair> = vec![RepeatPair::new(85, 2)];
    let values: Vec<Value> = (1..=5).map(|i| json!(i)).collect();
    let date = "1987/01/06";
    let (total, cash) = (209, 1000);

    if as_json {
        let report = json!({
            "repeat": [repeat_numbers(&first), repeat_numbers(&second)],
            "sum": conditional_sum(&values, "odd"),
            "calendar": talking_calendar(date),
            "change": serde_json::to_value(calculate_change(total, cash))?,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🔁 Task 1: Repeat Numbers");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Input: data=[[1, 10], [56, 7]]");
    println!("Output: {}", repeat_numbers(&first));
    println!("Input: data=[[85, 2]]");
    println!("Output: {}", repeat_numbers(&second));

    println!("\n➕ Task 2: Conditional Sum");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Input: values=[1, 2, 3, 4, 5] | condition=\"odd\"");
    println!("Output: {}", conditional_sum(&values, "odd"));

    println!("\n📅 Task 3: Talking Calendar");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Input: date=\"{}\"", date);
    println!("Output: {}", talking_calendar(date));

    println!("\n💵 Task 4: Change Calculator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Input: total={} | cash={}", total, cash);
    println!("Output: {}", calculate_change(total, cash));

    Ok(())
}
