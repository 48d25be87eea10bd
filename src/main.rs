//! AquaFarm-OS demo binary
//!
//! Seeds the demo farm, prints the dashboard headline figures, and
//! optionally sends a one-shot advisory query or water-health analysis.
//! The interactive UI is a separate surface; this binary exercises the core
//! end to end from the terminal.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aquafarm_os::advisory::prompts::ADVISOR_GREETING;
use aquafarm_os::metrics::{self, round1, round2};
use aquafarm_os::{
    AdvisoryClient, AdvisoryConfig, AdvisorySnapshot, ExpenseCategory, FarmState, GeminiBackend,
};

#[derive(Parser, Debug)]
#[command(name = "aquafarm-os", about = "Aquaculture operational intelligence demo")]
struct Args {
    /// One-shot question for the advisory model (uses current farm context)
    #[arg(long)]
    ask: Option<String>,

    /// Request an advisory analysis of the most recent water sample
    #[arg(long)]
    analyze_water: bool,

    /// Record an expense before the dashboard renders, dated today.
    /// May be repeated.
    #[arg(long, value_name = "CATEGORY:AMOUNT[:DESCRIPTION]")]
    expense: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut farm = FarmState::demo();
    seed_demo_expenses(&mut farm);

    for spec in &args.expense {
        let (category, amount, description) = parse_expense_arg(spec)?;
        farm.add_expense(category, amount, chrono::Local::now().date_naive(), &description);
    }

    print_dashboard(&farm);

    if args.ask.is_none() && !args.analyze_water {
        return Ok(());
    }

    let config = AdvisoryConfig::from_env();
    let client = AdvisoryClient::new(Box::new(GeminiBackend::new(config)));

    if args.analyze_water {
        if let Some(log) = farm.water_logs().last() {
            println!("\n=== Water-Health Analysis ({}) ===", log.tank_id);
            let analysis = client.analyze_or_fallback(log).await;
            println!("{analysis}");
        } else {
            println!("\nNo water samples recorded yet.");
        }
    }

    if let Some(question) = args.ask {
        println!("\n=== Advisor ===");
        println!("[advisor] {ADVISOR_GREETING}");
        println!("[you] {question}");

        farm.append_user_message(&question);
        let snapshot = AdvisorySnapshot::capture(&farm);
        let answer = client.advise_or_fallback(&question, Some(&snapshot)).await;
        let is_fallback = answer == aquafarm_os::ADVISORY_FALLBACK;
        farm.append_advisor_message(&answer, is_fallback);

        println!("[advisor] {answer}");
    }

    Ok(())
}

/// Parse a `CATEGORY:AMOUNT[:DESCRIPTION]` expense argument
fn parse_expense_arg(spec: &str) -> Result<(ExpenseCategory, f64, String)> {
    let mut parts = spec.splitn(3, ':');
    let category_str = parts.next().unwrap_or_default();
    let amount_str = parts.next().unwrap_or_default();
    let description = parts.next().unwrap_or("unspecified").to_string();

    let category = ExpenseCategory::from_str(category_str)
        .ok_or_else(|| anyhow::anyhow!("Unknown expense category: {category_str}"))?;
    let amount: f64 = amount_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid expense amount: {amount_str}"))?;

    Ok((category, amount, description))
}

/// A few representative operating expenses for the finance panel
fn seed_demo_expenses(farm: &mut FarmState) {
    let entries = [
        (ExpenseCategory::Feed, 620.0, 5, "Grower pellets, 25 bags"),
        (ExpenseCategory::Energy, 140.0, 8, "Aerator and pump power"),
        (ExpenseCategory::Labor, 300.0, 15, "Pond maintenance crew"),
        (ExpenseCategory::Feed, 180.0, 21, "Fry starter crumble"),
    ];
    for (category, amount, day, description) in entries {
        let date = NaiveDate::from_ymd_opt(2023, 11, day).expect("valid date");
        farm.add_expense(category, amount, date, description);
    }
}

fn print_dashboard(farm: &FarmState) {
    let batches = farm.batches();

    println!("=== Farm Overview ===");
    println!("Population:    {} fish", metrics::total_population(batches));
    println!("Biomass:       {} kg", round1(metrics::total_biomass_kg(batches)));
    println!("Active tanks:  {}", metrics::active_tank_count(batches));

    println!("\n=== Batches ===");
    for batch in batches {
        println!(
            "{} [{}] {} | {} fish @ {} g | biomass {} kg | feed {} kg/day",
            batch.name,
            batch.stage.short_code(),
            batch.tank_id,
            batch.current_quantity,
            batch.average_weight_g,
            round2(metrics::biomass_kg(batch)),
            round2(metrics::daily_feed_ration_kg(batch)),
        );
    }

    if let Some(log) = farm.water_logs().last() {
        println!("\n=== Latest Water Sample ({}, {}) ===", log.tank_id, log.date);
        for reading in metrics::log_status(log) {
            let flag = if reading.safe { "ok" } else { "CHECK" };
            let unit = reading.parameter.unit();
            println!(
                "{:<18} {:>6} {:<4} [{}]",
                reading.parameter.display_name(),
                reading.value,
                unit,
                flag
            );
        }
    }

    let summary = metrics::expense_summary(farm.expenses());
    if summary.total > 0.0 {
        println!("\n=== Expenses ===");
        println!("Total: {:.2}", summary.total);
        for entry in &summary.by_category {
            println!("  {:<20} {:.2}", entry.category.display_name(), entry.total);
        }
        println!("Feed share: {:.1}% of total", summary.feed_percentage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expense_arg() {
        let (category, amount, description) =
            parse_expense_arg("feed:180.5:Fry starter crumble").unwrap();
        assert_eq!(category, ExpenseCategory::Feed);
        assert_eq!(amount, 180.5);
        assert_eq!(description, "Fry starter crumble");

        // Description is optional
        let (category, amount, description) = parse_expense_arg("energy:55").unwrap();
        assert_eq!(category, ExpenseCategory::Energy);
        assert_eq!(amount, 55.0);
        assert_eq!(description, "unspecified");

        assert!(parse_expense_arg("diesel:10").is_err());
        assert!(parse_expense_arg("feed:lots").is_err());
    }
}
