//! Display functions for game rows and command results

use super::formatters::{colored_symbol, create_progress_bar, feedback_to_arrows, feedback_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::engine::{Cell, ROWS};
use colored::Colorize;

/// Print one submitted row with colored cells and arrow hints
pub fn print_row(index: usize, cells: &[Cell]) {
    let mut line = format!("  {} ", (index + 1).to_string().bright_black());
    let mut arrows = Vec::with_capacity(cells.len());

    for cell in cells {
        match (cell.symbol, cell.feedback) {
            (Some(symbol), Some(feedback)) => {
                line.push_str(&colored_symbol(symbol.to_char(), feedback).to_string());
                arrows.push(feedback);
            }
            (Some(symbol), None) => line.push_str(&format!(" {symbol} ")),
            (None, _) => line.push_str(" _ "),
        }
    }

    println!("{line}   {}", feedback_to_arrows(&arrows).bright_white());
}

/// Print the end-of-game banner revealing the secret
pub fn print_game_over(won: bool, secret: &str, attempts: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if won {
        println!(
            "  {}",
            format!("🎉 You win! The hex was #{secret}.").bright_green().bold()
        );
        println!(
            "  Solved in {} {}",
            attempts.to_string().bright_cyan().bold(),
            if attempts == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!(
            "  {}",
            format!("💀 You lose! The hex was #{secret}.").bright_red().bold()
        );
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", format!("#{}", result.target).bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess,
            feedback_to_emoji(&step.feedback),
            feedback_to_arrows(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_games > 0 {
        result.games_won as f64 / result.total_games as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{win_rate:.1}%").bright_yellow().bold()
    );
    println!(
        "   Average rows:     {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rows in 1..=ROWS {
        if let Some(&count) = result.distribution.get(&rows) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rows}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }
    let lost = result.total_games - result.games_won;
    if lost > 0 {
        println!("   {} {lost}", "X:".red());
    }
}
