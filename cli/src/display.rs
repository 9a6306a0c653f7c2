use statepath_core::StrategyReport;

use crate::args::{AlgorithmChoice, Args};
use crate::colors::ColorScheme;
use crate::search::{SearchReport, SearchRequest, SearchResult};

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🧭 Finding path from {} to {}",
        colors.state(&format!("\"{}\"", request.from_label)),
        colors.state(&format!("\"{}\"", request.to_label))
    );

    match request.algorithm {
        AlgorithmChoice::One(algorithm) => {
            println!("⚙️  Using {}", colors.algorithm(algorithm.as_str()));
        }
        AlgorithmChoice::All => println!("⚙️  Comparing every applicable strategy"),
    }

    if let Some(budget) = request.config.expansion_budget {
        println!(
            "⏱️  Giving up after {} expansions",
            colors.number(&format_number(budget))
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    report: &SearchReport,
    request: &SearchRequest,
    display_options: &Args,
    colors: &ColorScheme,
) {
    let is_verbose = display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match report {
        SearchReport::Single(result) if result.path_found => {
            display_successful_path(result, display_options, colors);
            if is_verbose {
                display_search_statistics(result, colors);
            }
        }
        SearchReport::Single(result) => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.state(&format!("\"{}\"", request.from_label)),
                colors.state(&format!("\"{}\"", request.to_label))
            );
            if is_verbose {
                display_search_statistics(result, colors);
            }
        }
        SearchReport::Comparison { strategies } => display_comparison(strategies, colors),
    }
}

fn display_successful_path(result: &SearchResult, display_options: &Args, colors: &ColorScheme) {
    if display_options.verbose {
        println!(
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&result.steps.to_string())
        );
    }

    println!("{}", format_path_flow(&result.path, colors));

    if let Some(cost) = result.cost {
        println!(
            "{} {}",
            colors.stats("💰 Cost:"),
            colors.number(&format_cost(cost))
        );
    }

    // Grid overlay only if not in quiet mode
    if let Some(overlay) = result.overlay.as_deref().filter(|_| !display_options.quiet) {
        println!();
        println!("{}", color_overlay(overlay, colors));
    }
}

pub fn format_path_flow(path: &[String], colors: &ColorScheme) -> String {
    path.iter()
        .map(|label| colors.state(&format!("\"{label}\"")).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn color_overlay(overlay: &str, colors: &ColorScheme) -> String {
    overlay
        .chars()
        .map(|cell| match cell {
            '*' => colors.path_cell("*").to_string(),
            '#' => colors.wall("#").to_string(),
            'S' | 'G' => colors.success(&cell.to_string()).to_string(),
            other => other.to_string(),
        })
        .collect()
}

fn display_comparison(strategies: &[StrategyReport], colors: &ColorScheme) {
    println!(
        "{:<16} {:>6} {:>10} {:>10} {:>10}",
        "algorithm", "steps", "cost", "expanded", "ms"
    );

    for report in strategies {
        let name = colors.algorithm(&format!("{:<16}", report.algorithm.as_str()));

        if let Some(error) = &report.error {
            println!("{} {}", name, colors.error(error));
        } else if !report.path_found {
            println!("{} {}", name, colors.error("no path"));
        } else {
            println!(
                "{} {:>6} {:>10} {:>10} {:>10.3}",
                name,
                report.path_length,
                format_cost(report.cost),
                format_number(report.stats.states_expanded),
                report.stats.elapsed.as_secs_f64() * 1000.0
            );
        }
    }
}

fn display_search_statistics(result: &SearchResult, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Expanded {} states, discovered {} in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(result.stats.states_expanded)),
        colors.number(&format_number(result.stats.states_discovered)),
        colors.number(&format!("{:.3}", result.stats.elapsed.as_secs_f64()))
    );
}

/// Costs print without a fraction when they are whole
pub fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 {
        format!("{cost:.0}")
    } else {
        format!("{cost:.3}")
    }
}

/// `1234567` -> `1,234,567`
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
