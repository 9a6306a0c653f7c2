use clap::Parser;
use statepath::colors::ColorScheme;
use statepath::display::{display_search_info, display_search_results};
use statepath::logging::init_tracing;
use statepath::report::JsonReport;
use statepath::{Args, CliError, SearchRequest, execute_search};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = init_tracing(args.verbose, args.log_level.as_deref()) {
        eprintln!("{} {}", colors.error("⚠️  Logging disabled:"), error);
    }

    if let Err(error) = run(&args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), CliError> {
    let request = SearchRequest::from_args(args)?;

    if args.verbose && !args.json {
        display_search_info(&request, colors);
    }

    let report = execute_search(&request)?;

    if args.json {
        println!("{}", JsonReport::new(&request, &report).to_json()?);
    } else {
        display_search_results(&report, &request, args, colors);
    }
    Ok(())
}
