use anyhow::Result;
use std::time::Instant;
use tour_seed_sql::{
    cli::{Cli, Commands},
    convert_file, parser,
    schema::ALL_TABLES,
    transform,
    writer::{generate_schema, OutputTarget},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert { input, output } => {
            let start = Instant::now();
            let target = OutputTarget::from_path(&output);

            let summary = convert_file(&input, &target)?;

            // Keep stdout clean when it carries the SQL
            if target != OutputTarget::Stdout {
                let elapsed = start.elapsed();
                println!(
                    "Wrote {:?} ({} statements) from {:?} in {:.1}s",
                    output,
                    summary.statements,
                    input,
                    elapsed.as_secs_f64()
                );
            }
        }

        Commands::Stats { input } => {
            let document = parser::load_document(&input)?;
            let (_, summary) = transform(&document);

            println!("{:?}:\n", input);
            println!("  categories  {}", summary.categories);
            println!("  tours       {}", summary.tours);
            println!("  waypoints   {}", summary.waypoints);
            println!("  landmarks   {}", summary.landmarks);
            println!("  photos      {}", summary.photos);
            println!("  statements  {}", summary.statements);
        }

        Commands::Schema => {
            println!("{}", generate_schema());
        }

        Commands::ListTables => {
            println!("Target tables:\n");
            for table in ALL_TABLES {
                println!("  {} ({})", table.name, table.column_names().join(", "));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
