use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use unit_converter::config::Config;
use unit_converter::controller::ConverterForm;
use unit_converter::request::{ConversionRequest, Converter};
use unit_converter::units::{
    looks_like_quantity, parse_quantity, TimeTable, TimeUnit, Unit, UnitCategory, UnitTag,
};

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(about = "Convert length, weight, volume, temperature and time values", long_about = None)]
struct Cli {
    /// Config file (default: ./unit-converter.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value (e.g. "12.5") or quantity (e.g. "3600 s")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// FROM and TO units, or only TO when VALUE is a quantity
        #[arg(num_args = 1..=2, required = true)]
        units: Vec<String>,

        /// Category the units must belong to
        #[arg(short, long)]
        category: Option<String>,

        /// Time table: legacy or consistent (overrides config)
        #[arg(short, long)]
        table: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories, or the units of one category
    List {
        category: Option<String>,
    },

    /// Print the time conversion factors
    Table {
        /// legacy or consistent (overrides config)
        #[arg(short, long)]
        table: Option<String>,
    },

    /// Print the form summary line for a category
    Form {
        #[arg(short, long, default_value = "length")]
        category: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        value: String,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Convert {
            value,
            units,
            category,
            table,
            json,
        } => convert_value(config_path, &value, &units, category.as_deref(), table.as_deref(), json),
        Commands::List { category } => list_units(category.as_deref()),
        Commands::Table { table } => print_time_table(config_path, table.as_deref()),
        Commands::Form {
            category,
            value,
            from,
            to,
        } => print_form(config_path, &category, &value, from.as_deref(), to.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Only the subcommands that use the config read it
fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    Ok(Config::discover(path)?)
}

fn time_table(config_path: Option<&Path>, flag: Option<&str>) -> Result<TimeTable, Box<dyn std::error::Error>> {
    match flag {
        Some(name) => Ok(name.parse::<TimeTable>()?),
        None => Ok(load_config(config_path)?.time_table),
    }
}

fn convert_value(
    config_path: Option<&Path>,
    value: &str,
    units: &[String],
    category: Option<&str>,
    table: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = match (looks_like_quantity(value), units) {
        (false, [from, to]) => ConversionRequest::parse(category, value, from, to)?,
        (true, [to]) => {
            let (amount, from) = parse_quantity(value)?;
            let to = match category {
                Some(c) => Unit::parse_in(c.parse()?, to)?,
                None => Unit::parse_in(from.category(), to)?,
            };
            ConversionRequest::new(amount, from, to)?
        }
        (true, _) => return Err(format!("'{}' already names its unit; give only TO", value.trim()).into()),
        (false, _) => return Err("expected FROM and TO units".into()),
    };

    let converter = Converter::new(time_table(config_path, table)?);
    let result = converter.convert(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.rendered);
    }

    Ok(())
}

fn list_units(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match category {
        Some(name) => {
            let category: UnitCategory = name.parse()?;
            println!("Units ({}):", category);
            for unit in Unit::all_in(category) {
                println!("  - {}", unit);
            }
        }
        None => {
            println!("Categories:");
            for category in UnitCategory::ALL {
                let names: Vec<&str> = Unit::all_in(category).iter().map(|u| u.name()).collect();
                println!("  - {}: {}", category, names.join(", "));
            }
        }
    }

    Ok(())
}

fn print_time_table(config_path: Option<&Path>, table: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let table = time_table(config_path, table)?;
    let units = TimeUnit::all();

    println!("Time factors ({}), row -> column:", table);
    print!("{:>10}", "");
    for to in units {
        print!("{:>16}", to.name());
    }
    println!();

    for &from in units {
        print!("{:>10}", from.name());
        for &to in units {
            print!("{:>16}", format_factor(table.step(from, to).factor()));
        }
        println!();
    }

    Ok(())
}

fn format_factor(factor: f64) -> String {
    if factor >= 0.001 {
        let text = format!("{:.6}", factor);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{:.6e}", factor)
    }
}

fn print_form(
    config_path: Option<&Path>,
    category: &str,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category: UnitCategory = category.parse()?;

    let config = load_config(config_path)?;
    let mut form = ConverterForm::with_config(&config);
    form.select_category(category);
    form.set_input_text(value)?;
    if let Some(from) = from {
        form.select_from(Unit::parse_in(category, from)?)?;
    }
    if let Some(to) = to {
        form.select_to(Unit::parse_in(category, to)?)?;
    }

    println!("{}", form.summary());
    Ok(())
}
