use clap::{Parser, Subcommand, ValueEnum};
use shape_conv::{ConvertOptions, ConvertResult, Converter, Detector, Resource, XmlPolicy, DEFAULT_MAX_DEPTH};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shape")]
#[command(about = "Detect and convert JSON, XML and serialized data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the detected format of the input
    Detect {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Convert the input to another format
    Convert {
        /// Target format
        #[arg(short, long, value_enum)]
        to: Target,

        /// Root element name for XML output
        #[arg(long, default_value = "root")]
        root: String,

        /// Attribute folding for XML input: none, merge, group or attribs
        #[arg(long, default_value = "group")]
        policy: XmlPolicy,

        /// Nesting limit for serialized and XML input
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Json,
    Xml,
    Serialized,
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { input } => {
            let text = read_input(input.as_ref())?;
            println!("{}", Detector::default().detect(&Resource::from(text)));
        }
        Commands::Convert {
            to,
            root,
            policy,
            max_depth,
            input,
        } => {
            let text = read_input(input.as_ref())?;
            let options = ConvertOptions::default()
                .with_root_name(root)
                .with_policy(policy)
                .with_max_depth(max_depth);
            let converter = Converter::new(options);
            let resource = Resource::from(text);
            let output = match to {
                Target::Json => converter.to_json(&resource),
                Target::Xml => converter.to_xml(&resource),
                Target::Serialized => converter.to_serialized(&resource),
            };
            println!("{}", output);
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> ConvertResult<String> {
    let mut text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    // editors and shells append a newline that would defeat detection
    text.truncate(text.trim_end().len());
    Ok(text)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
