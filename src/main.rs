use clap::Parser;
use gitprompt::core::{
    config::{PromptConfig, FORMAT_ENV},
    error::Result,
    format_help, print_error, prompt_text, read_status, render,
};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitprompt")]
#[command(about = "Print a compact, colored git status summary for shell prompts")]
#[command(version)]
struct Cli {
    /// Define output format
    #[arg(long, value_name = "FORMAT", long_help = format_help())]
    format: Option<String>,

    /// Print zsh width control characters
    #[arg(long)]
    zsh: bool,

    /// Directory to inspect instead of the current one
    #[arg(long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Print the collected status as JSON instead of rendering it
    #[arg(long)]
    dump_status: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stay quiet by default: anything on stderr lands next to the prompt.
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let status = match cli.path.map_or_else(env::current_dir, Ok) {
        Ok(path) => read_status(&path),
        Err(e) => Err(e.into()),
    };
    let status = match status {
        Ok(status) => status,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if cli.dump_status {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let config = PromptConfig::load();
    let (format, source) = config.resolve_format(cli.format, env::var(FORMAT_ENV).ok());
    log::debug!("Using format {format:?} from {source:?}");

    let rendered = render(status.as_ref(), &format);
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", prompt_text(&rendered, cli.zsh || config.zsh))?;
    stdout.flush()?;

    Ok(())
}
