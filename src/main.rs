//! Zeta Planets CLI
//!
//! Usage:
//!   zeta-planets --fid 12345                  # Single planet
//!   zeta-planets --fid 12345 --json           # Planet as JSON
//!   zeta-planets --fid 12345 --svg ./planets  # Save SVG + JSON
//!   zeta-planets --interactive                # Session mode
//!   zeta-planets --serve                      # HTTP API server

use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use zeta_planets::core::{
    detect, run_server, save_planet, FixedIdentity, ServerConfig, Session, SessionEvent,
    TraitDecoder,
};
use zeta_planets::types::{IdentityValue, Planet, SessionOutput, SessionState};
use zeta_planets::{LAYOUT_VERSION, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "zeta-planets",
    version = VERSION,
    about = "Zeta Planets - a deterministic planet for every fid",
    long_about = "Derives a planet avatar from a Farcaster fid.\n\n\
                  The fid's decimal string is hashed with Keccak-256 and fixed\n\
                  windows of the digest select color, eyes, mouth, accessory\n\
                  and ring. Same fid, same planet, forever (layout v1).\n\n\
                  Modes:\n  \
                  --fid N        Single planet\n  \
                  --interactive  Session mode (detect / generate / reset)\n  \
                  --serve        HTTP API server"
)]
struct Args {
    /// Farcaster fid (single mode)
    #[arg(short, long, env = "ZETA_FID")]
    fid: Option<IdentityValue>,

    /// Interactive session mode
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, env = "ZETA_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,

    /// Prefix for image URLs returned by /generate-pfp
    #[arg(long, env = "ZETA_PUBLIC_URL", default_value = "")]
    public_url: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Save SVG + JSON into this directory
    #[arg(long)]
    svg: Option<String>,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show DNA window breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(if args.serve { "info" } else { "warn" });

    if args.no_color {
        colored::control::set_override(false);
    }

    let result = if args.serve {
        run_serve(&args).await
    } else if args.interactive || args.fid.is_none() {
        run_interactive(&args).await
    } else {
        run_single(&args).await
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise the mode's default level
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run single planet evaluation
async fn run_single(args: &Args) -> Result<(), Box<dyn Error>> {
    let detected = detect(&Session::new(), &FixedIdentity(args.fid)).await.session;
    let t = detected.apply(SessionEvent::Generate);

    let Some(planet) = t.session.planet() else {
        println!("{}", t.output.reason.description());
        return Err("could not generate".into());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(planet)?);
    } else {
        print_planet(planet);
        if args.verbose {
            print_windows(planet)?;
        }
    }

    if let Some(dir) = &args.svg {
        let path = save_planet(planet, dir)?;
        if !args.json {
            println!("{}", format!("  saved: {}", path).bright_black());
        }
    }
    Ok(())
}

/// Run interactive session mode
async fn run_interactive(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();

    print_header("Session Mode", args.no_color);
    println!("Enter an fid to detect, 'generate' to derive the planet,");
    println!("'svg' to save it, 'reset' to start over, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(session.state(), args.no_color));
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended.");
            break;
        }
        if line.is_empty() {
            continue;
        }

        let output = match line.to_ascii_lowercase().as_str() {
            "generate" | "g" => {
                let t = session.apply(SessionEvent::Generate);
                session = t.session;
                t.output
            }
            "reset" | "r" => {
                let t = session.apply(SessionEvent::Reset);
                session = t.session;
                t.output
            }
            "svg" => {
                match session.planet() {
                    Some(planet) => {
                        let dir = args.svg.as_deref().unwrap_or("./planets");
                        match save_planet(planet, dir) {
                            Ok(path) => println!("  saved: {}", path),
                            Err(e) => println!("  ⚠ could not save: {}", e),
                        }
                    }
                    None => println!("  nothing to save yet"),
                }
                continue;
            }
            _ => match line.parse::<IdentityValue>() {
                Ok(identity) => {
                    // New identity always starts from IDLE
                    let idle = session.apply(SessionEvent::Reset).session;
                    let t = detect(&idle, &FixedIdentity(Some(identity))).await;
                    session = t.session;
                    t.output
                }
                Err(_) => {
                    println!("  ⚠ expected an fid (positive integer) or a command");
                    continue;
                }
            },
        };

        print_output(&output, args);
    }
    Ok(())
}

/// Run HTTP API server
async fn run_serve(args: &Args) -> Result<(), Box<dyn Error>> {
    println!();
    println!("🪐 Zeta Planets v{} (layout v{})", VERSION, LAYOUT_VERSION);
    println!();

    let config = ServerConfig {
        addr: args.addr.clone(),
        public_url: args.public_url.clone(),
    };
    run_server(config).await
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    let title = format!("  Zeta Planets v{} - {}", VERSION, mode);
    println!("========================================");
    if no_color {
        println!("{}", title);
    } else {
        println!("{}", title.bold());
    }
    println!("========================================");
    println!();
}

/// Format session prompt
fn format_prompt(state: SessionState, no_color: bool) -> String {
    if no_color {
        format!("[{}] > ", state)
    } else {
        format!(
            "{}{} [{}]{} > ",
            state.color_code(),
            state.emoji(),
            state,
            SessionState::color_reset()
        )
    }
}

/// Print one transition
fn print_output(output: &SessionOutput, args: &Args) {
    if args.json {
        match serde_json::to_string(output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        }
        return;
    }

    if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }

    if let Some(planet) = &output.planet {
        print_planet(planet);
    }
}

/// Print planet summary with a color swatch
fn print_planet(planet: &Planet) {
    let (r, g, b) = planet.traits.primary_color.rgb();
    let traits = &planet.traits;

    println!("{} fid {}", "●".truecolor(r, g, b), planet.identity);
    println!("  dna:       {}", planet.dna.as_str().bright_black());
    println!(
        "  color:     {} {}",
        traits.primary_color.name(),
        traits.primary_color.hex().truecolor(r, g, b)
    );
    println!("  eyes:      {} {}", traits.eye_style.name(), traits.eye_style.glyph());
    println!("  mouth:     {} {}", traits.mouth.name(), traits.mouth.glyph());
    println!("  accessory: {}", traits.accessory.name());
    println!("  ring:      {}", if traits.has_ring { "yes" } else { "no" });
}

/// Print the raw window values behind each trait
fn print_windows(planet: &Planet) -> Result<(), Box<dyn Error>> {
    let values = TraitDecoder::new().window_values(planet.dna.as_str())?;
    println!("┌──────────────────────────────────────┐");
    println!("│ Layout v{} windows (raw hex offsets)", LAYOUT_VERSION);
    println!("├──────────────────────────────────────┤");
    for (window, value) in values {
        println!(
            "│   {:<14} [{:>2}..{:>2}) = 0x{:02x} ({})",
            window.name,
            window.offset,
            window.offset + window.len,
            value,
            value
        );
    }
    println!("└──────────────────────────────────────┘");
    Ok(())
}
