//! # cardgen CLI
//!
//! Command-line interface for the design engine.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP API
//! cardgen serve --listen 0.0.0.0:5000
//!
//! # List procedural icon templates
//! cardgen icons --count 8
//!
//! # Render an icon to SVG
//! cardgen icon gen-orbits-3 --company Nova --initials NV --out nova.svg
//!
//! # Resolve a suggestion into a render plan
//! cardgen layout suggestion.json --width 1050 --height 600
//!
//! # Dump the card template library
//! cardgen templates --count 20
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use cardgen::{
    CardgenError, catalog,
    color::Hex,
    icons::{self, BrandParams, IconLayout, IconLayoutTemplate, TextAlign},
    layout::{self, Canvas, HouseLayout, LayoutOptions},
    server::{self, ServerConfig},
    suggestion::DesignSuggestion,
};

/// cardgen - Business card and logo design engine
#[derive(Parser, Debug)]
#[command(name = "cardgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "CARDGEN_LISTEN", default_value = "0.0.0.0:5000")]
        listen: String,

        /// Base URL of an external design service
        #[arg(long, env = "CARDGEN_PROVIDER_URL")]
        provider_url: Option<String>,

        /// Seconds a remembered logo lives
        #[arg(long, env = "CARDGEN_CACHE_TTL_SECS", default_value = "3600")]
        cache_ttl_secs: u64,
    },

    /// List procedural icon templates
    Icons {
        /// Number of templates
        #[arg(long, default_value_t = icons::DEFAULT_TEMPLATE_COUNT)]
        count: usize,
    },

    /// Render an icon template for a brand
    Icon {
        /// Template id (e.g. gen-chevrons-1)
        id: String,

        /// Company name
        #[arg(long, default_value = "Brand")]
        company: String,

        /// Initials shown under the company name
        #[arg(long, default_value = "AA")]
        initials: String,

        /// Primary color
        #[arg(long, value_parser = parse_hex)]
        primary: Option<Hex>,

        /// Secondary color
        #[arg(long, value_parser = parse_hex)]
        secondary: Option<Hex>,

        /// Font family
        #[arg(long)]
        font: Option<String>,

        /// Stroke width
        #[arg(long)]
        stroke_width: Option<f64>,

        /// Extra rotation in degrees
        #[arg(long)]
        rotation: Option<f64>,

        /// Text placement: icon-beside or icon-above
        #[arg(long, value_parser = parse_icon_layout)]
        layout: Option<IconLayoutTemplate>,

        /// Text alignment: start, center or end
        #[arg(long, value_parser = parse_align)]
        align: Option<TextAlign>,

        /// Gap between icon and text
        #[arg(long)]
        spacing: Option<f64>,

        /// Print the shape tree as JSON instead of SVG
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Resolve a design suggestion into a render plan
    Layout {
        /// Suggestion JSON file
        file: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value = "500")]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value = "280")]
        height: f64,

        /// House layout (left-grid, centered, split-banner)
        #[arg(long)]
        house: Option<String>,

        /// Keep the suggestion's positions even with a house layout
        #[arg(long)]
        force_positions: bool,
    },

    /// Print card template library entries as JSON
    Templates {
        /// Number of templates
        #[arg(long, default_value_t = catalog::DEFAULT_CARD_TEMPLATES)]
        count: usize,
    },
}

fn parse_hex(s: &str) -> Result<Hex, String> {
    Hex::parse(s).ok_or_else(|| format!("'{}' is not a #rgb or #rrggbb color", s))
}

fn parse_icon_layout(s: &str) -> Result<IconLayoutTemplate, String> {
    match s {
        "icon-beside" => Ok(IconLayoutTemplate::IconBeside),
        "icon-above" => Ok(IconLayoutTemplate::IconAbove),
        _ => Err(format!("unknown layout '{}' (expected icon-beside or icon-above)", s)),
    }
}

fn parse_align(s: &str) -> Result<TextAlign, String> {
    match s {
        "start" => Ok(TextAlign::Start),
        "center" => Ok(TextAlign::Center),
        "end" => Ok(TextAlign::End),
        _ => Err(format!("unknown alignment '{}' (expected start, center or end)", s)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CardgenError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            provider_url,
            cache_ttl_secs,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                provider_url,
                cache_ttl: Duration::from_secs(cache_ttl_secs),
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::Icons { count } => {
            for template in icons::generate_templates(count) {
                println!("{:<28} {}", template.id, template.label);
            }
        }

        Commands::Icon {
            id,
            company,
            initials,
            primary,
            secondary,
            font,
            stroke_width,
            rotation,
            layout,
            align,
            spacing,
            json,
            out,
        } => {
            let template = icons::template_by_id(&id).ok_or_else(|| {
                CardgenError::NotFound(format!(
                    "Unknown icon template '{}'. Run `cardgen icons` to see available ids.",
                    id
                ))
            })?;

            let defaults = BrandParams::default();
            let brand = BrandParams {
                company_name: company,
                initials,
                primary_color: primary.unwrap_or(defaults.primary_color.clone()),
                secondary_color: secondary.unwrap_or(defaults.secondary_color.clone()),
                font: font.unwrap_or(defaults.font.clone()),
                stroke_width: stroke_width.unwrap_or(defaults.stroke_width),
                rotation: rotation.unwrap_or(defaults.rotation),
                layout: IconLayout {
                    template: layout.unwrap_or(defaults.layout.template),
                    alignment: align.unwrap_or(defaults.layout.alignment),
                    spacing: spacing.unwrap_or(defaults.layout.spacing),
                },
            };

            let icon = template.render(&brand);
            let output = if json {
                serde_json::to_string_pretty(&icon)?
            } else {
                icon.to_svg()
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, output)?;
                    log::info!("Saved {} to {}", template.id, path.display());
                }
                None => println!("{}", output),
            }
        }

        Commands::Layout {
            file,
            width,
            height,
            house,
            force_positions,
        } => {
            let house_layout = match house.as_deref() {
                Some(name) => Some(HouseLayout::by_name(name).ok_or_else(|| {
                    CardgenError::InvalidRequest(format!(
                        "Unknown house layout '{}' (expected left-grid, centered or split-banner)",
                        name
                    ))
                })?),
                None => None,
            };
            if !(width > 0.0 && height > 0.0) {
                return Err(CardgenError::InvalidRequest(format!(
                    "Canvas must have a positive size, got {}x{}",
                    width, height
                )));
            }

            let text = std::fs::read_to_string(&file)?;
            let suggestion: DesignSuggestion = serde_json::from_str(&text)?;
            let options = LayoutOptions {
                force_positions,
                house_layout,
                ..Default::default()
            };
            let plan = layout::apply_design(&suggestion, Canvas::new(width, height), &options);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }

        Commands::Templates { count } => {
            let templates = catalog::card_templates(count);
            println!("{}", serde_json::to_string_pretty(&templates)?);
        }
    }

    Ok(())
}
