use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use huekit::{color_brightness, HslColor, RawColor, RgbColor};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "huekit",
    about = "Convert colors between RGB and HSL",
    version,
    author
)]
struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Reject NaN and infinite components instead of clamping them
    #[arg(long, global = true)]
    strict: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an RGB color to HSL
    ToHsl(RgbArgs),

    /// Convert an HSL color to RGB
    ToRgb(HslArgs),

    /// Print the perceived brightness (0-255) of an RGB color
    Brightness(RgbArgs),

    /// Print every representation of an RGB color
    Describe(RgbArgs),
}

#[derive(Args)]
struct RgbArgs {
    /// Red channel (clamped to 0-255)
    #[arg(allow_negative_numbers = true)]
    r: f64,

    /// Green channel (clamped to 0-255)
    #[arg(allow_negative_numbers = true)]
    g: f64,

    /// Blue channel (clamped to 0-255)
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

#[derive(Args)]
struct HslArgs {
    /// Hue in degrees (wrapped into 0-360)
    #[arg(allow_negative_numbers = true)]
    h: f64,

    /// Saturation percentage (clamped to 0-100)
    #[arg(allow_negative_numbers = true)]
    s: f64,

    /// Lightness percentage (clamped to 0-100)
    #[arg(allow_negative_numbers = true)]
    l: f64,
}

impl RgbArgs {
    fn color(&self, strict: bool) -> Result<RgbColor> {
        if strict {
            RgbColor::try_new(self.r, self.g, self.b).context("invalid RGB color")
        } else {
            Ok(RgbColor::new(self.r, self.g, self.b))
        }
    }
}

impl HslArgs {
    fn color(&self, strict: bool) -> Result<HslColor> {
        if strict {
            HslColor::try_new(self.h, self.s, self.l).context("invalid HSL color")
        } else {
            Ok(HslColor::new(self.h, self.s, self.l))
        }
    }
}

#[derive(Debug, Serialize)]
struct ColorReport {
    rgb: RgbColor,
    hsl: HslColor,
    css_rgb: String,
    css_hsl: String,
    hex: String,
    wire: String,
    raw: RawColor,
    brightness: u8,
}

impl ColorReport {
    fn new(color: RgbColor) -> Self {
        let hsl = color.to_hsl();
        ColorReport {
            rgb: color,
            hsl,
            css_rgb: color.css_color(),
            css_hsl: hsl.css_color(),
            hex: format!("0x{:08X}", color.hex_color()),
            wire: color.wire_color(),
            raw: color.raw_color(),
            brightness: color_brightness(color),
        }
    }

    fn print_text(&self) {
        let [r, g, b] = self.raw;
        println!("rgb:        {}", self.css_rgb);
        println!("hsl:        {}", self.css_hsl);
        println!("hex:        {}", self.hex);
        println!("wire:       {}", self.wire);
        println!("raw:        [{}, {}, {}]", r, g, b);
        println!("brightness: {}", self.brightness);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "huekit=debug" } else { "huekit=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::ToHsl(args) => {
            let rgb = args.color(cli.strict)?;
            let hsl = rgb.to_hsl();
            debug!(%rgb, %hsl, "converted to HSL");

            if cli.json {
                print_json(&hsl)?;
            } else {
                println!("{hsl}");
            }
        }

        Commands::ToRgb(args) => {
            let hsl = args.color(cli.strict)?;
            let rgb = hsl.to_rgb();
            debug!(%hsl, %rgb, "converted to RGB");

            if cli.json {
                print_json(&rgb)?;
            } else {
                println!("{rgb}");
            }
        }

        Commands::Brightness(args) => {
            let rgb = args.color(cli.strict)?;
            let brightness = color_brightness(rgb);
            debug!(%rgb, brightness, "computed brightness");

            if cli.json {
                print_json(&brightness)?;
            } else {
                println!("{brightness}");
            }
        }

        Commands::Describe(args) => {
            let rgb = args.color(cli.strict)?;
            let report = ColorReport::new(rgb);
            debug!(?report, "described color");

            if cli.json {
                print_json(&report)?;
            } else {
                report.print_text();
            }
        }
    }

    Ok(())
}
