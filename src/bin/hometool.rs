use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use homepage_qr::config;
use homepage_qr::models::{ECLevel, Profile};
use homepage_qr::render::{Palette, ProfileCard, render_terminal, save_qr_png};
use homepage_qr::site::{
    LogAccordion, LogView, Section, ShareLink, SiteData, ToolQuery, category_chips, featured,
    load_profile,
};
use homepage_qr::QrEncoder;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hometool", version, about = "Homepage QR and content tools")]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text as a QR code, printed to the terminal or saved as PNG
    Qr {
        /// Text to encode; defaults to the site URL
        text: Option<String>,
        #[arg(long, default_value = "M")]
        level: ECLevel,
        /// Force a symbol version (1-9) instead of picking the smallest
        #[arg(long)]
        qr_version: Option<u8>,
        /// Canvas side in pixels for PNG output
        #[arg(long)]
        size: Option<u32>,
        /// Write a PNG here instead of printing
        #[arg(long)]
        out: Option<PathBuf>,
        /// Light modules as blocks, for dark terminals
        #[arg(long)]
        invert: bool,
        #[arg(long, default_value_t = 2)]
        quiet_zone: usize,
    },
    /// Render the shareable profile card as SVG
    Card {
        #[arg(long)]
        data: Option<PathBuf>,
        /// Avatar image; defaults to the profile's avatar next to the data
        #[arg(long)]
        avatar: Option<PathBuf>,
        #[arg(long, default_value = "profile-card.svg")]
        out: PathBuf,
    },
    /// List tools, optionally searched and filtered
    Tools {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// List learning logs in display order
    Logs {
        #[arg(long)]
        data: Option<PathBuf>,
        /// Show details of the entry at this 0-based index
        #[arg(long)]
        open: Option<usize>,
        /// Show details of the entry with this anchor (e.g. log-2)
        #[arg(long, default_value = "")]
        anchor: String,
    },
    /// Print a share link and its QR code
    Share {
        #[arg(long)]
        url: Option<String>,
        /// Section or log anchor to link to
        #[arg(long, default_value = "")]
        anchor: String,
        #[arg(long, default_value = "M")]
        level: ECLevel,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Qr {
            text,
            level,
            qr_version,
            size,
            out,
            invert,
            quiet_zone,
        } => qr_cmd(text, level, qr_version, size, out.as_deref(), invert, quiet_zone),
        Command::Card { data, avatar, out } => card_cmd(data, avatar, &out),
        Command::Tools {
            data,
            search,
            filter,
        } => tools_cmd(data, &search, &filter),
        Command::Logs { data, open, anchor } => logs_cmd(data, open, &anchor),
        Command::Share { url, anchor, level } => share_cmd(url, &anchor, level),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_root(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(config::data_root)
}

fn qr_cmd(
    text: Option<String>,
    level: ECLevel,
    version: Option<u8>,
    size: Option<u32>,
    out: Option<&Path>,
    invert: bool,
    quiet_zone: usize,
) -> Result<()> {
    let text = text.unwrap_or_else(|| config::site_url().to_owned());
    let mut qr = match version {
        Some(v) => QrEncoder::with_version(v, level)?,
        None => QrEncoder::new(level),
    };
    qr.add_data(&text);
    qr.make().with_context(|| format!("cannot encode {} bytes", text.len()))?;

    match out {
        Some(path) => {
            let size = size.unwrap_or_else(config::qr_size);
            save_qr_png(&qr, size, Palette::default(), path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Wrote {} (version {}, {} modules, {}px)",
                path.display(),
                qr.version().map_or(0, |v| v.number()),
                qr.module_count(),
                size
            );
        }
        None => print!("{}", render_terminal(&qr, quiet_zone, invert)),
    }
    Ok(())
}

/// Local path for the profile avatar: site-absolute paths resolve against
/// the parent of the data directory, remote URLs are skipped.
fn avatar_path(profile: &Profile, root: &Path) -> Option<PathBuf> {
    let avatar = profile.avatar.trim();
    if avatar.is_empty() || avatar.contains("://") {
        return None;
    }
    let public = root.parent().unwrap_or(root);
    Some(public.join(avatar.trim_start_matches('/')))
}

fn card_cmd(data: Option<PathBuf>, avatar: Option<PathBuf>, out: &Path) -> Result<()> {
    let root = data_root(data);
    let profile = load_profile(&root)
        .with_context(|| format!("failed to load the profile from {}", root.display()))?;

    let mut card = ProfileCard::new(&profile);
    if let Some(path) = avatar.or_else(|| avatar_path(&profile, &root)) {
        card = card.with_avatar_file(path);
    }
    card.save_svg(out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn tools_cmd(data: Option<PathBuf>, search: &str, filter: &str) -> Result<()> {
    let root = data_root(data);
    let (data, errors) = SiteData::load_lenient(&root);
    if errors.iter().any(|e| e.section() == Section::Tools) || data.is_empty(Section::Tools) {
        println!("{}", Section::Tools.empty_notice());
        return Ok(());
    }
    let tools = &data.tools.items;

    let picks = featured(tools);
    if !picks.is_empty() {
        let names: Vec<&str> = picks.iter().map(|t| t.name.as_str()).collect();
        println!("Featured: {}", names.join(", "));
    }
    let chips: Vec<String> = category_chips(tools).iter().map(|c| format!("#{c}")).collect();
    if !chips.is_empty() {
        println!("Categories: {}", chips.join(" "));
    }

    let query = ToolQuery::new(search).with_filter(filter);
    let list = query.apply(tools);
    println!("{}", query.summary(list.len(), tools.len()));
    if list.is_empty() {
        println!("{}", query.empty_result_notice());
        return Ok(());
    }
    for tool in list {
        println!("- {}  {}", tool.name, tool.url);
        if !tool.description.is_empty() {
            println!("  {}", tool.description);
        }
        if !tool.tags.is_empty() {
            let tags: Vec<String> = tool.tags.iter().map(|t| format!("#{t}")).collect();
            println!("  {}", tags.join(" "));
        }
    }
    Ok(())
}

fn logs_cmd(data: Option<PathBuf>, open: Option<usize>, anchor: &str) -> Result<()> {
    let root = data_root(data);
    let (data, errors) = SiteData::load_lenient(&root);
    if errors.iter().any(|e| e.section() == Section::Logs) || data.is_empty(Section::Logs) {
        println!("{}", Section::Logs.empty_notice());
        return Ok(());
    }

    let views = LogView::list(&data.logs.items);
    let accordion = LogAccordion::new(views.len(), open, anchor);
    for (i, view) in views.iter().enumerate() {
        let pin = if view.entry.pinned { " [pinned]" } else { "" };
        println!(
            "#{} {}  {}{}",
            view.anchor(),
            view.entry.title,
            view.entry.date,
            pin
        );
        for bullet in &view.entry.bullets {
            println!("  * {bullet}");
        }
        println!("  {}", view.related_line());
        if accordion.is_open(i) {
            for line in view.detail_text().lines() {
                println!("  > {line}");
            }
        }
    }
    Ok(())
}

fn share_cmd(url: Option<String>, anchor: &str, level: ECLevel) -> Result<()> {
    let link = match url {
        Some(url) => ShareLink::new(&url),
        None => ShareLink::from_config(),
    }
    .with_anchor(anchor);

    let qr = link
        .qr(level)
        .with_context(|| format!("cannot encode share link {link}"))?;
    println!("{link}");
    print!("{}", render_terminal(&qr, 2, false));
    Ok(())
}
