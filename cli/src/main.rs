//! pagesift CLI - inspect document structure from a layout document

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use pagesift::{
    open_layout, Analyzer, BBox, ByteSource, JsonLayoutProvider, SearchConfig, SectionConfig,
    TableConfig, ZoneConfig,
};

#[derive(Parser)]
#[command(name = "pagesift")]
#[command(version)]
#[command(about = "Derive reading order, zones, sections, and tables from a layout document", long_about = None)]
struct Cli {
    /// Serialized layout document (JSON)
    #[arg(value_name = "FILE")]
    input: String,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page count
    Info,

    /// Resolved table of contents
    Toc,

    /// Full text of one page
    Text {
        /// Page number (1-based)
        #[arg(short, long)]
        page: u32,
    },

    /// Text blocks of one page with font metadata
    Blocks {
        /// Page number (1-based)
        #[arg(short, long)]
        page: u32,
    },

    /// Recurring headers and footers
    Zones {
        /// Pages to scan from the start of the document
        #[arg(long, default_value_t = 10)]
        scan_pages: u32,

        /// Minimum cross-page occurrences
        #[arg(long, default_value_t = 3)]
        min_occurrence: u32,

        /// Header zone starts at this fraction of the page height
        #[arg(long, default_value_t = 0.90)]
        top_margin: f32,

        /// Footer zone ends at this fraction of the page height
        #[arg(long, default_value_t = 0.10)]
        bottom_margin: f32,
    },

    /// Candidate table regions on one page
    Tables {
        /// Page number (1-based)
        #[arg(short, long)]
        page: u32,

        /// Minimum rectangle area in square points
        #[arg(long, default_value_t = 10_000.0)]
        min_area: f32,

        /// Confidence threshold
        #[arg(long, default_value_t = 0.7)]
        threshold: f32,
    },

    /// Section content following a header block
    Section {
        /// Page number (1-based)
        #[arg(short, long)]
        page: u32,

        /// Header bounding box as "x0,y0,x1,y1"
        #[arg(long, value_name = "BBOX")]
        header: String,
    },

    /// Text inside an arbitrary bounding box
    Region {
        /// Page number (1-based)
        #[arg(short, long)]
        page: u32,

        /// Bounding box as "x0,y0,x1,y1"
        #[arg(long, value_name = "BBOX")]
        bbox: String,
    },

    /// Pages containing a keyword
    Find {
        /// The keyword to search for
        keyword: String,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// First page of the search range
        #[arg(long)]
        from: Option<u32>,

        /// Last page of the search range
        #[arg(long)]
        to: Option<u32>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut analyzer = open_layout(&cli.input)?;

    match &cli.command {
        Commands::Info => {
            let count = analyzer.page_count()?;
            if cli.json {
                println!("{}", serde_json::json!({ "pages": count }));
            } else {
                println!("{}: {} pages", cli.input.bold(), count);
            }
        }

        Commands::Toc => {
            let entries = analyzer.table_of_contents()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("{}", "no outline entries".yellow());
            } else {
                for entry in &entries {
                    let indent = "  ".repeat(entry.level.saturating_sub(1) as usize);
                    println!(
                        "{}{} {}",
                        indent,
                        entry.title.bold(),
                        format!("({})", entry.page).dimmed()
                    );
                }
            }
        }

        Commands::Text { page } => {
            let text = analyzer.page_text(*page)?;
            if cli.json {
                println!("{}", serde_json::json!({ "page": page, "text": text }));
            } else if text.is_empty() {
                println!("{}", "no text found on this page".yellow());
            } else {
                println!("{}", text);
            }
        }

        Commands::Blocks { page } => {
            let blocks = analyzer.text_blocks(*page)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else if blocks.is_empty() {
                println!("{}", "no text blocks found on this page".yellow());
            } else {
                for (i, block) in blocks.iter().enumerate() {
                    println!("{}", format!("--- Block {} ---", i + 1).bold());
                    println!(
                        "  font: {} @ {}",
                        block.font_name.as_deref().unwrap_or("(none)"),
                        block.font_size
                    );
                    println!("  bbox: {:?}", block.bbox);
                    println!("  text: {}", block.text);
                }
            }
        }

        Commands::Zones {
            scan_pages,
            min_occurrence,
            top_margin,
            bottom_margin,
        } => {
            let config = ZoneConfig::new()
                .with_scan_pages(*scan_pages)
                .with_min_occurrence(*min_occurrence)
                .with_top_margin(*top_margin)
                .with_bottom_margin(*bottom_margin);
            let report = analyzer.headers_and_footers(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", "headers:".bold());
                for h in &report.headers {
                    println!("  {}", h);
                }
                println!("{}", "footers:".bold());
                for f in &report.footers {
                    println!("  {}", f);
                }
            }
        }

        Commands::Tables {
            page,
            min_area,
            threshold,
        } => {
            let config = TableConfig::new()
                .with_min_area(*min_area)
                .with_confidence_threshold(*threshold);
            let tables = analyzer.detect_tables(*page, &config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tables)?);
            } else if tables.is_empty() {
                println!("{}", "no tables detected on this page".yellow());
            } else {
                println!("found {} potential table(s):", tables.len());
                for (i, table) in tables.iter().enumerate() {
                    println!(
                        "  table {}: bbox={:?}, confidence={}",
                        i + 1,
                        table.bbox,
                        table.confidence
                    );
                }
            }
        }

        Commands::Section { page, header } => {
            let header_bbox = parse_bbox(header)?;
            let text =
                analyzer.section_after_header(*page, header_bbox, &SectionConfig::default())?;
            if cli.json {
                println!("{}", serde_json::json!({ "page": page, "section": text }));
            } else if text.is_empty() {
                println!("{}", "no section content found for that header".yellow());
            } else {
                println!("{}", text);
            }
        }

        Commands::Region { page, bbox } => {
            let region = parse_bbox(bbox)?;
            let text = analyzer.text_in_region(*page, region)?;
            if cli.json {
                println!("{}", serde_json::json!({ "page": page, "text": text }));
            } else if text.is_empty() {
                println!("{}", "no text found in the specified region".yellow());
            } else {
                println!("{}", text);
            }
        }

        Commands::Find {
            keyword,
            case_sensitive,
            from,
            to,
        } => {
            let pages = find_pages(&mut analyzer, keyword, *case_sensitive, *from, *to)?;
            if cli.json {
                println!("{}", serde_json::to_string(&pages)?);
            } else if pages.is_empty() {
                println!("{}", format!("'{}' not found", keyword).yellow());
            } else {
                let rendered: Vec<String> = pages.iter().map(u32::to_string).collect();
                println!("pages with '{}': {}", keyword.bold(), rendered.join(", "));
            }
        }
    }

    Ok(())
}

fn find_pages(
    analyzer: &mut Analyzer<ByteSource, JsonLayoutProvider>,
    keyword: &str,
    case_sensitive: bool,
    from: Option<u32>,
    to: Option<u32>,
) -> pagesift::Result<Vec<u32>> {
    let mut config = SearchConfig::new().with_case_sensitive(case_sensitive);
    if from.is_some() || to.is_some() {
        config = config.with_pages(from.unwrap_or(1)..=to.unwrap_or(u32::MAX));
    }
    analyzer.find_pages_with_keyword(keyword, &config)
}

fn parse_bbox(value: &str) -> Result<BBox, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!("expected \"x0,y0,x1,y1\", got \"{}\"", value));
    }
    let mut coords = [0.0f32; 4];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid coordinate \"{}\"", part))?;
    }
    Ok(BBox::new(coords[0], coords[1], coords[2], coords[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox() {
        let bbox = parse_bbox("72, 100.5, 400, 116").unwrap();
        assert_eq!(bbox, BBox::new(72.0, 100.5, 400.0, 116.0));
    }

    #[test]
    fn test_parse_bbox_rejects_bad_input() {
        assert!(parse_bbox("1,2,3").is_err());
        assert!(parse_bbox("a,b,c,d").is_err());
    }
}
