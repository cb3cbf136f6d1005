//! Decode glyph-name token pages into Arabic text
//!
//! Reads extractor output (pages separated by form feeds), decodes every page
//! that carries glyph-name tokens, and writes the reassembled text.
//!
//! Usage:
//!   cargo run --release --bin decode_glyphs -- page_text.txt
//!   cargo run --release --bin decode_glyphs -- page_text.txt --output decoded.txt --strict
//!   cargo run --release --bin decode_glyphs -- page_text.txt --audit --json
//!   cargo run --release --bin decode_glyphs -- ocr_lines.json --ocr-lines --min-confidence 0.6

use arabic_glyph_decoder::diagnostics::{render_missing_entries, AuditReport};
use arabic_glyph_decoder::pipeline::split_pages;
use arabic_glyph_decoder::text::{strip_bidi_marks, OcrLine, Transcript, DEFAULT_MIN_CONFIDENCE};
use arabic_glyph_decoder::{DecoderConfig, DocumentDecoder, GlyphTable, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

const USAGE: &str = "Usage: decode_glyphs <input.txt> [--output PATH] [--config PATH] \
[--glyphs PATH] [--strict] [--no-fuzzy] [--clean-bidi] [--page-headers] [--audit] [--json] [--ocr-lines] [--min-confidence F] [--verbose]";

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    extra_glyphs: Option<PathBuf>,
    strict: bool,
    no_fuzzy: bool,
    clean_bidi: bool,
    page_headers: bool,
    ocr_lines: bool,
    min_confidence: f32,
    audit: bool,
    json: bool,
    verbose: bool,
}

impl CliArgs {
    fn from_args() -> std::result::Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut input = None;
        let mut output = None;
        let mut config = None;
        let mut extra_glyphs = None;
        let mut strict = false;
        let mut no_fuzzy = false;
        let mut clean_bidi = false;
        let mut page_headers = false;
        let mut ocr_lines = false;
        let mut min_confidence = DEFAULT_MIN_CONFIDENCE;
        let mut audit = false;
        let mut json = false;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    output = Some(PathBuf::from(args.get(i).ok_or("--output needs a path")?));
                },
                "--config" => {
                    i += 1;
                    config = Some(PathBuf::from(args.get(i).ok_or("--config needs a path")?));
                },
                "--glyphs" => {
                    i += 1;
                    extra_glyphs = Some(PathBuf::from(args.get(i).ok_or("--glyphs needs a path")?));
                },
                "--strict" => strict = true,
                "--no-fuzzy" => no_fuzzy = true,
                "--clean-bidi" => clean_bidi = true,
                "--page-headers" => page_headers = true,
                "--ocr-lines" => ocr_lines = true,
                "--min-confidence" => {
                    i += 1;
                    let value = args.get(i).ok_or("--min-confidence needs a value")?;
                    min_confidence = value
                        .parse()
                        .map_err(|_| format!("invalid --min-confidence {}", value))?;
                },
                "--audit" => audit = true,
                "--json" => json = true,
                "--verbose" | "-v" => verbose = true,
                flag if flag.starts_with('-') => return Err(format!("unknown option {}", flag)),
                path => {
                    if input.is_some() {
                        return Err(format!("unexpected argument {}", path));
                    }
                    input = Some(PathBuf::from(path));
                },
            }
            i += 1;
        }

        Ok(Self {
            input: input.ok_or("missing input file")?,
            output,
            config,
            extra_glyphs,
            strict,
            no_fuzzy,
            clean_bidi,
            page_headers,
            ocr_lines,
            min_confidence,
            audit,
            json,
            verbose,
        })
    }

    fn decoder_config(&self) -> Result<DecoderConfig> {
        let mut config = match &self.config {
            Some(path) => DecoderConfig::from_json_file(path)?,
            None => DecoderConfig::default(),
        };
        if self.strict {
            config = config.with_strict(true);
        }
        if self.no_fuzzy {
            config = config.with_fuzzy_matching(false);
        }
        if self.clean_bidi {
            config = config.with_strip_bidi_marks(true);
        }
        Ok(config)
    }

    fn glyph_table(&self) -> Result<GlyphTable> {
        match &self.extra_glyphs {
            Some(path) => {
                let json = fs::read_to_string(path)?;
                let extra: BTreeMap<String, String> = serde_json::from_str(&json)?;
                log::info!("Adding {} glyph entries from {}", extra.len(), path.display());
                GlyphTable::with_extra_entries(extra)
            },
            None => Ok(GlyphTable::build()),
        }
    }
}

fn write_output(args: &CliArgs, content: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            fs::write(path, content)?;
            if args.verbose {
                eprintln!("Wrote {} bytes to {}", content.len(), path.display());
            }
        },
        None => println!("{}", content),
    }
    Ok(())
}

fn run_audit(args: &CliArgs, decoder: &DocumentDecoder<'_>, pages: &[&str]) -> Result<()> {
    let missing = decoder.audit_pages(pages);
    if args.json {
        let report = AuditReport::new(args.input.display().to_string(), &missing);
        write_output(args, &report.to_json()?)
    } else if missing.is_empty() {
        eprintln!("No missing tokens");
        Ok(())
    } else {
        let lines = render_missing_entries(missing.iter().map(String::as_str));
        write_output(args, lines.trim_end())
    }
}

fn run_decode(args: &CliArgs, decoder: &DocumentDecoder<'_>, pages: &[&str]) -> Result<()> {
    let start = Instant::now();
    let doc = decoder.decode_pages(pages)?;

    if args.json {
        let page_reports: Vec<serde_json::Value> = doc
            .pages
            .iter()
            .map(|p| {
                serde_json::json!({
                    "page": p.page,
                    "decoded": p.was_decoded(),
                    "text": p.text,
                    "unresolved": p.unresolved(),
                })
            })
            .collect();
        let out = serde_json::json!({
            "source": args.input.display().to_string(),
            "pages": page_reports,
            "unresolved": doc.unresolved(),
        });
        write_output(args, &serde_json::to_string_pretty(&out)?)?;
    } else if args.page_headers {
        let mut transcript = Transcript::new();
        for page in &doc.pages {
            transcript.push_page(page.page, page.text.as_str());
        }
        write_output(args, transcript.render().trim_end())?;
    } else {
        write_output(args, &doc.text())?;
    }

    let unresolved = doc.unresolved();
    if !unresolved.is_empty() {
        eprint!("{}", render_missing_entries(unresolved.iter().map(String::as_str)));
    }

    if args.verbose {
        eprintln!(
            "Decoded {}/{} pages in {:?}, {} distinct unresolved tokens",
            doc.decoded_page_count(),
            doc.pages.len(),
            start.elapsed(),
            unresolved.len()
        );
    }
    Ok(())
}

fn run_ocr_lines(args: &CliArgs) -> Result<()> {
    let json = fs::read_to_string(&args.input)?;
    let pages: Vec<Vec<OcrLine>> = serde_json::from_str(&json)?;
    let transcript = Transcript::from_ocr_pages(&pages, args.min_confidence);
    if args.verbose {
        eprintln!(
            "{}: {}/{} OCR page(s) above confidence {}",
            args.input.display(),
            transcript.page_count(),
            pages.len(),
            args.min_confidence
        );
    }

    let rendered = transcript.render();
    let text = if args.clean_bidi {
        strip_bidi_marks(&rendered)
    } else {
        rendered.as_str().into()
    };
    write_output(args, text.trim_end())
}

fn run(args: &CliArgs) -> Result<()> {
    if args.ocr_lines {
        return run_ocr_lines(args);
    }

    let config = args.decoder_config()?;
    let table = args.glyph_table()?;
    let decoder = DocumentDecoder::with_config(&table, &config);

    let text = fs::read_to_string(&args.input)?;
    let pages = split_pages(&text);
    if args.verbose {
        eprintln!("{}: {} page(s), {} glyph table entries", args.input.display(), pages.len(), table.len());
    }

    if args.audit {
        run_audit(args, &decoder, &pages)
    } else {
        run_decode(args, &decoder, &pages)
    }
}

fn main() {
    env_logger::init();

    let args = match CliArgs::from_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        },
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
