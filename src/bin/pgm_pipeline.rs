//! Config-driven image pipeline tool.
//!
//! Reads a JSON config describing an input image (a PGM file or a blank
//! canvas), applies a sequence of operations, saves the result and optionally
//! a JSON timing summary.
//!
//! ```json
//! {
//!   "input": "shapes.pgm",
//!   "ops": [
//!     { "brighten": { "factor": 1.2 } },
//!     { "blur": { "radius_x": 7, "radius_y": 7 } },
//!     { "crop": { "x": 0, "y": 0, "w": 128, "h": 128 } }
//!   ],
//!   "output": { "image": "out/shapes_small.pgm", "summary_json": "out/run.json" }
//! }
//! ```

use graymap::{ops, pgm, GrayImage};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    /// PGM file to load. Mutually exclusive with `create`.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Blank canvas to start from instead of a file.
    #[serde(default)]
    pub create: Option<CreateConfig>,
    #[serde(default)]
    pub ops: Vec<OpConfig>,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CreateConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default = "default_maxval")]
    pub maxval: u8,
}

fn default_maxval() -> u8 {
    255
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpConfig {
    Negative,
    Threshold { thr: u8 },
    Brighten { factor: f64 },
    RotateCcw,
    MirrorH,
    Crop { x: usize, y: usize, w: usize, h: usize },
    Blur { radius_x: usize, radius_y: usize },
    Paste { image: PathBuf, x: usize, y: usize },
    Blend { image: PathBuf, x: usize, y: usize, alpha: f64 },
    Locate { image: PathBuf },
}

impl OpConfig {
    fn name(&self) -> &'static str {
        match self {
            OpConfig::Negative => "negative",
            OpConfig::Threshold { .. } => "threshold",
            OpConfig::Brighten { .. } => "brighten",
            OpConfig::RotateCcw => "rotate_ccw",
            OpConfig::MirrorH => "mirror_h",
            OpConfig::Crop { .. } => "crop",
            OpConfig::Blur { .. } => "blur",
            OpConfig::Paste { .. } => "paste",
            OpConfig::Blend { .. } => "blend",
            OpConfig::Locate { .. } => "locate",
        }
    }
}

#[derive(Debug, Serialize)]
struct RunSummary {
    width: usize,
    height: usize,
    maxval: u8,
    ops: Vec<OpReport>,
    total_ms: f64,
}

#[derive(Debug, Serialize)]
struct OpReport {
    op: &'static str,
    elapsed_ms: f64,
}

pub fn load_config(path: &Path) -> Result<PipelineConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut img = match (&config.input, &config.create) {
        (Some(path), None) => {
            pgm::load(path).map_err(|e| format!("Failed to load input: {e}"))?
        }
        (None, Some(c)) => GrayImage::new(c.width, c.height, c.maxval)
            .map_err(|e| format!("Failed to create canvas: {e}"))?,
        _ => return Err("Config must set exactly one of 'input' and 'create'".to_string()),
    };

    let total_start = Instant::now();
    let mut reports = Vec::with_capacity(config.ops.len());
    for op in &config.ops {
        let start = Instant::now();
        img = apply(img, op).map_err(|e| format!("Op '{}' failed: {e}", op.name()))?;
        reports.push(OpReport {
            op: op.name(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        });
    }
    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

    ensure_parent_dir(&config.output.image)?;
    pgm::save(&img, &config.output.image)
        .map_err(|e| format!("Failed to save output: {e}"))?;

    let summary = RunSummary {
        width: img.width(),
        height: img.height(),
        maxval: img.maxval(),
        ops: reports,
        total_ms,
    };
    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &summary)?;
    }
    println!(
        "{} op(s) in {total_ms:.3} ms -> {}",
        summary.ops.len(),
        config.output.image.display()
    );
    Ok(())
}

fn apply(mut img: GrayImage, op: &OpConfig) -> Result<GrayImage, String> {
    match op {
        OpConfig::Negative => ops::negative(&mut img),
        OpConfig::Threshold { thr } => ops::threshold(&mut img, *thr),
        OpConfig::Brighten { factor } => {
            if *factor < 0.0 {
                return Err("brighten factor must be non-negative".to_string());
            }
            ops::brighten(&mut img, *factor);
        }
        OpConfig::RotateCcw => img = ops::rotated_ccw(&img).map_err(|e| e.to_string())?,
        OpConfig::MirrorH => img = ops::mirrored_h(&img).map_err(|e| e.to_string())?,
        OpConfig::Crop { x, y, w, h } => {
            if !img.contains_rect(*x, *y, *w, *h) {
                return Err(format!(
                    "rectangle ({x}, {y}, {w}, {h}) outside {}x{} image",
                    img.width(),
                    img.height()
                ));
            }
            img = ops::cropped(&img, *x, *y, *w, *h).map_err(|e| e.to_string())?;
        }
        OpConfig::Blur { radius_x, radius_y } => {
            ops::box_blur(&mut img, *radius_x, *radius_y).map_err(|e| e.to_string())?;
        }
        OpConfig::Paste { image, x, y } => {
            let src = pgm::load(image).map_err(|e| e.to_string())?;
            if !img.contains_rect(*x, *y, src.width(), src.height()) {
                return Err(format!("{} does not fit at ({x}, {y})", image.display()));
            }
            ops::paste(&mut img, *x, *y, &src);
        }
        OpConfig::Blend { image, x, y, alpha } => {
            let src = pgm::load(image).map_err(|e| e.to_string())?;
            if !img.contains_rect(*x, *y, src.width(), src.height()) {
                return Err(format!("{} does not fit at ({x}, {y})", image.display()));
            }
            ops::blend(&mut img, *x, *y, &src, *alpha);
        }
        OpConfig::Locate { image } => {
            let needle = pgm::load(image).map_err(|e| e.to_string())?;
            match ops::locate(&img, &needle) {
                Some((x, y)) => println!("located {} at ({x}, {y})", image.display()),
                None => println!("{} not found", image.display()),
            }
        }
    }
    Ok(img)
}

fn usage() -> String {
    "Usage: pgm_pipeline <config.json>".to_string()
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
