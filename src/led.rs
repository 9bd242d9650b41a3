use crate::config::DEFAULT_LED_PAIRS;
use crate::error::LedCheckError;
use crate::highlight::{highlight_bright_points, load_image, save_image};
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedPair {
    pub on: PathBuf,
    pub off: PathBuf,
}

impl LedPair {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(on: P, off: Q) -> Self {
        LedPair {
            on: on.into(),
            off: off.into(),
        }
    }
}

pub fn default_pairs() -> Vec<LedPair> {
    DEFAULT_LED_PAIRS
        .iter()
        .map(|&(on, off)| LedPair::new(on, off))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    pub pair: LedPair,
    pub on_count: usize,
    pub off_count: usize,
}

/// Count bright points in both images and require `on > ratio * off`.
///
/// When `out_dir` is given the highlighted images are written there as
/// `on_<stem>_highlighted.png` and `off_<stem>_highlighted.png`.
pub fn check_pair(
    pair: &LedPair,
    threshold: f64,
    ratio: usize,
    out_dir: Option<&Path>,
) -> Result<PairReport, Box<dyn Error>> {
    let (on_img, on_count) = highlight_bright_points(&load_image(&pair.on)?, threshold);
    let (off_img, off_count) = highlight_bright_points(&load_image(&pair.off)?, threshold);

    println!(
        "Pair checked:\n  ├ On: {} bright points\n  └ Off: {} bright points",
        on_count, off_count
    );

    if let Some(dir) = out_dir {
        save_image(&on_img, highlighted_path(dir, "on", &pair.on))?;
        save_image(&off_img, highlighted_path(dir, "off", &pair.off))?;
    }

    // a ratio too large to multiply can never be exceeded
    if on_count <= ratio.saturating_mul(off_count) {
        return Err(LedCheckError::NotDistinct {
            on: pair.on.clone(),
            off: pair.off.clone(),
            on_count,
            off_count,
            ratio,
        }
        .into());
    }

    Ok(PairReport {
        pair: pair.clone(),
        on_count,
        off_count,
    })
}

/// Check every pair in order, stopping at the first one that fails.
pub fn led_on_off_test(
    pairs: &[LedPair],
    threshold: f64,
    ratio: usize,
    out_dir: Option<&Path>,
) -> Result<Vec<PairReport>, Box<dyn Error>> {
    let mut reports = Vec::with_capacity(pairs.len());

    for (index, pair) in pairs.iter().enumerate() {
        let pair_dir = match out_dir {
            Some(dir) => {
                let pair_dir = dir.join(format!("pair_{}", index + 1));
                fs::create_dir_all(&pair_dir)?;
                Some(pair_dir)
            }
            None => None,
        };
        reports.push(check_pair(pair, threshold, ratio, pair_dir.as_deref())?);
    }

    println!("All {} LED pairs distinguishable.", reports.len());
    Ok(reports)
}

fn highlighted_path(dir: &Path, tag: &str, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    dir.join(format!("{}_{}_highlighted.png", tag, stem))
}
