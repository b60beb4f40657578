//! Many avatars for one day, rendered on a rayon pool and written as `<digest>.png`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::encode::write_png;
use crate::foundation::core::AvatarSize;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::render_digest;
use crate::seed::digest::Digest;
use crate::seed::time_key::TimeKey;

#[derive(Clone, Debug, Default)]
pub struct BatchOptions {
    pub size: AvatarSize,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchEntry {
    pub input: String,
    pub digest: Digest,
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub inputs: usize,
    pub rendered: usize,
    /// Inputs whose digest was already rendered earlier in the batch.
    pub duplicates: usize,
}

/// Trimmed, non-empty lines of an inputs file.
pub fn read_inputs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Renders every input into `out_dir`. Entries come back in input order.
pub fn render_batch(
    inputs: &[String],
    time_key: &TimeKey,
    out_dir: &Path,
    opts: &BatchOptions,
) -> AvatarResult<(Vec<BatchEntry>, BatchStats)> {
    if let Some(blank) = inputs.iter().position(|i| i.trim().is_empty()) {
        return Err(AvatarError::validation(format!("batch input #{blank} is empty")));
    }
    let pool = build_thread_pool(opts.threads)?;

    let entries: Vec<BatchEntry> = inputs
        .iter()
        .map(|input| {
            let digest = Digest::derive(input, time_key);
            let path = out_dir.join(format!("{}.png", digest.to_hex()));
            BatchEntry {
                input: input.clone(),
                digest,
                path,
            }
        })
        .collect();

    let mut seen = HashSet::<Digest>::new();
    let unique: Vec<&BatchEntry> = entries
        .iter()
        .filter(|e| seen.insert(e.digest))
        .collect();

    let size = opts.size;
    pool.install(|| {
        unique
            .par_iter()
            .try_for_each(|entry| write_png(&render_digest(&entry.digest, size), &entry.path))
    })?;

    let stats = BatchStats {
        inputs: entries.len(),
        rendered: unique.len(),
        duplicates: entries.len() - unique.len(),
    };
    tracing::info!(?stats, out_dir = %out_dir.display(), "batch written");
    Ok((entries, stats))
}

fn build_thread_pool(threads: Option<usize>) -> AvatarResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(AvatarError::validation("batch 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AvatarError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}
