use std::fs::File;
use std::path::{Path, PathBuf};

use contracts::{
    enums::Platform, projections::p200_revenue_register::UnifiedSaleRow,
    usecases::u101_unify_revenue::UnifyResponse,
};

use crate::projections::p200_revenue_register::repository::{self, UNIFIED_FILE};

use super::{
    normalizers::{self, RawFrame},
    UnifyError,
};

/// A per-platform export that may or may not be present on disk.
///
/// Absence is expected and skipped; only zero available sources is fatal.
pub struct PlatformSource {
    pub platform: Platform,
    pub path: PathBuf,
}

impl PlatformSource {
    pub fn available(&self) -> bool {
        self.path.is_file()
    }
}

/// All candidate platform sources under `data_dir`, in fixed platform order
pub fn discover_sources(data_dir: &Path) -> Vec<PlatformSource> {
    Platform::all()
        .into_iter()
        .map(|platform| PlatformSource {
            path: data_dir.join(platform.export_file()),
            platform,
        })
        .collect()
}

/// Rebuild the unified revenue register from whatever platform exports
/// exist under `data_dir`.
///
/// Batch and idempotent: the output file is overwritten whole. Rows with
/// non-positive net revenue are dropped after normalization.
pub fn build_unified_register(data_dir: &Path) -> Result<UnifyResponse, UnifyError> {
    let run_id = uuid::Uuid::new_v4().to_string();

    let sources: Vec<PlatformSource> = discover_sources(data_dir)
        .into_iter()
        .filter(|source| {
            if source.available() {
                true
            } else {
                tracing::info!(
                    "U101 [{}]: no {} export at {}, skipping",
                    run_id,
                    source.platform,
                    source.path.display()
                );
                false
            }
        })
        .collect();

    if sources.is_empty() {
        return Err(UnifyError::NoInputData);
    }

    let mut unified: Vec<UnifiedSaleRow> = Vec::new();
    let mut platforms = Vec::new();
    for source in &sources {
        let file = File::open(&source.path)?;
        let frame = RawFrame::from_reader(source.platform, file)?;
        let rows = normalizers::normalize(&frame)?;
        tracing::info!(
            "U101 [{}]: normalized {} rows from {}",
            run_id,
            rows.len(),
            source.platform
        );
        platforms.push(source.platform);
        unified.extend(rows);
    }

    let before = unified.len();
    unified.retain(|row| row.net_revenue > 0.0);
    let rows_dropped = before - unified.len();

    let output_path = data_dir.join(UNIFIED_FILE);
    repository::write_register(&output_path, &unified)?;
    tracing::info!(
        "U101 [{}]: wrote {} rows to {} ({} non-revenue rows dropped)",
        run_id,
        unified.len(),
        output_path.display(),
        rows_dropped
    );

    Ok(UnifyResponse {
        run_id,
        platforms,
        rows_written: unified.len(),
        rows_dropped,
        output_path: output_path.display().to_string(),
    })
}
