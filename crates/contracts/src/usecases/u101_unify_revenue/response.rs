use serde::{Deserialize, Serialize};

use crate::enums::Platform;

/// Summary returned after rebuilding the unified revenue register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifyResponse {
    pub run_id: String,
    /// Platforms whose export files were found and unified
    pub platforms: Vec<Platform>,
    pub rows_written: usize,
    /// Rows dropped for non-positive net revenue
    pub rows_dropped: usize,
    pub output_path: String,
}
