use std::fmt;

use serde::{Deserialize, Serialize};

/// Sales platforms whose exports feed the unified revenue register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Shopify,
    Amazon,
    Myntra,
}

impl Platform {
    /// Platform name as stored in the `platform` column of the register
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Shopify => "Shopify",
            Platform::Amazon => "Amazon",
            Platform::Myntra => "Myntra",
        }
    }

    /// Export file name expected under the data directory
    pub fn export_file(&self) -> &'static str {
        match self {
            Platform::Shopify => "shopify_orders.csv",
            Platform::Amazon => "amazon_orders.csv",
            Platform::Myntra => "myntra_orders.csv",
        }
    }

    /// All platforms, in the fixed order they are unified
    pub fn all() -> Vec<Platform> {
        vec![Platform::Shopify, Platform::Amazon, Platform::Myntra]
    }

    /// Parse from the register column value (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "shopify" => Some(Platform::Shopify),
            "amazon" => Some(Platform::Amazon),
            "myntra" => Some(Platform::Myntra),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
