//! Shared test harness modules for the RIASEC CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use super::import::{ImportConfig, run_import_with};
use super::recommend::{CatalogLoader, RecommendConfig, run_recommend_with};
use super::score::{ScoreConfig, run_score_with};

mod helpers;
