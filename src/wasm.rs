//! WASM bindings for shardphrase
//!
//! This module provides JavaScript-friendly bindings for the core split/assemble functionality.

use bip39::{Language, Mnemonic};
use wasm_bindgen::prelude::*;

use crate::commands;
use crate::domain::{ShareCount, SplitConfig, Threshold};
use crate::report::SplitReport;
use crate::shard;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

fn js_error(prefix: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{prefix}: {err}"))
}

/// Split a BIP39 mnemonic into shard mnemonics
///
/// # Returns
/// JSON string of a `SplitReport`, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = JSON.parse(wasm_split(
///     "army van defense carry jealous true garbage claim echo media make crunch",
///     3,
///     5
/// ));
/// result.shards.forEach((shard, i) => console.log(`Shard ${i + 1}: ${shard}`));
/// ```
#[wasm_bindgen]
pub fn wasm_split(mnemonic: &str, threshold: u8, shares: u8) -> Result<String, JsValue> {
    let threshold = Threshold::new(threshold).map_err(|e| js_error("Invalid threshold", e))?;
    let share_count = ShareCount::new(shares).map_err(|e| js_error("Invalid share count", e))?;
    let config = SplitConfig::new(threshold, share_count)
        .map_err(|e| js_error("Invalid configuration", e))?;

    let shards =
        commands::split_mnemonic(mnemonic, config).map_err(|e| js_error("Split failed", e))?;

    serde_json::to_string(&SplitReport::new(config, &shards))
        .map_err(|e| js_error("Serialization failed", e))
}

/// Reassemble the original mnemonic from shard mnemonics
///
/// Pass the threshold used at split time so that too few shards are reported
/// instead of producing a wrong phrase.
#[wasm_bindgen]
pub fn wasm_assemble(shards: Vec<String>, threshold: Option<u8>) -> Result<String, JsValue> {
    let threshold = threshold
        .map(Threshold::new)
        .transpose()
        .map_err(|e| js_error("Invalid threshold", e))?;

    commands::assemble_shards(&shards, threshold)
        .map(|mnemonic| mnemonic.as_str().to_string())
        .map_err(|e| js_error("Assemble failed", e))
}

/// Decode one shard and describe it (words, chunks, share length, x-coordinate)
#[wasm_bindgen]
pub fn wasm_inspect_shard(shard: &str) -> Result<JsValue, JsValue> {
    let summary = shard::inspect_shard(shard).map_err(|e| js_error("Inspect failed", e))?;
    serde_wasm_bindgen::to_value(&summary).map_err(|e| js_error("Serialization failed", e))
}

/// Generate a random BIP39 mnemonic of 12, 15, 18, 21 or 24 words
#[wasm_bindgen]
pub fn wasm_generate_mnemonic(word_count: u8) -> Result<String, JsValue> {
    if !matches!(word_count, 12 | 15 | 18 | 21 | 24) {
        return Err(JsValue::from_str(
            "Invalid word count: must be 12, 15, 18, 21 or 24",
        ));
    }

    // 3 words per 4 bytes of entropy
    let mut entropy = zeroize::Zeroizing::new(vec![0u8; usize::from(word_count) / 3 * 4]);

    // getrandom's "js" feature uses the browser's crypto.getRandomValues()
    getrandom::getrandom(&mut entropy)
        .map_err(|e| js_error("Failed to generate random entropy", e))?;

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| js_error("Failed to create mnemonic", e))?;

    Ok(mnemonic.to_string())
}
