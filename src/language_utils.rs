use anyhow::{Result, anyhow};
use isolang::Language;

use crate::summary::SummaryLanguage;

/// Language utilities for the summary language setting
///
/// The summary language is configured as an ISO 639-1 (2-letter) or
/// ISO 639-2 (3-letter) code, or as a plain English name.
/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }

        // Bibliographic codes that differ from the terminology code
        match normalized_code.as_str() {
            "chi" => return Ok("zho".to_string()),
            "fre" => return Ok("fra".to_string()),
            "ger" => return Ok("deu".to_string()),
            _ => {}
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English name of a language code
pub fn get_language_name(code: &str) -> Result<String> {
    let part2t = normalize_to_part2t(code)?;
    Language::from_639_3(&part2t)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Resolve the configured summary language
///
/// Accepts `zh`, `zho`, `chi`, `en`, `eng` or the names `chinese` / `english`.
pub fn resolve_summary_language(value: &str) -> Result<SummaryLanguage> {
    let lowered = value.trim().to_lowercase();
    match lowered.as_str() {
        "chinese" => return Ok(SummaryLanguage::Chinese),
        "english" => return Ok(SummaryLanguage::English),
        _ => {}
    }

    let part2t = normalize_to_part2t(&lowered)?;
    match part2t.as_str() {
        "zho" => Ok(SummaryLanguage::Chinese),
        "eng" => Ok(SummaryLanguage::English),
        _ => Err(anyhow!(
            "Unsupported summary language: {} ({}); supported: Chinese, English",
            value,
            get_language_name(&part2t).unwrap_or_else(|_| part2t.clone())
        )),
    }
}
