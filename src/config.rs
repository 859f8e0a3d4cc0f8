use std::sync::OnceLock;

use crate::models::MaskPattern;

fn parse_u8(raw: &str) -> Option<u8> {
    raw.trim().parse::<u8>().ok()
}

fn bool_or(value: Option<u8>, default: bool) -> bool {
    value.map(|v| v != 0).unwrap_or(default)
}

fn mask_from(value: Option<u8>) -> Option<MaskPattern> {
    value.and_then(|v| MaskPattern::new(v).ok())
}

fn parse_env_u8(name: &str) -> Option<u8> {
    std::env::var(name).ok().as_deref().and_then(parse_u8)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    bool_or(parse_env_u8(name), default)
}

static PARALLEL_MASK_SEARCH: OnceLock<bool> = OnceLock::new();

/// Evaluate the eight mask candidates on the rayon pool (`QR_PARALLEL_MASKS`, default on)
pub(crate) fn parallel_mask_search() -> bool {
    *PARALLEL_MASK_SEARCH.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static DEFAULT_MASK: OnceLock<Option<MaskPattern>> = OnceLock::new();

/// Mask forced onto automatic selection (`QR_DEFAULT_MASK`, 0-7, unset by default)
pub(crate) fn default_mask_override() -> Option<MaskPattern> {
    *DEFAULT_MASK.get_or_init(|| mask_from(parse_env_u8("QR_DEFAULT_MASK")))
}
