/// Volume used when slider input does not parse.
pub const DEFAULT_VOLUME: f64 = 1.0;
/// Playback rate used when speed input does not parse.
pub const DEFAULT_RATE: f64 = 1.0;

/// Multiplication-sign spellings seen in speed labels. The second is `×`
/// decoded as Latin-1.
const RATE_MARKERS: [&str; 2] = ["\u{00d7}", "\u{00c3}\u{2014}"];

/// Parse slider text into a volume in [0, 1]. Unparseable input means full volume.
pub fn parse_volume(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => DEFAULT_VOLUME,
    }
}

/// Parse a speed label such as `1.5×`, `2x` or `0.75`. Empty, unparseable or
/// non-positive input falls back to normal speed.
pub fn parse_playback_rate(raw: &str) -> f64 {
    let mut cleaned = raw.trim().to_string();
    if cleaned.is_empty() {
        return DEFAULT_RATE;
    }
    for marker in RATE_MARKERS {
        cleaned = cleaned.replace(marker, "x");
    }
    let cleaned = cleaned.to_lowercase();
    let numeric = cleaned.trim_end_matches('x').trim_end();

    match numeric.parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => rate,
        _ => DEFAULT_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_parses_numbers() {
        assert_eq!(parse_volume("0.35"), 0.35);
        assert_eq!(parse_volume(" 1 "), 1.0);
        assert_eq!(parse_volume("0"), 0.0);
    }

    #[test]
    fn volume_defaults_on_garbage() {
        assert_eq!(parse_volume("abc"), 1.0);
        assert_eq!(parse_volume(""), 1.0);
        assert_eq!(parse_volume("NaN"), 1.0);
    }

    #[test]
    fn volume_clamped_to_unit_range() {
        assert_eq!(parse_volume("1.7"), 1.0);
        assert_eq!(parse_volume("-0.2"), 0.0);
    }

    #[test]
    fn rate_with_multiplication_sign() {
        assert_eq!(parse_playback_rate("1.5×"), 1.5);
        assert_eq!(parse_playback_rate("2×"), 2.0);
    }

    #[test]
    fn rate_with_misdecoded_sign() {
        assert_eq!(parse_playback_rate("0.75\u{00c3}\u{2014}"), 0.75);
    }

    #[test]
    fn rate_with_ascii_unit_any_case() {
        assert_eq!(parse_playback_rate("1.25x"), 1.25);
        assert_eq!(parse_playback_rate("1.25X"), 1.25);
        assert_eq!(parse_playback_rate("3"), 3.0);
    }

    #[test]
    fn rate_defaults() {
        assert_eq!(parse_playback_rate("bogus"), 1.0);
        assert_eq!(parse_playback_rate(""), 1.0);
        assert_eq!(parse_playback_rate("0×"), 1.0);
        assert_eq!(parse_playback_rate("-2x"), 1.0);
        assert_eq!(parse_playback_rate("inf"), 1.0);
    }
}
