/// Application-level icon identifier, decoupled from provider icon codes.
///
/// The rendering layer maps each variant to a concrete visual asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Clear => "clear",
            IconId::PartlyCloudy => "partly-cloudy",
            IconId::Cloudy => "cloudy",
            IconId::Overcast => "overcast",
            IconId::ShowerRain => "shower-rain",
            IconId::Rain => "rain",
            IconId::Thunderstorm => "thunderstorm",
            IconId::Snow => "snow",
            IconId::Mist => "mist",
            IconId::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a provider icon code (e.g. "10d") to an [`IconId`].
///
/// Only the two-digit numeric prefix matters; the trailing day/night letter
/// does not affect classification, so "01d" and "01n" both map to
/// [`IconId::Clear`]. Any code outside the known table, including malformed
/// or short codes, maps to [`IconId::Unknown`]. Never fails.
pub fn classify(code: &str) -> IconId {
    match code.get(..2).unwrap_or_default() {
        "01" => IconId::Clear,
        "02" => IconId::PartlyCloudy,
        "03" => IconId::Cloudy,
        "04" => IconId::Overcast,
        "09" => IconId::ShowerRain,
        "10" => IconId::Rain,
        "11" => IconId::Thunderstorm,
        "13" => IconId::Snow,
        "50" => IconId::Mist,
        _ => IconId::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_and_night_variants_classify_the_same() {
        let table = [
            ("01", IconId::Clear),
            ("02", IconId::PartlyCloudy),
            ("03", IconId::Cloudy),
            ("04", IconId::Overcast),
            ("09", IconId::ShowerRain),
            ("10", IconId::Rain),
            ("11", IconId::Thunderstorm),
            ("13", IconId::Snow),
            ("50", IconId::Mist),
        ];

        for (prefix, expected) in table {
            assert_eq!(classify(&format!("{prefix}d")), expected);
            assert_eq!(classify(&format!("{prefix}n")), expected);
        }
    }

    #[test]
    fn unrecognized_codes_map_to_unknown() {
        assert_eq!(classify("99x"), IconId::Unknown);
        assert_eq!(classify("12d"), IconId::Unknown);
        assert_eq!(classify(""), IconId::Unknown);
        assert_eq!(classify("1"), IconId::Unknown);
    }

    #[test]
    fn non_ascii_code_does_not_panic() {
        assert_eq!(classify("ös"), IconId::Unknown);
    }
}
