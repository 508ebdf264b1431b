use crate::award::Award;

/// The one predicate gating every aggregation and point layer. Applying
/// it anywhere else than through `matches` would let the chart, map, and
/// table disagree under the same filter values, so nothing else in the
/// crate inspects PSC/NAICS prefixes directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoFilter {
    psc_prefix: Option<String>,
    naics_prefix: Option<String>,
}

impl GeoFilter {
    /// Empty or whitespace-only prefixes collapse to "no constraint".
    pub fn new(psc_prefix: Option<&str>, naics_prefix: Option<&str>) -> Self {
        Self {
            psc_prefix: non_empty(psc_prefix),
            naics_prefix: non_empty(naics_prefix),
        }
    }

    pub fn psc_prefix(&self) -> Option<&str> {
        self.psc_prefix.as_deref()
    }

    pub fn naics_prefix(&self) -> Option<&str> {
        self.naics_prefix.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.psc_prefix.is_none() && self.naics_prefix.is_none()
    }

    /// PSC matches case-insensitively; NAICS codes are numeric, so that
    /// comparison is exact. An absent prefix is vacuously true.
    pub fn matches(&self, award: &Award) -> bool {
        if let Some(prefix) = &self.psc_prefix
            && !starts_with_ignore_ascii_case(&award.psc, prefix)
        {
            return false;
        }

        if let Some(prefix) = &self.naics_prefix
            && !award.naics.starts_with(prefix.as_str())
        {
            return false;
        }

        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Amount,
    Count,
}

impl Metric {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Count => "count",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "amount" => Some(Self::Amount),
            "count" => Some(Self::Count),
            _ => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    match value.get(..prefix.len()) {
        Some(head) => head.eq_ignore_ascii_case(prefix),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoFilter, Metric};
    use crate::award::Award;

    fn award(psc: &str, naics: &str) -> Award {
        Award {
            action_date: None,
            recipient_name: "ACME".to_string(),
            award_amount: 100.0,
            piid: None,
            set_aside: None,
            state: "MD".to_string(),
            state_name: String::new(),
            pop_city: String::new(),
            pop_zip5: String::new(),
            lat: None,
            lon: None,
            psc: psc.to_string(),
            psc_desc: String::new(),
            naics: naics.to_string(),
            naics_desc: String::new(),
        }
    }

    #[test]
    fn empty_filter_admits_everything() {
        let filter = GeoFilter::new(None, None);
        assert!(filter.is_empty());
        assert!(filter.matches(&award("", "")));
        assert!(filter.matches(&award("R425", "541511")));
    }

    #[test]
    fn blank_prefixes_are_vacuously_true() {
        let filter = GeoFilter::new(Some("  "), Some(""));
        assert!(filter.is_empty());
    }

    #[test]
    fn psc_prefix_is_case_insensitive() {
        let filter = GeoFilter::new(Some("r4"), None);
        assert!(filter.matches(&award("R425", "")));
        assert!(!filter.matches(&award("B100", "")));
    }

    #[test]
    fn naics_prefix_is_case_sensitive_exact() {
        let filter = GeoFilter::new(None, Some("54"));
        assert!(filter.matches(&award("", "541511")));
        assert!(!filter.matches(&award("", "336411")));
    }

    #[test]
    fn both_dimensions_must_pass() {
        let filter = GeoFilter::new(Some("R"), Some("54"));
        assert!(filter.matches(&award("R425", "541511")));
        assert!(!filter.matches(&award("R425", "336411")));
        assert!(!filter.matches(&award("B100", "541511")));
    }

    #[test]
    fn prefix_longer_than_code_never_matches() {
        let filter = GeoFilter::new(Some("R4255"), None);
        assert!(!filter.matches(&award("R425", "")));
    }

    #[test]
    fn metric_parse_roundtrip() {
        assert_eq!(Metric::parse("amount"), Some(Metric::Amount));
        assert_eq!(Metric::parse("count"), Some(Metric::Count));
        assert_eq!(Metric::parse("total"), None);
    }
}
