/// Substring filter on the ISO date text ("2018", "2018-01", "2018-01-15").
///
/// Matching is exact and case-sensitive. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFilter(Option<String>);

impl DateFilter {
    pub fn new(filter: Option<&str>) -> Self {
        Self(filter.filter(|f| !f.is_empty()).map(str::to_string))
    }

    pub fn all() -> Self {
        Self(None)
    }

    pub fn matches(&self, date: &str) -> bool {
        match &self.0 {
            Some(f) => date.contains(f.as_str()),
            None => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
