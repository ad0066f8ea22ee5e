use chrono::Datelike;

/// Reporting month shown above the chart. Purely a label: rows are never
/// filtered or grouped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Month {
    #[default]
    Januari,
    Februari,
    Maret,
    April,
    Mei,
    Juni,
    Juli,
    Agustus,
    September,
    Oktober,
    November,
    Desember,
}

impl Month {
    pub fn all() -> &'static [Month] {
        &[
            Self::Januari,
            Self::Februari,
            Self::Maret,
            Self::April,
            Self::Mei,
            Self::Juni,
            Self::Juli,
            Self::Agustus,
            Self::September,
            Self::Oktober,
            Self::November,
            Self::Desember,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Januari => "Januari",
            Self::Februari => "Februari",
            Self::Maret => "Maret",
            Self::April => "April",
            Self::Mei => "Mei",
            Self::Juni => "Juni",
            Self::Juli => "Juli",
            Self::Agustus => "Agustus",
            Self::September => "September",
            Self::Oktober => "Oktober",
            Self::November => "November",
            Self::Desember => "Desember",
        }
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|m| m == self).unwrap_or(0)
    }

    /// Month from a 1-based number.
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::all().get(idx).copied()
    }

    /// Accepts a month name (case-insensitive), a number 1-12, or `now`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("now") {
            return Some(Self::current());
        }
        if let Ok(n) = s.parse::<u32>() {
            return Self::from_number(n);
        }
        Self::all()
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .copied()
    }

    pub fn current() -> Self {
        Self::from_number(chrono::Local::now().month()).unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = self.index();
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
