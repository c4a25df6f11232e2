use serde::Serialize;

/// Total-score band relative to the reference population.
///
/// Variants are declared from lowest to highest so the derived ordering
/// follows the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkBand {
    Bottom,
    Third,
    Second,
    Top,
}

impl BenchmarkBand {
    pub const TOP_THRESHOLD: u32 = 422;
    pub const SECOND_THRESHOLD: u32 = 395;
    pub const THIRD_THRESHOLD: u32 = 369;

    /// First matching threshold from the top wins.
    pub const fn classify(total_score: u32) -> Self {
        if total_score >= Self::TOP_THRESHOLD {
            Self::Top
        } else if total_score >= Self::SECOND_THRESHOLD {
            Self::Second
        } else if total_score >= Self::THIRD_THRESHOLD {
            Self::Third
        } else {
            Self::Bottom
        }
    }

    pub const fn ordered() -> [Self; 4] {
        [Self::Top, Self::Second, Self::Third, Self::Bottom]
    }

    /// 1 for the bottom band up to 4 for the top band.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Bottom => 1,
            Self::Third => 2,
            Self::Second => 3,
            Self::Top => 4,
        }
    }

    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Top => "Ön a negyedik (legjobb) negyedbe tartozik",
            Self::Second => "Ön a második negyedbe tartozik",
            Self::Third => "Ön a harmadik negyedbe tartozik",
            Self::Bottom => "Ön az első negyedbe tartozik",
        }
    }

    /// Row of the reference table, e.g. `395–421 = a második negyedbe tartozik.`
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Top => "422 vagy annál nagyobb = Ön a top legjobb negyedik negyedhez tartozik",
            Self::Second => "395–421 = a második negyedbe tartozik.",
            Self::Third => "369–394 = a harmadik negyedbe tartozik.",
            Self::Bottom => "368 vagy annál kevesebb = az első negyedbe tartozik.",
        }
    }
}

/// The 2006 business-school survey the bands come from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePopulation {
    pub respondents: u32,
    pub survey_year: u16,
    pub mean_total: f64,
}

pub const REFERENCE_POPULATION: ReferencePopulation = ReferencePopulation {
    respondents: 5000,
    survey_year: 2006,
    mean_total: 394.35,
};

/// Comparison of one total score against the reference bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub total_score: u32,
    pub band: BenchmarkBand,
    pub rank: u8,
    pub verdict: &'static str,
    pub reference: ReferencePopulation,
}

impl BenchmarkResult {
    pub fn for_total(total_score: u32) -> Self {
        let band = BenchmarkBand::classify(total_score);
        Self {
            total_score,
            band,
            rank: band.rank(),
            verdict: band.verdict(),
            reference: REFERENCE_POPULATION,
        }
    }
}
