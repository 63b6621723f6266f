use serde::{Deserialize, Serialize};

use crate::domain::industry::MetricRole;
use crate::trends::TrendSet;

/// Growth band half-width. Comparisons against it are strict.
pub const REGIME_BAND: f64 = 0.03;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketRegime {
    #[serde(rename = "super-cycle")]
    SuperCycle,
    #[serde(rename = "capacity-race")]
    CapacityRace,
    #[serde(rename = "down-cycle")]
    DownCycle,
    #[serde(rename = "stable/plateau")]
    StablePlateau,
    #[serde(rename = "mixed/volatile")]
    MixedVolatile,
    /// Production or price growth is undefined; not a market phase.
    #[serde(rename = "insufficient-signal")]
    InsufficientSignal,
}

impl MarketRegime {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuperCycle => "super-cycle",
            Self::CapacityRace => "capacity-race",
            Self::DownCycle => "down-cycle",
            Self::StablePlateau => "stable/plateau",
            Self::MixedVolatile => "mixed/volatile",
            Self::InsufficientSignal => "insufficient-signal",
        }
    }

    pub fn narrative(&self) -> &'static str {
        match self {
            Self::SuperCycle => {
                "The market is close to a super cycle: production and prices are rising together."
            }
            Self::CapacityRace => {
                "The market is in a capacity race: production keeps growing while prices are under pressure."
            }
            Self::DownCycle => {
                "The market is close to a down cycle: restructuring and efficiency work run alongside preparation for next-generation technology."
            }
            Self::StablePlateau => {
                "The market is in a stable plateau: hiring centres on technology refinement and efficiency rather than large-scale expansion."
            }
            Self::MixedVolatile => {
                "The market is volatile: production and price indicators point in different directions."
            }
            Self::InsufficientSignal => {
                "There is not enough data to judge the industry outlook precisely."
            }
        }
    }

    pub fn is_signal(&self) -> bool {
        !matches!(self, Self::InsufficientSignal)
    }
}

/// Classifies a production/price growth pair. Rules are checked in order;
/// values exactly at the band edge fall through to `MixedVolatile` unless both
/// are strictly inside the band.
pub fn classify(production_cagr: Option<f64>, price_cagr: Option<f64>) -> MarketRegime {
    let (Some(production), Some(price)) = (production_cagr, price_cagr) else {
        return MarketRegime::InsufficientSignal;
    };
    if production.is_nan() || price.is_nan() {
        return MarketRegime::InsufficientSignal;
    }

    if production > REGIME_BAND && price > REGIME_BAND {
        MarketRegime::SuperCycle
    } else if production > REGIME_BAND && price < -REGIME_BAND {
        MarketRegime::CapacityRace
    } else if production < 0.0 && price < -REGIME_BAND {
        MarketRegime::DownCycle
    } else if production.abs() < REGIME_BAND && price.abs() < REGIME_BAND {
        MarketRegime::StablePlateau
    } else {
        MarketRegime::MixedVolatile
    }
}

pub fn classify_regime(trends: &TrendSet) -> MarketRegime {
    classify(trends.cagr(MetricRole::Production), trends.cagr(MetricRole::Price))
}
