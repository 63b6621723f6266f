use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Semiconductor,
    Display,
}

/// Tracked metric roles, in the order they are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricRole {
    Production,
    Share,
    Export,
    Price,
}

impl MetricRole {
    pub const ALL: [MetricRole; 4] =
        [MetricRole::Production, MetricRole::Share, MetricRole::Export, MetricRole::Price];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Share => "share",
            Self::Export => "export",
            Self::Price => "price",
        }
    }
}

impl Industry {
    pub const ALL: [Industry; 2] = [Industry::Semiconductor, Industry::Display];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semiconductor => "semiconductor",
            Self::Display => "display",
        }
    }

    /// Column prefix used by the ministry dataset (`반도체_생산(조원)`, ...).
    pub fn column_prefix(&self) -> &'static str {
        match self {
            Self::Semiconductor => "반도체",
            Self::Display => "디스플레이",
        }
    }

    pub fn column_for(&self, role: MetricRole) -> String {
        match role {
            MetricRole::Production => format!("{}_생산(조원)", self.column_prefix()),
            MetricRole::Share => format!("{}_시장점유율(퍼센트)", self.column_prefix()),
            MetricRole::Export => format!("{}_수출(억불)", self.column_prefix()),
            MetricRole::Price => self.price_column().to_string(),
        }
    }

    pub fn price_column(&self) -> &'static str {
        match self {
            Self::Semiconductor => "DRAM_가격(달러)",
            Self::Display => "액정표시장치(LCD)_평균가격(달러)",
        }
    }

    pub fn price_label(&self) -> &'static str {
        match self {
            Self::Semiconductor => "DRAM price",
            Self::Display => "LCD average price",
        }
    }

    /// Sub-industry choices offered for this industry.
    pub fn sub_industries(&self) -> &'static [&'static str] {
        match self {
            Self::Semiconductor => &[
                "Memory (HBM, DRAM)",
                "System Semiconductor (Foundry, Fabless)",
                "Devices/Materials/Equipment",
            ],
            Self::Display => &[
                "Large Panel (TV)",
                "Small/Mid Panel (Mobile, IT, XR)",
                "Devices/Materials/Equipment",
            ],
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "semiconductor" | "semi" | "반도체" => Ok(Self::Semiconductor),
            "display" | "디스플레이" => Ok(Self::Display),
            other => Err(DomainError::InvalidSurveyInput {
                field: "industry",
                value: other.to_string(),
            }),
        }
    }
}

/// Portion of a label before its first parenthetical qualifier.
pub fn head_term(label: &str) -> &str {
    label.split('(').next().unwrap_or(label).trim()
}

#[cfg(test)]
mod tests {
    use super::{head_term, Industry, MetricRole};

    #[test]
    fn column_names_follow_dataset_convention() {
        assert_eq!(Industry::Semiconductor.column_for(MetricRole::Production), "반도체_생산(조원)");
        assert_eq!(Industry::Display.column_for(MetricRole::Export), "디스플레이_수출(억불)");
        assert_eq!(Industry::Display.column_for(MetricRole::Share), "디스플레이_시장점유율(퍼센트)");
        assert_eq!(Industry::Semiconductor.column_for(MetricRole::Price), "DRAM_가격(달러)");
        assert_eq!(
            Industry::Display.column_for(MetricRole::Price),
            "액정표시장치(LCD)_평균가격(달러)"
        );
    }

    #[test]
    fn industry_parses_english_and_korean_labels() {
        assert_eq!("Semiconductor".parse::<Industry>().ok(), Some(Industry::Semiconductor));
        assert_eq!("반도체".parse::<Industry>().ok(), Some(Industry::Semiconductor));
        assert_eq!("디스플레이".parse::<Industry>().ok(), Some(Industry::Display));
        assert!("battery".parse::<Industry>().is_err());
    }

    #[test]
    fn head_term_strips_parenthetical_qualifier() {
        assert_eq!(head_term("Memory (HBM, DRAM)"), "Memory");
        assert_eq!(head_term("R&D(회로/설계)"), "R&D");
        assert_eq!(head_term("Large Panel"), "Large Panel");
        assert_eq!(head_term(""), "");
    }
}
