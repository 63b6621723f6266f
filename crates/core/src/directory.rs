//! Employer directory for the semiconductor and display job market.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown company tier `{0}`")]
pub struct UnknownTier(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyTier {
    Idm,
    Fabless,
    Osat,
    ForeignEquipment,
    LocalEquipment,
}

impl CompanyTier {
    pub const ALL: [CompanyTier; 5] = [
        CompanyTier::Idm,
        CompanyTier::Fabless,
        CompanyTier::Osat,
        CompanyTier::ForeignEquipment,
        CompanyTier::LocalEquipment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idm => "idm",
            Self::Fabless => "fabless",
            Self::Osat => "osat",
            Self::ForeignEquipment => "foreign-equipment",
            Self::LocalEquipment => "local-equipment",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Idm => "[Tier 1] Integrated device makers (IDM / foundry)",
            Self::Fabless => "[Tier 1.5] Fabless (design houses)",
            Self::Osat => "[Tier 2] OSAT (packaging/test)",
            Self::ForeignEquipment => "[Global] Foreign equipment makers",
            Self::LocalEquipment => "[Hidden Champion] Domestic equipment and materials",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Idm => "The integrated semiconductor makers at the heart of the industry.",
            Self::Fabless => {
                "R&D centred in the capital region, with a high share of design and embedded roles."
            }
            Self::Osat => "Solid back-end packaging companies concentrated in the Chungcheong region.",
            Self::ForeignEquipment => {
                "Top-range salaries; English and global communication skills matter."
            }
            Self::LocalEquipment => {
                "Mid-sized equipment and materials makers with strong growth and technology."
            }
        }
    }

    pub fn companies(&self) -> &'static [Company] {
        match self {
            Self::Idm => IDM_COMPANIES,
            Self::Fabless => FABLESS_COMPANIES,
            Self::Osat => OSAT_COMPANIES,
            Self::ForeignEquipment => FOREIGN_EQUIPMENT_COMPANIES,
            Self::LocalEquipment => LOCAL_EQUIPMENT_COMPANIES,
        }
    }
}

impl fmt::Display for CompanyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyTier {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "idm" | "foundry" | "tier1" | "tier-1" => Ok(Self::Idm),
            "fabless" | "tier1.5" | "tier-1.5" => Ok(Self::Fabless),
            "osat" | "tier2" | "tier-2" => Ok(Self::Osat),
            "foreign-equipment" | "foreign" | "global" => Ok(Self::ForeignEquipment),
            "local-equipment" | "local" | "hidden-champion" => Ok(Self::LocalEquipment),
            _ => Err(UnknownTier(value.trim().to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: &'static str,
    pub focus: &'static str,
    pub locations: &'static str,
    pub requirements: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<&'static str>,
    pub link: &'static str,
}

/// One tier with its companies, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TierListing {
    pub tier: CompanyTier,
    pub title: &'static str,
    pub summary: &'static str,
    pub companies: &'static [Company],
}

impl From<CompanyTier> for TierListing {
    fn from(tier: CompanyTier) -> Self {
        Self { tier, title: tier.title(), summary: tier.summary(), companies: tier.companies() }
    }
}

/// Every tier, or only `tier` when given.
pub fn listings(tier: Option<CompanyTier>) -> Vec<TierListing> {
    match tier {
        Some(tier) => vec![TierListing::from(tier)],
        None => CompanyTier::ALL.into_iter().map(TierListing::from).collect(),
    }
}

pub const JOB_SEARCH_HINTS: [&str; 3] = [
    "Design and R&D roles in the capital region (Pangyo, Hwaseong) are highly competitive.",
    "The Cheonan, Asan and Cheongju lines (OSAT, equipment and materials) open many process and equipment engineer positions.",
    "At foreign equipment makers English can decide the document screening as much as job skills.",
];

const IDM_COMPANIES: &[Company] = &[
    Company {
        name: "Samsung Electronics (DS Division)",
        focus: "Memory (DRAM, NAND), foundry, System LSI",
        locations: "Hwaseong, Pyeongtaek (Godeok), Giheung (foundry), Yongin (Namsa, planned)",
        requirements: "GPA 3.5+ (major GPA matters), OPIc IM2 (engineering) / IH (humanities), GSAT required",
        tip: Some("Equipment and process hires are likely to work in Pyeongtaek. The memory business hires the most."),
        link: "https://www.samsungcareers.com/",
    },
    Company {
        name: "Samsung Electronics (TSP)",
        focus: "Semiconductor packaging and test (back end)",
        locations: "Cheonan (Seongseong-dong), Onyang (Baebang-eup)",
        requirements: "Understanding of packaging processes, mechanical, materials or chemical majors preferred, regional relocation",
        tip: Some("Cheonan/Onyang sites can be slightly less competitive than the capital region."),
        link: "https://www.samsungcareers.com/",
    },
    Company {
        name: "SK hynix",
        focus: "Memory (world No. 2 in DRAM, NAND)",
        locations: "Icheon (HQ/DRAM), Cheongju (NAND), Yongin (Wonsam, planned)",
        requirements: "GPA 3.5+, very demanding SKCT, deep job interviews on major knowledge",
        tip: Some("Applying to the Cheongju site (NAND/Solution) can be strategic for competition."),
        link: "https://recruit.skhynix.com/servlet/mnus_main.view",
    },
    Company {
        name: "DB HiTek",
        focus: "8-inch foundry (analog semiconductors, PMIC)",
        locations: "Bucheon (HQ/Fab1), Eumseong (Fab2)",
        requirements: "GPA 3.3-3.5, device and process knowledge, electronics majors preferred",
        tip: Some("Fast salary growth. Bucheon is popular but Eumseong has many openings."),
        link: "https://dbgroup.recruiter.co.kr/",
    },
];

const FABLESS_COMPANIES: &[Company] = &[
    Company {
        name: "LX Semicon",
        focus: "Display driver IC (DDI) design, No. 1 in Korea",
        locations: "Seoul Yangjae, Daejeon Yuseong (R&D campus)",
        requirements: "Electronics/CS master's preferred, Verilog and FPGA skills, projects required for bachelor's applicants",
        tip: None,
        link: "https://www.lxsemicon.com/kr/company/recruitment-information/application",
    },
    Company {
        name: "Telechips / Chips&Media",
        focus: "Automotive infotainment (IVI) / video IP",
        locations: "Seongnam (Pangyo), Seoul Gangnam",
        requirements: "C/C++, embedded software, digital logic, system semiconductor training preferred",
        tip: None,
        link: "https://careers.telechips.com/",
    },
];

const OSAT_COMPANIES: &[Company] = &[
    Company {
        name: "Hana Micron",
        focus: "Packaging and test (Samsung/SK partner)",
        locations: "Asan (Eumbong-myeon), Pangyo (R&D)",
        requirements: "Electrical, electronics, mechanical or materials majors, many quality (QC/QA) openings",
        tip: None,
        link: "https://hanamicron.recruiter.co.kr/career/home",
    },
    Company {
        name: "SFA Semicon",
        focus: "Assembly and test",
        locations: "Cheonan (Seobuk-gu)",
        requirements: "GPA 3.2-3.5, three-shift work for some engineers, OPIc IM1+",
        tip: None,
        link: "https://recruit.sfa.co.kr/",
    },
    Company {
        name: "Nepes",
        focus: "WLP, PLP (advanced packaging)",
        locations: "Cheongju (Ochang), Goesan (Cheongan)",
        requirements: "Chemistry/advanced materials preferred, interest in next-generation packaging, English reading",
        tip: None,
        link: "https://careers.nepes.co.kr/",
    },
];

const FOREIGN_EQUIPMENT_COMPANIES: &[Company] = &[
    Company {
        name: "ASML Korea",
        focus: "EUV lithography equipment",
        locations: "Hwaseong (Dongtan), Pyeongtaek, Icheon, Cheongju (on-site at customer fabs)",
        requirements: "Spoken English required (OPIc IM3-IH), electronic circuits and kinematics, shift work for CS",
        tip: Some("Documents, AI assessment, English test, then interviews. Prepare for English interviews."),
        link: "https://midasin-asmlkorea.recruiter.co.kr/career/home",
    },
    Company {
        name: "AMAT / Lam / TEL",
        focus: "Deposition, etch and track equipment (global top 3)",
        locations: "Hwaseong, Pyeongtaek, Icheon, Yongin (R&D centre)",
        requirements: "Job-related experience (internships, equipment assembly), driving licence required for CS",
        tip: Some("New R&D centres in Yongin and Hwaseong are hiring more graduate process engineers."),
        link: "https://www.peoplenjob.com/",
    },
];

const LOCAL_EQUIPMENT_COMPANIES: &[Company] = &[
    Company {
        name: "SEMES",
        focus: "Cleaning, etch and photo equipment (Samsung Electronics subsidiary)",
        locations: "Cheonan (Jiksan, HQ), Hwaseong",
        requirements: "Samsung-level benefits, GPA 3.5+, mechanical, electrical/electronics or software majors",
        tip: None,
        link: "https://www.semes.com/",
    },
    Company {
        name: "HPSP",
        focus: "High-pressure hydrogen annealing equipment (unique technology worldwide)",
        locations: "Hwaseong (Dongtan)",
        requirements: "Rapid recent growth, mechanical design and process engineers, foreign languages preferred",
        tip: None,
        link: "https://thehpsp.com/ko/bbs/board.php?bo_table=career",
    },
    Company {
        name: "Soulbrain / Dongjin Semichem",
        focus: "Etchants / photoresist (PR)",
        locations: "Pangyo (R&D), Gongju (Soulbrain), Hwaseong (Dongjin)",
        requirements: "Chemical engineering or advanced materials required, hazardous materials certificates preferred",
        tip: None,
        link: "https://www.soulbrain.co.kr/m64.php?tab=1",
    },
];
