//! Fixed advice content.

use crate::domain::survey::{JobRole, PreparationStage, Strength};

pub const GENERIC_STAGE_TIP: &str =
    "Start by defining a concrete goal and a timeline that fit your current situation.";

pub fn stage_tip(stage: PreparationStage) -> &'static str {
    match stage {
        PreparationStage::Foundation => concat!(
            "Years 1-2 (building the major foundation)\n",
            "- Key advice: grades are your strongest asset. In semiconductor and display roles the major GPA works as a filter.\n",
            "- Target: aim for at least 3.8 / 4.5 and avoid anything below a B in core foundation courses.\n",
            "- Core courses: circuit theory, electromagnetics and solid-state physics for electronics; organic chemistry for chemical engineering; thermodynamics for mechanical engineering.\n",
            "- Suggested activity: finish at least one small hardware/software project on Arduino or Raspberry Pi. Completing it matters more than its size."
        ),
        PreparationStage::Exploration => concat!(
            "Years 3-4 (exploring roles)\n",
            "- Key advice: this is the time to decide which process or role you want to own.\n",
            "- Must do: at least six months as an undergraduate researcher, or hands-on semiconductor process training at a national nanofab or IC design education center.\n",
            "- Certificates: data-driven credentials such as ADsP or Six Sigma Green Belt are valued more in practice than unrelated engineering licenses.\n",
            "- Wrap-up: connect your projects and activities to the target process or role and write down why you fit that position."
        ),
        PreparationStage::Experienced => concat!(
            "Industry experience / experienced new hire\n",
            "- Key advice: do not just list what you have done; reinterpret past experience from the viewpoint of the new industry and role.\n",
            "- Cover letter structure: the issue, the data you analysed, the action you took, and the measurable result.\n",
            "- Motivation: tie the industry's current boom or bust phase to the target company's CAPEX plans to explain why this company and role, and why now."
        ),
        PreparationStage::Coursework => concat!(
            "Job seeker with limited experience\n",
            "- Key advice: you have the theory, but field vocabulary and process understanding are likely missing.\n",
            "- Action plan: take an NCS-based job training course or a company-linked bootcamp to pick up field terms such as OCAP (Out of Control Action Plan) quickly.\n",
            "- Getting familiar with the real process and quality report formats used in those courses pays off in internship and entry-level interviews."
        ),
        PreparationStage::Portfolio => concat!(
            "If you are now building your portfolio and cover letters, restructure your activities around the industry cycle. ",
            "Analyse the last three to five years of production, export and price data to separate growing areas from structurally struggling ones, ",
            "and design your story around which of those gaps your experience can fill."
        ),
        PreparationStage::Unspecified => GENERIC_STAGE_TIP,
    }
}

/// Advice for a role and strength pairing, `None` where no guidance is defined.
pub fn role_strength_advice(role: JobRole, strength: Strength) -> Option<&'static str> {
    use JobRole::*;
    use Strength::*;

    let advice = match (role, strength) {
        (RndCircuitDesign, AnalyticalThinking) => concat!(
            "[R&D] with a data analysis angle.\n",
            "- Highlight experience fitting TCAD or circuit simulation results to real measurement data.\n",
            "- Go beyond 'I ran simulations': explain which parameters you tuned to reduce the error, and the tools and equations you used."
        ),
        (RndCircuitDesign, ProblemSolving) => concat!(
            "Prepare a concrete scenario of how you tracked down a bug in a digital or analog circuit design project.\n",
            "For a timing miss or functional failure, walk through waveform analysis, RTL or testbench fixes and re-verification step by step."
        ),
        (RndCircuitDesign, NumericalPrecision) => concat!(
            "Show that you compared design results quantitatively in PPA (power, performance, area) terms.\n",
            "Tabulate timing slack, power and cell area for the baseline and the optimised design, and explain which trade-off you chose."
        ),
        (RndCircuitDesign, Communication) => concat!(
            "[R&D] with a collaboration angle.\n",
            "Research is a team effort. If you have solved hard technical problems with design, verification or process teams or with graduate researchers, ",
            "describe how you aligned vocabulary and artefacts such as block and timing diagrams."
        ),
        (ProcessManufacturing, AnalyticalThinking) => concat!(
            "[Process/Quality] with a data analysis angle.\n",
            "Emphasise analysing the correlation between process parameters and defect rates to improve yield. ",
            "Prepare cases where you visualised trends, scatter plots or correlation coefficients with Excel, Python, JMP or Spotfire."
        ),
        (ProcessManufacturing, ProblemSolving) => concat!(
            "[Process/Quality] and [Equipment] problem solving together.\n",
            "Prepare a case where root cause analysis tools such as Fishbone or 5 Whys, not gut feeling, found the cause and prevented recurrence.\n",
            "Experience using predictive maintenance ideas or kinematics and fluid dynamics to cut equipment downtime is a strong selling point."
        ),
        (ProcessManufacturing, NumericalPrecision) => concat!(
            "In a fab a 1-2% parameter error can turn into a large loss.\n",
            "Explain with numbers how carefully you managed process conditions, recipes and checklists, and how much FMEA or inspection sheets reduced defects."
        ),
        (ProcessManufacturing, Communication) => concat!(
            "If you have coordinated process changes or line issues with production, quality, equipment teams and vendors, lay out the process step by step.\n",
            "If you took part in a process such as OCAP (Out of Control Action Plan), describe your role concretely."
        ),
        (QualityYield, AnalyticalThinking) => concat!(
            "Connects to the [Process/Quality] problem solving angle.\n",
            "Prepare experience analysing defect causes structurally with Fishbone, 5 Whys or Pareto charts and preventing recurrence."
        ),
        (QualityYield, NumericalPrecision) => concat!(
            "Emphasise managing quality indicators such as Cpk/Ppk, defect rates and reliability test results by the numbers.\n",
            "A case where you caught a subtle anomaly early and prevented a major issue makes a very persuasive story."
        ),
        (QualityYield, ProblemSolving) => concat!(
            "What matters is raising customer claims or internal quality issues to the level of recurrence prevention, not a quick patch.\n",
            "Explain the concrete actions, such as revised standards, training or equipment changes, together with how the indicators moved afterwards."
        ),
        (QualityYield, Communication) => concat!(
            "Quality roles handle numbers and stories at the same time.\n",
            "Organise your project in an 8D or A3 report format and be ready to explain how you presented it to customers and internal teams."
        ),
        (StrategyPlanning, AnalyticalThinking) => concat!(
            "Emphasise analysing CAPEX and R&D ratios, ASP and export indicators from industry reports and investor relations material.\n",
            "Do not stop at a summary: add your own view of which strategy follows from it."
        ),
        (StrategyPlanning, Communication) => concat!(
            "Strategy and planning roles turn numbers into stories.\n",
            "If you have presented an industry or competitor analysis as a one-page report and a short deck, pitch its structure and the feedback you received."
        ),
        (SalesMarketing, Communication) => concat!(
            "[Sales/Marketing] with a communication angle.\n",
            "Emphasise understanding customers' technology roadmaps (mobile, server, automotive OEMs) and translating your company's technical terms into their business language.\n",
            "Prepare concrete example sentences showing how you reframed wording in presentations, proposals and meetings."
        ),
        (SalesMarketing, ProblemSolving) => concat!(
            "From a CS or field engineer viewpoint, prepare concrete cases of diagnosing and fixing failures at a customer site.\n",
            "Expressing the result in numbers, such as reduced downtime or fewer repeat visits, makes it far more convincing."
        ),
        _ => return None,
    };
    Some(advice)
}

pub const GRADUATE_COURSEWORK_TIP: &str = "Graduate-level knowledge of the major is expected. Rework the core subjects (devices, processes, VLSI) from the standard textbooks.";

pub const TECHNICAL_FOUNDATION_TIP: &str = "Complete foundational technical training (for example K-MOOC courses) on the eight major semiconductor processes and basic semiconductor and display structures.";

pub const SPOKEN_BUSINESS_TIP: &str = "B2B conversation skills matter. Set a dedicated speaking plan targeting OPIc IH or a high TOEIC Speaking score.";

pub const MEMORY_QUESTIONS: [&str; 2] = [
    "What are three process or device techniques used to secure DRAM capacitor capacitance? (e.g. high-k materials, 3D structures, HARC etch)",
    "Why does channel hole etch get harder as NAND layer counts rise, and how can process and equipment choices address it?",
];

pub const MEMORY_DESIGN_QUESTION: &str = "Describe the main issues of TSV (Through Silicon Via), the core of HBM, such as heat dissipation and warpage, and bonding technologies such as MR-MUF.";

pub const FOUNDRY_QUESTIONS: [&str; 2] = [
    "How do FinFET and GAA (Gate-All-Around) structures differ, and why is GAA essential at advanced nodes (e.g. short channel effect control)?",
    "What changes and requirements has EUV lithography introduced for materials such as photoresist and pellicles?",
];

pub const FOUNDRY_DESIGN_QUESTION: &str = "What makes up a PDK (Process Design Kit), and how does a design engineer use it?";

pub const DISPLAY_QUESTIONS: [&str; 3] = [
    "Why is the lifetime of blue OLED emitters so short physically, and which recent technologies (tandem structures, phosphorescent materials) improve it?",
    "How does LTPO TFT technology reduce power consumption in mobile devices, in connection with variable refresh rates?",
    "Compare the emission structures of large QD-OLED and WOLED panels and the pros and cons of each.",
];

/// Fundamentals asked regardless of industry; always the last two questions.
pub const COMMON_QUESTIONS: [&str; 2] = [
    "Why does semiconductor processing need vacuum, and how do vacuum pumps such as cryo and turbo pumps work?",
    "What is the difference between anisotropic and isotropic etching in plasma etch, and when is each used?",
];
