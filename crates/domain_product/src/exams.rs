//! Mandatory exam requirements
//!
//! The exam list for the housing family is a pure function of age and
//! gender, derived from one rule table. Bands only ever add exams as age
//! increases; nothing is removed.

use serde::{Deserialize, Serialize};

use core_kernel::Gender;

/// A medical exam the underwriter can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exam {
    CompleteBloodCount,
    FastingGlucose,
    Urinalysis,
    Psa,
    BreastUltrasound,
    Electrocardiogram,
    StressTest,
    Echocardiogram,
}

impl Exam {
    /// The pt-BR label shown on the exam checklist
    pub fn label(&self) -> &'static str {
        match self {
            Exam::CompleteBloodCount => "Hemograma completo",
            Exam::FastingGlucose => "Glicemia de jejum",
            Exam::Urinalysis => "Urina tipo I",
            Exam::Psa => "PSA",
            Exam::BreastUltrasound => "Ultrassonografia de mama",
            Exam::Electrocardiogram => "Eletrocardiograma",
            Exam::StressTest => "Teste ergométrico",
            Exam::Echocardiogram => "Ecocardiograma",
        }
    }
}

/// Requirement tier an exam belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamTier {
    /// Always required
    Minimum,
    /// Gender-specific exam added from age 52
    Additional,
    /// Cardiac panel added from age 61
    Complete,
}

struct ExamRule {
    exam: Exam,
    tier: ExamTier,
    /// When set, the rule applies to that gender only
    gender: Option<Gender>,
}

/// The single rule table both views derive from
const RULES: &[ExamRule] = &[
    ExamRule {
        exam: Exam::CompleteBloodCount,
        tier: ExamTier::Minimum,
        gender: None,
    },
    ExamRule {
        exam: Exam::FastingGlucose,
        tier: ExamTier::Minimum,
        gender: None,
    },
    ExamRule {
        exam: Exam::Urinalysis,
        tier: ExamTier::Minimum,
        gender: None,
    },
    ExamRule {
        exam: Exam::Psa,
        tier: ExamTier::Additional,
        gender: Some(Gender::Male),
    },
    ExamRule {
        exam: Exam::BreastUltrasound,
        tier: ExamTier::Additional,
        gender: Some(Gender::Female),
    },
    ExamRule {
        exam: Exam::Electrocardiogram,
        tier: ExamTier::Complete,
        gender: None,
    },
    ExamRule {
        exam: Exam::StressTest,
        tier: ExamTier::Complete,
        gender: None,
    },
    ExamRule {
        exam: Exam::Echocardiogram,
        tier: ExamTier::Complete,
        gender: None,
    },
];

fn tier_required(tier: ExamTier, age: u32) -> bool {
    match tier {
        ExamTier::Minimum => true,
        ExamTier::Additional => age > 51,
        ExamTier::Complete => age >= 61,
    }
}

fn rule_applies(rule: &ExamRule, age: u32, gender: Gender) -> bool {
    tier_required(rule.tier, age) && rule.gender.map_or(true, |g| g == gender)
}

/// The deduplicated, ordered set of mandatory exams
pub fn required_exams(age: u32, gender: Gender) -> Vec<Exam> {
    let mut seen = std::collections::HashSet::new();
    RULES
        .iter()
        .filter(|rule| rule_applies(rule, age, gender))
        .map(|rule| rule.exam)
        .filter(|exam| seen.insert(*exam))
        .collect()
}

/// The mandatory exams grouped by tier, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExamPanel {
    pub minimum: Vec<Exam>,
    pub additional: Vec<Exam>,
    pub complete: Vec<Exam>,
}

/// Same rule table as [`required_exams`], grouped by tier
pub fn required_exams_by_tier(age: u32, gender: Gender) -> ExamPanel {
    let mut panel = ExamPanel::default();
    for rule in RULES.iter().filter(|rule| rule_applies(rule, age, gender)) {
        match rule.tier {
            ExamTier::Minimum => panel.minimum.push(rule.exam),
            ExamTier::Additional => panel.additional.push(rule.exam),
            ExamTier::Complete => panel.complete.push(rule.exam),
        }
    }
    panel
}
