use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Control {
    pub id: &'static str,
    pub title: &'static str,
    pub question: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: OptionValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    NotApplicable,
    Percent(u8),
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotApplicable => serializer.serialize_str("NA"),
            Self::Percent(value) => serializer.serialize_u8(*value),
        }
    }
}

pub const CONTROLS: [Control; 12] = [
    Control {
        id: "5.1",
        title: "Information security policies",
        question: "Are approved and communicated policies in place (at minimum: access, backups, incidents, acceptable use)?",
    },
    Control {
        id: "5.2",
        title: "Roles and responsibilities",
        question: "Are owners defined for security, IT, asset ownership, and approvals?",
    },
    Control {
        id: "5.9",
        title: "Asset inventory",
        question: "Is there an up-to-date inventory of assets (devices, apps, data) with assigned owners?",
    },
    Control {
        id: "5.15",
        title: "Access control",
        question: "Role-based access, least privilege, periodic reviews, and revocation on departure?",
    },
    Control {
        id: "5.17",
        title: "Authentication",
        question: "MFA, password and credential management, and control over shared accounts?",
    },
    Control {
        id: "5.23",
        title: "Cloud security",
        question: "If cloud is used: are permissions, configurations, logs, and security reviews defined?",
    },
    Control {
        id: "5.30",
        title: "ICT continuity",
        question: "RTO/RPO targets, a continuity plan, and contingency testing (at least annually)?",
    },
    Control {
        id: "6.3",
        title: "Security awareness",
        question: "Periodic training (phishing, data handling, good practices) with recorded evidence?",
    },
    Control {
        id: "8.7",
        title: "Anti-malware",
        question: "Up-to-date anti-malware/EDR protection and execution/download policies?",
    },
    Control {
        id: "8.8",
        title: "Vulnerability management",
        question: "Periodic scanning, prioritization, and remediation within defined timelines?",
    },
    Control {
        id: "8.9",
        title: "Secure configuration",
        question: "Hardening baselines and change control for systems and the network?",
    },
    Control {
        id: "8.13",
        title: "Backups",
        question: "3-2-1 backups, encrypted, with restricted access and restore testing?",
    },
];

pub const ANSWER_OPTIONS: [AnswerOption; 7] = [
    AnswerOption {
        label: "N/A (not applicable)",
        value: OptionValue::NotApplicable,
    },
    AnswerOption {
        label: "0% (Not implemented)",
        value: OptionValue::Percent(0),
    },
    AnswerOption {
        label: "20% (Initial)",
        value: OptionValue::Percent(20),
    },
    AnswerOption {
        label: "40% (Partial)",
        value: OptionValue::Percent(40),
    },
    AnswerOption {
        label: "60% (In progress)",
        value: OptionValue::Percent(60),
    },
    AnswerOption {
        label: "80% (Implemented)",
        value: OptionValue::Percent(80),
    },
    AnswerOption {
        label: "100% (Optimized)",
        value: OptionValue::Percent(100),
    },
];

pub fn is_not_applicable(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("NA") || raw.eq_ignore_ascii_case("N/A")
}

pub fn percent_value(raw: &str) -> Option<u8> {
    let parsed: u8 = raw.parse().ok()?;
    ANSWER_OPTIONS.iter().find_map(|option| match option.value {
        OptionValue::Percent(value) if value == parsed => Some(value),
        _ => None,
    })
}

pub fn selection_key(index: usize) -> String {
    format!("gap_{}", index + 1)
}
