use crate::core::report::{Maturity, RiskTier};

pub fn tier_for_score(score: u8) -> RiskTier {
    match score {
        80..=100 => RiskTier::Low,
        55..=79 => RiskTier::Medium,
        _ => RiskTier::High,
    }
}

pub fn maturity_for_value(value: u8) -> Maturity {
    match value {
        0 => Maturity::NotImplemented,
        1..=40 => Maturity::Partial,
        41..=60 => Maturity::InProgress,
        61..=80 => Maturity::Implemented,
        _ => Maturity::Optimized,
    }
}
