use crate::models::{ClaimRecord, ClaimStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Review window applied when a claim carries no explicit deadline
pub const DEFAULT_REVIEW_DAYS: i64 = 7;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

impl ClaimStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "심사중",
            Self::Approved => "승인됨",
            Self::Rejected => "거절됨",
            Self::Unknown(_) => "알 수 없음",
        }
    }
}

/// Remaining review time, e.g. "3일 남음", or "마감됨" once past the deadline
pub fn days_left(
    created_at: Option<DateTime<Utc>>,
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> String {
    let deadline =
        deadline.or_else(|| created_at.map(|created| created + Duration::days(DEFAULT_REVIEW_DAYS)));

    let Some(deadline) = deadline else {
        return "마감됨".to_string();
    };

    let days = ((deadline - now).num_milliseconds() as f64 / MILLIS_PER_DAY).ceil() as i64;
    if days > 0 {
        format!("{}일 남음", days)
    } else {
        "마감됨".to_string()
    }
}

/// Counts shown at the top of the "my properties" panel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ClaimSummary {
    pub fn from_claims(claims: &[ClaimRecord]) -> Self {
        claims.iter().fold(
            Self {
                total: claims.len(),
                ..Self::default()
            },
            |mut summary, claim| {
                match claim.status {
                    Some(ClaimStatus::Pending) => summary.pending += 1,
                    Some(ClaimStatus::Approved) => summary.approved += 1,
                    Some(ClaimStatus::Rejected) => summary.rejected += 1,
                    _ => {}
                }
                summary
            },
        )
    }
}
