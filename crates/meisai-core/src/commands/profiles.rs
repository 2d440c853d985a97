use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{FixedEventData, ProfileData, ProfilesData};
use crate::error::LedgerResult;
use crate::profile::{AccountKind, AccountProfile, Direction, FixedEvent};

/// Orientation command: shows both account profiles, their fixed calendar
/// events, and the description pools incidental rows draw from.
pub fn run() -> LedgerResult<SuccessEnvelope> {
    let profiles = [AccountKind::Personal, AccountKind::Corporate]
        .into_iter()
        .map(|kind| profile_data(kind.profile()))
        .collect();
    success("profiles", ProfilesData { profiles })
}

fn profile_data(profile: &AccountProfile) -> ProfileData {
    ProfileData {
        kind: profile.kind.as_str().to_string(),
        label: profile.kind.label_ja().to_string(),
        payday: fixed_event_data(&profile.payday, "day 25 of every month"),
        month_end: fixed_event_data(&profile.month_end, "last calendar day of every month"),
        deposit_descriptions: owned(profile.deposit_descriptions),
        withdrawal_descriptions: owned(profile.withdrawal_descriptions),
        incidental_deposit_range: [profile.incidental_deposit_min, profile.incidental_deposit_max],
        incidental_withdrawal_range: [
            profile.incidental_withdrawal_min,
            profile.incidental_withdrawal_max,
        ],
    }
}

fn fixed_event_data(event: &FixedEvent, schedule: &str) -> FixedEventData {
    FixedEventData {
        description: event.description.to_string(),
        direction: match event.direction {
            Direction::Deposit => "deposit".to_string(),
            Direction::Withdrawal => "withdrawal".to_string(),
        },
        amount_min: event.amount_min,
        amount_max: event.amount_max,
        schedule: schedule.to_string(),
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
