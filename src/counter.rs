//! Campaign impact counters.
//!
//! The campaign's homepage shows headline numbers counting up from zero to
//! their current totals. This module holds those totals and the
//! interpolation helper that drives the count-up display. It is a
//! presentation flourish with no connection to the estimator.

/// A snapshot of the campaign's headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignStats {
    pub pledges: u32,
    pub water_saved_liters: u32,
    pub campaigns: u32,
    pub people_reached: u32,
}

/// Current campaign totals, updated by hand each season.
pub const CAMPAIGN_TARGETS: CampaignStats = CampaignStats {
    pledges: 1247,
    water_saved_liters: 85_420,
    campaigns: 23,
    people_reached: 5678,
};

/// Interpolate the counters toward their targets.
///
/// `progress` is clamped to `[0, 1]`; intermediate frames floor each value
/// so the display never overshoots, and `progress == 1` lands exactly on
/// the targets.
pub fn interpolate(targets: &CampaignStats, progress: f64) -> CampaignStats {
    let progress = progress.clamp(0.0, 1.0);
    let scale = |target: u32| (target as f64 * progress).floor() as u32;

    CampaignStats {
        pledges: scale(targets.pledges),
        water_saved_liters: scale(targets.water_saved_liters),
        campaigns: scale(targets.campaigns),
        people_reached: scale(targets.people_reached),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_starts_at_zero_and_ends_on_target() {
        let start = interpolate(&CAMPAIGN_TARGETS, 0.0);
        assert_eq!(start.pledges, 0);
        assert_eq!(start.water_saved_liters, 0);

        let end = interpolate(&CAMPAIGN_TARGETS, 1.0);
        assert_eq!(end, CAMPAIGN_TARGETS);
    }

    #[test]
    fn intermediate_frames_floor_and_never_overshoot() {
        let half = interpolate(&CAMPAIGN_TARGETS, 0.5);
        assert_eq!(half.pledges, 623); // floor(1247 × 0.5)
        assert_eq!(half.campaigns, 11); // floor(23 × 0.5)

        let mut previous = interpolate(&CAMPAIGN_TARGETS, 0.0);
        for step in 1..=60 {
            let frame = interpolate(&CAMPAIGN_TARGETS, step as f64 / 60.0);
            assert!(frame.pledges >= previous.pledges);
            assert!(frame.pledges <= CAMPAIGN_TARGETS.pledges);
            previous = frame;
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(interpolate(&CAMPAIGN_TARGETS, -0.5).pledges, 0);
        assert_eq!(interpolate(&CAMPAIGN_TARGETS, 2.0), CAMPAIGN_TARGETS);
    }
}
