//! Wage table types.
//!
//! This module contains the strongly-typed wage table that the interval
//! splitter prices shifts against, and the raw structure it is deserialized
//! from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Minutes in a day; the last linear minute of any shift.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// A contiguous range of linear time sharing one base rate.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBand {
    /// Human-readable band name (e.g., "Night").
    pub name: String,
    /// First linear minute covered by the band.
    pub from: u32,
    /// Last linear minute covered by the band.
    pub to: u32,
    /// Base rate per hour worked inside the band.
    pub hourly_rate: Decimal,
}

impl WageBand {
    /// Creates a band from its parts.
    pub fn new(name: impl Into<String>, from: u32, to: u32, hourly_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            from,
            to,
            hourly_rate,
        }
    }

    /// Returns true if `minute` lies within the band.
    pub fn contains(&self, minute: u32) -> bool {
        (self.from..=self.to).contains(&minute)
    }

    /// Base rate per minute worked inside the band.
    pub fn rate_per_minute(&self) -> Decimal {
        self.hourly_rate / Decimal::from(MINUTES_PER_HOUR)
    }
}

/// Raw wage table as written in a YAML configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct WageTableConfig {
    /// Bands in ascending order of time.
    pub bands: Vec<WageBand>,
    /// Hourly amount added to the base rate on Saturday and Sunday.
    pub weekend_surcharge: Decimal,
}

/// The validated wage table.
///
/// The bands are contiguous and together cover every linear minute in
/// `[0, 1440]`, so every normalized time belongs to exactly one band.
/// Rates are held per hour and applied per minute.
///
/// # Example
///
/// ```
/// use weekly_payroll::config::WageTable;
/// use rust_decimal::Decimal;
///
/// let table = WageTable::default();
/// assert_eq!(table.band_for_time(600).unwrap().name, "Normal");
/// assert_eq!(table.band_ceiling(600), Some(1080));
/// assert_eq!(table.rate_for_time(600), Some(Decimal::from(15) / Decimal::from(60)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WageTable {
    bands: Vec<WageBand>,
    weekend_surcharge: Decimal,
}

impl WageTable {
    /// Validates and builds a wage table.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidWageTable`] if there are no bands, a
    /// band is inverted, the bands leave a gap or overlap, they do not span
    /// `[0, 1440]`, or any rate is negative.
    pub fn new(bands: Vec<WageBand>, weekend_surcharge: Decimal) -> PayrollResult<Self> {
        let invalid = |message: String| PayrollError::InvalidWageTable { message };

        let (first, last) = match (bands.first(), bands.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(invalid("at least one band is required".to_string())),
        };
        if first.from != 0 {
            return Err(invalid(format!(
                "band '{}' must start at minute 0, not {}",
                first.name, first.from
            )));
        }
        if last.to != MINUTES_PER_DAY {
            return Err(invalid(format!(
                "band '{}' must end at minute {}, not {}",
                last.name, MINUTES_PER_DAY, last.to
            )));
        }

        for band in &bands {
            if band.to > MINUTES_PER_DAY {
                return Err(invalid(format!(
                    "band '{}' ends at {}, past minute {}",
                    band.name, band.to, MINUTES_PER_DAY
                )));
            }
            if band.from > band.to {
                return Err(invalid(format!(
                    "band '{}' starts at {} after it ends at {}",
                    band.name, band.from, band.to
                )));
            }
            if band.hourly_rate.is_sign_negative() {
                return Err(invalid(format!(
                    "band '{}' has negative rate {}",
                    band.name, band.hourly_rate
                )));
            }
        }

        for pair in bands.windows(2) {
            if pair[1].from != pair[0].to + 1 {
                return Err(invalid(format!(
                    "band '{}' must start at minute {} to follow '{}', not {}",
                    pair[1].name,
                    pair[0].to + 1,
                    pair[0].name,
                    pair[1].from
                )));
            }
        }

        if weekend_surcharge.is_sign_negative() {
            return Err(invalid(format!(
                "weekend surcharge {} is negative",
                weekend_surcharge
            )));
        }

        Ok(Self {
            bands,
            weekend_surcharge,
        })
    }

    /// All bands in ascending order of time.
    pub fn bands(&self) -> &[WageBand] {
        &self.bands
    }

    /// The first band whose inclusive range contains `minute`.
    pub fn band_for_time(&self, minute: u32) -> Option<&WageBand> {
        self.bands.iter().find(|band| band.contains(minute))
    }

    /// Base rate per minute at `minute`.
    pub fn rate_for_time(&self, minute: u32) -> Option<Decimal> {
        self.band_for_time(minute).map(WageBand::rate_per_minute)
    }

    /// Upper bound of the band containing `minute`; the split point for
    /// intervals that leave the band.
    pub fn band_ceiling(&self, minute: u32) -> Option<u32> {
        self.band_for_time(minute).map(|band| band.to)
    }

    /// Returns true if both minutes fall in the same band.
    pub fn same_band(&self, a: u32, b: u32) -> bool {
        match (self.band_for_time(a), self.band_for_time(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Hourly weekend surcharge.
    pub fn weekend_surcharge_hourly(&self) -> Decimal {
        self.weekend_surcharge
    }

    /// Weekend surcharge per minute.
    pub fn weekend_surcharge(&self) -> Decimal {
        self.weekend_surcharge / Decimal::from(MINUTES_PER_HOUR)
    }
}

impl Default for WageTable {
    /// Early Morning 25/h, Normal 15/h, Night 20/h, weekend +5/h.
    fn default() -> Self {
        Self {
            bands: vec![
                WageBand::new("Early Morning", 0, 540, Decimal::from(25)),
                WageBand::new("Normal", 541, 1080, Decimal::from(15)),
                WageBand::new("Night", 1081, MINUTES_PER_DAY, Decimal::from(20)),
            ],
            weekend_surcharge: Decimal::from(5),
        }
    }
}

impl TryFrom<WageTableConfig> for WageTable {
    type Error = PayrollError;

    fn try_from(config: WageTableConfig) -> PayrollResult<Self> {
        WageTable::new(config.bands, config.weekend_surcharge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn default_bands() -> Vec<WageBand> {
        WageTable::default().bands().to_vec()
    }

    // ==========================================================================
    // WT-001: band lookup at the boundaries
    // ==========================================================================
    #[test]
    fn test_wt_001_boundaries_belong_to_lower_band() {
        let table = WageTable::default();
        assert_eq!(table.band_for_time(0).unwrap().name, "Early Morning");
        assert_eq!(table.band_for_time(540).unwrap().name, "Early Morning");
        assert_eq!(table.band_for_time(541).unwrap().name, "Normal");
        assert_eq!(table.band_for_time(1080).unwrap().name, "Normal");
        assert_eq!(table.band_for_time(1081).unwrap().name, "Night");
        assert_eq!(table.band_for_time(1440).unwrap().name, "Night");
    }

    #[test]
    fn test_wt_002_every_minute_in_exactly_one_band() {
        let table = WageTable::default();
        for minute in 0..=MINUTES_PER_DAY {
            let covering = table.bands().iter().filter(|b| b.contains(minute)).count();
            assert_eq!(covering, 1, "minute {} covered by {} bands", minute, covering);
        }
    }

    #[test]
    fn test_wt_003_minutes_past_midnight_are_uncovered() {
        let table = WageTable::default();
        assert!(table.band_for_time(1441).is_none());
        assert!(table.rate_for_time(1470).is_none());
        assert!(table.band_ceiling(1500).is_none());
    }

    #[test]
    fn test_rates_are_per_minute() {
        let table = WageTable::default();
        // 25/60 and 5/60 are not exact in 28 digits; compare like for like.
        assert_eq!(table.rate_for_time(60), Some(dec("25") / dec("60")));
        assert_eq!(table.rate_for_time(600), Some(dec("0.25")));
        assert_eq!(table.rate_for_time(1200), Some(dec("20") / dec("60")));
        assert_eq!((table.rate_for_time(60).unwrap() * dec("60")).round_dp(20), dec("25"));
        assert_eq!(table.weekend_surcharge(), dec("5") / dec("60"));
        assert_eq!(table.weekend_surcharge_hourly(), dec("5"));
    }

    #[test]
    fn test_band_ceilings() {
        let table = WageTable::default();
        assert_eq!(table.band_ceiling(1), Some(540));
        assert_eq!(table.band_ceiling(541), Some(1080));
        assert_eq!(table.band_ceiling(1200), Some(1440));
    }

    #[test]
    fn test_same_band() {
        let table = WageTable::default();
        assert!(table.same_band(600, 1080));
        assert!(!table.same_band(540, 541));
        assert!(!table.same_band(600, 1500));
    }

    // ==========================================================================
    // Validation
    // ==========================================================================
    #[test]
    fn test_default_table_passes_validation() {
        let table = WageTable::new(default_bands(), dec("5")).unwrap();
        assert_eq!(table, WageTable::default());
    }

    #[test]
    fn test_empty_band_list_is_rejected() {
        let err = WageTable::new(vec![], dec("5")).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidWageTable { .. }));
    }

    #[test]
    fn test_gap_between_bands_is_rejected() {
        let mut bands = default_bands();
        bands[1].from = 545;
        let err = WageTable::new(bands, dec("5")).unwrap_err();
        assert!(err.to_string().contains("Normal"));
    }

    #[test]
    fn test_overlapping_bands_are_rejected() {
        let mut bands = default_bands();
        bands[2].from = 1000;
        assert!(WageTable::new(bands, dec("5")).is_err());
    }

    #[test]
    fn test_table_must_cover_whole_day() {
        let mut bands = default_bands();
        bands[0].from = 1;
        assert!(WageTable::new(bands, dec("5")).is_err());

        let mut bands = default_bands();
        bands[2].to = 1439;
        assert!(WageTable::new(bands, dec("5")).is_err());
    }

    #[test]
    fn test_inverted_band_is_rejected() {
        let bands = vec![
            WageBand::new("Morning", 0, 700, dec("10")),
            WageBand::new("Broken", 701, 600, dec("10")),
            WageBand::new("Rest", 601, 1440, dec("10")),
        ];
        let err = WageTable::new(bands, dec("0")).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_band_past_end_of_day_is_rejected() {
        let bands = vec![
            WageBand::new("Huge", 0, u32::MAX, dec("10")),
            WageBand::new("Again", 0, 1440, dec("10")),
        ];
        let err = WageTable::new(bands, dec("0")).unwrap_err();
        assert_eq!(
            err,
            PayrollError::InvalidWageTable {
                message: format!("band 'Huge' ends at {}, past minute 1440", u32::MAX),
            }
        );

        let mut bands = default_bands();
        bands[1].to = 1441;
        bands[2].from = 1442;
        assert!(WageTable::new(bands, dec("5")).is_err());
    }

    #[test]
    fn test_negative_rates_are_rejected() {
        let mut bands = default_bands();
        bands[0].hourly_rate = dec("-1");
        assert!(WageTable::new(bands, dec("5")).is_err());
        assert!(WageTable::new(default_bands(), dec("-5")).is_err());
    }

    #[test]
    fn test_single_band_table() {
        let table =
            WageTable::new(vec![WageBand::new("Flat", 0, 1440, dec("12"))], dec("0")).unwrap();
        assert!(table.same_band(0, 1440));
        assert_eq!(table.band_ceiling(700), Some(1440));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
weekend_surcharge: "5"
bands:
  - name: Early Morning
    from: 0
    to: 540
    hourly_rate: "25"
  - name: Normal
    from: 541
    to: 1080
    hourly_rate: "15"
  - name: Night
    from: 1081
    to: 1440
    hourly_rate: "20"
"#;
        let config: WageTableConfig = serde_yaml::from_str(yaml).unwrap();
        let table = WageTable::try_from(config).unwrap();
        assert_eq!(table, WageTable::default());
    }
}
