//! Multi-factor suitability scoring
//!
//! Each physical factor is checked against its threshold tiers and, when a
//! tier fires, deducts points from a baseline of 100 and emits a warning.
//! Tiers within a factor are exclusive; deductions across factors add up.

use crate::models::{ConditionSeverity, ConditionsMap, WeatherSnapshot};
use serde::Serialize;
use std::fmt;

/// Score before any deduction
pub const BASELINE_SCORE: i32 = 100;

/// Physical factor a deduction was applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Temperature,
    Precipitation,
    Wind,
    Visibility,
    UvIndex,
    WeatherCode,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Factor::Temperature => "temperature",
            Factor::Precipitation => "precipitation",
            Factor::Wind => "wind",
            Factor::Visibility => "visibility",
            Factor::UvIndex => "uvIndex",
            Factor::WeatherCode => "weatherCode",
        };
        write!(f, "{name}")
    }
}

/// Points removed from the baseline for one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub factor: Factor,
    pub points: i32,
}

/// Unclamped scoring outcome
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Baseline minus all deductions; may be negative
    pub raw_score: i32,
    pub deductions: Vec<Deduction>,
    pub warnings: Vec<String>,
    pub conditions: ConditionsMap,
}

/// A threshold tier that fired for one factor
struct Tier {
    severity: ConditionSeverity,
    points: i32,
    warning: String,
}

impl Tier {
    fn bad(points: i32, warning: String) -> Option<Self> {
        Some(Self {
            severity: ConditionSeverity::Bad,
            points,
            warning,
        })
    }

    fn moderate(points: i32, warning: String) -> Option<Self> {
        Some(Self {
            severity: ConditionSeverity::Moderate,
            points,
            warning,
        })
    }
}

fn temperature_tier(celsius: f64) -> Option<Tier> {
    if celsius < 0.0 {
        Tier::bad(40, format!("Freezing temperatures ({celsius:.0}°C)"))
    } else if celsius < 10.0 {
        Tier::moderate(20, format!("Cold temperatures ({celsius:.0}°C)"))
    } else if celsius > 35.0 {
        Tier::bad(40, format!("Extreme heat ({celsius:.0}°C)"))
    } else if celsius > 30.0 {
        Tier::moderate(20, format!("Hot temperatures ({celsius:.0}°C)"))
    } else {
        None
    }
}

fn precipitation_tier(probability: f64, amount_mm: f64) -> Option<Tier> {
    if probability > 70.0 || amount_mm > 2.0 {
        Tier::bad(
            40,
            format!("High chance of rain ({probability:.0}%, {amount_mm:.1} mm)"),
        )
    } else if probability > 40.0 || amount_mm > 0.5 {
        Tier::moderate(
            20,
            format!("Possible rain ({probability:.0}%, {amount_mm:.1} mm)"),
        )
    } else {
        None
    }
}

fn wind_tier(speed_kmh: f64) -> Option<Tier> {
    if speed_kmh > 50.0 {
        Tier::bad(40, format!("Very strong winds ({speed_kmh:.0} km/h)"))
    } else if speed_kmh > 30.0 {
        Tier::moderate(20, format!("Strong winds ({speed_kmh:.0} km/h)"))
    } else {
        None
    }
}

fn visibility_tier(visibility_m: f64) -> Option<Tier> {
    let km = visibility_m / 1000.0;
    if visibility_m < 1000.0 {
        Tier::bad(30, format!("Very poor visibility ({km:.1} km)"))
    } else if visibility_m < 5000.0 {
        Tier::moderate(15, format!("Reduced visibility ({km:.1} km)"))
    } else {
        None
    }
}

fn uv_tier(uv_index: f64) -> Option<Tier> {
    if uv_index >= 8.0 {
        Tier::bad(25, format!("Very high UV index ({uv_index:.1})"))
    } else if uv_index >= 6.0 {
        Tier::moderate(10, format!("High UV index ({uv_index:.1})"))
    } else {
        None
    }
}

fn weather_code_points(severity: ConditionSeverity) -> i32 {
    match severity {
        ConditionSeverity::Good => 0,
        ConditionSeverity::Moderate => 15,
        ConditionSeverity::Bad => 30,
    }
}

/// Score a snapshot. `weather_severity` is the classified severity of the
/// snapshot's weather code.
#[must_use]
pub fn score_conditions(
    snapshot: &WeatherSnapshot,
    weather_severity: ConditionSeverity,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        raw_score: BASELINE_SCORE,
        ..ScoreBreakdown::default()
    };

    let factors = [
        (Factor::Temperature, temperature_tier(snapshot.temperature)),
        (
            Factor::Precipitation,
            precipitation_tier(snapshot.precipitation_probability, snapshot.precipitation),
        ),
        (Factor::Wind, wind_tier(snapshot.wind_speed)),
        (Factor::Visibility, visibility_tier(snapshot.visibility)),
        (Factor::UvIndex, uv_tier(snapshot.uv_index)),
    ];

    for (factor, tier) in factors {
        let Some(tier) = tier else { continue };

        match factor {
            Factor::Temperature => breakdown.conditions.temperature = tier.severity,
            Factor::Precipitation => breakdown.conditions.precipitation = tier.severity,
            Factor::Wind => breakdown.conditions.wind = tier.severity,
            Factor::Visibility => breakdown.conditions.visibility = tier.severity,
            Factor::UvIndex => breakdown.conditions.uv_index = tier.severity,
            Factor::WeatherCode => {}
        }
        breakdown.raw_score -= tier.points;
        breakdown.deductions.push(Deduction {
            factor,
            points: tier.points,
        });
        breakdown.warnings.push(tier.warning);
    }

    // Reflected in the reason text only, no warning
    let points = weather_code_points(weather_severity);
    if points > 0 {
        breakdown.raw_score -= points;
        breakdown.deductions.push(Deduction {
            factor: Factor::WeatherCode,
            points,
        });
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn neutral() -> WeatherSnapshot {
        WeatherSnapshot {
            time: "2024-06-01T12:00".to_string(),
            temperature: 20.0,
            feels_like: 20.0,
            humidity: 50.0,
            wind_speed: 10.0,
            precipitation: 0.0,
            precipitation_probability: 10.0,
            weather_code: 1,
            description: "Mainly clear".to_string(),
            visibility: 10_000.0,
            uv_index: 3.0,
            is_day: true,
            sunrise: "2024-06-01T05:00".to_string(),
            sunset: "2024-06-01T21:00".to_string(),
        }
    }

    #[test]
    fn test_neutral_snapshot_has_no_deductions() {
        let breakdown = score_conditions(&neutral(), ConditionSeverity::Good);
        assert_eq!(breakdown.raw_score, 100);
        assert!(breakdown.deductions.is_empty());
        assert!(breakdown.warnings.is_empty());
        assert_eq!(breakdown.conditions, ConditionsMap::default());
    }

    #[rstest]
    #[case(-5.0, 60, ConditionSeverity::Bad)]
    #[case(-0.01, 60, ConditionSeverity::Bad)]
    #[case(0.0, 80, ConditionSeverity::Moderate)]
    #[case(9.99, 80, ConditionSeverity::Moderate)]
    #[case(10.0, 100, ConditionSeverity::Good)]
    #[case(30.0, 100, ConditionSeverity::Good)]
    #[case(30.01, 80, ConditionSeverity::Moderate)]
    #[case(35.0, 80, ConditionSeverity::Moderate)]
    #[case(35.01, 60, ConditionSeverity::Bad)]
    fn test_temperature_tiers(
        #[case] temperature: f64,
        #[case] expected: i32,
        #[case] severity: ConditionSeverity,
    ) {
        let snapshot = WeatherSnapshot {
            temperature,
            ..neutral()
        };
        let breakdown = score_conditions(&snapshot, ConditionSeverity::Good);
        assert_eq!(breakdown.raw_score, expected);
        assert_eq!(breakdown.conditions.temperature, severity);
    }

    #[rstest]
    #[case(40.0, 0.5, 100, ConditionSeverity::Good)]
    #[case(40.01, 0.0, 80, ConditionSeverity::Moderate)]
    #[case(0.0, 0.51, 80, ConditionSeverity::Moderate)]
    #[case(70.0, 2.0, 80, ConditionSeverity::Moderate)]
    #[case(70.01, 0.0, 60, ConditionSeverity::Bad)]
    #[case(0.0, 2.01, 60, ConditionSeverity::Bad)]
    fn test_precipitation_tiers(
        #[case] probability: f64,
        #[case] amount: f64,
        #[case] expected: i32,
        #[case] severity: ConditionSeverity,
    ) {
        let snapshot = WeatherSnapshot {
            precipitation_probability: probability,
            precipitation: amount,
            ..neutral()
        };
        let breakdown = score_conditions(&snapshot, ConditionSeverity::Good);
        assert_eq!(breakdown.raw_score, expected);
        assert_eq!(breakdown.conditions.precipitation, severity);
    }

    #[rstest]
    #[case(30.0, 100, ConditionSeverity::Good)]
    #[case(30.01, 80, ConditionSeverity::Moderate)]
    #[case(50.0, 80, ConditionSeverity::Moderate)]
    #[case(50.01, 60, ConditionSeverity::Bad)]
    fn test_wind_tiers(
        #[case] wind_speed: f64,
        #[case] expected: i32,
        #[case] severity: ConditionSeverity,
    ) {
        let snapshot = WeatherSnapshot {
            wind_speed,
            ..neutral()
        };
        let breakdown = score_conditions(&snapshot, ConditionSeverity::Good);
        assert_eq!(breakdown.raw_score, expected);
        assert_eq!(breakdown.conditions.wind, severity);
    }

    #[rstest]
    #[case(999.0, 70, ConditionSeverity::Bad)]
    #[case(1000.0, 85, ConditionSeverity::Moderate)]
    #[case(4999.0, 85, ConditionSeverity::Moderate)]
    #[case(5000.0, 100, ConditionSeverity::Good)]
    fn test_visibility_tiers(
        #[case] visibility: f64,
        #[case] expected: i32,
        #[case] severity: ConditionSeverity,
    ) {
        let snapshot = WeatherSnapshot {
            visibility,
            ..neutral()
        };
        let breakdown = score_conditions(&snapshot, ConditionSeverity::Good);
        assert_eq!(breakdown.raw_score, expected);
        assert_eq!(breakdown.conditions.visibility, severity);
    }

    #[rstest]
    #[case(5.99, 100, ConditionSeverity::Good)]
    #[case(6.0, 90, ConditionSeverity::Moderate)]
    #[case(7.99, 90, ConditionSeverity::Moderate)]
    #[case(8.0, 75, ConditionSeverity::Bad)]
    fn test_uv_tiers(
        #[case] uv_index: f64,
        #[case] expected: i32,
        #[case] severity: ConditionSeverity,
    ) {
        let snapshot = WeatherSnapshot {
            uv_index,
            ..neutral()
        };
        let breakdown = score_conditions(&snapshot, ConditionSeverity::Good);
        assert_eq!(breakdown.raw_score, expected);
        assert_eq!(breakdown.conditions.uv_index, severity);
    }

    #[rstest]
    #[case(ConditionSeverity::Good, 100)]
    #[case(ConditionSeverity::Moderate, 85)]
    #[case(ConditionSeverity::Bad, 70)]
    fn test_weather_code_deduction_adds_no_warning(
        #[case] severity: ConditionSeverity,
        #[case] expected: i32,
    ) {
        let breakdown = score_conditions(&neutral(), severity);
        assert_eq!(breakdown.raw_score, expected);
        assert!(breakdown.warnings.is_empty());
        assert_eq!(breakdown.conditions, ConditionsMap::default());
    }

    #[test]
    fn test_deductions_compound_in_fixed_order() {
        let snapshot = WeatherSnapshot {
            temperature: 40.0,
            precipitation_probability: 50.0,
            wind_speed: 60.0,
            visibility: 800.0,
            uv_index: 9.0,
            ..neutral()
        };
        let breakdown = score_conditions(&snapshot, ConditionSeverity::Bad);

        assert_eq!(breakdown.raw_score, 100 - 40 - 20 - 40 - 30 - 25 - 30);
        let factors: Vec<Factor> = breakdown.deductions.iter().map(|d| d.factor).collect();
        assert_eq!(
            factors,
            vec![
                Factor::Temperature,
                Factor::Precipitation,
                Factor::Wind,
                Factor::Visibility,
                Factor::UvIndex,
                Factor::WeatherCode,
            ]
        );
        assert_eq!(breakdown.warnings.len(), 5);
        assert!(breakdown.warnings[0].starts_with("Extreme heat"));
        assert!(breakdown.warnings[1].starts_with("Possible rain"));
        assert!(breakdown.warnings[2].starts_with("Very strong winds"));
        assert!(breakdown.warnings[3].starts_with("Very poor visibility"));
        assert!(breakdown.warnings[4].starts_with("Very high UV index"));
    }

    #[test]
    fn test_warning_embeds_measured_value() {
        let snapshot = WeatherSnapshot {
            temperature: -5.0,
            ..neutral()
        };
        let breakdown = score_conditions(&snapshot, ConditionSeverity::Good);
        assert_eq!(breakdown.warnings, vec!["Freezing temperatures (-5°C)"]);
    }

    #[test]
    fn test_worsening_a_factor_never_increases_score() {
        let variants: Vec<Box<dyn Fn(f64) -> WeatherSnapshot>> = vec![
            // Cold side and hot side of temperature, both worsening
            Box::new(|x| WeatherSnapshot { temperature: 20.0 - x, ..neutral() }),
            Box::new(|x| WeatherSnapshot { temperature: 20.0 + x, ..neutral() }),
            Box::new(|x| WeatherSnapshot { precipitation_probability: x, ..neutral() }),
            Box::new(|x| WeatherSnapshot { precipitation: x / 10.0, ..neutral() }),
            Box::new(|x| WeatherSnapshot { wind_speed: x, ..neutral() }),
            Box::new(|x| WeatherSnapshot { visibility: 10_000.0 - x * 100.0, ..neutral() }),
            Box::new(|x| WeatherSnapshot { uv_index: x / 5.0, ..neutral() }),
        ];

        for make in &variants {
            let mut previous = i32::MAX;
            for step in 0..=100 {
                let score = score_conditions(&make(f64::from(step)), ConditionSeverity::Good).raw_score;
                assert!(score <= previous, "score increased at step {step}");
                previous = score;
            }
        }

        let by_severity: Vec<i32> = [
            ConditionSeverity::Good,
            ConditionSeverity::Moderate,
            ConditionSeverity::Bad,
        ]
        .into_iter()
        .map(|severity| score_conditions(&neutral(), severity).raw_score)
        .collect();
        assert!(by_severity.windows(2).all(|w| w[1] <= w[0]));
    }
}
