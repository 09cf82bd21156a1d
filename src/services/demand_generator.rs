use rand::SeedableRng;
use thiserror::Error;

use crate::domain::calendar::DAYS_PER_MONTH;
use crate::domain::demand::{DemandParameters, DemandSeries, MonthDemand};
use crate::services::seeded_random::Mulberry32;
use crate::services::statistics::{round_half_up, sample_std_deviation};

#[derive(Error, Debug, PartialEq)]
pub enum DemandError {
    #[error("months must be greater than zero")]
    InvalidMonths,
    #[error("peak month must be between 1 and 12, got {0}")]
    PeakMonthOutOfRange(u32),
    #[error("noise standard deviation must not be negative, got {0}")]
    NegativeNoiseStd(f64),
}

/// Generates a seeded demand series: a linear trend with one seasonal peak
/// month and Gaussian noise on the monthly totals, each total decomposed
/// into 30 daily values that sum back exactly.
///
/// The same parameters always produce the same series, on any platform.
pub fn generate(params: &DemandParameters) -> Result<DemandSeries, DemandError> {
    if params.months == 0 {
        return Err(DemandError::InvalidMonths);
    }
    if !(1..=12).contains(&params.peak_month) {
        return Err(DemandError::PeakMonthOutOfRange(params.peak_month));
    }
    if params.noise_std < 0.0 {
        return Err(DemandError::NegativeNoiseStd(params.noise_std));
    }

    let mut rng = Mulberry32::seed_from_u64(params.seed);

    let mut months = Vec::with_capacity(params.months as usize);
    for t in 0..params.months {
        let month_in_year = t % 12 + 1;
        let trend = params.trend_per_period * f64::from(t);
        let peak_multiplier = if month_in_year == params.peak_month {
            params.peak_factor
        } else {
            1.0
        };
        let noise = standard_normal(&mut rng) * params.noise_std;

        let total = round_half_up((params.base_level + trend) * peak_multiplier + noise)
            .max(0.0) as u32;
        let daily = daily_decomposition(&mut rng, total);
        months.push(MonthDemand { total, daily });
    }

    let total_demand: f64 = months.iter().map(|month| f64::from(month.total)).sum();
    let annual_demand = total_demand / f64::from(params.months) * 12.0;
    let daily_avg_demand = annual_demand / 365.0;

    let all_days: Vec<f64> = months
        .iter()
        .flat_map(|month| month.daily.iter().map(|&value| f64::from(value)))
        .collect();
    let daily_std_deviation = sample_std_deviation(&all_days);

    Ok(DemandSeries {
        months,
        annual_demand,
        daily_avg_demand,
        daily_std_deviation,
    })
}

/// One standard-normal draw via the Box-Muller transform.
///
/// A zero `u1` would make the logarithm diverge; it is clamped to machine
/// epsilon rather than redrawn, so every month consumes exactly two uniform
/// draws and the stream stays aligned.
fn standard_normal(rng: &mut Mulberry32) -> f64 {
    let u1 = rng.next_f64().max(f64::EPSILON);
    let u2 = rng.next_f64();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Splits a monthly total into 30 daily values that sum back exactly.
///
/// Raw values are inverse-transform samples of an exponential with rate
/// `days / total`, normalized proportionally to the total and rounded. The
/// rounding residual is folded entirely into the last day, which keeps the
/// exact-sum invariant without spreading the error. Only a fold that would
/// leave the last day negative gets carried further back.
fn daily_decomposition(rng: &mut Mulberry32, total: u32) -> Vec<u32> {
    let days = DAYS_PER_MONTH as usize;

    // Zero-total months still consume their 30 draws so later months see
    // the same stream on either path.
    let mut uniforms = Vec::with_capacity(days);
    for _ in 0..days {
        uniforms.push(rng.next_f64());
    }
    if total == 0 {
        return vec![0; days];
    }

    let lambda = f64::from(DAYS_PER_MONTH) / f64::from(total);
    let raw: Vec<f64> = uniforms
        .iter()
        .map(|&u| -(1.0 - u).max(f64::MIN_POSITIVE).ln() / lambda)
        .collect();
    let raw_sum: f64 = raw.iter().sum();

    let mut daily: Vec<i64> = raw
        .iter()
        .map(|&value| round_half_up(value / raw_sum * f64::from(total)) as i64)
        .collect();
    let rounded_sum: i64 = daily.iter().sum();
    daily[days - 1] += i64::from(total) - rounded_sum;

    // A rounding overshoot larger than the last day would leave it below
    // zero; carry the deficit backward so the sum and the non-negativity of
    // every day both survive. The carry never fires when the plain fold
    // already lands non-negative.
    for day in (1..days).rev() {
        if daily[day] < 0 {
            daily[day - 1] += daily[day];
            daily[day] = 0;
        }
    }

    daily.into_iter().map(|value| value.max(0) as u32).collect()
}
