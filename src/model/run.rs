//! SPAMS model orchestration.
//!
//! `evaluate()` slides the reversible-response window over the forcing
//! record and accumulates the irreversible component day by day.

use crate::error::{Result, SpamsError};
use crate::forcing::MeteoSeries;

use super::outputs::ModelOutput;
use super::params::Parameters;
use super::processes;

/// Evaluate the SPAMS model over daily forcing arrays [mm].
///
/// Produces N = `precip.len() - tau + 1` simulation days; output index 0
/// corresponds to the tau-th input day, the first with a full trailing
/// window. The window sums are independent per index, but the irreversible
/// accumulation is a strictly sequential scan.
///
/// NaN forcing values propagate as NaN into every output day whose window
/// contains them; such days never count as dry.
pub fn evaluate(params: &Parameters, precip: &[f64], evapo: &[f64]) -> Result<ModelOutput> {
    if precip.len() != evapo.len() {
        return Err(SpamsError::LengthMismatch {
            precip: precip.len(),
            evapo: evapo.len(),
        });
    }

    // Parameters::new rejects tau == 0, but the fields are public.
    let tau = params.tau;
    if tau == 0 {
        return Err(SpamsError::InvalidWindow { tau });
    }
    if precip.len() < tau {
        return Err(SpamsError::InsufficientHistory {
            required: tau,
            available: precip.len(),
        });
    }

    let n = precip.len() - tau + 1;
    let mut out = ModelOutput::with_capacity(n);
    let mut cumulative = 0.0;

    for i in 0..n {
        let reversible = processes::window_response(
            &precip[i..i + tau],
            &evapo[i..i + tau],
            params.x_p,
            params.x_e,
        );
        if processes::is_dry(reversible) {
            cumulative += params.x_i;
        }
        out.push_day(reversible, cumulative);
    }

    Ok(out)
}

/// Evaluate the SPAMS model over a validated [`MeteoSeries`].
pub fn evaluate_series(params: &Parameters, meteo: &MeteoSeries) -> Result<ModelOutput> {
    evaluate(params, meteo.precip(), meteo.evapo())
}
