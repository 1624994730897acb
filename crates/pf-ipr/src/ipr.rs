//! Productivity index and rate-vs-pressure curves.

use crate::curves::{fetkovich_pwf, fetkovich_rate, vogel_pwf, vogel_rate};
use crate::error::{IprError, IprResult};
use crate::regime::{Regime, SaturatedModel};

/// Inflow-performance parameters in oil-field units.
///
/// Every field is optional at construction; a method that needs a missing
/// field returns [`IprError::MissingField`] at the point of use.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ipr {
    /// Drainage radius [ft].
    pub re: Option<f64>,
    /// Net pay thickness [ft].
    pub height: Option<f64>,
    /// Porosity [fraction].
    pub poro: Option<f64>,
    /// Permeability [mD].
    pub perm: Option<f64>,
    /// Oil formation volume factor [rb/stb].
    pub bo: Option<f64>,
    /// Oil viscosity [cp].
    pub muo: Option<f64>,
    /// Total compressibility [1/psi].
    pub ct: Option<f64>,
    /// Wellbore radius [ft].
    pub rw: Option<f64>,
    /// Skin factor [dimensionless].
    pub skin: Option<f64>,
}

fn req(v: Option<f64>, name: &'static str) -> IprResult<f64> {
    v.ok_or(IprError::MissingField { name })
}

fn check_pres(pres: f64) -> IprResult<f64> {
    if pres.is_finite() && pres > 0.0 {
        Ok(pres)
    } else {
        Err(IprError::InvalidArg {
            what: "reservoir pressure",
        })
    }
}

impl Ipr {
    /// Productivity index [stb/day/psi] for the chosen regime.
    pub fn pi(&self, regime: Regime) -> IprResult<f64> {
        match regime {
            Regime::Transient { time_days } => self.pi_transient(time_days),
            Regime::Steady => self.pi_steady(),
            Regime::Pseudo => self.pi_pseudo(),
        }
    }

    /// Transient (infinite-acting) productivity index after `time_days` of
    /// production.
    pub fn pi_transient(&self, time_days: f64) -> IprResult<f64> {
        let perm = req(self.perm, "perm")?;
        let height = req(self.height, "height")?;
        let poro = req(self.poro, "poro")?;
        let bo = req(self.bo, "bo")?;
        let muo = req(self.muo, "muo")?;
        let ct = req(self.ct, "ct")?;
        let rw = req(self.rw, "rw")?;
        let skin = req(self.skin, "skin")?;

        let term = perm / (poro * muo * ct * rw * rw);
        let lower =
            162.6 * bo * muo * ((term * time_days * 24.0).log10() - 3.23 + 0.87 * skin);
        Ok(perm * height / lower)
    }

    /// Steady-state productivity index.
    pub fn pi_steady(&self) -> IprResult<f64> {
        let perm = req(self.perm, "perm")?;
        let height = req(self.height, "height")?;
        let bo = req(self.bo, "bo")?;
        let muo = req(self.muo, "muo")?;
        let re = req(self.re, "re")?;
        let rw = req(self.rw, "rw")?;
        let skin = req(self.skin, "skin")?;

        let lower = 141.2 * bo * muo * ((re / rw).ln() + skin);
        Ok(perm * height / lower)
    }

    /// Pseudo-steady-state productivity index (the 0.75 correction).
    pub fn pi_pseudo(&self) -> IprResult<f64> {
        let perm = req(self.perm, "perm")?;
        let height = req(self.height, "height")?;
        let bo = req(self.bo, "bo")?;
        let muo = req(self.muo, "muo")?;
        let re = req(self.re, "re")?;
        let rw = req(self.rw, "rw")?;
        let skin = req(self.skin, "skin")?;

        let lower = 141.2 * bo * muo * ((re / rw).ln() - 0.75 + skin);
        Ok(perm * height / lower)
    }

    /// Undersaturated (linear) rates for each bottomhole pressure.
    pub fn undersaturated_rate(
        &self,
        pres: f64,
        pwf: &[f64],
        regime: Regime,
    ) -> IprResult<Vec<f64>> {
        let pres = check_pres(pres)?;
        let pi = self.pi(regime)?;
        Ok(pwf.iter().map(|&p| pi * (pres - p)).collect())
    }

    /// Undersaturated (linear) bottomhole pressures for each rate.
    pub fn undersaturated_pwf(
        &self,
        pres: f64,
        rate: &[f64],
        regime: Regime,
    ) -> IprResult<Vec<f64>> {
        let pres = check_pres(pres)?;
        let pi = self.pi(regime)?;
        Ok(rate.iter().map(|&q| pres - q / pi).collect())
    }

    /// Saturated rates for each bottomhole pressure, per the chosen model.
    pub fn saturated_rate(
        &self,
        pres: f64,
        pwf: &[f64],
        model: SaturatedModel,
        regime: Regime,
    ) -> IprResult<Vec<f64>> {
        let pres = check_pres(pres)?;
        let pi = self.pi(regime)?;
        Ok(pwf
            .iter()
            .map(|&p| match model {
                SaturatedModel::Vogel => vogel_rate(pi, pres, p),
                SaturatedModel::Fetkovich { n } => fetkovich_rate(pi, pres, p, n),
            })
            .collect())
    }

    /// Saturated bottomhole pressures for each rate; entries with no
    /// physical inversion are NaN.
    pub fn saturated_pwf(
        &self,
        pres: f64,
        rate: &[f64],
        model: SaturatedModel,
        regime: Regime,
    ) -> IprResult<Vec<f64>> {
        let pres = check_pres(pres)?;
        let pi = self.pi(regime)?;
        Ok(rate
            .iter()
            .map(|&q| match model {
                SaturatedModel::Vogel => vogel_pwf(pi, pres, q),
                SaturatedModel::Fetkovich { n } => fetkovich_pwf(pi, pres, q, n),
            })
            .collect())
    }

    /// Combined curve for a reservoir above its bubble point `pb`: linear
    /// above `pb`, the chosen saturated model at and below it, spliced at
    /// the bubble-point rate. Negative bottomhole pressures come back NaN.
    pub fn partial_rate(
        &self,
        pb: f64,
        pres: f64,
        pwf: &[f64],
        model: SaturatedModel,
        regime: Regime,
    ) -> IprResult<Vec<f64>> {
        let pres = check_pres(pres)?;
        if !pb.is_finite() || pb < 0.0 || pb > pres {
            return Err(IprError::InvalidArg {
                what: "bubble point pressure",
            });
        }
        let pi = self.pi(regime)?;
        let qb = pi * (pres - pb);

        Ok(pwf
            .iter()
            .map(|&p| {
                if p < 0.0 {
                    f64::NAN
                } else if p > pb {
                    pi * (pres - p)
                } else {
                    qb + match model {
                        SaturatedModel::Vogel => vogel_rate(pi, pb, p),
                        SaturatedModel::Fetkovich { n } => fetkovich_rate(pi, pb, p, n),
                    }
                }
            })
            .collect())
    }

    /// Fit a productivity index from one well test on a Vogel curve.
    pub fn pi_from_vogel_test(pb: f64, pres: f64, rate1: f64, pwf1: f64) -> f64 {
        if pwf1 > pb {
            return rate1 / (pres - pwf1);
        }
        let dp1 = (pres - pb) + vogel_rate(1.0, pb, pwf1);
        rate1 / dp1
    }

    /// Fit a productivity index and exponent from two well tests on a
    /// Fetkovich curve.
    pub fn pi_from_fetkovich_tests(
        pb: f64,
        pres: f64,
        rate1: f64,
        rate2: f64,
        pwf1: f64,
        pwf2: f64,
    ) -> (f64, f64) {
        let upper = (rate1 / rate2).log10();
        let lower = ((pres * pres - pwf1 * pwf1) / (pres * pres - pwf2 * pwf2)).log10();
        let n = upper / lower;

        let dp1 = (pres - pb) + fetkovich_rate(1.0, pb, pwf1, n);
        (rate1 / dp1, n)
    }
}
