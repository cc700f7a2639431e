use nalgebra::{DMatrix, DVector};

use crate::errors::{Result, WeightModelError};
use crate::features::FeatureVector;

/// One slot of a model's design vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Intercept,
    MaaX,
    MaaZ,
    /// `maa_x * maa_z`
    MaaXZ,
}

impl Term {
    pub fn value(&self, features: &FeatureVector) -> f64 {
        match self {
            Term::Intercept => 1.0,
            Term::MaaX => features.maa_x,
            Term::MaaZ => features.maa_z,
            Term::MaaXZ => features.maa_xz(),
        }
    }
}

/// Scale the response was modelled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Grams.
    Linear,
    /// Natural log of grams. Estimates are exponentiated back.
    Log,
}

/// Fitted constants of one regression model.
///
/// A `ModelSpec` can only be obtained through [`ModelSpec::new`], so its covariance matrix
/// always matches its coefficient count.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    name: &'static str,
    response: Response,
    terms: Vec<Term>,
    coefficients: DVector<f64>,
    covariance: DMatrix<f64>,
    t_value: f64,
    scale: f64,
}

impl ModelSpec {
    /// Builds a model from its fitted constants.
    ///
    /// `coefficients` lists each design term with its coefficient, intercept first.
    /// `covariance_rows` is the k×k coefficient covariance matrix, row by row, in the same term
    /// order. Returns `ConfigurationFault` if the constants are inconsistent.
    pub fn new(
        name: &'static str,
        response: Response,
        t_value: f64,
        coefficients: &[(Term, f64)],
        covariance_rows: &[&[f64]],
    ) -> Result<Self> {
        let k = coefficients.len();
        if coefficients.first().map(|(term, _)| *term) != Some(Term::Intercept) {
            return Err(fault(name, "first term must be the intercept"));
        }
        for (idx, (term, _)) in coefficients.iter().enumerate() {
            if coefficients[..idx].iter().any(|(other, _)| other == term) {
                return Err(fault(name, &format!("duplicate term {:?}", term)));
            }
        }
        if covariance_rows.len() != k {
            return Err(fault(
                name,
                &format!(
                    "covariance has {} rows for {} coefficients",
                    covariance_rows.len(),
                    k
                ),
            ));
        }
        if let Some(row) = covariance_rows.iter().find(|row| row.len() != k) {
            return Err(fault(
                name,
                &format!("covariance row of length {} for {} coefficients", row.len(), k),
            ));
        }
        if !t_value.is_finite() || t_value <= 0.0 {
            return Err(fault(name, &format!("invalid t value {}", t_value)));
        }

        let flat: Vec<f64> = covariance_rows.iter().flat_map(|row| row.iter().copied()).collect();
        if flat.iter().any(|v| !v.is_finite()) || coefficients.iter().any(|(_, c)| !c.is_finite())
        {
            return Err(fault(name, "non finite constant"));
        }

        Ok(Self {
            name,
            response,
            terms: coefficients.iter().map(|(term, _)| *term).collect(),
            coefficients: DVector::from_iterator(k, coefficients.iter().map(|(_, c)| *c)),
            covariance: DMatrix::from_row_slice(k, k, &flat),
            t_value,
            scale: 1.0,
        })
    }

    /// Sets the multiplier applied to the quadratic form before the square root.
    ///
    /// Fits that keep the residual mean squared error apart from the covariance matrix pass it
    /// here.
    pub fn with_scale(mut self, scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(fault(self.name, &format!("invalid scale {}", scale)));
        }
        self.scale = scale;
        Ok(self)
    }

    /// Design vector `v` for `features`, laid out like the coefficients.
    pub fn design_vector(&self, features: &FeatureVector) -> DVector<f64> {
        DVector::from_iterator(
            self.terms.len(),
            self.terms.iter().map(|term| term.value(features)),
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn response(&self) -> Response {
        self.response
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.covariance
    }

    pub fn t_value(&self) -> f64 {
        self.t_value
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

fn fault(name: &str, reason: &str) -> WeightModelError {
    WeightModelError::ConfigurationFault(format!("{}: {}", name, reason))
}
