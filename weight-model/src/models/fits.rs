//! Fitted constants of the three weight models.
//!
//! Two fits of the same models exist. The refined fit is authoritative: its covariance
//! matrices already include the residual mean squared error. The legacy fit keeps that error
//! as a separate scale on the quadratic form. Never combine constants from both fits.

use super::spec::{ModelSpec, Response, Term};
use crate::errors::Result;

/// Student-t critical values of the 95% intervals.
const T_MODEL_ONE: f64 = 1.677;
const T_MODEL_TWO: f64 = 1.678;
const T_MODEL_THREE: f64 = 1.679;

pub(crate) mod refined {
    use super::*;

    pub(crate) fn model_one() -> Result<ModelSpec> {
        ModelSpec::new(
            "Model 1",
            Response::Linear,
            T_MODEL_ONE,
            &[
                (Term::Intercept, 206.722278),
                (Term::MaaX, -211745.508432),
                (Term::MaaZ, 42899.895999),
            ],
            &[
                &[3.86827982e03, -7.51601005e05, -6.05802440e06],
                &[-7.51601005e05, 3.23745300e09, -2.30770177e09],
                &[-6.05802440e06, -2.30770177e09, 1.35601197e10],
            ],
        )
    }

    pub(crate) fn model_two() -> Result<ModelSpec> {
        ModelSpec::new(
            "Model 2",
            Response::Linear,
            T_MODEL_TWO,
            &[
                (Term::Intercept, -412.6509),
                (Term::MaaX, 744862.7),
                (Term::MaaZ, 1218036.0),
                (Term::MaaXZ, -1803891068.96),
            ],
            &[
                &[1.20756103e05, -1.81734049e08, -2.27939949e08, 3.41404045e11],
                &[-1.81734049e08, 2.82581222e11, 3.41393001e11, -5.27291017e14],
                &[-2.27939949e08, 3.41393001e11, 4.34357637e11, -6.47745393e14],
                &[3.41404045e11, -5.27291017e14, -6.47745393e14, 9.94320958e17],
            ],
        )
    }

    pub(crate) fn model_three() -> Result<ModelSpec> {
        ModelSpec::new(
            "Model 3",
            Response::Log,
            T_MODEL_THREE,
            &[
                (Term::Intercept, 5.837609),
                (Term::MaaX, -2368.177400),
                (Term::MaaZ, 252.968484),
            ],
            &[
                &[3.26631827e-01, -6.34640772e01, -5.11530621e02],
                &[-6.34640772e01, 2.73365743e05, -1.94858925e05],
                &[-5.11530621e02, -1.94858925e05, 1.14499645e06],
            ],
        )
    }
}

pub(crate) mod legacy {
    use super::*;

    const MSE_MODEL_ONE: f64 = 3260.2169;
    const MSE_MODEL_TWO: f64 = 2370.297301720971;
    const MSE_MODEL_THREE: f64 = 0.2096351825845287;

    pub(crate) fn model_one() -> Result<ModelSpec> {
        ModelSpec::new(
            "Model 1",
            Response::Linear,
            T_MODEL_ONE,
            &[
                (Term::Intercept, 129.785961),
                (Term::MaaX, -367805.903315),
                (Term::MaaZ, 406062.220123),
            ],
            &[
                &[5.04065961e-01, -3.99255966e02, -3.21324068e02],
                &[-3.99255966e02, 5.31714904e05, 3.02921752e04],
                &[-3.21324068e02, 3.02921752e04, 4.84490253e05],
            ],
        )?
        .with_scale(MSE_MODEL_ONE)
    }

    pub(crate) fn model_two() -> Result<ModelSpec> {
        ModelSpec::new(
            "Model 2",
            Response::Linear,
            T_MODEL_TWO,
            &[
                (Term::Intercept, -418.4162),
                (Term::MaaX, 433976.1456),
                (Term::MaaZ, 1367812.5280),
                (Term::MaaXZ, -1409073178.496),
            ],
            &[
                &[7.16960988e00, -1.01480558e04, -1.20151644e04, 1.71328012e07],
                &[-1.01480558e04, 1.47899810e07, 1.71333089e07, -2.50578575e10],
                &[-1.20151644e04, 1.71333089e07, 2.09998306e07, -3.00572982e10],
                &[1.71328012e07, -2.50578575e10, -3.00572982e10, 4.40373477e13],
            ],
        )?
        .with_scale(MSE_MODEL_TWO)
    }

    pub(crate) fn model_three() -> Result<ModelSpec> {
        ModelSpec::new(
            "Model 3",
            Response::Log,
            T_MODEL_THREE,
            &[
                (Term::Intercept, 6.626590),
                (Term::MaaX, -5705.442683),
                (Term::MaaZ, 2525.894158),
            ],
            &[
                &[5.28150219e-01, -4.44846842e02, -3.16976527e02],
                &[-4.44846842e02, 6.18116534e05, 2.19748690e04],
                &[-3.16976527e02, 2.19748690e04, 4.85361130e05],
            ],
        )?
        .with_scale(MSE_MODEL_THREE)
    }
}
