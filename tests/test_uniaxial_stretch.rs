use mmsim::analytical::AnalyticalUniaxialStretch;
use mmsim::prelude::*;
use russell_lab::approx_eq;

// Uniaxial stretch of the unit cube by 50% along x with the fibers on
// the loading axis and no activation.
//
// TEST GOAL
//
// This test verifies the passive pipeline against the closed-form
// solution and the reference values of the scenario:
//
//   λx = 1.5, λy = λz = 1/√1.5
//   c1..c4 = 0.002, 8, 2, 4
//
// The transverse directions are traction-free, which determines the
// hydrostatic pressure.

#[test]
fn test_uniaxial_stretch() -> Result<(), StrError> {
    let config = Config::new(ParamStretch::Uniaxial { lambda: 1.5 });
    let response = Simulation::new(&config)?.run()?;

    // stretch state satisfies incompressibility
    let s = &response.stretch;
    approx_eq(s.lambda_y, 0.8164965809277261, 1e-15);
    assert_eq!(s.lambda_y, s.lambda_z);
    approx_eq(s.lambda_x * s.lambda_y * s.lambda_z, 1.0, 1e-14);

    // strain
    approx_eq(response.ee.get(0, 0), 0.625, 1e-15);
    approx_eq(response.ee.get(1, 1), -1.0 / 6.0, 1e-15);

    // no fiber rotation configured
    assert!(response.ee_fib.is_none());
    assert!(response.st_fib.is_none());

    // pressure and stresses match the reference values
    approx_eq(response.pressure, -0.01130427411981355, 1e-15);
    approx_eq(response.ss.get(0, 0), 0.2543461676958050, 1e-15);
    approx_eq(response.st.get(0, 0), 0.2593702895268332, 1e-14);
    approx_eq(response.sigma.get(0, 0), 0.5835831514353746, 1e-14);
    approx_eq(response.energy, 0.02443461676958050, 1e-15);

    // zero traction in both transverse directions
    approx_eq(response.st.get(1, 1), 0.0, 1e-15);
    approx_eq(response.st.get(2, 2), 0.0, 1e-15);

    // total and Cauchy stresses are uniaxial (no shear)
    for i in 0..3 {
        for j in (i + 1)..3 {
            approx_eq(response.st.get(i, j), 0.0, 1e-15);
            approx_eq(response.sigma.get(i, j), 0.0, 1e-15);
        }
    }

    // nodal force on the loaded face
    assert_eq!(response.nodal_forces.len(), 1);
    approx_eq(response.nodal_forces[0], 0.09726385857256246, 1e-15);
    Ok(())
}

#[test]
fn test_uniaxial_stretch_versus_analytical() -> Result<(), StrError> {
    let ana = AnalyticalUniaxialStretch::new(ParamGuccione::sample_myocardium());
    for lambda in [1.05, 1.1, 1.25, 1.5, 1.6] {
        let config = Config::new(ParamStretch::Uniaxial { lambda });
        let response = Simulation::new(&config)?.run()?;
        approx_eq(response.pressure, ana.pressure(lambda), 1e-14);
        approx_eq(response.st.get(0, 0), ana.total_axial_stress(lambda), 1e-13);
        approx_eq(response.sigma.get(0, 0), ana.axial_cauchy_stress(lambda), 1e-13);
        approx_eq(response.nodal_forces[0], ana.nodal_force(lambda), 1e-13);

        // zero traction holds along the whole loading path
        approx_eq(response.st.get(1, 1), 0.0, 1e-14);
        approx_eq(response.st.get(2, 2), 0.0, 1e-14);
    }
    Ok(())
}

#[test]
fn test_uniaxial_stretch_captures_errors() {
    let config = Config::new(ParamStretch::Uniaxial { lambda: -1.5 });
    assert_eq!(Simulation::new(&config).err(), Some("stretch ratio must be > 0.0"));
}
