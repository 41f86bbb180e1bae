extern crate regplot;

use regplot::{
    draw::Canvas,
    estimators::linear::LinearRegression,
    helpers::test_helpers::generate_random_data,
    render::{render_svg, RenderParams},
    visualizers::{prediction_error, residuals_plot, PredictionErrorParams, ResidualsParams},
};

fn main() -> regplot::error::Result<()> {
    let (x, y) = generate_random_data(200, 5);
    let figure = RenderParams::new().width(800).height(600);

    // Measured against predicted targets of the held-out data
    let mut model = LinearRegression::default();
    let canvas: Canvas<f64> = prediction_error(
        &mut model,
        x.view(),
        y.view(),
        None,
        PredictionErrorParams::new().random_state(42),
    )?;
    render_svg(&canvas, "prediction_error.svg", &figure)?;

    // Training and test residuals of a ridge model
    let mut model = LinearRegression::new(LinearRegression::params().alpha(10.))?;
    let canvas: Canvas<f64> = residuals_plot(
        &mut model,
        x.view(),
        y.view(),
        None,
        ResidualsParams::new().random_state(42),
    )?;
    render_svg(&canvas, "residuals.svg", &figure)?;

    println!("wrote prediction_error.svg and residuals.svg");
    Ok(())
}
