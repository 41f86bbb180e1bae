use ndarray::array;

use crate::draw::*;
use crate::error::VisualizerError;

#[test]
fn test_parse_colors() {
    assert_eq!("b".parse::<Color>().unwrap(), Color::BLUE);
    assert_eq!("g".parse::<Color>().unwrap(), Color::rgb(0, 128, 0));
    assert_eq!("#111111".parse::<Color>().unwrap(), LINE_COLOR);
    assert_eq!("#1F77B4".parse::<Color>().unwrap(), DEFAULT_POINT_COLOR);
    assert_eq!("#f0a".parse::<Color>().unwrap(), Color::rgb(255, 0, 170));
    assert_eq!(" Black ".parse::<Color>().unwrap(), Color::BLACK);
}

#[test]
fn test_parse_invalid_colors() {
    for input in ["", "#12345", "#gggggg", "chartreuse-ish", "#ééé"] {
        match input.parse::<Color>() {
            Err(VisualizerError::InvalidColor(s)) => assert_eq!(s, input),
            other => panic!("{:?} should not parse, got {:?}", input, other),
        }
    }
}

#[test]
fn test_color_display_round_trips_through_hex() {
    let color = Color::rgb(1, 171, 255);
    assert_eq!(color.to_string(), "#01abff");
    assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
}

#[test]
fn test_canvas_records_marks_in_order() {
    let mut canvas = Canvas::new();
    let x = array![1., 2.];
    let y = array![3., 4.];
    canvas
        .scatter(x.view(), y.view(), ScatterStyle::new(Color::RED))
        .unwrap();
    canvas
        .plot(x.view(), y.view(), LineStyle::new(LINE_COLOR))
        .unwrap();
    canvas.axhline(0., LineStyle::new(LINE_COLOR));

    assert_eq!(canvas.marks().len(), 3);
    assert!(matches!(canvas.marks()[0], Mark::Scatter(_)));
    assert!(matches!(canvas.marks()[1], Mark::Line(_)));
    assert!(matches!(canvas.marks()[2], Mark::HLine(_)));

    let scatter = canvas.scatters().next().unwrap();
    assert_eq!(scatter.points().collect::<Vec<_>>(), vec![(1., 3.), (2., 4.)]);
    assert_eq!(scatter.style.size, DEFAULT_MARKER_SIZE);
    assert_eq!(scatter.style.alpha, 1.);
}

#[test]
fn test_canvas_rejects_mismatched_lengths() {
    let mut canvas = Canvas::new();
    let x = array![1., 2., 3.];
    let y = array![1., 2.];
    match canvas.scatter(x.view(), y.view(), ScatterStyle::new(Color::RED)) {
        Err(VisualizerError::LengthMismatch { expected, found }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        _ => panic!("Should return an error but didn't"),
    }
    assert!(canvas
        .plot(x.view(), y.view(), LineStyle::new(LINE_COLOR))
        .is_err());
    assert!(canvas.marks().is_empty());
}

#[test]
fn test_canvas_text_is_overwritten() {
    let mut canvas = Canvas::<f64>::new();
    canvas.set_title("first");
    canvas.set_title("second");
    canvas.set_xlabel("x");
    canvas.set_ylabel("y");
    canvas.legend(&["a", "b"], LegendLocation::UpperLeft, false);
    canvas.legend(&["c"], LegendLocation::Best, true);

    assert_eq!(canvas.title(), Some("second"));
    assert_eq!(canvas.xlabel(), Some("x"));
    assert_eq!(canvas.ylabel(), Some("y"));
    let legend = canvas.current_legend().unwrap();
    assert_eq!(legend.labels, vec!["c".to_string()]);
    assert_eq!(legend.location, LegendLocation::Best);
    assert!(legend.frameon);
}

#[test]
fn test_canvas_ranges() {
    let mut canvas = Canvas::<f64>::new();
    assert_eq!(canvas.x_range(), (0., 1.));

    canvas
        .scatter(array![0., 10.].view(), array![5., 5.].view(), ScatterStyle::new(Color::RED))
        .unwrap();
    assert_eq!(canvas.x_range(), (-0.5, 10.5));
    assert_eq!(canvas.y_range(), (4.5, 5.5));

    canvas.axhline(-5., LineStyle::new(LINE_COLOR));
    assert_eq!(canvas.y_range(), (-5.5, 5.5));

    canvas.set_xlim(-1., 1.);
    canvas.set_ylim(2., 3.);
    assert_eq!(canvas.x_range(), (-1., 1.));
    assert_eq!(canvas.y_range(), (2., 3.));
}

#[test]
fn test_best_legend_corner_avoids_points() {
    let mut canvas = Canvas::<f64>::new();
    canvas.set_xlim(0., 3.);
    canvas.set_ylim(0., 3.);
    // crowd the upper right corner
    canvas
        .scatter(
            array![2.5, 2.6, 2.7].view(),
            array![2.5, 2.6, 2.7].view(),
            ScatterStyle::new(Color::RED),
        )
        .unwrap();
    assert_eq!(canvas.best_legend_corner(), LegendLocation::UpperLeft);

    canvas.legend(&["a"], LegendLocation::Best, true);
    assert_eq!(
        canvas.resolved_legend_location(),
        Some(LegendLocation::UpperLeft)
    );
    canvas.legend(&["a"], LegendLocation::LowerRight, true);
    assert_eq!(
        canvas.resolved_legend_location(),
        Some(LegendLocation::LowerRight)
    );
}

#[test]
fn test_canvas_clear() {
    let mut canvas = Canvas::<f64>::new();
    canvas.axhline(0., LineStyle::new(LINE_COLOR));
    canvas.set_title("title");
    canvas.clear();
    assert_eq!(canvas, Canvas::new());
}

#[test]
fn test_legend_remembers_marks_drawn_before_it() {
    let mut canvas = Canvas::<f64>::new();
    canvas
        .scatter(array![1.].view(), array![1.].view(), ScatterStyle::new(Color::BLUE))
        .unwrap();
    canvas.legend(&["Training Data", "Test Data"], LegendLocation::Best, true);
    canvas.axhline(0., LineStyle::new(LINE_COLOR));

    let legend = canvas.current_legend().unwrap();
    assert_eq!(legend.n_marks, 1);
    assert_eq!(canvas.marks().len(), 2);
}
