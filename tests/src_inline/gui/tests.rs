use super::*;
use crate::model::features::Feature;

#[test]
fn test_calculate_with_defaults_shows_category() {
    let mut app = MetaRiskApp::new(ModelProfile::default_v1());
    app.calculate();
    assert_eq!(
        app.dialog,
        Some(Dialog::Result("Risk category: Low risk".to_string()))
    );
    let charts = app.charts.as_ref().unwrap();
    assert_eq!(charts.probability.color, ChartColor::Green);
}

#[test]
fn test_bad_input_keeps_previous_charts() {
    let mut app = MetaRiskApp::new(ModelProfile::default_v1());
    app.calculate();
    let before = app.charts.clone();
    app.dismiss_dialog();

    *app.form.field_mut(Feature::Grade) = "high".to_string();
    app.calculate();
    match &app.dialog {
        Some(Dialog::Error(msg)) => assert!(msg.contains("Grade (1-3)")),
        other => panic!("expected error dialog, got {other:?}"),
    }
    assert_eq!(app.charts, before);

    app.dismiss_dialog();
    *app.form.field_mut(Feature::Grade) = "3".to_string();
    *app.form.field_mut(Feature::LymphNodes) = "12".to_string();
    *app.form.field_mut(Feature::Er) = "0".to_string();
    *app.form.field_mut(Feature::Pr) = "0".to_string();
    app.calculate();
    assert!(matches!(app.dialog, Some(Dialog::Result(_))));
    assert_ne!(app.charts, before);
}

#[test]
fn test_color32_mapping() {
    assert_eq!(color32(ChartColor::Red), Color32::from_rgb(255, 0, 0));
    assert_eq!(color32(ChartColor::SkyBlue), Color32::from_rgb(135, 206, 235));
}
