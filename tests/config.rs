use std::time::Duration;

use egui::Color32;
use egui_plot::LineStyle;
use timeplot::{
    ColorTheme, RetentionPolicy, TimePlotConfig, TimePlotConfigFile, TimePlotError, UpdateStyle,
};

fn is_invalid(r: Result<(), TimePlotError>) -> bool {
    matches!(r, Err(TimePlotError::InvalidConfiguration(_)))
}

#[test]
fn defaults_are_valid() {
    let cfg = TimePlotConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.update_style, UpdateStyle::Jump);
    assert_eq!(cfg.retention, RetentionPolicy::Period);
    assert_eq!(cfg.declared_series_count(), None);
}

#[test]
fn update_style_parses_only_cont_and_jump() {
    assert_eq!("cont".parse::<UpdateStyle>().unwrap(), UpdateStyle::Cont);
    assert_eq!("jump".parse::<UpdateStyle>().unwrap(), UpdateStyle::Jump);
    let err = "scroll".parse::<UpdateStyle>().unwrap_err();
    assert!(matches!(err, TimePlotError::InvalidConfiguration(_)));
    assert_eq!(UpdateStyle::Cont.to_string(), "cont");
}

#[test]
fn rejects_bad_numbers() {
    let zero_interval = TimePlotConfig {
        interval: Duration::ZERO,
        ..Default::default()
    };
    assert!(is_invalid(zero_interval.validate()));

    let negative_padding = TimePlotConfig {
        padding_secs: -1.0,
        ..Default::default()
    };
    assert!(is_invalid(negative_padding.validate()));

    let nan_period = TimePlotConfig {
        period_secs: f64::NAN,
        ..Default::default()
    };
    assert!(is_invalid(nan_period.validate()));

    let empty_cap = TimePlotConfig {
        retention: RetentionPolicy::Capped(0),
        ..Default::default()
    };
    assert!(is_invalid(empty_cap.validate()));
}

#[test]
fn rejects_broken_strftime() {
    let cfg = TimePlotConfig {
        time_format: "%H:%".to_string(),
        ..Default::default()
    };
    assert!(is_invalid(cfg.validate()));
}

#[test]
fn rejects_zone_items_that_naive_timestamps_cannot_render() {
    for pattern in ["%d.%m.%Y %Z", "%H:%M %z", "%H:%M%:z", "%+"] {
        let cfg = TimePlotConfig {
            date_format: pattern.to_string(),
            ..Default::default()
        };
        assert!(is_invalid(cfg.validate()), "accepted {}", pattern);
    }
    let cfg = TimePlotConfig {
        time_format: "%H:%M:%S%.3f".to_string(),
        date_format: "%A %e %B %Y".to_string(),
        ..Default::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn json_file_overrides_defaults() {
    let json = r##"{
        "interval_ms": 40,
        "update_style": "cont",
        "retention": { "capped": 120 },
        "color_theme": "solarized_dark",
        "date_format": "%m/%d/%Y",
        "series": [
            { "label": "price", "color": "#ff8800", "width": 2.0 },
            { "label": "", "style": "--" }
        ]
    }"##;
    let cfg = TimePlotConfigFile::from_json_str(json)
        .unwrap()
        .into_config()
        .unwrap();
    assert_eq!(cfg.interval, Duration::from_millis(40));
    assert_eq!(cfg.update_style, UpdateStyle::Cont);
    assert_eq!(cfg.retention, RetentionPolicy::Capped(120));
    assert_eq!(cfg.color_theme, ColorTheme::SolarizedDark);
    assert_eq!(cfg.date_format, "%m/%d/%Y");
    assert_eq!(cfg.time_format, "%H:%M");
    assert_eq!(cfg.declared_series_count(), Some(2));
    assert_eq!(cfg.series[0].color, Some(Color32::from_rgb(255, 136, 0)));
    assert_eq!(cfg.series[0].width, 2.0);
    assert_eq!(cfg.series[1].style, LineStyle::Dashed { length: 10.0 });
}

#[test]
fn yaml_file_with_unknown_update_style_fails_at_setup() {
    let yaml = "update_style: sideways\nperiod_secs: 120\n";
    let err = TimePlotConfigFile::from_yaml_str(yaml)
        .unwrap()
        .into_config()
        .unwrap_err();
    assert!(matches!(err, TimePlotError::InvalidConfiguration(_)));
}

#[test]
fn yaml_file_with_unbounded_retention() {
    let yaml = "retention: unbounded\ntitle: Prices\n";
    let cfg = TimePlotConfigFile::from_yaml_str(yaml)
        .unwrap()
        .into_config()
        .unwrap();
    assert_eq!(cfg.retention, RetentionPolicy::Unbounded);
    assert_eq!(cfg.title.as_deref(), Some("Prices"));
}

#[test]
fn load_picks_parser_from_extension() {
    let dir = std::env::temp_dir().join(format!("timeplot-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("plot.json");
    std::fs::write(&path, r#"{ "period_secs": 60.0 }"#).unwrap();
    let cfg = TimePlotConfig::from_file(&path).unwrap();
    assert_eq!(cfg.period_secs, 60.0);

    let toml = dir.join("plot.toml");
    std::fs::write(&toml, "period_secs = 60").unwrap();
    assert!(matches!(
        TimePlotConfig::from_file(&toml),
        Err(TimePlotError::InvalidConfiguration(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}
