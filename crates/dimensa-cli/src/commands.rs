use dimensa_core::{EngineConfig, FontWeightKey, Platform, ResponsiveEngine, TypographyPreset};
use serde_json::{json, Value};

use crate::cli::{Cli, Command, ConfigArgs, SizeArgs, SpacingArgs, StyleArgs, TypographyArgs};
use crate::error::Result;

/// Load the configuration and apply command-line overrides.
pub fn effective_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_from(path)?,
        None => EngineConfig::load()?,
    };
    if let Some(platform) = &cli.platform {
        config.platform.target = platform.parse::<Platform>()?;
    }
    if let Some(family) = &cli.family {
        config.fonts.family = family.clone();
    }
    if cli.strict {
        config.validation.strict = true;
    }
    Ok(config)
}

pub fn build_engine(cli: &Cli, config: &EngineConfig) -> Result<ResponsiveEngine> {
    let mut engine = ResponsiveEngine::from_config(config);
    if cli.width.is_some() || cli.height.is_some() {
        let current = engine.viewport();
        let width = cli.width.unwrap_or(current.width);
        let height = cli.height.unwrap_or(current.height);
        if engine.is_strict() {
            engine.try_update_screen_dimensions(width, height)?;
        } else {
            engine.update_screen_dimensions(width, height);
        }
    }
    Ok(engine)
}

pub fn run(cli: &Cli) -> Result<Value> {
    let config = effective_config(cli)?;
    let engine = build_engine(cli, &config)?;
    tracing::debug!(
        width = engine.viewport().width,
        height = engine.viewport().height,
        platform = %engine.platform(),
        "evaluating"
    );

    match &cli.command {
        Command::Category => Ok(category(&engine)),
        Command::Size(args) => size(&engine, args),
        Command::Style(args) => style(&engine, args),
        Command::Typography(args) => typography(&engine, args),
        Command::Spacing(args) => Ok(spacing(&engine, args)),
        Command::Config(args) => config_command(cli, &config, args),
    }
}

fn category(engine: &ResponsiveEngine) -> Value {
    json!({
        "viewport": engine.viewport(),
        "category": engine.screen_size_category(),
        "group": engine.screen_group(),
        "orientation": engine.orientation(),
        "isMobileScreen": engine.is_mobile_screen(),
        "isTabletScreen": engine.is_tablet_screen(),
        "isDesktopScreen": engine.is_desktop_screen(),
        "isSmallScreen": engine.is_small_screen(),
    })
}

fn size(engine: &ResponsiveEngine, args: &SizeArgs) -> Result<Value> {
    let size = if engine.is_strict() {
        engine.try_responsive_size(args.base, args.scale, args.accessibility_scale)?
    } else {
        engine.responsive_size(args.base, args.scale, args.accessibility_scale)
    };
    Ok(json!({ "platform": engine.platform(), "size": size }))
}

fn style(engine: &ResponsiveEngine, args: &StyleArgs) -> Result<Value> {
    let weight: FontWeightKey = args.weight.parse()?;
    let (base, scale, accessibility_scale) =
        (args.size.base, args.size.scale, args.size.accessibility_scale);
    let style = if engine.is_strict() {
        engine.try_responsive_style(weight, base, scale, args.italic, accessibility_scale)?
    } else {
        engine.responsive_style(weight, base, scale, args.italic, accessibility_scale)
    };
    Ok(serde_json::to_value(style)?)
}

fn typography(engine: &ResponsiveEngine, args: &TypographyArgs) -> Result<Value> {
    match &args.preset {
        Some(name) => {
            let preset: TypographyPreset = name.parse()?;
            Ok(serde_json::to_value(engine.preset(preset))?)
        }
        None => Ok(serde_json::to_value(engine.responsive_typography())?),
    }
}

fn spacing(engine: &ResponsiveEngine, args: &SpacingArgs) -> Value {
    let values: Vec<Value> = args
        .values
        .iter()
        .map(|base| json!({ "base": base, "spacing": engine.responsive_spacing(*base) }))
        .collect();
    json!({ "category": engine.screen_size_category(), "values": values })
}

/// `--config <file>` redirects both `--path` and `--save` to that file.
fn config_command(cli: &Cli, config: &EngineConfig, args: &ConfigArgs) -> Result<Value> {
    let path = cli.config.clone().unwrap_or_else(EngineConfig::config_path);
    if args.path {
        return Ok(json!({ "path": path }));
    }
    if args.save {
        config.save_to(&path)?;
        tracing::info!("Saved config to {}", path.display());
        return Ok(json!({ "saved": path }));
    }
    Ok(Value::String(toml::to_string_pretty(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use dimensa_core::DimensaError;

    /// Run against a fresh default config so the user's own file is never read.
    fn run_args(args: &[&str]) -> Result<Value> {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        EngineConfig::default().save_to(&config_path).unwrap();
        let mut argv = vec!["dimensa", "--config", config_path.to_str().unwrap()];
        argv.extend_from_slice(args);
        run(&Cli::parse_from(argv))
    }

    #[test]
    fn test_category_command() {
        let out = run_args(&["--width", "320", "--height", "600", "category"]).unwrap();
        assert_eq!(out["category"], "smallMobile");
        assert_eq!(out["group"], "mobile");
        assert_eq!(out["isSmallScreen"], true);
        assert_eq!(out["orientation"], "portrait");
    }

    #[test]
    fn test_size_on_android() {
        let out = run_args(&["--platform", "android", "size", "16"]).unwrap();
        let size = out["size"].as_f64().unwrap();
        assert!((size - 15.2).abs() < 1e-9);
        assert_eq!(out["platform"], "android");
    }

    #[test]
    fn test_style_command() {
        let out = run_args(&["style", "18", "--weight", "bold", "--italic"]).unwrap();
        assert_eq!(out["fontFamily"], "\"Inter-BoldItalic\"");
        assert_eq!(out["fontWeight"], "700");

        let err = run_args(&["style", "18", "--weight", "heavy"]).unwrap_err();
        assert!(matches!(err, CliError::Engine(DimensaError::UnknownWeight(_))));
    }

    #[test]
    fn test_typography_command() {
        let all = run_args(&["--platform", "ios", "typography"]).unwrap();
        assert_eq!(all["caption"]["fontFamily"], "Inter-Regular");
        let h4 = run_args(&["typography", "h4"]).unwrap();
        assert_eq!(h4["lineHeight"], 28.0);
    }

    #[test]
    fn test_spacing_command() {
        let out = run_args(&["--width", "1280", "spacing", "8", "16"]).unwrap();
        assert_eq!(out["category"], "desktop");
        assert_eq!(out["values"][1]["spacing"], 16.0);
    }

    #[test]
    fn test_strict_rejects_bad_size() {
        let err = run_args(&["--strict", "size", "16", "--scale", "0"]).unwrap_err();
        assert!(matches!(err, CliError::Engine(DimensaError::InvalidSize { .. })));
    }

    #[test]
    fn test_config_command() {
        let out = run_args(&["--platform", "android", "--family", "Lato", "config"]).unwrap();
        let rendered = out.as_str().unwrap();
        let parsed = EngineConfig::from_toml(rendered).unwrap();
        assert_eq!(parsed.platform.target, Platform::Android);
        assert_eq!(parsed.fonts.family, "Lato");
        assert_eq!(parsed.viewport, EngineConfig::default().viewport);
    }

    #[test]
    fn test_config_save_uses_given_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        EngineConfig::default().save_to(&path).unwrap();
        let path_str = path.to_str().unwrap();

        let out = run(&Cli::parse_from([
            "dimensa", "--config", path_str, "--platform", "ios", "config", "--save",
        ]))
        .unwrap();
        assert_eq!(out["saved"], path_str);
        assert_eq!(EngineConfig::load_from(&path).unwrap().platform.target, Platform::Ios);

        let out = run(&Cli::parse_from(["dimensa", "--config", path_str, "config", "--path"]))
            .unwrap();
        assert_eq!(out["path"], path_str);
    }

    #[test]
    fn test_unknown_platform() {
        let err = run_args(&["--platform", "beos", "category"]).unwrap_err();
        assert!(matches!(err, CliError::Engine(DimensaError::UnknownPlatform(_))));
    }
}
