// Build script - reads config.yaml at compile time and generates tab bar defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const BASE_ANIMATION_DURATION: f64 = {base_duration:?};
pub const DEFAULT_ANIMATION_SPEED: f64 = {default_speed:?};

// Tab bar colors (RGB tuples)
pub const DEFAULT_TINT: (u8, u8, u8) = {tint};
pub const UNSELECTED_TINT: (u8, u8, u8) = {unselected_tint};
pub const BAR_BACKGROUND: (u8, u8, u8) = {background};
"#,
        base_duration = config.base_duration,
        default_speed = config.default_speed,
        tint = rgb_literal(config.tint),
        unselected_tint = rgb_literal(config.unselected_tint),
        background = rgb_literal(config.background),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    base_duration: f64,
    default_speed: f64,
    tint: (u8, u8, u8),
    unselected_tint: (u8, u8, u8),
    background: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            base_duration: 0.3,
            default_speed: 1.0,
            tint: (30, 30, 110),             // #1e1e6e
            unselected_tint: (142, 142, 147), // #8e8e93
            background: (255, 255, 255),      // #ffffff
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_animation = false;
    let mut in_colors = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("animation:") {
            in_animation = true;
            in_colors = false;
            continue;
        } else if trimmed.starts_with("colors:") {
            in_animation = false;
            in_colors = true;
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        if in_animation {
            match key {
                "base_duration" => {
                    config.base_duration = parse_positive(value).unwrap_or(config.base_duration)
                }
                "default_speed" => {
                    config.default_speed = parse_positive(value).unwrap_or(config.default_speed)
                }
                _ => {}
            }
        } else if in_colors {
            match key {
                "tint" => config.tint = parse_hex_color(value).unwrap_or(config.tint),
                "unselected_tint" => {
                    config.unselected_tint = parse_hex_color(value).unwrap_or(config.unselected_tint)
                }
                "background" => {
                    config.background = parse_hex_color(value).unwrap_or(config.background)
                }
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Strip inline comments; a hex color is always quoted so " #" never starts one
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_positive(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() != 6 {
        return None;
    }
    match (
        u8::from_str_radix(&s[0..2], 16),
        u8::from_str_radix(&s[2..4], 16),
        u8::from_str_radix(&s[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Some((r, g, b)),
        _ => None,
    }
}

fn rgb_literal((r, g, b): (u8, u8, u8)) -> String {
    format!("({}, {}, {})", r, g, b)
}
