use ini;
use alg;
use std::string::String;

pub const DEFAULT_PATH: &str = "config.ini";

lazy_static! {
    pub static ref DEMO_CONFIG: Result<ini::Ini, String> = {
        load_config(DEFAULT_PATH)
    };
}

pub fn load_config(filename: &str) -> Result<ini::Ini, String> {
    ini::Ini::load_from_file(filename).map_err(
        |err| format!("Failed to load \"{}\": {}", filename, err.msg)
    )
}

pub fn load_section_setting(
    config:  &ini::Ini,
    section: &str,
    setting: &str,
) -> Result<String, String> {
    let settings = config.section(Some(section))
        .ok_or_else(
        || format!(
            "Failed to load section \"{}\"",
            section,
        )
    )?;

    settings.get(setting)
        .cloned()
        .ok_or_else(
        || format!(
            "Failed to load setting \"{}\" in section \"{}\"",
            setting,
            section,
        )
    )
}

// Missing sections and settings are not an error here
pub fn optional_setting(
    config:  &ini::Ini,
    section: &str,
    setting: &str,
) -> Option<String> {
    config.section(Some(section))
        .and_then(|settings| settings.get(setting))
        .cloned()
}

/// Every setting in `section`, parsed as a vector and sorted by key.
pub fn load_section_vectors(
    config:  &ini::Ini,
    section: &str,
) -> Result<Vec<(String, alg::Vec3)>, String> {
    let settings = config.section(Some(section))
        .ok_or_else(|| format!("Failed to load section \"{}\"", section))?;

    let mut vectors = Vec::with_capacity(settings.len());

    for (key, value) in settings.iter() {
        let vec = parse_vec3(value).map_err(
            |err| format!("Setting \"{}\" in section \"{}\": {}", key, section, err)
        )?;

        vectors.push((key.clone(), vec));
    }

    vectors.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(vectors)
}

pub fn parse_scalar(text: &str) -> Result<f32, String> {
    text.trim().parse::<f32>()
        .map_err(|_| format!("\"{}\" is not a number", text.trim()))
}

// Format: "x, y, z"
pub fn parse_vec3(text: &str) -> Result<alg::Vec3, String> {
    let components = text.split(',')
        .map(parse_scalar)
        .collect::<Result<Vec<f32>, String>>()?;

    if components.len() != 3 {
        return Err(format!(
            "Expected 3 components, found {} in \"{}\"",
            components.len(),
            text.trim(),
        ));
    }

    Ok(alg::Vec3::new(components[0], components[1], components[2]))
}
