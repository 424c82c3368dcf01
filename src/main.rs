extern crate basis;
extern crate ini;

use basis::alg;
use basis::config;

const TRANSFORM_SECTION: &str = "transform";
const POINTS_SECTION: &str = "points";

fn load_vec3_or(
    settings: &ini::Ini,
    setting:  &str,
    default:  alg::Vec3,
) -> Result<alg::Vec3, String> {
    match config::optional_setting(settings, TRANSFORM_SECTION, setting) {
        Some(text) => config::parse_vec3(&text),
        None => Ok(default),
    }
}

// Composes translation * rotation * scale from the transform section
fn load_transform(settings: &ini::Ini) -> Result<alg::Mat, String> {
    let scale = load_vec3_or(settings, "scale", alg::Vec3::one())?;
    let axis = load_vec3_or(settings, "rotation_axis", alg::Vec3::up())?;
    let translation = load_vec3_or(settings, "translation", alg::Vec3::zero())?;

    let angle = match config::optional_setting(
        settings,
        TRANSFORM_SECTION,
        "rotation_angle",
    ) {
        Some(text) => config::parse_scalar(&text)?,
        None => 0.,
    };

    if axis.mag() < 1e-8 {
        return Err("rotation_axis must not be zero".into());
    }

    Ok(
        alg::Mat::translation_vec(translation)
            * alg::Mat::rotation_axis(axis.norm(), angle)
            * alg::Mat::scale_vec(scale)
    )
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    /* Configuration */

    let owned;
    let settings = match std::env::args().nth(1) {
        Some(path) => {
            owned = config::load_config(&path)?;
            &owned
        },

        None => config::DEMO_CONFIG.as_ref().map_err(|err| err.clone())?,
    };

    /* Transform */

    let transform = load_transform(settings)?;
    let determinant = transform.determinant();

    println!("Transform:\n{}", transform);
    println!("Determinant: {}", determinant);

    if determinant.abs() < 1e-8 {
        eprintln!("Transform is singular; skipping inverse");
    } else {
        println!("Inverse:\n{}", transform.inverse());
    }

    /* Points */

    let points = config::load_section_vectors(settings, POINTS_SECTION)?;

    if points.is_empty() {
        eprintln!("No points in section \"{}\"", POINTS_SECTION);
        return Ok(());
    }

    for &(ref name, point) in &points {
        println!(
            "{}: {} -> point {}, direction {}",
            name,
            point,
            transform.transform_point(point),
            transform.transform_direction(point),
        );
    }

    let vecs: Vec<alg::Vec3> = points.iter().map(|&(_, point)| point).collect();
    let center = transform.transform_point(alg::Vec3::average(&vecs));

    println!(
        "Center: {} (vertical {:.4} rad, horizontal {:.4} rad)",
        center,
        center.vertical_angle(),
        center.horizontal_angle(),
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
