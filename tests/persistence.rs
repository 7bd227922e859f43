use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use solar_sim::file::{read_file, read_str, write, write_file};
use solar_sim::model::{ObjectKind, SpaceObject};
use solar_sim::Error;

fn assert_close(actual: f64, expected: f64) {
    if expected < 0.0 {
        assert_eq!(actual, expected);
    } else {
        assert_relative_eq!(actual, expected, epsilon = 1e-3, max_relative = 1e-3);
    }
}

fn assert_same_objects(actual: &[SpaceObject], expected: &[SpaceObject]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_eq!(a.kind, e.kind);
        assert_eq!(a.color, e.color);
        assert_close(a.radius, e.radius);
        assert_close(a.mass, e.mass);
        assert_close(a.position.x, e.position.x);
        assert_close(a.position.y, e.position.y);
        assert_close(a.velocity.x, e.velocity.x);
        assert_close(a.velocity.y, e.velocity.y);
    }
}

#[test]
fn test_read_sample_system() {
    let objects = read_file("solar_system.txt").unwrap();

    let kinds: Vec<_> = objects.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ObjectKind::Star,
            ObjectKind::Planet,
            ObjectKind::Planet,
            ObjectKind::Planet,
            ObjectKind::Planet,
        ]
    );

    let earth = &objects[3];
    assert_eq!(earth.color, "blue");
    assert_relative_eq!(earth.mass, 5.9742e24, max_relative = 1e-12);
    assert_relative_eq!(earth.position.x, 1.49598e11, max_relative = 1e-12);
    assert_relative_eq!(earth.velocity.y, 29783.0, max_relative = 1e-12);
}

#[test]
fn test_round_trip_through_file() {
    let objects = read_file("solar_system.txt").unwrap();

    let path = std::env::temp_dir().join(format!("solar_sim_round_trip_{}.txt", std::process::id()));
    write_file(&path, &objects).unwrap();
    let reread = read_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_same_objects(&reread, &objects);
}

#[test]
fn test_round_trip_non_negative() {
    let objects: Vec<_> = (0..20)
        .map(|i| {
            let i = i as f64;
            SpaceObject::new(
                if i < 1.0 { ObjectKind::Star } else { ObjectKind::Planet },
                1.0 + i * 0.731,
                format!("color{}", i),
                3.3e23 * (i + 1.0).powi(3),
                Point2::new(1.234567e9 * i, 98765.4321 * i),
                Vector2::new(i * i * 0.1234, 47870.0 / (i + 1.0)),
            )
        })
        .collect();

    let mut out = vec![];
    write(&mut out, &objects).unwrap();
    let reread = read_str(&String::from_utf8(out).unwrap()).unwrap();

    assert_same_objects(&reread, &objects);
}

#[test]
fn test_round_trip_negative_is_exact() {
    let objects = vec![SpaceObject::new(
        ObjectKind::Planet,
        2.5,
        "white",
        1.0e20,
        Point2::new(-1.23456789e11, -0.000123),
        Vector2::new(-29783.123, -1.5),
    )];

    let mut out = vec![];
    write(&mut out, &objects).unwrap();
    let reread = read_str(&String::from_utf8(out).unwrap()).unwrap();

    assert_eq!(reread[0].position, objects[0].position);
    assert_eq!(reread[0].velocity, objects[0].velocity);
}

#[test]
fn test_short_record_fails_whole_read() {
    let text = "\
Star 10 red 1000 1 2 3 4
Planet 10 red 1000 1 2 3
Planet 10 red 1000 5 6 7 8
";
    match read_str(text) {
        Err(Error::Format { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected a format error, got {:?}", other),
    }
}
