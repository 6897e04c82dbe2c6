use serde_json::{json, Value};

/// A small aerodrome request in the JSON layout accepted by `InputConfig`
pub fn sample_config() -> Value {
    json!({
        "icao": "YSBK",
        "arp": {"easting": 310000.0, "northing": 6240000.0, "elevation": 6.0},
        "met": {"easting": 310450.0, "northing": 6239700.0, "elevation": 5.0},
        "runways": [{
            "arc_number": 2,
            "ends": [
                {"designator": "11C", "easting": 309400.0, "northing": 6240300.0,
                 "elevation": 5.0, "type": "NPA", "clearway_m": 60.0},
                {"designator": "29C", "easting": 310600.0, "northing": 6239750.0,
                 "elevation": "6.5", "type": "NI"}
            ]
        }],
        "facilities": [
            {"id": "BK_NDB", "type": "NDB", "easting": 310900.0, "northing": 6240400.0, "elevation": 7.0},
            {"id": "BK_GP", "type": "GP", "easting": 309700.0, "northing": 6240200.0}
        ],
        "options": {"dissolve": false, "circle_segments": 48}
    })
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
icao: YSBK
arp: {easting: 310000.0, northing: 6240000.0, elevation: 6.0}
runways:
  - arc_number: 2
    ends:
      - {designator: "11C", easting: 309400.0, northing: 6240300.0, elevation: 5.0, type: NPA}
      - {designator: "29C", easting: 310600.0, northing: 6239750.0, elevation: 6.5, type: NI}
options:
  ihs_shape: strip_hull
  include_wildlife: false
"#;

/// Two runways, one of which (code 1 with a CAT II/III approach) has no
/// tabulated surfaces
pub fn mixed_runway_config() -> Value {
    json!({
        "icao": "YMIX",
        "arp": {"easting": 500000.0, "northing": 7000000.0, "elevation": 100.0},
        "runways": [
            {
                "arc_number": 3,
                "arc_letter": "c",
                "width_m": 45.0,
                "shoulder_m": 7.5,
                "ends": [
                    {"designator": "09", "easting": 499000.0, "northing": 7000000.0,
                     "elevation": 99.0, "type": "NPA"},
                    {"designator": "27", "easting": 501000.0, "northing": 7000000.0,
                     "elevation": 101.0, "type": "NPA"}
                ]
            },
            {
                "arc_number": 1,
                "ends": [
                    {"designator": "18", "easting": 500300.0, "northing": 7000600.0,
                     "elevation": 100.0, "type": "PA_II_III"},
                    {"designator": "36", "easting": 500300.0, "northing": 6999800.0,
                     "elevation": 100.0, "type": "NI"}
                ]
            }
        ],
        "options": {"circle_segments": 36}
    })
}
