//! Golden value tests for the Oklab primitives.
//!
//! Reference Oklab coordinates of the sRGB primaries live in
//! `golden/oklab.json` next to this crate's manifest.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Golden data file layout.
#[derive(Debug, serde::Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    version: String,
    tolerance: f64,
    oklab: BTreeMap<String, GoldenEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct GoldenEntry {
    srgb: [u8; 3],
    lab: [f64; 3],
}

fn golden_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden/oklab.json")
}

fn load_golden() -> GoldenData {
    let content = std::fs::read_to_string(golden_path()).expect("golden fixture readable");
    serde_json::from_str(&content).expect("golden fixture parses")
}

#[cfg(test)]
mod oklab_tests {
    use super::*;
    use okpick_core::Color;
    use okpick_oklab::{Lab, oklab_to_srgb, srgb_to_oklab};

    #[test]
    fn test_fixture_complete() {
        let golden = load_golden();
        for name in ["white", "red", "green", "blue"] {
            assert!(golden.oklab.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn test_srgb_to_oklab_matches_golden() {
        let golden = load_golden();
        for (name, entry) in &golden.oklab {
            let lab = srgb_to_oklab(Color::from_rgb8(entry.srgb));
            let got = [lab.l, lab.a, lab.b];
            for (g, want) in got.iter().zip(entry.lab) {
                assert!(
                    (g - want).abs() < golden.tolerance,
                    "{name}: got {got:?}, want {:?}",
                    entry.lab
                );
            }
        }
    }

    #[test]
    fn test_golden_lab_back_to_srgb() {
        let golden = load_golden();
        for (name, entry) in &golden.oklab {
            let [l, a, b] = entry.lab;
            let rgb = oklab_to_srgb(Lab::new(l, a, b));
            assert_eq!(rgb.to_rgb8(), entry.srgb, "{name}");
        }
    }
}
