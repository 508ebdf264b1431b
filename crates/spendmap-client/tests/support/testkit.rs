#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Awards snapshot with the header shapes the fetcher actually publishes:
/// friendly-cased columns, a `$`-formatted amount, one row per texture
/// case (plain, filtered, de-obligation, missing state).
pub const AWARDS_CSV: &str = "\
Action Date,Recipient Name,Award Amount,Piid,Place Of Performance State Code,Place Of Performance City Name,Place Of Performance ZIP Code,Product Or Service Code (Psc),Naics Code,Type Of Set Aside Description
2026-05-01,ACME BIOSCIENCES,\"$1,000.00\",75N1,MD,Rockville,20850,R425,541511,8(a) Sole Source
2026-05-02,BETA LABS,500.00,75N2,MD,Baltimore,21201,B100,541714,
2026-05-03,GAMMA CORP,2000.00,75N3,CA,San Francisco,94103,R425,541511,
2026-04-30,ACME BIOSCIENCES,-250.00,75N4,MD,Rockville,20850,R425,541511,
2026-04-29,DELTA GROUP,750.00,75N5,,,,,541714,
";

pub const CENTROIDS_JSON: &str = r#"{
  "20850": {"lat": 39.0938, "lon": -77.1547},
  "21201": {"lat": 39.2946, "lon": -76.6252},
  "94103": {"lat": 37.7726, "lon": -122.4099}
}"#;

pub const STATES_TOPO_JSON: &str = r#"{
  "type": "Topology",
  "objects": {
    "states": {
      "type": "GeometryCollection",
      "geometries": [
        {"type": "Polygon", "id": "24"},
        {"type": "Polygon", "id": "06"}
      ]
    }
  }
}"#;

pub const COUNTIES_TOPO_JSON: &str = r#"{
  "type": "Topology",
  "objects": {
    "counties": {
      "type": "GeometryCollection",
      "geometries": [
        {"type": "Polygon", "id": "24031"},
        {"type": "Polygon", "id": "24510"},
        {"type": "Polygon", "id": "06075"}
      ]
    }
  }
}"#;

pub const ENRICHED_RECIPIENTS_CSV: &str = "\
Recipient Name,Award Amount,Careers Search
GAMMA CORP,2000.00,https://search.example.test/gamma-corp
ACME BIOSCIENCES,1000.00,https://search.example.test/acme-biosciences
BETA LABS,500.00,https://search.example.test/beta-labs
";

pub fn write_file(path: &Path, body: &str) {
    let result = fs::write(path, body);
    assert!(result.is_ok(), "could not write {}", path.display());
}

/// Lays down the full published-snapshot layout for agency `nih`, 90-day
/// window, in `dir`.
pub fn seed_data_dir(dir: &Path) {
    write_file(&dir.join("nih_awards_last_90d.csv"), AWARDS_CSV);
    write_file(&dir.join("zip_centroids.json"), CENTROIDS_JSON);
    write_file(&dir.join("us_states_topo.json"), STATES_TOPO_JSON);
    write_file(&dir.join("us_counties_topo.json"), COUNTIES_TOPO_JSON);
}

pub fn seed_data_dir_with_recipients(dir: &Path) {
    seed_data_dir(dir);
    write_file(
        &dir.join("nih_top_recipients_last_90d_enriched.csv"),
        ENRICHED_RECIPIENTS_CSV,
    );
}
