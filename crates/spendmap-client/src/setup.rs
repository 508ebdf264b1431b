use std::path::{Path, PathBuf};

pub const DEFAULT_AGENCY: &str = "nih";
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

const DATA_DIR_ENV: &str = "SPENDMAP_DATA";
const LOCAL_DATA_DIR: &str = "data";

/// Where the published snapshot files live and which snapshot pair is in
/// play. Filenames follow the fetcher's layout: one awards file and one
/// top-recipients file per agency slug and window, with an `_enriched`
/// twin when careers links were added.
#[derive(Debug, Clone)]
pub struct DataContext {
    pub data_dir: PathBuf,
    pub agency: String,
    pub window_days: u32,
}

impl DataContext {
    pub fn resolve(
        data_dir_override: Option<&Path>,
        agency: Option<&str>,
        window_days: Option<u32>,
    ) -> Self {
        Self {
            data_dir: resolve_data_dir(data_dir_override),
            agency: agency
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(DEFAULT_AGENCY)
                .to_string(),
            window_days: window_days.unwrap_or(DEFAULT_WINDOW_DAYS),
        }
    }

    pub fn awards_csv_path(&self) -> PathBuf {
        self.data_dir.join(format!(
            "{}_awards_last_{}d.csv",
            self.agency, self.window_days
        ))
    }

    pub fn awards_json_path(&self) -> PathBuf {
        self.data_dir.join(format!(
            "{}_awards_last_{}d.json",
            self.agency, self.window_days
        ))
    }

    pub fn recipients_path(&self) -> PathBuf {
        self.data_dir.join(format!(
            "{}_top_recipients_last_{}d.csv",
            self.agency, self.window_days
        ))
    }

    pub fn enriched_recipients_path(&self) -> PathBuf {
        self.data_dir.join(format!(
            "{}_top_recipients_last_{}d_enriched.csv",
            self.agency, self.window_days
        ))
    }

    pub fn centroids_path(&self) -> PathBuf {
        self.data_dir.join("zip_centroids.json")
    }

    pub fn states_topology_path(&self) -> PathBuf {
        self.data_dir.join("us_states_topo.json")
    }

    pub fn counties_topology_path(&self) -> PathBuf {
        self.data_dir.join("us_counties_topo.json")
    }
}

/// Explicit override > `SPENDMAP_DATA` > `./data` when present > the
/// per-user fallback under the home directory.
fn resolve_data_dir(data_dir_override: Option<&Path>) -> PathBuf {
    if let Some(path) = data_dir_override {
        return path.to_path_buf();
    }

    if let Some(env_path) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(env_path);
    }

    let local = PathBuf::from(LOCAL_DATA_DIR);
    if local.is_dir() {
        return local;
    }

    if let Some(home_path) = home::home_dir() {
        return home_path.join(".spendmap").join(LOCAL_DATA_DIR);
    }

    local
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::DataContext;

    #[test]
    fn snapshot_paths_follow_fetcher_layout() {
        let context = DataContext::resolve(Some(Path::new("/tmp/snapshots")), Some("nih"), Some(90));
        assert_eq!(
            context.awards_csv_path(),
            Path::new("/tmp/snapshots/nih_awards_last_90d.csv")
        );
        assert_eq!(
            context.enriched_recipients_path(),
            Path::new("/tmp/snapshots/nih_top_recipients_last_90d_enriched.csv")
        );
        assert_eq!(
            context.centroids_path(),
            Path::new("/tmp/snapshots/zip_centroids.json")
        );
    }

    #[test]
    fn defaults_fill_agency_and_window() {
        let context = DataContext::resolve(Some(Path::new("/tmp/x")), None, None);
        assert_eq!(context.agency, "nih");
        assert_eq!(context.window_days, 90);

        let blank = DataContext::resolve(Some(Path::new("/tmp/x")), Some("  "), None);
        assert_eq!(blank.agency, "nih");
    }

    #[test]
    fn agency_slug_changes_every_snapshot_name() {
        let context = DataContext::resolve(Some(Path::new("/d")), Some("arpa-h"), Some(30));
        assert_eq!(
            context.awards_json_path(),
            Path::new("/d/arpa-h_awards_last_30d.json")
        );
        assert_eq!(
            context.recipients_path(),
            Path::new("/d/arpa-h_top_recipients_last_30d.csv")
        );
    }
}
