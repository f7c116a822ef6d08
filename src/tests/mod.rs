#[cfg(test)]
pub mod test {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    use once_cell::sync::Lazy;
    use temp_dir::TempDir;

    use crate::configuration::{Settings, DEFAULT_FUZZY_THRESHOLD};
    use crate::telemetry::{get_subscriber, init_subscriber};

    // Ensure that the `tracing` stack is only initialised once using `once_cell`
    static TRACING: Lazy<()> = Lazy::new(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            let _ = init_subscriber(subscriber);
        } else {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            let _ = init_subscriber(subscriber);
        };
    });

    /// A small category table shared by the parser and resolver tests.
    pub fn sample_table() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("publix".to_string(), "Groceries".to_string()),
            ("winn dixie".to_string(), "Groceries".to_string()),
            ("pappa johns".to_string(), "Dining".to_string()),
            ("shell".to_string(), "Gas".to_string()),
            ("duke energy".to_string(), "Utilities".to_string()),
            ("netflix".to_string(), "Entertainment".to_string()),
        ])
    }

    pub fn sample_settings() -> Settings {
        Settings {
            categories: sample_table(),
            cities: vec!["gainesville".to_string(), "orlando".to_string()],
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Write a fixture file into a test directory.
    pub fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        Lazy::force(&TRACING);

        let path = dir.path().join(name);
        fs::write(&path, content).expect("failed to write fixture");
        path
    }
}
