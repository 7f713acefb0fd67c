//! Property-based tests for AppSettings serialization round-trip.

use linkdeck::types::settings::{
    AppSettings, FavoritesBackend, FavoritesSettings, GeneralSettings, LoggingSettings,
};
use proptest::prelude::*;

fn arb_general_settings() -> impl Strategy<Value = GeneralSettings> {
    (
        proptest::option::of("[a-zA-Z0-9/._-]{1,40}"),
        prop_oneof![Just("%-m/%-d/%Y"), Just("%Y-%m-%d"), Just("%d %b %Y")],
    )
        .prop_map(|(links_path, date_format)| GeneralSettings {
            links_path,
            date_format: date_format.to_string(),
        })
}

fn arb_favorites_settings() -> impl Strategy<Value = FavoritesSettings> {
    (
        prop_oneof![Just(FavoritesBackend::Memory), Just(FavoritesBackend::Sqlite)],
        proptest::option::of("[a-zA-Z0-9/._-]{1,40}"),
    )
        .prop_map(|(backend, database_path)| FavoritesSettings {
            backend,
            database_path,
        })
}

fn arb_logging_settings() -> impl Strategy<Value = LoggingSettings> {
    (
        prop_oneof![Just("error"), Just("warn"), Just("info"), Just("debug,linkdeck=trace")],
        any::<bool>(),
    )
        .prop_map(|(level, json)| LoggingSettings {
            level: level.to_string(),
            json,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(
        general in arb_general_settings(),
        favorites in arb_favorites_settings(),
        logging in arb_logging_settings(),
    ) {
        let settings = AppSettings { general, favorites, logging };
        let json = serde_json::to_string(&settings).expect("serialize");
        let restored: AppSettings = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(restored, settings);
    }
}
