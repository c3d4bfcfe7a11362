//! Engine registry, determinism, and row-count tests.

use verbaterra_analysis::engines::{available_engines, run_engine, EngineKind};
use verbaterra_core::config::{config_map, ConfigMap, ConfigValue};
use verbaterra_core::constants::MANDATORY_COLUMNS;
use verbaterra_core::errors::{RegistryError, RegistryKind};
use verbaterra_core::VerbaterraError;

#[test]
fn test_available_engines_sorted() {
    assert_eq!(available_engines(), vec!["cch", "nphra", "vsion"]);
}

#[test]
fn test_same_seed_identical_tables() {
    for kind in EngineKind::ALL {
        let a = kind.simulate(&ConfigMap::new(), Some(42)).unwrap();
        let b = kind.simulate(&ConfigMap::new(), Some(42)).unwrap();
        assert_eq!(a.table, b.table, "{kind} not deterministic");
        assert_eq!(a.config, b.config);
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = EngineKind::Vsion.simulate(&ConfigMap::new(), Some(1)).unwrap();
    let b = EngineKind::Vsion.simulate(&ConfigMap::new(), Some(2)).unwrap();
    assert_ne!(a.table, b.table);
}

#[test]
fn test_call_history_does_not_leak() {
    let first = EngineKind::Cch.simulate(&ConfigMap::new(), Some(9)).unwrap();
    let _ = EngineKind::Nphra.simulate(&ConfigMap::new(), Some(3)).unwrap();
    let _ = EngineKind::Cch.simulate(&ConfigMap::new(), None).unwrap();
    let again = EngineKind::Cch.simulate(&ConfigMap::new(), Some(9)).unwrap();
    assert_eq!(first.table, again.table);
}

#[test]
fn test_unseeded_run_replays_from_reported_seed() {
    let run = EngineKind::Nphra.simulate(&ConfigMap::new(), None).unwrap();
    let replay = EngineKind::Nphra.simulate(&ConfigMap::new(), Some(run.seed)).unwrap();
    assert_eq!(run.table, replay.table);
}

#[test]
fn test_row_count_follows_resolved_config() {
    for (kind, rows) in [
        (EngineKind::Vsion, 37i64),
        (EngineKind::Cch, 12),
        (EngineKind::Nphra, 5),
    ] {
        let out = kind
            .simulate(&config_map([(kind.row_key(), rows)]), Some(7))
            .unwrap();
        assert_eq!(out.table.row_count(), rows as usize);
        assert_eq!(out.config.get(kind.row_key()), Some(&ConfigValue::Integer(rows)));
    }
}

#[test]
fn test_fractional_row_count_truncated() {
    let out = EngineKind::Cch
        .simulate(&config_map([("n", 9.8)]), Some(1))
        .unwrap();
    assert_eq!(out.table.row_count(), 9);
}

#[test]
fn test_negative_row_count_yields_empty_table() {
    let out = EngineKind::Vsion
        .simulate(&config_map([("population", -10i64)]), Some(1))
        .unwrap();
    assert_eq!(out.table.row_count(), 0);
    assert_eq!(out.table.column_count(), 6);
    assert_eq!(out.config.get("population"), Some(&ConfigValue::Integer(0)));
    assert_eq!(out.config.rows(), out.table.row_count());
}

#[test]
fn test_engine_extra_columns() {
    let cch = EngineKind::Cch.simulate(&ConfigMap::new(), Some(1)).unwrap();
    assert_eq!(&cch.table.column_names()[6..], ["collective_memory", "diffusion_rate"]);

    let nphra = EngineKind::Nphra.simulate(&ConfigMap::new(), Some(1)).unwrap();
    assert_eq!(&nphra.table.column_names()[6..], ["resonance_wave", "neuro_coherence"]);

    let vsion = EngineKind::Vsion.simulate(&ConfigMap::new(), Some(1)).unwrap();
    assert_eq!(vsion.table.column_names(), MANDATORY_COLUMNS.to_vec());
}

#[test]
fn test_no_nan_under_defaults() {
    for kind in EngineKind::ALL {
        let out = kind.simulate(&ConfigMap::new(), Some(11)).unwrap();
        for column in out.table.columns() {
            let values = column.data.as_numeric().unwrap();
            assert!(values.iter().all(|v| v.is_finite()), "{kind}.{}", column.name);
        }
    }
}

#[test]
fn test_cch_diffusion_bounded_by_rate() {
    let out = EngineKind::Cch
        .simulate(&config_map([("diffusion_rate", 0.5)]), Some(4))
        .unwrap();
    let diffusion = out.table.numeric("diffusion_rate").unwrap();
    assert!(diffusion.iter().all(|d| (0.0..=0.5).contains(d)));
}

#[test]
fn test_vsion_zero_noise_targets_are_exact() {
    let overrides = config_map([("noise_std", 0.0)]);
    let out = EngineKind::Vsion.simulate(&overrides, Some(8)).unwrap();
    let t = &out.table;
    let (r, tr, s, h) = (
        t.numeric("ritual").unwrap(),
        t.numeric("trade").unwrap(),
        t.numeric("symbolism").unwrap(),
        t.numeric("hierarchy").unwrap(),
    );
    let lex = t.numeric("lexical_diversity").unwrap();
    for i in 0..t.row_count() {
        let expected = 0.2 * r[i] + 0.3 * tr[i] + 0.25 * s[i] - 0.1 * h[i] + 20.0;
        assert!((lex[i] - expected).abs() < 1e-9);
    }
}

#[test]
fn test_overrides_do_not_touch_defaults() {
    let _ = EngineKind::Vsion
        .simulate(&config_map([("ritual_mean", 99.0)]), Some(1))
        .unwrap();
    assert_eq!(
        EngineKind::Vsion.default_config()["ritual_mean"],
        ConfigValue::Number(50.0)
    );
}

#[test]
fn test_run_engine_unknown_name() {
    let err = run_engine("foo", &ConfigMap::new(), Some(1)).unwrap_err();
    match err {
        VerbaterraError::Registry(RegistryError::UnknownKey { kind, available, .. }) => {
            assert_eq!(kind, RegistryKind::Engine);
            assert_eq!(available, vec!["cch", "nphra", "vsion"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
