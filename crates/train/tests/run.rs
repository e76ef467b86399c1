use charlm_core::{ConfigError, Device, Error};
use tempfile::tempdir;
use train::{run, TrainConfig, TrainError};

const CORPUS: &str = "To be, or not to be, that is the question:\n\
Whether 'tis nobler in the mind to suffer\n\
The slings and arrows of outrageous fortune,\n";

#[test]
fn run_prepares_output_and_probe_batch() {
    let dir = tempdir().unwrap();
    let data_path = dir.path().join("tiny.txt");
    std::fs::write(&data_path, CORPUS).unwrap();
    let output_dir = dir.path().join("out/run1");

    let config = TrainConfig {
        data_path,
        output_dir: output_dir.clone(),
        batch_size: 4,
        seq_length: 32,
        device: Device::Cpu,
        seed: Some(5),
        ..TrainConfig::default()
    };

    let report = run(&config).unwrap();
    assert!(report.created_output_dir);
    assert!(output_dir.is_dir());
    assert_eq!(report.config_path, output_dir.join("config.json"));
    assert!(report.config_path.is_file());
    assert_eq!(report.batch_shape, [4, 32]);
    assert_eq!(report.device, Device::Cpu);
    assert_eq!(report.stats.corpus_len, CORPUS.chars().count());
    assert_eq!(report.vocab_size, report.stats.vocab_size);

    let again = run(&config).unwrap();
    assert!(!again.created_output_dir);
}

#[test]
fn corpus_shorter_than_seq_length_fails() {
    let dir = tempdir().unwrap();
    let data_path = dir.path().join("tiny.txt");
    std::fs::write(&data_path, "abc").unwrap();

    let config = TrainConfig {
        data_path,
        output_dir: dir.path().join("out"),
        seq_length: 32,
        ..TrainConfig::default()
    };
    match run(&config) {
        Err(TrainError::Data(Error::Config(ConfigError::CorpusTooSmall {
            corpus_len,
            seq_length,
        }))) => assert_eq!((corpus_len, seq_length), (3, 32)),
        other => panic!("expected CorpusTooSmall, got {other:?}"),
    }
}

#[test]
fn missing_corpus_is_data_error() {
    let dir = tempdir().unwrap();
    let config = TrainConfig {
        data_path: dir.path().join("missing.txt"),
        output_dir: dir.path().join("out"),
        ..TrainConfig::default()
    };
    assert!(matches!(run(&config), Err(TrainError::Data(Error::Io { .. }))));
}
