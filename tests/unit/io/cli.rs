//! Tests for command-line parsing and build path resolution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use std::path::{Path, PathBuf};
    use woodsheet::PipelineError;
    use woodsheet::io::cli::{BuildProcessor, Cli, InputPaths, OutputPaths, init_logging};
    use woodsheet::io::configuration::DEFAULT_OUTPUT_DIR;

    // Tests CLI parsing with only the required pack argument
    // Verified by changing the default output directory
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "gamepacks/mystic_woods/sprites"]);

        assert_eq!(cli.pack, PathBuf::from("gamepacks/mystic_woods/sprites"));
        assert_eq!(cli.out_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    // Tests short and long flags
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["program", "pack", "-o", "build", "-q"]);
        assert_eq!(cli.out_dir, PathBuf::from("build"));
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Warn);

        let cli = Cli::parse_from(["program", "pack", "--out-dir", "dist", "--verbose"]);
        assert_eq!(cli.out_dir, PathBuf::from("dist"));
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    // Tests quiet and verbose cannot be combined
    // Verified by removing the conflict declaration
    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["program", "pack", "-q", "-v"]);

        assert!(result.is_err());
    }

    // Tests the pack argument is required
    // Verified by giving the pack a default value
    #[test]
    fn test_pack_required() {
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests a second logger installation surfaces as an error instead of being dropped
    // Verified by discarding the installation result
    #[test]
    fn test_logger_installs_once() {
        let cli = Cli::parse_from(["program", "pack", "--quiet"]);

        let first = init_logging(&cli);
        let second = init_logging(&cli);

        assert!(first.is_ok() || matches!(first, Err(PipelineError::LoggerInit { .. })));
        match second {
            Err(error @ PipelineError::LoggerInit { .. }) => {
                assert!(error.to_string().contains("logger"));
            }
            other => unreachable!("Expected LoggerInit, got {other:?}"),
        }
    }

    // Tests input layout resolves every sheet under the pack root
    // Verified by dropping the player sheet from the path list
    #[test]
    fn test_input_paths() {
        let inputs = InputPaths::under(Path::new("pack"));

        assert_eq!(inputs.water.len(), 6);
        assert_eq!(inputs.water[0], PathBuf::from("pack/tilesets/water1.png"));
        assert_eq!(inputs.water[5], PathBuf::from("pack/tilesets/water6.png"));
        assert_eq!(inputs.decor, PathBuf::from("pack/tilesets/decor_16x16.png"));
        assert_eq!(inputs.objects, PathBuf::from("pack/objects/objects.png"));

        let all = inputs.all();
        assert_eq!(all.len(), 10);
        assert!(all.contains(&Path::new("pack/characters/player.png")));
        assert!(all.contains(&Path::new("pack/characters/slime.png")));
    }

    // Tests output layout resolves under the output root
    // Verified by swapping leader and scout file names
    #[test]
    fn test_output_paths() {
        let outputs = OutputPaths::under(Path::new("public/assets"));

        assert_eq!(
            outputs.tileset,
            PathBuf::from("public/assets/tiles/mystic_woods_tileset16.png")
        );
        assert_eq!(outputs.leader, PathBuf::from("public/assets/chars/leader32.png"));
        assert_eq!(outputs.scout, PathBuf::from("public/assets/chars/scout32.png"));
    }

    // Tests an empty pack aborts on the first missing sheet without writing anything
    // Verified by loading sheets before checking every input
    #[test]
    fn test_missing_pack_aborts() {
        let pack = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            Path::new("program"),
            pack.path(),
            Path::new("--out-dir"),
            out.path(),
            Path::new("--quiet"),
        ]);

        let result = BuildProcessor::new(cli).process();

        match result {
            Err(PipelineError::MissingInput { path }) => {
                assert!(path.ends_with("tilesets/water1.png"));
            }
            other => unreachable!("Expected MissingInput, got {other:?}"),
        }
        assert!(!out.path().join("tiles").exists());
        assert!(!out.path().join("chars").exists());
    }
}
