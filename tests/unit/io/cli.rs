//! Tests for command-line parsing and command execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use scatterblend::ProcessingError;
    use scatterblend::io::cli::{Cli, Command, CommandRunner};
    use scatterblend::io::configuration::{
        DEFAULT_BLOCK_SIZE, DEFAULT_OUTPUT_SIZE, DEFAULT_SLOT_COUNT,
    };
    use scatterblend::pixel::FillMode;
    use std::path::{Path, PathBuf};
    use tracing::Level;

    fn write_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
        let image = RgbImage::from_pixel(width, height, Rgb(color));
        assert!(image.save(path).is_ok());
    }

    fn run(args: &[&str]) -> scatterblend::Result<Vec<PathBuf>> {
        let cli = Cli::parse_from(args);
        CommandRunner::new(cli).run()
    }

    // Tests split parsing with only required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_parse_split_defaults() {
        let cli = Cli::parse_from(["program", "split", "input.png", "-o", "out"]);
        let Command::Split(args) = cli.command else {
            unreachable!("split subcommand was given");
        };
        assert_eq!(args.input, PathBuf::from("input.png"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.fill, FillMode::Black);
        assert_eq!(args.seed, None);

        let config = args.geometry.config();
        assert_eq!(config.output_size, DEFAULT_OUTPUT_SIZE);
        assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(config.slot_count, DEFAULT_SLOT_COUNT);
    }

    // Tests split parsing with every option
    // Verified by swapping the geometry fields
    #[test]
    fn test_parse_split_all_args() {
        let cli = Cli::parse_from([
            "program",
            "split",
            "input.png",
            "--output-dir",
            "out",
            "--fill",
            "white",
            "--seed",
            "17",
            "--output-size",
            "256",
            "--block-size",
            "16",
            "--slots",
            "4",
        ]);
        let Command::Split(args) = cli.command else {
            unreachable!("split subcommand was given");
        };
        assert_eq!(args.fill, FillMode::White);
        assert_eq!(args.seed, Some(17));
        assert_eq!(args.geometry.output_size, 256);
        assert_eq!(args.geometry.block_size, 16);
        assert_eq!(args.geometry.slots, 4);
    }

    // Tests blend parsing keeps input order and mode flags
    // Verified by sorting the inputs
    #[test]
    fn test_parse_blend() {
        let cli = Cli::parse_from([
            "program", "blend", "c.png", "a.png", "b.png", "-o", "result", "-b", "black", "-i",
        ]);
        let Command::Blend(args) = cli.command else {
            unreachable!("blend subcommand was given");
        };
        assert_eq!(
            args.inputs,
            vec![
                PathBuf::from("c.png"),
                PathBuf::from("a.png"),
                PathBuf::from("b.png")
            ]
        );
        assert_eq!(args.background, FillMode::Black);
        assert!(args.invert);

        let defaults = Cli::parse_from(["program", "blend", "a.png", "b.png", "-o", "x"]);
        let Command::Blend(args) = defaults.command else {
            unreachable!("blend subcommand was given");
        };
        assert_eq!(args.background, FillMode::White);
        assert!(!args.invert);
    }

    // Tests malformed command lines are rejected by the parser
    // Verified by making the output optional
    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["program", "blend", "-o", "x"]).is_err());
        assert!(Cli::try_parse_from(["program", "blend", "a.png", "b.png"]).is_err());
        assert!(Cli::try_parse_from(["program", "split", "a.png", "-o", "d", "-f", "gray"]).is_err());
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests log level follows quiet and verbosity flags
    // Verified by ignoring the quiet flag
    #[test]
    fn test_log_level() {
        let base = ["program", "blend", "a.png", "b.png", "-o", "x"];
        assert_eq!(Cli::parse_from(base).log_level(), Level::INFO);

        let verbose = Cli::parse_from(["program", "-v", "blend", "a.png", "b.png", "-o", "x"]);
        assert_eq!(verbose.log_level(), Level::DEBUG);

        let trace = Cli::parse_from(["program", "blend", "a.png", "b.png", "-o", "x", "-vv"]);
        assert_eq!(trace.log_level(), Level::TRACE);

        let quiet = Cli::parse_from(["program", "--quiet", "blend", "a.png", "b.png", "-o", "x"]);
        assert_eq!(quiet.log_level(), Level::ERROR);
        assert!(!quiet.should_show_progress());
    }

    // Tests split writes one file per slot into the output directory
    // Verified by saving only the first part
    #[test]
    fn test_run_split() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory is available");
        };
        let input = dir.path().join("source.png");
        write_png(&input, 20, 10, [128, 128, 128]);
        let output_dir = dir.path().join("parts");

        let Ok(written) = run(&[
            "program",
            "-q",
            "split",
            input.to_str().unwrap_or_default(),
            "-o",
            output_dir.to_str().unwrap_or_default(),
            "--seed",
            "5",
            "--output-size",
            "64",
            "--block-size",
            "32",
        ]) else {
            unreachable!("split succeeds");
        };
        assert_eq!(written.len(), DEFAULT_SLOT_COUNT);
        for index in 1..=DEFAULT_SLOT_COUNT {
            assert!(output_dir.join(format!("part_{index}.png")).exists());
        }
    }

    // Tests invalid geometry fails before the input is read
    // Verified by loading the input first
    #[test]
    fn test_run_split_invalid_geometry() {
        let result = run(&[
            "program",
            "-q",
            "split",
            "does/not/exist.png",
            "-o",
            "unused",
            "--output-size",
            "100",
        ]);
        let Err(error) = result else {
            unreachable!("100 is not divisible by 32");
        };
        assert!(error.is_configuration());
    }

    // Tests blend writes a PNG even without an output extension
    // Verified by saving to the raw output path
    #[test]
    fn test_run_blend() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory is available");
        };
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        write_png(&first, 6, 4, [200, 100, 255]);
        write_png(&second, 3, 8, [255, 255, 255]);
        let output = dir.path().join("blended");

        let Ok(written) = run(&[
            "program",
            "-q",
            "blend",
            first.to_str().unwrap_or_default(),
            second.to_str().unwrap_or_default(),
            "-o",
            output.to_str().unwrap_or_default(),
        ]) else {
            unreachable!("blend succeeds");
        };
        let expected = dir.path().join("blended.png");
        assert_eq!(written, vec![expected.clone()]);

        let Ok(image) = image::open(&expected) else {
            unreachable!("composite decodes");
        };
        assert_eq!((image.width(), image.height()), (6, 8));
    }

    // Tests a single blend input is rejected before decoding
    // Verified by letting the compositor decode first
    #[test]
    fn test_run_blend_single_input() {
        let result = run(&["program", "-q", "blend", "missing.png", "-o", "out.png"]);
        assert!(matches!(
            result,
            Err(ProcessingError::InsufficientInput { provided: 1, .. })
        ));
    }

    // Tests reassembly of split parts restores the inverted canvas
    // Verified by reassembling with the wrong fill
    #[test]
    fn test_run_reassemble() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory is available");
        };
        let input = dir.path().join("source.png");
        write_png(&input, 8, 8, [10, 20, 30]);
        let parts = dir.path().join("parts");
        let parts_arg = parts.to_string_lossy().to_string();
        let geometry = ["--output-size", "64", "--block-size", "16", "--slots", "3"];

        let mut split = vec!["program", "-q", "split"];
        let input_arg = input.to_string_lossy().to_string();
        split.extend([input_arg.as_str(), "-o", parts_arg.as_str(), "-s", "1"]);
        split.extend(geometry);
        assert!(run(&split).is_ok());

        let output = dir.path().join("rebuilt.png");
        let output_arg = output.to_string_lossy().to_string();
        let mut rebuild = vec!["program", "-q", "reassemble", parts_arg.as_str()];
        rebuild.extend(["-o", output_arg.as_str()]);
        rebuild.extend(geometry);
        assert!(run(&rebuild).is_ok());

        let Ok(image) = image::open(&output) else {
            unreachable!("rebuilt canvas decodes");
        };
        let rgb = image.to_rgb8();
        assert_eq!(rgb.dimensions(), (64, 64));
        assert!(rgb.pixels().all(|pixel| *pixel == Rgb([245, 235, 225])));
    }
}
