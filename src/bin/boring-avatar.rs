//! Command line front-end: writes one avatar as an SVG document.
//!
//! ```text
//! boring-avatar "Mary Baker" --variant beam --size 64 --unit px -o mary.svg
//! RUST_LOG=debug boring-avatar "Amelia Earhart" --profile avatar.json
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use boring_avatars::{AvatarError, AvatarGenerator, AvatarProfile, SizeSettings};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "boring-avatar", version, about = "Generate a deterministic SVG avatar from a name")]
struct Cli {
    /// Name the avatar is derived from.
    name: String,

    /// Style: marble, pixel, bauhaus, ring, sunset or beam.
    #[arg(short, long)]
    variant: Option<String>,

    /// Five comma-separated hex colors.
    #[arg(short, long, value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// Rendered width and height.
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<f64>,

    /// CSS unit appended to the size.
    #[arg(short, long)]
    unit: Option<String>,

    /// Use a square mask instead of a circle.
    #[arg(long)]
    square: bool,

    /// Emit a <title> element containing the name.
    #[arg(long)]
    title: bool,

    /// Class for the root element. Repeat for several.
    #[arg(long = "class")]
    classes: Vec<String>,

    /// JSON profile to start from. Flags override its fields.
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn load_profile(&self) -> Result<AvatarProfile, String> {
        let mut profile = match &self.profile {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
                AvatarProfile::from_json(&json)
                    .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?
            }
            None => AvatarProfile::new(),
        };

        if let Some(variant) = &self.variant {
            profile.variant = Some(variant.clone());
        }
        if let Some(colors) = &self.colors {
            profile.colors = Some(colors.iter().map(|c| c.trim().to_string()).collect());
        }
        if self.size.is_some() || self.unit.is_some() {
            let current = profile.size.take();
            profile.size = Some(SizeSettings {
                value: self.size.or(current.as_ref().map(|s| s.value)).unwrap_or(40.0),
                unit: self
                    .unit
                    .clone()
                    .or(current.map(|s| s.unit))
                    .unwrap_or_default(),
            });
        }

        profile.square |= self.square;
        profile.title |= self.title;
        profile.classes.extend(self.classes.iter().cloned());

        Ok(profile)
    }
}

/// One `error:` line per problem, flattening aggregated validation errors.
fn error_lines(err: &AvatarError) -> Vec<String> {
    err.errors().iter().map(|err| format!("error: {err}")).collect()
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let profile = match cli.load_profile() {
        Ok(profile) => profile,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let avatar = match AvatarGenerator::from_profile(&profile).and_then(|g| g.render(&cli.name)) {
        Ok(avatar) => avatar,
        Err(err) => {
            for line in error_lines(&err) {
                eprintln!("{line}");
            }
            return ExitCode::FAILURE;
        }
    };

    log::info!("rendered {} avatar for {:?}", avatar.variant(), cli.name);

    let written = match &cli.output {
        Some(path) => File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            avatar.write_to(&mut writer)?;
            writer.flush()
        }),
        None => {
            let mut stdout = io::stdout().lock();
            avatar
                .write_to(&mut stdout)
                .and_then(|()| writeln!(stdout))
        }
    };

    if let Err(e) = written {
        eprintln!("error: failed to write avatar: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use boring_avatars::Variant;
    use tempfile::NamedTempFile;

    fn profile_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boring-avatar").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_alone_build_a_profile() {
        let cli = parse(&["Mary Baker", "--variant", "beam", "--size", "64", "--class", "a", "--class", "b"]);
        let profile = cli.load_profile().unwrap();

        assert_eq!(profile.variant.as_deref(), Some("beam"));
        assert_eq!(profile.size, Some(SizeSettings { value: 64.0, unit: String::new() }));
        assert_eq!(profile.classes, ["a", "b"]);
        assert!(!profile.square);
    }

    #[test]
    fn unit_flag_keeps_profile_size_value() {
        let file = profile_file(r#"{"variant":"ring","size":{"value":64,"unit":"px"},"square":true}"#);
        let path = file.path().to_str().unwrap();
        let cli = parse(&["Mary Baker", "--profile", path, "--unit", "rem"]);

        let profile = cli.load_profile().unwrap();
        assert_eq!(profile.size, Some(SizeSettings { value: 64.0, unit: "rem".into() }));
        assert!(profile.square);

        let avatar = AvatarGenerator::from_profile(&profile).unwrap().render(&cli.name).unwrap();
        assert!(avatar.as_str().starts_with(r#"<svg viewBox="0 0 90 90""#));
        assert!(avatar.as_str().contains(r#"width="64rem" height="64rem""#));
    }

    #[test]
    fn size_flag_keeps_profile_unit() {
        let file = profile_file(r#"{"size":{"value":64,"unit":"px"}}"#);
        let path = file.path().to_str().unwrap();
        let cli = parse(&["x", "--profile", path, "--size", "12"]);

        let profile = cli.load_profile().unwrap();
        assert_eq!(profile.size, Some(SizeSettings { value: 12.0, unit: "px".into() }));
    }

    #[test]
    fn flags_override_profile_fields() {
        let file = profile_file(r#"{"variant":"ring","classes":["from-file"]}"#);
        let path = file.path().to_str().unwrap();
        let cli = parse(&["x", "--profile", path, "--variant", "pixel", "--class", "from-flag", "--title"]);

        let profile = cli.load_profile().unwrap();
        assert_eq!(profile.variant.as_deref(), Some("pixel"));
        assert_eq!(profile.classes, ["from-file", "from-flag"]);
        assert!(profile.title);

        let options = profile.validate().unwrap();
        assert_eq!(options.variant, Variant::Pixel);
    }

    #[test]
    fn colors_are_split_and_trimmed() {
        let cli = parse(&["x", "--colors", "#111111, #222222,#333333,#444444 ,#555555"]);
        let profile = cli.load_profile().unwrap();

        assert_eq!(
            profile.colors,
            Some(
                ["#111111", "#222222", "#333333", "#444444", "#555555"]
                    .map(String::from)
                    .to_vec()
            )
        );
    }

    #[test]
    fn every_bad_flag_is_reported() {
        let cli = parse(&["x", "--variant", "cubist", "--colors", "a,b", "--size", "-3"]);
        let profile = cli.load_profile().unwrap();

        let err = AvatarGenerator::from_profile(&profile).unwrap_err();
        match &err {
            AvatarError::Invalid(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected aggregated errors, got {other:?}"),
        }

        assert_eq!(
            error_lines(&err),
            [
                "error: invalid variant `cubist`",
                "error: palette must contain exactly 5 colors, got 2",
                "error: size must be finite and non-negative, got -3",
            ]
        );
    }

    #[test]
    fn infinite_size_is_rejected() {
        let cli = parse(&["x", "--size", "inf"]);
        let profile = cli.load_profile().unwrap();

        assert_eq!(
            AvatarGenerator::from_profile(&profile).unwrap_err(),
            AvatarError::NegativeSize(f64::INFINITY)
        );
    }

    #[test]
    fn unreadable_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let cli = parse(&["x", "--profile", missing.to_str().unwrap()]);
        assert!(cli.load_profile().unwrap_err().starts_with("failed to read"));

        let file = profile_file("{not json");
        let cli = parse(&["x", "--profile", file.path().to_str().unwrap()]);
        assert!(cli.load_profile().unwrap_err().starts_with("failed to parse"));
    }
}
