//! Parsing of raw argv tokens into typed objects
//!
//! Walks the token sequence left to right, descending the configured
//! command tree and classifying every token as a command, a positional
//! argument, or a flag occurrence under the configured policies.

use crate::{
    config::{CommandConfig, Config},
    core::object::{FlagObject, Object},
    error::{CodecError, Result},
};
use tracing::{debug, instrument};

/// Is this flag name a groupable short flag ("-al" style)?
///
/// One leading dash, at least two characters after it, no embedded value.
fn is_short_group(name: &str) -> bool {
    name.starts_with('-')
        && !name.starts_with("--")
        && name.chars().count() >= 3
        && !name.contains('=')
}

/// Parser from raw tokens to an ordered object sequence
pub struct Parser<'a> {
    config: &'a Config,
}

impl<'a> Parser<'a> {
    /// Create a parser over the given configuration
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Parse raw tokens (a process argument vector, excluding the program
    /// name) into an ordered object sequence.
    ///
    /// The transform either fully succeeds or returns a typed error with no
    /// partial output.
    #[instrument(skip(self, tokens))]
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<Object>> {
        let mut objects = Vec::with_capacity(tokens.len());
        let mut node = &self.config.root;
        let mut args_only = false;
        let mut commands_done = false;
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_ref();
            i += 1;

            if args_only {
                objects.push(Object::argument(token));
                continue;
            }

            if token == "--" {
                if self.config.disallow_double_dash {
                    return Err(CodecError::DisallowedDoubleDash);
                }
                // The sentinel itself is an ordinary positional; everything
                // after it stops being interpreted as flags.
                objects.push(Object::argument(token));
                args_only = true;
                commands_done = true;
                continue;
            }

            // Bare "-" is the conventional stdin placeholder, not a flag.
            if token.starts_with('-') && token != "-" {
                self.parse_flag(token, node, tokens, &mut i, &mut objects)?;
                continue;
            }

            if !commands_done {
                if let Some(child) = node.command(token) {
                    debug!(command = token, "descending into sub-command");
                    objects.push(Object::command(token));
                    node = child;
                    continue;
                }
            }

            commands_done = true;
            objects.push(Object::argument(token));
        }

        debug!(objects = objects.len(), "parse complete");
        Ok(objects)
    }

    /// Classify one flag token, consuming a following value token when the
    /// flag takes a separate value. `i` already points past `token`.
    fn parse_flag<S: AsRef<str>>(
        &self,
        token: &str,
        node: &CommandConfig,
        tokens: &[S],
        i: &mut usize,
        objects: &mut Vec<Object>,
    ) -> Result<()> {
        let (name, inline_value) =
            if !self.config.disallow_combined_flag_values && token.contains('=') {
                let (n, v) = token
                    .split_once('=')
                    .unwrap_or((token, ""));
                (n.to_string(), Some(v.to_string()))
            } else {
                (token.to_string(), None)
            };

        let mut ends_run = false;
        let mut name = name;

        if self.config.allow_multiple_flags && is_short_group(&name) {
            // Explode "-al" into a run of single-character flags. All but
            // the last are boolean-shaped name fragments; only the last
            // resolves its value behavior from configuration.
            let fragments: Vec<String> =
                name.chars().skip(1).map(|c| format!("-{c}")).collect();
            debug!(token, fragments = fragments.len(), "grouped short flags");

            for (idx, fragment) in fragments[..fragments.len() - 1].iter().enumerate() {
                self.check_configured(fragment, node)?;
                objects.push(Object::Flag(FlagObject {
                    name: fragment.clone(),
                    is_bool: true,
                    multiple_flags_start: idx == 0,
                    ..FlagObject::default()
                }));
            }

            // A group always has at least two fragments, so the closing
            // member never also opens the run.
            name = fragments[fragments.len() - 1].clone();
            ends_run = true;
        }

        let is_bool = match node.flag(&name) {
            Some(flag) => flag.is_bool,
            None => {
                self.check_configured(&name, node)?;
                // Lenient policy: unknown flags pass through as free-form
                // value-taking flags.
                false
            }
        };

        let (value, combined) = if let Some(v) = inline_value {
            // A combined value sticks to the object even on a bool flag;
            // the assembler drops it for bool flags.
            (Some(v), true)
        } else if !is_bool {
            if *i < tokens.len() {
                let v = tokens[*i].as_ref().to_string();
                *i += 1;
                (Some(v), false)
            } else {
                return Err(CodecError::missing_flag_value(name));
            }
        } else {
            (None, false)
        };

        objects.push(Object::Flag(FlagObject {
            name,
            value,
            is_bool,
            combined_flag_values: combined,
            multiple_flags_start: false,
            multiple_flags_end: ends_run,
        }));
        Ok(())
    }

    /// Fail with an unconfigured-flag error when policy forbids unknowns.
    fn check_configured(&self, name: &str, node: &CommandConfig) -> Result<()> {
        if self.config.disallow_unconfigured_flags && node.flag(name).is_none() {
            return Err(CodecError::unconfigured_flag(name, node.name.as_str()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlagConfig;

    fn create_test_config() -> Config {
        let root = CommandConfig::new("tool")
            .with_command(
                CommandConfig::new("build")
                    .with_flag(FlagConfig::boolean("--verbose"))
                    .with_flag(FlagConfig::new("--out"))
                    .with_flag(FlagConfig::boolean("-a"))
                    .with_flag(FlagConfig::new("-l")),
            )
            .with_flag(FlagConfig::boolean("-v"));
        Config::new(root)
    }

    #[test]
    fn test_command_descent_and_arguments() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let objects = parser.parse(&["build", "pkg"]).unwrap();

        assert_eq!(
            objects,
            vec![Object::command("build"), Object::argument("pkg")]
        );
    }

    #[test]
    fn test_first_positional_ends_descent() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        // "build" after a positional is no longer a command
        let objects = parser.parse(&["pkg", "build"]).unwrap();

        assert_eq!(
            objects,
            vec![Object::argument("pkg"), Object::argument("build")]
        );
    }

    #[test]
    fn test_bool_flag() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let objects = parser.parse(&["-v"]).unwrap();

        assert_eq!(objects, vec![Object::from(FlagObject::boolean("-v"))]);
    }

    #[test]
    fn test_value_flag_consumes_next_token() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let objects = parser.parse(&["build", "--out", "file.txt"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::command("build"),
                FlagObject::with_value("--out", "file.txt").into(),
            ]
        );
    }

    #[test]
    fn test_value_flag_consumes_flag_looking_token() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let objects = parser.parse(&["build", "--out", "-v"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::command("build"),
                FlagObject::with_value("--out", "-v").into(),
            ]
        );
    }

    #[test]
    fn test_missing_flag_value() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let err = parser.parse(&["build", "--out"]).unwrap_err();

        assert!(matches!(err, CodecError::MissingFlagValue { flag } if flag == "--out"));
    }

    #[test]
    fn test_combined_flag_value() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let objects = parser.parse(&["build", "--out=file.txt"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::command("build"),
                FlagObject::with_value("--out", "file.txt").combined().into(),
            ]
        );
    }

    #[test]
    fn test_combined_values_disallowed_takes_token_literally() {
        let mut config = create_test_config();
        config.disallow_combined_flag_values = true;
        let parser = Parser::new(&config);
        // The whole token is the flag name; unknown, so it consumes a value
        let objects = parser.parse(&["--out=file.txt", "x"]).unwrap();

        assert_eq!(
            objects,
            vec![Object::from(FlagObject::with_value("--out=file.txt", "x"))]
        );
    }

    #[test]
    fn test_unconfigured_flag_lenient() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        // Unknown flags pass through as free-form value-taking flags
        let objects = parser.parse(&["--frob", "x"]).unwrap();

        assert_eq!(
            objects,
            vec![Object::from(FlagObject::with_value("--frob", "x"))]
        );
    }

    #[test]
    fn test_unconfigured_flag_strict() {
        let mut config = create_test_config();
        config.disallow_unconfigured_flags = true;
        let parser = Parser::new(&config);
        let err = parser.parse(&["--frob", "x"]).unwrap_err();

        assert!(
            matches!(err, CodecError::UnconfiguredFlag { flag, command }
                if flag == "--frob" && command == "tool")
        );
    }

    #[test]
    fn test_double_dash_ends_flag_interpretation() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let objects = parser.parse(&["--", "-v", "build"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::argument("--"),
                Object::argument("-v"),
                Object::argument("build"),
            ]
        );
    }

    #[test]
    fn test_double_dash_disallowed() {
        let mut config = create_test_config();
        config.disallow_double_dash = true;
        let parser = Parser::new(&config);
        let err = parser.parse(&["--"]).unwrap_err();

        assert!(matches!(err, CodecError::DisallowedDoubleDash));
    }

    #[test]
    fn test_bare_dash_is_positional() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        let objects = parser.parse(&["-"]).unwrap();

        assert_eq!(objects, vec![Object::argument("-")]);
    }

    #[test]
    fn test_grouped_flags() {
        let mut config = create_test_config();
        config.allow_multiple_flags = true;
        let parser = Parser::new(&config);
        let objects = parser.parse(&["build", "-al", "5"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::command("build"),
                FlagObject::boolean("-a").start_group().into(),
                FlagObject::with_value("-l", "5").end_group().into(),
            ]
        );
    }

    #[test]
    fn test_grouped_flags_with_combined_value() {
        let mut config = create_test_config();
        config.allow_multiple_flags = true;
        let parser = Parser::new(&config);
        let objects = parser.parse(&["build", "-al=5"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::command("build"),
                FlagObject::boolean("-a").start_group().into(),
                FlagObject::with_value("-l", "5")
                    .combined()
                    .end_group()
                    .into(),
            ]
        );
    }

    #[test]
    fn test_grouping_disabled_treats_token_as_one_flag() {
        let config = create_test_config();
        let parser = Parser::new(&config);
        // Without the policy, "-al" is a single unknown flag
        let objects = parser.parse(&["build", "-al", "5"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::command("build"),
                FlagObject::with_value("-al", "5").into(),
            ]
        );
    }

    #[test]
    fn test_grouped_fragment_checked_when_strict() {
        let mut config = create_test_config();
        config.allow_multiple_flags = true;
        config.disallow_unconfigured_flags = true;
        let parser = Parser::new(&config);
        let err = parser.parse(&["build", "-xl", "5"]).unwrap_err();

        assert!(matches!(err, CodecError::UnconfiguredFlag { flag, .. } if flag == "-x"));
    }

    #[test]
    fn test_long_flag_never_grouped() {
        let mut config = create_test_config();
        config.allow_multiple_flags = true;
        let parser = Parser::new(&config);
        let objects = parser.parse(&["build", "--verbose"]).unwrap();

        assert_eq!(
            objects,
            vec![
                Object::command("build"),
                FlagObject::boolean("--verbose").into(),
            ]
        );
    }
}
