use super::Config;
use crate::cli::Cli;
use crate::constants;
use crate::errors::Error;
use std::path::PathBuf;

/// Builder for [`Config`], used programmatically and by the CLI path.
///
/// Starts from the same defaults the command-line tool uses and lets callers
/// override individual settings before validation.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    input_path: Option<String>,
    module_name: String,
    length_name: String,
    array_name: String,
    indent: String,
    use_suffix: bool,
    max_line_length: usize,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Creates a builder populated with the default output settings.
    pub fn new() -> Self {
        Self {
            input_path: None,
            module_name: constants::DEFAULT_MODULE_NAME.to_string(),
            length_name: constants::DEFAULT_LENGTH_NAME.to_string(),
            array_name: constants::DEFAULT_ARRAY_NAME.to_string(),
            indent: constants::DEFAULT_INDENT.to_string(),
            use_suffix: constants::DEFAULT_USE_SUFFIX,
            max_line_length: constants::DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Sets the path of the file to embed.
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the name of the generated Fortran module.
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Sets the name of the generated length constant.
    pub fn length_name(mut self, name: impl Into<String>) -> Self {
        self.length_name = name.into();
        self
    }

    /// Sets the name of the generated array.
    pub fn array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }

    /// Sets the indentation prefix for array-body lines.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Enables or disables the `_1` kind suffix on literal tokens.
    pub fn use_suffix(mut self, use_suffix: bool) -> Self {
        self.use_suffix = use_suffix;
        self
    }

    /// Sets the maximum emitted line length, continuation marker included.
    pub fn max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Validates the settings and produces a [`Config`].
    ///
    /// # Errors
    /// Returns [`Error::MissingInput`] when no input path was set, or
    /// [`Error::Config`] when a name is not a valid Fortran identifier, the
    /// indent contains non-blank characters, or the line width cannot fit a
    /// single token.
    pub fn build(self) -> Result<Config, Error> {
        let input_path = self.input_path.ok_or(Error::MissingInput)?;

        validate_identifier("module name", &self.module_name)?;
        validate_identifier("length constant name", &self.length_name)?;
        validate_identifier("array name", &self.array_name)?;

        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::Config(format!(
                "indent must contain only blanks, got {:?}",
                self.indent
            )));
        }

        // A continuation line must fit the indent, a comma, the widest token,
        // and the trailing continuation marker.
        let min_line_length = self.indent.len() + constants::MAX_TOKEN_WIDTH + 2;
        if self.max_line_length < min_line_length {
            return Err(Error::Config(format!(
                "max line length {} is too small; the configured indent needs at least {}",
                self.max_line_length, min_line_length
            )));
        }

        Ok(Config {
            input_path: PathBuf::from(input_path),
            module_name: self.module_name,
            length_name: self.length_name,
            array_name: self.array_name,
            indent: self.indent,
            use_suffix: self.use_suffix,
            max_line_length: self.max_line_length,
        })
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::new();
        if let Some(path) = cli.input_path {
            builder = builder.input_path(path);
        }
        builder.build()
    }
}

/// Checks that `name` is a valid Fortran identifier: a leading letter followed
/// by letters, digits, or underscores, at most 63 characters.
fn validate_identifier(what: &str, name: &str) -> Result<(), Error> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                && name.len() <= 63
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "{} {:?} is not a valid Fortran identifier",
            what, name
        )))
    }
}
