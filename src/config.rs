//! Configuration model for the argv codec
//!
//! An immutable tree of command definitions plus the global parsing policy
//! switches. Pure data; the only behavior is lookup by name.

/// One flag definition on a command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlagConfig {
    /// Canonical flag token, including its leading dash convention
    pub name: String,
    /// Whether this flag never carries a value
    pub is_bool: bool,
}

impl FlagConfig {
    /// Create a value-taking flag definition
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bool: false,
        }
    }

    /// Create a boolean flag definition
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bool: true,
        }
    }
}

/// One node in the command tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandConfig {
    /// Command name, unique among siblings
    pub name: String,
    /// Ordered child commands
    pub commands: Vec<CommandConfig>,
    /// Flags recognized on this command, names unique within the node
    pub flags: Vec<FlagConfig>,
}

impl CommandConfig {
    /// Create a command node with no children and no flags
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Add a child command (chainable)
    #[must_use]
    pub fn with_command(mut self, command: CommandConfig) -> Self {
        self.commands.push(command);
        self
    }

    /// Add a flag definition (chainable)
    #[must_use]
    pub fn with_flag(mut self, flag: FlagConfig) -> Self {
        self.flags.push(flag);
        self
    }

    /// Look up a child command by name.
    ///
    /// Absence is `None`, never an error; callers decide whether an
    /// unconfigured command is fatal. Linear scan, fine at the expected
    /// command counts.
    pub fn command(&self, name: &str) -> Option<&CommandConfig> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Look up a flag by name. Same absence contract as [`Self::command`].
    pub fn flag(&self, name: &str) -> Option<&FlagConfig> {
        self.flags.iter().find(|f| f.name == name)
    }
}

/// Root configuration: the command tree plus parsing policy switches
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Root of the command tree
    pub root: CommandConfig,
    /// Reject unknown flags instead of passing them through
    pub disallow_unconfigured_flags: bool,
    /// Allow short flags to be grouped ("-al" means "-a -l")
    pub allow_multiple_flags: bool,
    /// Treat "--flag=value" literally instead of splitting at '='
    pub disallow_combined_flag_values: bool,
    /// Reject the bare "--" token instead of treating it as a positional
    pub disallow_double_dash: bool,
}

impl Config {
    /// Create a configuration with the given root and all policies off
    pub fn new(root: CommandConfig) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }
}
